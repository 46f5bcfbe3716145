use log::debug;
use uuid::Uuid;

use crate::composer::{self, RandomSource};
use crate::errors::{ComposerError, Result};
use crate::export;
use crate::selection::Selection;
use crate::wire::{ExportDocument, GeneratedPrompt, SavedPrompt};
use crate::saved::SavedSet;

/// Everything one user works on: their selection, the latest batch of
/// variations and the prompts they chose to keep.
#[derive(Debug, Default)]
pub struct Session {
    pub selection: Selection,
    generated: Vec<GeneratedPrompt>,
    saved: SavedSet,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preview(&self) -> Option<String> {
        composer::build_preview(&self.selection)
    }

    /// Replaces the current batch. On error the previous batch is kept.
    pub fn generate<R: RandomSource + ?Sized>(&mut self, count: i64, rng: &mut R) -> Result<&[GeneratedPrompt]> {
        let batch = composer::generate_variations(&self.selection, count, rng)?;
        self.generated = batch;
        Ok(&self.generated)
    }

    pub fn generated(&self) -> &[GeneratedPrompt] {
        &self.generated
    }

    /// Saves a prompt from the current batch. Unknown or already saved ids are no-ops.
    pub fn save(&mut self, id: Uuid) -> bool {
        match self.generated.iter().find(|p| p.id == id) {
            Some(p) => self.saved.save(p.clone()),
            None => {
                debug!("save ignored, {id} is not in the current batch");
                false
            }
        }
    }

    pub fn delete(&mut self, id: Uuid) -> bool {
        self.saved.delete(id)
    }

    pub fn saved(&self) -> &[SavedPrompt] {
        self.saved.list()
    }

    /// Export document for the current batch.
    pub fn export(&self) -> Result<ExportDocument> {
        let platform = self.selection.platform.ok_or(ComposerError::PlatformNotSelected)?;
        export::document(platform, &self.generated)
    }
}
