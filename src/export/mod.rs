use chrono::{DateTime, Utc};
use fs_err as fs;
use log::info;
use serde_json::to_string_pretty;
use std::path::{Path, PathBuf};

use crate::catalog::Platform;
use crate::errors::{ComposerError, Result};
use crate::wire::{ExportDocument, GeneratedPrompt};

pub fn document(platform: Platform, prompts: &[GeneratedPrompt]) -> Result<ExportDocument> {
    if prompts.is_empty() {
        return Err(ComposerError::NothingToExport);
    }
    Ok(ExportDocument {
        platform,
        generated_at: Utc::now(),
        prompts: prompts.iter().map(|p| p.text.clone()).collect(),
    })
}

/// `viral-prompts-{platform}-{epoch-millis}.json`
pub fn file_name(platform: Platform, at: DateTime<Utc>) -> String {
    format!("viral-prompts-{}-{}.json", platform, at.timestamp_millis())
}

/// Writes `doc` as pretty JSON under `dir`, creating it if needed.
pub fn write(dir: &Path, doc: &ExportDocument) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name(doc.platform, doc.generated_at));
    fs::write(&path, to_string_pretty(doc)?)?;
    info!("exported {} prompts to {}", doc.prompts.len(), path.display());
    Ok(path)
}
