use chrono::Utc;
use log::debug;
use uuid::Uuid;

use crate::wire::{GeneratedPrompt, SavedPrompt};

/// In-memory saved prompts, kept in the order they were saved.
#[derive(Debug, Default, Clone)]
pub struct SavedSet {
    entries: Vec<SavedPrompt>,
}

impl SavedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false without touching the set if the id is already saved.
    pub fn save(&mut self, prompt: GeneratedPrompt) -> bool {
        if self.contains(prompt.id) {
            debug!("prompt {} already saved", prompt.id);
            return false;
        }
        debug!("saving prompt {}", prompt.id);
        self.entries.push(SavedPrompt { prompt, saved_at: Utc::now() });
        true
    }

    /// Removes the entry with `id`; false if there was none.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.prompt.id != id);
        let removed = self.entries.len() != before;
        debug!("delete {id}: removed={removed}");
        removed
    }

    pub fn list(&self) -> &[SavedPrompt] {
        &self.entries
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.entries.iter().any(|e| e.prompt.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::VariationParts;

    fn prompt(tag: &str) -> GeneratedPrompt {
        let parts = VariationParts {
            hook: None,
            shot_type: tag.into(),
            subject: "s".into(),
            action: "a".into(),
            setting: "x".into(),
            camera_movement: "c".into(),
            audio: "m".into(),
        };
        GeneratedPrompt::new(parts, None, None)
    }

    #[test]
    fn saving_twice_is_a_no_op() {
        let mut set = SavedSet::new();
        let p = prompt("a");
        assert!(set.save(p.clone()));
        assert!(!set.save(p));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn deleting_missing_id_changes_nothing() {
        let mut set = SavedSet::new();
        set.save(prompt("a"));
        assert!(!set.delete(Uuid::new_v4()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn delete_keeps_insertion_order() {
        let mut set = SavedSet::new();
        let (a, b, c) = (prompt("a"), prompt("b"), prompt("c"));
        set.save(a.clone());
        set.save(b.clone());
        set.save(c.clone());

        assert!(set.delete(b.id));
        let ids: Vec<Uuid> = set.list().iter().map(|e| e.prompt.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
        assert!(!set.delete(b.id));
    }
}
