use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{HookCategory, Platform};

/// ========================================
/// Prompt records handed to the UI layer
/// ========================================

/// Values sampled for one variation, kept alongside the rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationParts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook: Option<String>,
    pub shot_type: String,
    pub subject: String,
    pub action: String,
    pub setting: String,
    pub camera_movement: String,
    pub audio: String,
}

impl VariationParts {
    /// `"{hook} {shot} {subject} {action} in {setting}, {camera}, {audio}"`.
    /// Without a hook the text starts at the shot type.
    pub fn render(&self) -> String {
        let body = format!(
            "{} {} {} in {}, {}, {}",
            self.shot_type, self.subject, self.action, self.setting, self.camera_movement, self.audio
        );
        match self.hook.as_deref() {
            Some(hook) if !hook.is_empty() => format!("{hook} {body}"),
            _ => body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPrompt {
    pub id: Uuid,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook_category: Option<HookCategory>,
    pub parts: VariationParts,
}

impl GeneratedPrompt {
    pub fn new(parts: VariationParts, platform: Option<Platform>, hook_category: Option<HookCategory>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: parts.render(),
            platform,
            hook_category,
            parts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPrompt {
    #[serde(flatten)]
    pub prompt: GeneratedPrompt,
    pub saved_at: DateTime<Utc>,
}

/// File format written by `export`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub platform: Platform,
    pub generated_at: DateTime<Utc>,
    pub prompts: Vec<String>,
}
