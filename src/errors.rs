use thiserror::Error;

use crate::catalog::Slot;

#[derive(Error, Debug)]
pub enum ComposerError {
    #[error("invalid argument: {0}")] InvalidArgument(String),
    #[error("prompt is incomplete: make at least one selection before generating")] IncompletePrompt,
    #[error("unknown platform: {0}")] UnknownPlatform(String),
    #[error("unknown hook category: {0}")] UnknownHookCategory(String),
    #[error("unknown experience level: {0}")] UnknownExperienceLevel(String),
    #[error("{value:?} is not a known {slot} option")] NotInCatalog { slot: Slot, value: String },
    #[error("no platform selected")] PlatformNotSelected,
    #[error("no prompts to export, generate prompts first")] NothingToExport,
    #[error("io error: {0}")] Io(#[from] std::io::Error),
    #[error("serialize error: {0}")] Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ComposerError>;
