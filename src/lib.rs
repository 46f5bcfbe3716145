//! viral_prompt_gen: build short-video prompts from a fixed catalog of hooks,
//! shots, subjects and scenes, then spin randomized variations of them.

pub mod catalog;
pub mod cli;
pub mod composer;
pub mod config;
pub mod errors;
pub mod export;
pub mod saved;
pub mod selection;
pub mod session;
pub mod ux;
pub mod wire;
pub mod wizard;

pub use catalog::{tips, HookCategory, Platform, PlatformSpec, Slot};
pub use composer::{build_preview, generate_variations, RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use errors::ComposerError;
pub use saved::SavedSet;
pub use selection::{ExperienceLevel, Selection, WizardStep};
pub use session::Session;
pub use wire::{ExportDocument, GeneratedPrompt, SavedPrompt, VariationParts};
