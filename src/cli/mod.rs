use clap::Parser;

use crate::catalog::{HookCategory, Platform};
use crate::selection::ExperienceLevel;

#[derive(Parser, Debug)]
#[command(name = "viral_prompt_gen", version, about = "Step-by-step builder for short-video prompts")]
pub struct Args {
    /// TOML or YAML file with defaults
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, value_enum)]
    pub level: Option<ExperienceLevel>,

    #[arg(long, value_enum)]
    pub platform: Option<Platform>,

    #[arg(long, value_enum)]
    pub hook_category: Option<HookCategory>,

    /// Hook phrase; the category is inferred when not given
    #[arg(long)]
    pub hook: Option<String>,

    #[arg(long)]
    pub shot_type: Option<String>,

    #[arg(long)]
    pub subject: Option<String>,

    #[arg(long)]
    pub action: Option<String>,

    #[arg(long)]
    pub setting: Option<String>,

    #[arg(long)]
    pub camera: Option<String>,

    #[arg(long)]
    pub audio: Option<String>,

    /// Number of variations to generate
    #[arg(long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Seed for reproducible variations
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub export_dir: Option<String>,

    /// Write the generated batch to a JSON file
    #[arg(long, default_value_t = false)]
    pub export: bool,

    /// Save every generated variation
    #[arg(long, default_value_t = false)]
    pub save_all: bool,

    /// Never read from stdin; unset slots stay empty
    #[arg(long, default_value_t = false)]
    pub no_input: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}
