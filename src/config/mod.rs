use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalog::Platform;
use crate::selection::ExperienceLevel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_count: i64,
    pub max_count: i64,
    pub export_dir: String,
    pub platform: Option<Platform>,
    pub experience_level: Option<ExperienceLevel>,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_count: 3,
            max_count: 10,
            export_dir: ".".into(),
            platform: None,
            experience_level: None,
            seed: None,
        }
    }
}

impl Config {
    /// Reads a `.toml`, `.yml` or `.yaml` file. Absent keys take defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_lowercase();
        let cfg: Config = match ext.as_str() {
            "toml" => toml::from_str(&raw)?,
            "yml" | "yaml" => serde_yaml::from_str(&raw)?,
            other => anyhow::bail!("unsupported config format {:?} for {}", other, path.display()),
        };
        Ok(cfg)
    }
}
