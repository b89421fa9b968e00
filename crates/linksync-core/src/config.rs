use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::rules::RuleSource;

/// Settings loaded from `~/.config/linksync/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Whether links are rewritten at all.
    #[serde(default)]
    pub enabled: bool,
    /// `VAR=VALUE, pattern` rules, one per line. The pattern should contain
    /// `{{hostname}}`, e.g. `IS_DOCKSAL=1, http://{{hostname}}.myproject.docksal.site`.
    #[serde(default)]
    pub condition_pattern: String,
    /// `search, replacement` host pairs, one per line, without scheme or port,
    /// e.g. `stage-mysite.com, mysite.com`.
    #[serde(default)]
    pub search_replace: String,
}

impl Settings {
    /// Copy with surrounding whitespace trimmed from both text blocks.
    pub fn normalized(mut self) -> Self {
        self.condition_pattern = self.condition_pattern.trim().to_string();
        self.search_replace = self.search_replace.trim().to_string();
        self
    }
}

impl RuleSource for Settings {
    fn enabled(&self) -> bool {
        self.enabled
    }

    fn condition_pattern(&self) -> &str {
        &self.condition_pattern
    }

    fn search_replace(&self) -> &str {
        &self.search_replace
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linksync")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load settings from disk, creating a default (disabled) file if none exists.
pub fn load_or_init() -> Result<Settings> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = Settings::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load settings from an explicit file.
pub fn load_from(path: &Path) -> Result<Settings> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: Settings =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg.normalized())
}
