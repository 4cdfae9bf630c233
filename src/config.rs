use crate::cli::output::OutputFormat;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".stdx.toml";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub format: OutputFormat,
    pub color: bool,
    pub include_seconds: bool,
    /// Field limit used by `split` when none is given on the command line
    pub limit: Option<i32>,
}

/// One config file as written. Keys left out stay `None` and do not touch
/// what earlier layers set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PartialConfig {
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
    pub include_seconds: Option<bool>,
    pub limit: Option<i32>,
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: default_color(),
            include_seconds: false,
            limit: None,
        }
    }
}

/// Settings given on the command line. `None` leaves the file value alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub format: Option<OutputFormat>,
    pub no_color: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let global = Self::global_config_path();
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        Self::load_from(global.as_deref(), Some(&local), overrides)
    }

    /// Same as [`Config::load`] with explicit file locations.
    pub fn load_from(
        global_path: Option<&Path>,
        local_path: Option<&Path>,
        overrides: Overrides,
    ) -> Result<Self> {
        let mut config = Self::default();

        for path in [global_path, local_path].into_iter().flatten() {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config");
                config = config.merge(Self::from_file(path)?);
            }
        }

        if let Some(format) = overrides.format {
            config.format = format;
        }
        if overrides.no_color {
            config.color = false;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<PartialConfig> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: PartialConfig) -> Self {
        if let Some(format) = other.format {
            self.format = format;
        }
        if let Some(color) = other.color {
            self.color = color;
        }
        if let Some(include_seconds) = other.include_seconds {
            self.include_seconds = include_seconds;
        }
        if other.limit.is_some() {
            self.limit = other.limit;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "stdx").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
