use crate::case::Case;
use crate::cli::output::OutputFormat;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".recase.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub case: Case,

    /// Lines matching any of these regexes are left as they are.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    #[serde(default)]
    pub format: OutputFormat,
}

/// One config file. Only the keys it sets override the layers below it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigLayer {
    pub case: Option<Case>,
    pub ignore_patterns: Option<Vec<String>>,
    pub format: Option<OutputFormat>,
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        case: Option<Case>,
        format: Option<OutputFormat>,
        cli_patterns: Vec<String>,
    ) -> Result<Self> {
        let global_path = Self::global_config_path();
        let mut config = Self::load_layers(global_path.as_deref(), Path::new(LOCAL_CONFIG_FILE))?;

        // Apply CLI overrides
        if let Some(case) = case {
            config.case = case;
        }
        if let Some(format) = format {
            config.format = format;
        }
        config.ignore_patterns.extend(cli_patterns);

        Ok(config)
    }

    /// Merge the global and local config files over the defaults. Missing
    /// files are skipped.
    pub fn load_layers(global_path: Option<&Path>, local_path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global_path {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "loading global config");
                config = config.merge(ConfigLayer::from_file(global_path)?);
            }
        }

        // Local config overrides global
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "loading local config");
            config = config.merge(ConfigLayer::from_file(local_path)?);
        }

        Ok(config)
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(case) = layer.case {
            self.case = case;
        }
        if let Some(patterns) = layer.ignore_patterns {
            self.ignore_patterns = patterns;
        }
        if let Some(format) = layer.format {
            self.format = format;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
