//! Configuration management for the Flatpak manifest generator
//!
//! Zero-config by default. Settings are layered, lowest precedence first:
//! 1. Default values
//! 2. Config file (explicit `--config`, or the first one found)
//! 3. Environment variables (a `.env` file is loaded by `main`)
//! 4. CLI arguments (applied by the command handler)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::app::MergeOptions;
use crate::constants::{config as files, env, hints, logging, manifest};
use crate::errors::{ConfigError, ConfigResult};

/// Unified application configuration for TOML serialization
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Merge settings
    pub merge: MergeConfigToml,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// TOML-friendly merge configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MergeConfigToml {
    /// Module whose sources receive the cargo sources
    pub target_module: String,
    /// Source types kept from the target module
    pub keep_source_types: Vec<String>,
    /// Command suggested when the cargo sources file is missing
    pub sources_hint: String,
}

impl Default for MergeConfigToml {
    fn default() -> Self {
        Self {
            target_module: manifest::TARGET_MODULE.to_string(),
            keep_source_types: vec![manifest::DIR_SOURCE_TYPE.to_string()],
            sources_hint: hints::GENERATE_SOURCES.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no verbosity flag is given
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: logging::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl MergeConfigToml {
    /// Convert to runtime MergeOptions
    pub fn to_merge_options(&self) -> MergeOptions {
        MergeOptions {
            target_module: self.target_module.clone(),
            keep_source_types: self.keep_source_types.clone(),
        }
    }
}

impl AppConfig {
    /// Convert to runtime merge options
    pub fn to_merge_options(&self) -> MergeOptions {
        self.merge.to_merge_options()
    }

    /// Load configuration from file and environment
    ///
    /// An explicit `config_file_override` must exist. Without one, the
    /// standard locations are searched and defaults are used if none exist.
    pub fn load(config_file_override: Option<&Path>) -> ConfigResult<Self> {
        let config_path = match config_file_override {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            Some(path) => Some(path.to_path_buf()),
            None => Self::find_config_file(),
        };

        let mut config = match config_path {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Apply overrides from environment variables
    pub fn apply_env_overrides(&mut self) {
        if let Ok(module) = std::env::var(env::TARGET_MODULE) {
            if !module.is_empty() {
                debug!("Target module overridden by {}: {}", env::TARGET_MODULE, module);
                self.merge.target_module = module;
            }
        }
    }

    /// Reject settings that would make the merge meaningless
    pub fn validate(&self) -> ConfigResult<()> {
        if self.merge.target_module.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "merge.target_module".to_string(),
                value: String::new(),
                reason: "A module name is required".to_string(),
            });
        }

        if self.merge.keep_source_types.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "merge.keep_source_types".to_string(),
                value: "[]".to_string(),
                reason: format!(
                    "Keep at least one source type (usually \"{}\")",
                    manifest::DIR_SOURCE_TYPE
                ),
            });
        }

        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                value: self.logging.level.clone(),
                reason: "Use one of error, warn, info, debug, trace".to_string(),
            });
        }

        Ok(())
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut search_paths = vec![PathBuf::from(files::LOCAL_FILE_NAME)];
        if let Some(path) = Self::default_config_path() {
            search_paths.push(path);
        }

        for path in search_paths {
            if path.exists() {
                debug!("Found config file: {}", path.display());
                return Some(path);
            }
        }

        debug!("No config file found in standard locations");
        None
    }

    /// Default config file path for the current user
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(files::APP_DIR_NAME).join(files::FILE_NAME))
    }

    /// Load configuration from a TOML file
    fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: AppConfig = toml::from_str(&content)?;

        info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }
}
