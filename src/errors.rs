//! Error types for the Flatpak manifest generator
//!
//! Errors are grouped by the stage that produces them (manifest documents,
//! configuration) and folded into a single [`AppError`] at the CLI boundary.
//! Messages are written for the person running the packaging build, so they
//! name the offending file and, where one exists, the command that fixes it.

use std::path::PathBuf;
use thiserror::Error;

/// Manifest document and merge errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Base manifest file does not exist
    #[error("Base manifest not found: {}", path.display())]
    BaseNotFound { path: PathBuf },

    /// Cargo sources document does not exist
    #[error("Cargo sources not found: {}\nRun: {hint}", path.display())]
    SourcesNotFound { path: PathBuf, hint: String },

    /// Reading an input document failed
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input document is not valid JSON
    #[error("Invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Writing the output manifest failed
    #[error("Failed to write manifest {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the merged manifest failed
    #[error("Failed to serialize manifest")]
    Serialize(#[source] serde_json::Error),

    /// Base manifest does not have the expected shape
    #[error("Invalid manifest structure: {reason}")]
    InvalidStructure { reason: String },

    /// Sources document parsed but is not a JSON array
    #[error("Cargo sources in {} must be a JSON array, found {found}", path.display())]
    SourcesNotArray { path: PathBuf, found: &'static str },
}

impl ManifestError {
    /// Shorthand for a structural error
    pub fn invalid_structure(reason: impl Into<String>) -> Self {
        Self::InvalidStructure {
            reason: reason.into(),
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Explicitly requested configuration file not found
    #[error("Configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Configuration file could not be read
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration format
    #[error("Invalid configuration format: {0}")]
    InvalidFormat(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: {value}. {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest error
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Manifest(ManifestError::BaseNotFound { .. })
            | AppError::Manifest(ManifestError::SourcesNotFound { .. }) => "missing-input",
            AppError::Manifest(ManifestError::Parse { .. })
            | AppError::Manifest(ManifestError::InvalidStructure { .. })
            | AppError::Manifest(ManifestError::SourcesNotArray { .. }) => "malformed-input",
            AppError::Manifest(_) => "manifest",
            AppError::Config(_) => "config",
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Manifest result type alias
pub type ManifestResult<T> = std::result::Result<T, ManifestError>;

/// Config result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
