//! Application constants for the Flatpak manifest generator
//!
//! This module centralizes all constants used throughout the application,
//! organized by functional domain.

/// Manifest structure and merge defaults
pub mod manifest {
    /// Module whose sources receive the cargo sources
    pub const TARGET_MODULE: &str = "cosmic-connect-applet";

    /// Source type kept from the target module's original sources
    pub const DIR_SOURCE_TYPE: &str = "dir";

    /// Marker for the single comment line allowed at the top of a base manifest
    pub const COMMENT_MARKER: &str = "//";

    /// Field holding the manifest's module list
    pub const MODULES_KEY: &str = "modules";

    /// Field holding a module's name
    pub const NAME_KEY: &str = "name";

    /// Field holding a module's source list
    pub const SOURCES_KEY: &str = "sources";

    /// Field identifying a source's kind
    pub const TYPE_KEY: &str = "type";
}

/// User-facing hints
pub mod hints {
    /// Command that produces the cargo sources document
    pub const GENERATE_SOURCES: &str = "just flatpak-gen-sources";

    /// Usage line for the command
    pub const USAGE: &str =
        "generate-flatpak-manifest [OPTIONS] <base-manifest.json> <cargo-sources.json> <output.json>";
}

/// File operation constants
pub mod files {
    /// Temporary file suffix for atomic writes
    pub const TEMP_FILE_SUFFIX: &str = ".tmp";
}

/// Environment variable names
pub mod env {
    /// Overrides the target module name
    pub const TARGET_MODULE: &str = "FLATPAK_MANIFEST_MODULE";
}

/// Configuration file locations
pub mod config {
    /// Project-local configuration file
    pub const LOCAL_FILE_NAME: &str = "flatpak-manifest.toml";

    /// Directory under the user config dir
    pub const APP_DIR_NAME: &str = "flatpak-manifest-gen";

    /// Configuration file name inside the app directory
    pub const FILE_NAME: &str = "config.toml";
}

/// Logging constants
pub mod logging {
    /// Default log level
    pub const DEFAULT_LOG_LEVEL: &str = "warn";

    /// Crate target used for the default log directive
    pub const CRATE_TARGET: &str = "flatpak_manifest_gen";
}

// Re-export commonly used constants for convenience
pub use hints::{GENERATE_SOURCES as SOURCES_HINT, USAGE};
pub use manifest::{DIR_SOURCE_TYPE, TARGET_MODULE};
