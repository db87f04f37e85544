//! Flatpak Manifest Generator Library
//!
//! Merges a base Flatpak manifest with a generated list of cargo sources,
//! producing the complete manifest flatpak-builder consumes for offline
//! Rust builds.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod prelude;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};

#[cfg(test)]
mod tests {
    use super::*;
    use constants::*;

    #[test]
    fn test_constants_accessible() {
        assert_eq!(TARGET_MODULE, "cosmic-connect-applet");
        assert_eq!(DIR_SOURCE_TYPE, "dir");
        assert!(USAGE.contains("<cargo-sources.json>"));
    }

    #[test]
    fn test_error_types() {
        let app_error = AppError::from(errors::ManifestError::invalid_structure("no modules"));

        assert_eq!(app_error.category(), "malformed-input");
        assert_eq!(app_error.exit_code(), 1);
    }
}
