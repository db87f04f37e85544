//! Prelude module for the Flatpak manifest generator
//!
//! Re-exports the items needed to drive a generation from Rust code with a
//! single `use flatpak_manifest_gen::prelude::*;` statement.
//!
//! # Usage
//!
//! ```rust,no_run
//! use flatpak_manifest_gen::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = AppConfig::load(None)?;
//!     let generator = ManifestGenerator::with_options(
//!         config.to_merge_options(),
//!         config.merge.sources_hint.clone(),
//!     );
//!     generator.generate(&ManifestPaths::new("base.json", "cargo-sources.json", "out.json"))?;
//!     Ok(())
//! }
//! ```

// Core result types
pub use crate::errors::{AppError, ManifestError, Result};

// Generation
pub use crate::app::{ManifestGenerator, ManifestPaths, MergeOptions, MergeReport};

// Configuration
pub use crate::config::AppConfig;

// Commonly used constants
pub use crate::constants::{DIR_SOURCE_TYPE, SOURCES_HINT, TARGET_MODULE};

// Standard library re-exports that are commonly needed
pub use std::path::{Path, PathBuf};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_imports() {
        let options = MergeOptions::default();
        assert_eq!(options.target_module, TARGET_MODULE);
        assert_eq!(options.keep_source_types, vec![DIR_SOURCE_TYPE.to_string()]);

        let paths = ManifestPaths::new("a.json", "b.json", "c.json");
        assert_eq!(paths.output, PathBuf::from("c.json"));

        assert_eq!(SOURCES_HINT, "just flatpak-gen-sources");
    }
}
