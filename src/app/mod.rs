//! Core application logic for the Flatpak manifest generator
//!
//! This module contains the document layer (reading the comment-tolerant base
//! manifest and the cargo sources, writing the result), the merge that splices
//! cargo sources into the target module, and the generator that runs both.
//!
//! # Examples
//!
//! ```rust,no_run
//! use flatpak_manifest_gen::app::{ManifestGenerator, ManifestPaths};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let paths = ManifestPaths::new(
//!     "flatpak/base-manifest.json",
//!     "flatpak/cargo-sources.json",
//!     "flatpak/manifest.json",
//! );
//! let report = ManifestGenerator::new().generate(&paths)?;
//! println!("Appended {} sources", report.appended);
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod generator;
pub mod merge;

// Re-export main public API
pub use document::{read_base_manifest, read_sources, strip_leading_comment, write_manifest};
pub use generator::{ManifestGenerator, ManifestPaths};
pub use merge::{merge_sources, MergeOptions, MergeReport};
