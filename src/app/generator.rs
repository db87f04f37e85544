//! End-to-end manifest generation
//!
//! Ties the document and merge layers together: verify both inputs exist,
//! parse them, splice the cargo sources into the target module and write the
//! result. Nothing is written unless every earlier step succeeded.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::app::document::{read_base_manifest, read_sources, write_manifest};
use crate::app::merge::{merge_sources, MergeOptions, MergeReport};
use crate::constants::hints;
use crate::errors::{ManifestError, ManifestResult};

/// The three files involved in one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPaths {
    /// Base manifest, optionally starting with a `//` comment line
    pub base_manifest: PathBuf,
    /// Generated cargo sources document
    pub cargo_sources: PathBuf,
    /// Destination for the complete manifest
    pub output: PathBuf,
}

impl ManifestPaths {
    /// Bundle the three paths
    pub fn new(
        base_manifest: impl Into<PathBuf>,
        cargo_sources: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            base_manifest: base_manifest.into(),
            cargo_sources: cargo_sources.into(),
            output: output.into(),
        }
    }
}

/// Generates complete manifests from a base manifest and cargo sources
#[derive(Debug, Clone)]
pub struct ManifestGenerator {
    options: MergeOptions,
    sources_hint: String,
}

impl Default for ManifestGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestGenerator {
    /// Generator with default merge options
    pub fn new() -> Self {
        Self::with_options(MergeOptions::default(), hints::GENERATE_SOURCES)
    }

    /// Generator with custom merge options and missing-sources hint
    pub fn with_options(options: MergeOptions, sources_hint: impl Into<String>) -> Self {
        Self {
            options,
            sources_hint: sources_hint.into(),
        }
    }

    /// Merge options in use
    pub fn options(&self) -> &MergeOptions {
        &self.options
    }

    /// Check that both input files exist
    ///
    /// Runs before any file is opened so a missing input never touches the
    /// output path.
    pub fn check_inputs(&self, paths: &ManifestPaths) -> ManifestResult<()> {
        if !paths.base_manifest.exists() {
            return Err(ManifestError::BaseNotFound {
                path: paths.base_manifest.clone(),
            });
        }

        if !paths.cargo_sources.exists() {
            return Err(ManifestError::SourcesNotFound {
                path: paths.cargo_sources.clone(),
                hint: self.sources_hint.clone(),
            });
        }

        Ok(())
    }

    /// Run one generation and report what changed
    pub fn generate(&self, paths: &ManifestPaths) -> ManifestResult<MergeReport> {
        self.check_inputs(paths)?;

        let mut manifest = read_base_manifest(&paths.base_manifest)?;
        let sources = read_sources(&paths.cargo_sources)?;

        let report = merge_sources(&mut manifest, sources, &self.options)?;
        log_report(&report, &self.options.target_module);

        write_manifest(&paths.output, &manifest)?;
        debug!("Manifest written to {}", paths.output.display());

        Ok(report)
    }
}

fn log_report(report: &MergeReport, target: &str) {
    match report.module_index {
        Some(index) => info!(
            "Module '{}' (index {}): kept {}, dropped {}, appended {} sources ({} total)",
            target,
            index,
            report.kept,
            report.dropped,
            report.appended,
            report.total_sources()
        ),
        None => info!("Module '{}' not found; manifest left unchanged", target),
    }
}
