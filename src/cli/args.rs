//! Command-line argument parsing for the Flatpak manifest generator
//!
//! Three positional paths drive the run; everything else is optional and
//! only affects logging or overrides configuration.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser};

use crate::app::ManifestPaths;
use crate::constants::hints;

/// Generate a complete Flatpak manifest with cargo sources
#[derive(Parser, Debug)]
#[command(
    name = "generate-flatpak-manifest",
    version,
    override_usage = hints::USAGE,
    about = "Merge a base Flatpak manifest with generated cargo sources",
    long_about = "Reads a base Flatpak manifest (a leading // comment line is allowed) and a cargo sources
document, replaces the target module's sources with its directory sources followed by every
cargo source, and writes the complete manifest as strict JSON."
)]
pub struct Cli {
    /// Base manifest JSON
    #[arg(value_name = "BASE_MANIFEST")]
    pub base_manifest: PathBuf,

    /// Cargo sources JSON produced by the sources generator
    #[arg(value_name = "CARGO_SOURCES")]
    pub cargo_sources: PathBuf,

    /// Where to write the complete manifest
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Module to receive the cargo sources
    #[arg(short, long, value_name = "NAME")]
    pub module: Option<String>,

    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Logging and configuration options
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long)]
    pub very_verbose: bool,

    /// Quiet mode - only errors are logged
    #[arg(short, long)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    ///
    /// Help and version exit with status 0. Any other parse failure, including
    /// a wrong number of paths, prints the usage and exits with status 1.
    pub fn parse_args() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(e) if !e.use_stderr() => e.exit(),
            Err(e) => {
                let _ = e.print();
                process::exit(1);
            }
        }
    }

    /// Paths for this run
    pub fn paths(&self) -> ManifestPaths {
        ManifestPaths::new(&self.base_manifest, &self.cargo_sources, &self.output)
    }

    /// Logging level requested by flags, if any
    pub fn log_level(&self) -> Option<tracing::Level> {
        if self.global.quiet {
            Some(tracing::Level::ERROR)
        } else if self.global.very_verbose {
            Some(tracing::Level::DEBUG)
        } else if self.global.verbose {
            Some(tracing::Level::INFO)
        } else {
            None
        }
    }
}
