//! Flatpak manifest generator CLI
//!
//! Merges a base Flatpak manifest with generated cargo sources and writes the
//! complete manifest used by flatpak-builder.

use std::process;

use tracing::{debug, error, info};
use tracing_subscriber::{fmt, EnvFilter};

use flatpak_manifest_gen::cli::{handle_generate, Cli};
use flatpak_manifest_gen::config::AppConfig;
use flatpak_manifest_gen::constants::logging;
use flatpak_manifest_gen::errors::Result;

fn main() {
    // Parse command line arguments
    let cli = Cli::parse_args();

    if let Err(e) = run(&cli) {
        error!(category = e.category(), "Manifest generation failed");
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

/// Main application logic
fn run(cli: &Cli) -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    let config = AppConfig::load(cli.global.config.as_deref())?;

    init_logging(cli, &config);

    info!(
        "Flatpak manifest generator v{} starting",
        env!("CARGO_PKG_VERSION")
    );
    debug!("Configuration: {:?}", config);

    handle_generate(cli, &config)
}

/// Initialize logging from CLI flags, falling back to the configured level
fn init_logging(cli: &Cli, config: &AppConfig) {
    let log_level = cli
        .log_level()
        .map(|level| level.to_string().to_lowercase())
        .unwrap_or_else(|| config.logging.level.clone());

    // The binary logs under its own crate name, the library under CRATE_TARGET
    let mut filter = EnvFilter::from_default_env();
    for target in [logging::CRATE_TARGET, env!("CARGO_CRATE_NAME")] {
        if let Ok(directive) = format!("{}={}", target, log_level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    // Status lines own stdout; logs go to stderr
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(cli.global.very_verbose)
        .init();

    if cli.global.very_verbose {
        debug!("Very verbose logging enabled");
    } else if cli.global.verbose {
        info!("Verbose logging enabled");
    }
}
