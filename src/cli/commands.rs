//! Command implementation for the manifest generator CLI
//!
//! Turns parsed arguments and loaded configuration into a generation run and
//! prints the status lines the packaging recipes expect on stdout.

use tracing::info;

use crate::app::{ManifestGenerator, ManifestPaths, MergeReport};
use crate::cli::args::Cli;
use crate::config::AppConfig;
use crate::errors::Result;

/// Build the generator for this run, with CLI overrides applied
pub fn build_generator(cli: &Cli, config: &AppConfig) -> ManifestGenerator {
    let mut options = config.to_merge_options();

    if let Some(module) = &cli.module {
        options.target_module = module.clone();
    }

    ManifestGenerator::with_options(options, config.merge.sources_hint.clone())
}

/// Handle the generate command
pub fn handle_generate(cli: &Cli, config: &AppConfig) -> Result<()> {
    let generator = build_generator(cli, config);
    let paths = cli.paths();

    info!(
        "Generating manifest for module '{}'",
        generator.options().target_module
    );

    let report = generator.generate(&paths)?;
    print_summary(&report, &paths);

    Ok(())
}

/// Print the confirmation lines for a finished run
fn print_summary(report: &MergeReport, paths: &ManifestPaths) {
    if report.target_found() {
        println!("✓ Added {} cargo sources to manifest", report.appended);
    }

    println!("✓ Generated complete manifest: {}", paths.output.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_module_overrides_config() {
        let cli = Cli::try_parse_from(["generate-flatpak-manifest", "-m", "cli-app", "a", "b", "c"])
            .unwrap();
        let mut config = AppConfig::default();
        config.merge.target_module = "config-app".to_string();

        assert_eq!(
            build_generator(&cli, &config).options().target_module,
            "cli-app"
        );
    }

    #[test]
    fn test_config_used_without_cli_override() {
        let cli = Cli::try_parse_from(["generate-flatpak-manifest", "a", "b", "c"]).unwrap();
        let mut config = AppConfig::default();
        config.merge.target_module = "config-app".to_string();
        config.merge.keep_source_types = vec!["dir".to_string(), "patch".to_string()];

        let generator = build_generator(&cli, &config);
        assert_eq!(generator.options().target_module, "config-app");
        assert_eq!(generator.options().keep_source_types.len(), 2);
    }

    #[test]
    fn test_handle_generate() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("base.json");
        let sources = temp_dir.path().join("cargo-sources.json");
        let output = temp_dir.path().join("out.json");
        fs::write(
            &base,
            r#"{"modules": [{"name": "cosmic-connect-applet", "sources": [{"type": "dir", "path": "."}]}]}"#,
        )
        .unwrap();
        fs::write(&sources, r#"[{"type": "archive"}, {"type": "archive"}]"#).unwrap();

        let cli = Cli::try_parse_from([
            std::ffi::OsStr::new("generate-flatpak-manifest"),
            base.as_os_str(),
            sources.as_os_str(),
            output.as_os_str(),
        ])
        .unwrap();

        handle_generate(&cli, &AppConfig::default()).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(
            written["modules"][0]["sources"].as_array().unwrap().len(),
            3
        );
    }
}
