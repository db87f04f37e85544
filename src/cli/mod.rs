//! Command-line interface components
//!
//! This module contains CLI-specific code for the manifest generator,
//! including argument parsing and status output.

pub mod args;
pub mod commands;

pub use args::{Cli, GlobalArgs};
pub use commands::{build_generator, handle_generate};
