//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod init;
mod plan;
mod resolve;
mod validate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

// Re-export subcommand types used in Commands enum
pub use init::{InitFormat, InitPreset};
pub use resolve::OutputFormat;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Stylepipe - Resolve style pipeline configuration
#[derive(Parser)]
#[command(name = "styl")]
#[command(about = "Stylepipe - Resolve and inspect CSS post-processing pipeline configuration")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the project configuration and print the canonical record
    Resolve {
        /// Config file (default: discover styl.toml / styl.json5 upward)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "json", value_enum)]
        format: OutputFormat,

        /// Watch the config file and re-resolve on every change
        #[arg(short, long)]
        watch: bool,

        /// Debounce delay for watch mode, in milliseconds
        #[arg(long, default_value = "200")]
        debounce_ms: u64,

        /// Clear the terminal between watch-mode resolutions
        #[arg(long)]
        clear: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check a config file for shape errors
    Validate {
        /// Config file (default: discover styl.toml / styl.json5 upward)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the post-processing plan for the resolved configuration
    Plan {
        /// Config file (default: discover styl.toml / styl.json5 upward)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write a starter config file
    Init {
        /// Target directory (default: current directory)
        path: Option<PathBuf>,

        /// Starter preset
        #[arg(long, default_value = "minimal", value_enum)]
        preset: InitPreset,

        /// Config file format
        #[arg(long, default_value = "toml", value_enum)]
        format: InitFormat,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { config, format, watch, debounce_ms, clear, verbose } => {
            resolve::run_resolve(config.as_deref(), format, watch, debounce_ms, clear, verbose)
        }
        Commands::Validate { config, verbose } => {
            validate::run_validate(config.as_deref(), verbose)
        }
        Commands::Plan { config } => plan::run_plan(config.as_deref()),
        Commands::Init { path, preset, format, force } => {
            init::run_init(path.as_deref(), preset, format, force)
        }
    }
}
