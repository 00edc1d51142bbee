//! Init command implementation

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::ValueEnum;

use crate::init::{init_config, InitError};

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Starter presets for `styl init`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum InitPreset {
    /// Empty entry list; the standard plugin chain comes from defaults
    #[default]
    Minimal,
    /// Tailwind entry stylesheet with explicit plugin tables
    Tailwind,
}

impl InitPreset {
    fn name(self) -> &'static str {
        match self {
            InitPreset::Minimal => "minimal",
            InitPreset::Tailwind => "tailwind",
        }
    }
}

/// Config file formats for `styl init`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum InitFormat {
    /// `styl.toml`
    #[default]
    Toml,
    /// `styl.json5`
    Json5,
}

impl InitFormat {
    fn name(self) -> &'static str {
        match self {
            InitFormat::Toml => "toml",
            InitFormat::Json5 => "json5",
        }
    }
}

/// Run the init command
pub fn run_init(
    path: Option<&Path>,
    preset: InitPreset,
    format: InitFormat,
    force: bool,
) -> ExitCode {
    let target_dir = match path {
        Some(p) => p.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    match init_config(&target_dir, preset.name(), format.name(), force) {
        Ok(config_path) => {
            println!("Created {}", config_path.display());
            println!();
            println!("Next steps:");
            println!("  styl validate --config {}", config_path.display());
            println!("  styl plan --config {}", config_path.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(InitError::FileExists(existing)) => {
            eprintln!("Error: Config file already exists: {}", existing.display());
            eprintln!("Use --force to overwrite");
            ExitCode::from(EXIT_ERROR)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
