//! Resolve command implementation

use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use clap::ValueEnum;

use crate::config::loader::{find_config, load_config};
use crate::watch::{watch_config, WatchOptions};

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Output format for the resolved configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// TOML, the same shape `styl.toml` uses
    Toml,
}

/// Run the resolve command
pub fn run_resolve(
    config: Option<&Path>,
    format: OutputFormat,
    watch: bool,
    debounce_ms: u64,
    clear: bool,
    verbose: bool,
) -> ExitCode {
    // Watch mode needs a concrete file; defaults alone have nothing to watch.
    if watch {
        let config_path = match config.map(Path::to_path_buf).or_else(find_config) {
            Some(path) => path,
            None => {
                eprintln!("Error: No config file found to watch");
                eprintln!("Run 'styl init' to create one");
                return ExitCode::from(EXIT_ERROR);
            }
        };

        let options = WatchOptions {
            debounce: Duration::from_millis(debounce_ms),
            clear_screen: clear,
            verbose,
        };

        return match watch_config(&config_path, options) {
            Ok(()) => ExitCode::from(EXIT_SUCCESS),
            Err(e) => {
                eprintln!("Watch error: {}", e);
                ExitCode::from(EXIT_ERROR)
            }
        };
    }

    // Discover once so the verbose line and the load agree on the file
    let config_path = config.map(Path::to_path_buf).or_else(find_config);

    if verbose {
        match &config_path {
            Some(path) => println!("Using config: {}", path.display()),
            None => println!("No config file found, resolving built-in defaults"),
        }
    }

    let resolved = match load_config(config_path.as_deref()) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let rendered = match format {
        OutputFormat::Json => match serde_json::to_string_pretty(&resolved) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error rendering config as JSON: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        },
        OutputFormat::Toml => match toml::to_string_pretty(&resolved) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error rendering config as TOML: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        },
    };

    println!("{}", rendered);
    ExitCode::from(EXIT_SUCCESS)
}
