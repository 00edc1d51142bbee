//! Validate command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::config::loader::{find_config, load_raw};
use crate::config::resolver::{check, resolve};
use crate::config::schema::Defaults;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Run the validate command
///
/// Reports every shape error in the config file with its field path, not
/// just the first one. With `--verbose`, also prints what a clean file
/// resolves to.
pub fn run_validate(config: Option<&Path>, verbose: bool) -> ExitCode {
    let config_path = match config.map(Path::to_path_buf).or_else(find_config) {
        Some(path) => path,
        None => {
            eprintln!("Error: No config file to validate");
            eprintln!("Run 'styl init' to create one");
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    println!("Validating {}...", config_path.display());

    let raw = match load_raw(&config_path) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let errors = check(&raw);
    if !errors.is_empty() {
        println!();
        for error in &errors {
            eprintln!("ERROR: {}", error);
        }
        println!();
        println!(
            "Found {} error{}.",
            errors.len(),
            if errors.len() == 1 { "" } else { "s" }
        );
        return ExitCode::from(EXIT_ERROR);
    }

    println!("No issues found.");

    if verbose {
        match resolve(&raw, &Defaults::standard()) {
            Ok(resolved) => {
                println!();
                println!("Entry points: {}", resolved.css.len());
                println!("Plugin chain: {}", resolved.plugin_names().join(" -> "));
            }
            Err(e) => {
                eprintln!("Resolution failed: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
