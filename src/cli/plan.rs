//! Plan command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::config::loader::load_config;
use crate::pipeline::PipelinePlan;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Run the plan command
pub fn run_plan(config: Option<&Path>) -> ExitCode {
    let resolved = match load_config(config) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let plan = PipelinePlan::from_config(&resolved);
    println!("{}", plan);
    println!();
    println!("{}", plan.summary());

    ExitCode::from(EXIT_SUCCESS)
}
