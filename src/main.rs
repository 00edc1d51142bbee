//! Stylepipe - Command-line tool for resolving style pipeline configuration

use std::process::ExitCode;

use stylepipe::cli;

fn main() -> ExitCode {
    cli::run()
}
