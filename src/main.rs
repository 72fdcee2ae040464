//! calccli - Simple calculator CLI
//!
//! CLI entry point.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use clap::{CommandFactory, Parser};
use std::process::ExitCode;

use calccli::cli::{Cli, calc};
use calccli::core::logging;
use calccli::render::error::render_error;
use calccli::util::env::should_use_color_on_stderr;

fn main() -> ExitCode {
    // Usage errors, --help and --version exit inside clap.
    let cli = Cli::parse();

    logging::init(cli.effective_log_level(), cli.effective_log_format(), cli.verbose);

    let Some(invocation) = cli.invocation() else {
        return print_help();
    };

    let mut stdout = std::io::stdout().lock();
    match calc::execute(&invocation, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = e.error_code(), category = %e.category(), "Command failed");
            let color = should_use_color_on_stderr(cli.no_color);
            eprintln!("{}", render_error(&e, invocation.format, color, invocation.pretty));
            e.exit_code().into()
        }
    }
}

fn print_help() -> ExitCode {
    match Cli::command().print_help() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("failed to print help: {e}");
            ExitCode::FAILURE
        }
    }
}
