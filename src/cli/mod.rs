//! CLI argument parsing and command dispatch.

pub mod args;
pub mod calc;

pub use args::{Cli, Commands, OutputFormat};
