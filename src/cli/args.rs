//! CLI argument definitions using clap.

use clap::{ArgAction, Parser, Subcommand};

use crate::core::arithmetic::Operation;
use crate::core::invocation::Invocation;
use crate::core::logging::{LogFormat, LogLevel};
use crate::error::CalcError;
use crate::util::env::should_use_color;

pub use crate::core::models::OutputFormat;

/// Simple calculator CLI
#[derive(Parser, Debug)]
#[command(name = "calccli")]
#[command(version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Show version and exit
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    // === Global flags ===
    /// Report elapsed time after the result
    #[arg(long, visible_alias = "timings", global = true)]
    pub time: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Shorthand for --format json
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log level [env: CALCCLI_LOG]
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    /// Log format [env: CALCCLI_LOG_FORMAT]
    #[arg(long, value_enum, value_name = "FORMAT", global = true)]
    pub log_format: Option<LogFormat>,

    /// Shorthand for --log-format json
    #[arg(long, global = true)]
    pub json_output: bool,

    /// Verbose output (sets log level to debug)
    #[arg(long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the effective output format.
    #[must_use]
    pub const fn effective_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }

    /// Resolve the effective log format; the environment fills in when no flag is given.
    #[must_use]
    pub fn effective_log_format(&self) -> LogFormat {
        if self.json_output {
            return LogFormat::Json;
        }
        self.log_format
            .or_else(crate::core::logging::log_format_from_env)
            .unwrap_or_default()
    }

    /// Resolve the effective log level; the environment fills in when no flag is given.
    #[must_use]
    pub fn effective_log_level(&self) -> LogLevel {
        self.log_level
            .or_else(crate::core::logging::log_level_from_env)
            .unwrap_or_default()
    }

    /// Build the invocation for the selected subcommand.
    ///
    /// Returns `None` when no subcommand was given.
    #[must_use]
    pub fn invocation(&self) -> Option<Invocation> {
        let (operation, a, b) = match self.command? {
            Commands::Add { a, b } => (Operation::Add, a, b),
            Commands::Sub { a, b } => (Operation::Sub, a, b),
            Commands::Mul { a, b } => (Operation::Mul, a, b),
            Commands::Div { a, b } => (Operation::Div, a, b),
        };

        Some(Invocation {
            operation,
            a,
            b,
            show_timing: self.time,
            format: self.effective_format(),
            pretty: self.pretty,
            color: should_use_color(self.no_color),
        })
    }
}

/// Available commands.
///
/// Operands take any token as a value, so `-1e-7` and `-inf` reach
/// [`parse_operand`] instead of being read as short flags.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq)]
pub enum Commands {
    /// Add two numbers.
    Add {
        /// First number
        #[arg(value_parser = parse_operand, allow_hyphen_values = true)]
        a: f64,
        /// Second number
        #[arg(value_parser = parse_operand, allow_hyphen_values = true)]
        b: f64,
    },

    /// Subtract two numbers (a - b).
    Sub {
        /// Minuend
        #[arg(value_parser = parse_operand, allow_hyphen_values = true)]
        a: f64,
        /// Subtrahend
        #[arg(value_parser = parse_operand, allow_hyphen_values = true)]
        b: f64,
    },

    /// Multiply two numbers.
    Mul {
        /// First factor
        #[arg(value_parser = parse_operand, allow_hyphen_values = true)]
        a: f64,
        /// Second factor
        #[arg(value_parser = parse_operand, allow_hyphen_values = true)]
        b: f64,
    },

    /// Divide two numbers. Handles divide-by-zero gracefully.
    Div {
        /// Dividend
        #[arg(value_parser = parse_operand, allow_hyphen_values = true)]
        a: f64,
        /// Divisor
        #[arg(value_parser = parse_operand, allow_hyphen_values = true)]
        b: f64,
    },
}

/// Parse a numeric operand.
///
/// Accepts anything `f64::from_str` does (including `inf`, `-inf` and `nan`)
/// after trimming surrounding whitespace.
///
/// # Errors
///
/// Returns [`CalcError::InvalidArgument`] when the text is not a number.
pub fn parse_operand(raw: &str) -> Result<f64, CalcError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidArgument(format!("'{raw}' is not a valid number")))
}
