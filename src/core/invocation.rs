//! The immutable description of one calculator run.

use crate::core::arithmetic::Operation;
use crate::core::models::OutputFormat;

/// Everything the dispatcher needs, resolved from the command line up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Invocation {
    pub operation: Operation,
    pub a: f64,
    pub b: f64,
    pub show_timing: bool,
    pub format: OutputFormat,
    pub pretty: bool,
    pub color: bool,
}
