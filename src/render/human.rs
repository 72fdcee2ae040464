//! Human-readable terminal output.

use colored::Colorize;
use std::time::Duration;

use crate::core::models::Calculation;
use crate::util::{format_millis, format_number};

/// Render `"<a> <op> <b> = <result>"`.
///
/// With color the left-hand side is bold and the result yellow.
#[must_use]
pub fn render_calculation(calc: &Calculation, color: bool) -> String {
    let lhs = format!(
        "{} {} {} =",
        format_number(calc.a),
        calc.symbol,
        format_number(calc.b)
    );
    let result = format_number(calc.result);

    if color {
        format!("{} {}", lhs.bold(), result.yellow())
    } else {
        format!("{lhs} {result}")
    }
}

/// Render the timing line shown after a result.
#[must_use]
pub fn render_elapsed(elapsed: Duration, color: bool) -> String {
    let line = format!("Elapsed: {}", format_millis(elapsed));
    if color { line.dimmed().to_string() } else { line }
}
