//! Output rendering for human and robot modes.

pub mod error;
pub mod human;
pub mod robot;

use crate::core::models::{Calculation, OutputFormat};
use crate::error::Result;

/// Render a calculation, including the timing line when it was timed.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_calculation(
    calc: &Calculation,
    format: OutputFormat,
    pretty: bool,
    color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => {
            let mut output = human::render_calculation(calc, color);
            if let Some(elapsed) = calc.elapsed {
                output.push('\n');
                output.push_str(&human::render_elapsed(elapsed, color));
            }
            Ok(output)
        }
        OutputFormat::Json => robot::render_calculation_json(calc, pretty),
    }
}
