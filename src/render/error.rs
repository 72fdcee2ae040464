//! Error rendering for calccli.

use colored::Colorize;

use crate::core::models::OutputFormat;
use crate::error::CalcError;
use crate::render::robot;

/// Render an error for stderr.
///
/// Human format yields `Error: <message>` (the prefix bold red when `color`
/// is set); JSON format yields the robot error envelope.
#[must_use]
pub fn render_error(error: &CalcError, format: OutputFormat, color: bool, pretty: bool) -> String {
    match format {
        OutputFormat::Json => {
            robot::render_error_json(error, pretty).unwrap_or_else(|_| render_simple(error))
        }
        OutputFormat::Human if color => format!("{} {error}", "Error:".red().bold()),
        OutputFormat::Human => render_simple(error),
    }
}

/// Plain `Error: <message>` line.
#[must_use]
pub fn render_simple(error: &CalcError) -> String {
    format!("Error: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divide_by_zero_plain() {
        assert_eq!(
            render_error(&CalcError::DivideByZero, OutputFormat::Human, false, false),
            "Error: Cannot divide by zero."
        );
    }

    #[test]
    fn divide_by_zero_colored() {
        colored::control::set_override(true);
        let rendered = render_error(&CalcError::DivideByZero, OutputFormat::Human, true, false);
        assert!(rendered.contains("\x1b["));
        assert!(rendered.ends_with("Cannot divide by zero."));
    }

    #[test]
    fn json_envelope() {
        let rendered = render_error(&CalcError::DivideByZero, OutputFormat::Json, true, false);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["error"]["kind"], "divide_by_zero");
    }
}
