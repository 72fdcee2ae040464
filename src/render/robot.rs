//! Robot-mode output (JSON).
//!
//! Provides stable, machine-readable output for scripts.

use crate::core::models::{Calculation, ErrorOutput};
use crate::error::{CalcError, Result};

/// Render any serializable output as JSON.
///
/// # Errors
///
/// Returns [`CalcError::Json`] if serialization fails.
pub fn render_json<T: serde::Serialize>(output: &T) -> Result<String> {
    Ok(serde_json::to_string(output)?)
}

/// Render any serializable output as pretty JSON.
///
/// # Errors
///
/// Returns [`CalcError::Json`] if serialization fails.
pub fn render_json_pretty<T: serde::Serialize>(output: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(output)?)
}

/// Render a calculation as JSON.
///
/// # Errors
///
/// Returns [`CalcError::Json`] if serialization fails.
pub fn render_calculation_json(calc: &Calculation, pretty: bool) -> Result<String> {
    if pretty {
        render_json_pretty(calc)
    } else {
        render_json(calc)
    }
}

/// Render an error envelope as JSON.
///
/// # Errors
///
/// Returns [`CalcError::Json`] if serialization fails.
pub fn render_error_json(error: &CalcError, pretty: bool) -> Result<String> {
    let output = ErrorOutput::from_error(error);
    if pretty {
        render_json_pretty(&output)
    } else {
        render_json(&output)
    }
}
