//! Output data models shared by the human and robot renderers.

use clap::ValueEnum;
use serde::{Serialize, Serializer};
use std::time::Duration;

use crate::core::arithmetic::Operation;
use crate::core::timing::as_millis_f64;
use crate::error::CalcError;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    #[default]
    Human,
    /// JSON output
    Json,
}

/// A completed calculation, ready to render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Calculation {
    pub operation: Operation,
    pub symbol: &'static str,
    pub a: f64,
    pub b: f64,
    pub result: f64,
    #[serde(
        rename = "elapsed_ms",
        serialize_with = "serialize_millis",
        skip_serializing_if = "Option::is_none"
    )]
    pub elapsed: Option<Duration>,
}

#[allow(clippy::ref_option)]
fn serialize_millis<S: Serializer>(elapsed: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
    match elapsed {
        Some(elapsed) => s.serialize_f64(as_millis_f64(*elapsed)),
        None => s.serialize_none(),
    }
}

impl Calculation {
    #[must_use]
    pub fn new(operation: Operation, a: f64, b: f64, result: f64, elapsed: Option<Duration>) -> Self {
        Self {
            operation,
            symbol: operation.symbol(),
            a,
            b,
            result,
            elapsed,
        }
    }
}

/// Robot-mode error envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub kind: &'static str,
    pub message: String,
    pub exit_code: i32,
}

impl ErrorOutput {
    #[must_use]
    pub fn from_error(error: &CalcError) -> Self {
        Self {
            error: ErrorDetail {
                code: error.error_code(),
                kind: error.kind(),
                message: error.to_string(),
                exit_code: error.exit_code().into(),
            },
        }
    }
}
