//! Error types for calccli.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//!
//! ## Error Taxonomy
//!
//! - **Domain**: arithmetic failures (dividing by zero)
//! - **Usage**: malformed or missing command-line input
//! - **Internal**: I/O or serialization failures while writing output
//!
//! Each error has a stable error code (e.g., `CALC-D001`) for programmatic handling.

use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// High-level error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Arithmetic failures.
    Domain,
    /// Malformed or missing command-line input.
    Usage,
    /// Output failures.
    Internal,
}

impl ErrorCategory {
    /// Returns a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Domain => "Domain error",
            Self::Usage => "Usage error",
            Self::Internal => "Internal error",
        }
    }

    /// Returns a short code prefix for this category.
    #[must_use]
    pub const fn code_prefix(&self) -> &'static str {
        match self {
            Self::Domain => "D",
            Self::Usage => "U",
            Self::Internal => "X",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for failed runs; success uses `std::process::ExitCode::SUCCESS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Domain failure or unexpected error
    GeneralError = 1,
    /// Invalid or missing arguments (matches clap's usage exit status)
    Usage = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as Self
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}

/// Main error type for calccli operations.
#[derive(Error, Debug)]
pub enum CalcError {
    /// The divisor of a `div` command was zero.
    #[error("Cannot divide by zero.")]
    DivideByZero,

    /// An argument could not be interpreted.
    #[error("{0}")]
    InvalidArgument(String),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalcError {
    /// Map error to process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::InvalidArgument(_) => ExitCode::Usage,
            Self::DivideByZero | Self::Io(_) | Self::Json(_) => ExitCode::GeneralError,
        }
    }

    /// Returns the error category.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::DivideByZero => ErrorCategory::Domain,
            Self::InvalidArgument(_) => ErrorCategory::Usage,
            Self::Io(_) | Self::Json(_) => ErrorCategory::Internal,
        }
    }

    /// Returns a stable error code for programmatic handling.
    ///
    /// Format: `CALC-{category}{number}`.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::DivideByZero => "CALC-D001",
            Self::InvalidArgument(_) => "CALC-U001",
            Self::Io(_) => "CALC-X001",
            Self::Json(_) => "CALC-X002",
        }
    }

    /// Returns a snake_case identifier for the error kind, used in robot output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DivideByZero => "divide_by_zero",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
        }
    }
}

/// Result type alias for calccli operations.
pub type Result<T> = std::result::Result<T, CalcError>;
