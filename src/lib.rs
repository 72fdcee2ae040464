//! calccli - Simple calculator CLI
//!
//! Adds, subtracts, multiplies and divides two numbers, with an optional
//! elapsed-time report.

#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod core;
pub mod error;
pub mod render;
pub mod util;

pub use error::{CalcError, ExitCode, Result};
