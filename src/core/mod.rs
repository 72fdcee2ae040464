//! Core calculator logic.

pub mod arithmetic;
pub mod invocation;
pub mod logging;
pub mod models;
pub mod timing;

pub use arithmetic::Operation;
pub use invocation::Invocation;
