//! Arithmetic command implementation.

use std::io::Write;

use crate::core::invocation::Invocation;
use crate::core::models::Calculation;
use crate::core::timing;
use crate::error::Result;
use crate::render;

/// Execute one arithmetic command and write the rendered result to `out`.
///
/// A domain failure (dividing by zero) is returned without writing anything;
/// no timing line is emitted on that path.
///
/// # Errors
///
/// Returns [`crate::CalcError::DivideByZero`] for a zero divisor, or an
/// I/O / JSON error if output cannot be produced.
pub fn execute(invocation: &Invocation, out: &mut impl Write) -> Result<()> {
    let Invocation {
        operation, a, b, ..
    } = *invocation;

    tracing::debug!(%operation, a, b, timed = invocation.show_timing, "Executing");

    let timed = timing::measure(invocation.show_timing, || operation.apply(a, b));
    let result = timed.value.inspect_err(|e| {
        tracing::warn!(%operation, a, b, code = e.error_code(), "{e}");
    })?;

    tracing::debug!(%operation, result, "Computed");

    let calc = Calculation::new(operation, a, b, result, timed.elapsed);
    let output = render::render_calculation(
        &calc,
        invocation.format,
        invocation.pretty,
        invocation.color,
    )?;
    writeln!(out, "{output}")?;

    Ok(())
}
