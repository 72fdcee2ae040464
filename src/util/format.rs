//! Number formatting utilities.

use std::time::Duration;

use crate::core::timing::as_millis_f64;

/// Format an operand or result for display.
///
/// Integral values keep a trailing `.0`, other values use the shortest
/// round-trip representation, and magnitudes at or above `1e16` or below
/// `1e-4` switch to scientific notation with a signed two-digit exponent.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Debug already picks the same decimal/scientific cutoffs.
    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = exponent
                .strip_prefix('-')
                .map_or(("+", exponent), |digits| ("-", digits));
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

/// Format an elapsed duration in milliseconds.
#[must_use]
pub fn format_millis(elapsed: Duration) -> String {
    format!("{:.3} ms", as_millis_f64(elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_keep_decimal_point() {
        assert_eq!(format_number(2.0), "2.0");
        assert_eq!(format_number(-20.0), "-20.0");
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(-0.0), "-0.0");
    }

    #[test]
    fn fractions_use_shortest_repr() {
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn large_and_small_use_scientific() {
        assert_eq!(format_number(1e16), "1e+16");
        assert_eq!(format_number(1.5e300), "1.5e+300");
        assert_eq!(format_number(1e-5), "1e-05");
        assert_eq!(format_number(-2.5e-7), "-2.5e-07");
        assert_eq!(format_number(1e15), "1000000000000000.0");
        assert_eq!(format_number(0.0001), "0.0001");
    }

    #[test]
    fn non_finite() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(f64::NAN), "nan");
    }

    #[test]
    fn millis() {
        assert_eq!(format_millis(Duration::from_micros(1500)), "1.500 ms");
        assert_eq!(format_millis(Duration::ZERO), "0.000 ms");
    }
}
