//! Optional elapsed-time measurement around a single operation.

use std::time::{Duration, Instant};

/// Output of [`measure`]: the wrapped value and, when enabled, how long it took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Option<Duration>,
}

/// Run `op`, recording monotonic wall-clock time when `enabled`.
///
/// The clock wraps the call whether it succeeds or fails; callers decide
/// what to report.
pub fn measure<T>(enabled: bool, op: impl FnOnce() -> T) -> Timed<T> {
    if !enabled {
        return Timed {
            value: op(),
            elapsed: None,
        };
    }

    let start = Instant::now();
    let value = op();
    let elapsed = start.elapsed();
    tracing::debug!(elapsed_ms = as_millis_f64(elapsed), "Operation timed");

    Timed {
        value,
        elapsed: Some(elapsed),
    }
}

/// Duration in fractional milliseconds.
#[must_use]
pub fn as_millis_f64(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_records_nothing() {
        let timed = measure(false, || 42);
        assert_eq!(timed.value, 42);
        assert!(timed.elapsed.is_none());
    }

    #[test]
    fn enabled_records_duration() {
        let timed = measure(true, || {
            std::thread::sleep(Duration::from_millis(2));
            "done"
        });
        assert_eq!(timed.value, "done");
        assert!(timed.elapsed.unwrap() >= Duration::from_millis(2));
    }

    #[test]
    fn wraps_failures_too() {
        let timed: Timed<Result<(), &str>> = measure(true, || Err("nope"));
        assert!(timed.value.is_err());
        assert!(timed.elapsed.is_some());
    }

    #[test]
    fn millis_conversion() {
        assert!((as_millis_f64(Duration::from_micros(1500)) - 1.5).abs() < 1e-9);
    }
}
