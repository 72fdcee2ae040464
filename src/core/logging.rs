//! Diagnostic logging to stderr.
//!
//! Stdout is reserved for calculator output; every log event goes to stderr.
//! Precedence for the level: `--log-level`, then `CALCCLI_LOG`, then the
//! default (`error`, or `debug` with `--verbose`). `RUST_LOG` replaces the
//! whole filter when set.

use clap::ValueEnum;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::Layered};

const LOG_LEVEL_ENV: &str = "CALCCLI_LOG";
const LOG_FORMAT_ENV: &str = "CALCCLI_LOG_FORMAT";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines without timestamps
    #[default]
    Human,
    /// One JSON object per event
    Json,
    /// Terse single lines with targets
    Compact,
}

/// Minimum level of events that are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    #[value(alias = "verbose")]
    Debug,
    Info,
    #[value(alias = "warning")]
    Warn,
    #[default]
    Error,
}

impl LogLevel {
    /// Directive used in the `calccli=<level>` filter.
    #[must_use]
    pub const fn as_filter(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Parse a case-insensitive level or format name; blank means unset.
fn parse_setting<T: ValueEnum>(raw: Option<&str>) -> Option<T> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    T::from_str(trimmed, true).ok()
}

/// Level from `CALCCLI_LOG`, if set to a known level.
#[must_use]
pub fn log_level_from_env() -> Option<LogLevel> {
    parse_setting(std::env::var(LOG_LEVEL_ENV).ok().as_deref())
}

/// Format from `CALCCLI_LOG_FORMAT`, if set to a known format.
#[must_use]
pub fn log_format_from_env() -> Option<LogFormat> {
    parse_setting(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
}

type FormatLayer = Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync>;

/// Install the global subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(level: LogLevel, format: LogFormat, verbose: bool) {
    let level = if verbose && level == LogLevel::Error {
        LogLevel::Debug
    } else {
        level
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("calccli={}", level.as_filter())));

    let base = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let layer: FormatLayer = match format {
        LogFormat::Json => base.json().boxed(),
        LogFormat::Compact => base.compact().with_target(true).boxed(),
        LogFormat::Human => base.with_target(false).without_time().boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_and_aliases() {
        assert_eq!(parse_setting(Some("trace")), Some(LogLevel::Trace));
        assert_eq!(parse_setting(Some("VERBOSE")), Some(LogLevel::Debug));
        assert_eq!(parse_setting(Some(" warning ")), Some(LogLevel::Warn));
        assert_eq!(parse_setting::<LogLevel>(Some("loud")), None);
    }

    #[test]
    fn blank_or_missing_is_unset() {
        assert_eq!(parse_setting::<LogLevel>(Some("   ")), None);
        assert_eq!(parse_setting::<LogFormat>(None), None);
    }

    #[test]
    fn format_names() {
        assert_eq!(parse_setting(Some("JSON")), Some(LogFormat::Json));
        assert_eq!(parse_setting(Some("compact")), Some(LogFormat::Compact));
        assert_eq!(parse_setting::<LogFormat>(Some("fancy")), None);
    }

    #[test]
    fn filter_directives() {
        assert_eq!(LogLevel::default().as_filter(), "error");
        assert_eq!(LogLevel::Warn.as_filter(), "warn");
    }
}
