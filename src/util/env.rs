//! Environment detection utilities.

use std::io::IsTerminal;

/// Check if stdout is a TTY.
#[must_use]
pub fn stdout_is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Check if stderr is a TTY.
#[must_use]
pub fn stderr_is_tty() -> bool {
    std::io::stderr().is_terminal()
}

/// Check `NO_COLOR` and `TERM=dumb`.
fn env_allows_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    !std::env::var("TERM").is_ok_and(|t| t == "dumb")
}

/// Check if color should be enabled for stdout.
#[must_use]
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && env_allows_color() && stdout_is_tty()
}

/// Check if color should be enabled for stderr.
#[must_use]
pub fn should_use_color_on_stderr(no_color_flag: bool) -> bool {
    !no_color_flag && env_allows_color() && stderr_is_tty()
}
