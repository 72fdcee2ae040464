//! Shared helpers for the end-to-end tests.
#![allow(dead_code)]

use assert_cmd::Command;

/// A `calccli` command with a predictable environment: no colors and no
/// logging configuration leaking in from the caller.
#[allow(deprecated)]
pub fn calccli() -> Command {
    let mut cmd = Command::cargo_bin("calccli").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("CALCCLI_LOG")
        .env_remove("CALCCLI_LOG_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

/// Run `calccli` with `args` and return stdout as a string.
pub fn stdout_of(args: &[&str]) -> String {
    let output = calccli().args(args).output().unwrap();
    String::from_utf8(output.stdout).unwrap()
}
