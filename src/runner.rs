use crate::error::{SweepError, SwResult};
use std::process::{Command, Stdio};
use tracing::debug;

/// Capability to run one external command to completion and hand back its
/// captured stdout as lines. The sweep only ever talks to the outside world
/// through this trait, so tests can substitute canned output.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> SwResult<Vec<String>>;
}

/// Production runner: blocking `std::process::Command`, stdout captured,
/// stderr passed through, no timeout. Exit status is not interpreted; a
/// step that produced unusable output fails later, at its parse site.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, program: &str, args: &[String]) -> SwResult<Vec<String>> {
        debug!(program, ?args, "spawning external command");

        let output = Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| SweepError::Command(format!("Could not run '{}': {}", program, e)))?;

        let text = String::from_utf8(output.stdout).map_err(|e| {
            SweepError::Command(format!("'{}' produced non-UTF-8 output: {}", program, e))
        })?;

        debug!(program, status = %output.status, "external command finished");

        Ok(text.lines().map(str::to_string).collect())
    }
}
