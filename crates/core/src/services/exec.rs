//! Process seam: the only place that touches OS process primitives.
//!
//! Locator probes and disassembly runs both go through [`CommandExecutor`],
//! so tests can substitute a double instead of needing objdump installed.

use std::io;
use std::path::Path;
use std::process::Command;

/// Captured outcome of one subprocess run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the process exited with status zero.
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self { success: true, stdout: stdout.into(), stderr: String::new() }
    }

    pub fn failed(stderr: impl Into<String>) -> Self {
        Self { success: false, stdout: String::new(), stderr: stderr.into() }
    }
}

/// Runs an external program and captures both streams.
pub trait CommandExecutor: Send + Sync {
    fn execute(&self, program: &Path, args: &[String]) -> io::Result<CommandOutput>;
}

/// Executor backed by `std::process::Command`.
///
/// Output streams are captured fully and decoded lossily; disassembly text
/// is expected to be UTF-8 but symbol names occasionally are not.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl CommandExecutor for SystemExecutor {
    fn execute(&self, program: &Path, args: &[String]) -> io::Result<CommandOutput> {
        let output = Command::new(program).args(args).output()?;
        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
