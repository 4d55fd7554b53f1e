//! One-shot disassembler invocation.

use std::path::PathBuf;

use tracing::debug;

use crate::services::exec::CommandExecutor;
use crate::services::ToolError;

/// Everything needed for one run: `<tool> <args...> <target>`.
///
/// Built fresh per invocation; nothing here is shared or reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub target: PathBuf,
    pub tool_path: PathBuf,
    pub args: Vec<String>,
}

impl InvocationRequest {
    /// Full argument list including the trailing target path.
    fn full_args(&self) -> Vec<String> {
        let mut args = self.args.clone();
        args.push(self.target.display().to_string());
        args
    }
}

/// Run the disassembler once and return its stdout.
///
/// Non-empty stderr or an unsuccessful exit maps to
/// [`ToolError::InvocationFailed`] with the stderr text (or the exit status
/// when stderr is silent) as the detail. Never retries.
pub fn invoke(
    request: &InvocationRequest,
    executor: &dyn CommandExecutor,
) -> Result<String, ToolError> {
    let args = request.full_args();
    debug!(tool = %request.tool_path.display(), args = ?args, "running disassembler");

    let output = executor
        .execute(&request.tool_path, &args)
        .map_err(|e| ToolError::InvocationFailed(format!("failed to spawn disassembler: {e}")))?;

    if !output.stderr.trim().is_empty() {
        return Err(ToolError::InvocationFailed(output.stderr.trim().to_string()));
    }
    if !output.success {
        return Err(ToolError::InvocationFailed(
            "disassembler exited with a non-zero status".to_string(),
        ));
    }
    Ok(output.stdout)
}
