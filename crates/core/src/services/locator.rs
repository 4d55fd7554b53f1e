//! Locating and validating the external disassembler.
//!
//! A configured path (or a PATH lookup when none is configured) is only
//! trusted after an identity probe: the tool's `--help` output must contain
//! one of the known objdump usage signatures. The follow-up `--version`
//! probe is best-effort; identity failure is fatal, version failure is not.

use std::env;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::classify;
use crate::services::exec::CommandExecutor;
use crate::services::ToolError;

/// Binary name looked up on the system search path when no explicit tool
/// path is configured.
const DEFAULT_TOOL_NAME: &str = "objdump";

/// LLVM objdump prints this banner in its `--help` output.
const LLVM_USAGE_SIGNATURE: &str = "objdump [options] <input object files>";

/// A validated disassembler.
///
/// Immutable after construction; re-created whenever the configured path
/// changes. `verified` is true only when the help probe matched a known
/// usage signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub path: PathBuf,
    pub verified: bool,
    pub version: Option<String>,
}

/// Resolve and validate the disassembler, returning a fresh descriptor.
///
/// `configured = None` means "resolve objdump from the system search path".
pub fn validate(
    configured: Option<&Path>,
    executor: &dyn CommandExecutor,
) -> Result<ToolDescriptor, ToolError> {
    let path = match configured {
        Some(p) => p.to_path_buf(),
        None => resolve_from_path()?,
    };

    if !path.is_file() {
        return Err(ToolError::NotFound(path.display().to_string()));
    }
    if !classify::classify(&path).is_executable {
        return Err(ToolError::NotExecutable(path));
    }

    let help = executor
        .execute(&path, &["--help".to_string()])
        .map_err(|e| ToolError::SignatureMismatch(format!("help probe failed to run: {e}")))?;
    let transcript = format!("{}{}", help.stdout, help.stderr);
    if !matches_known_signature(&transcript, &path) {
        let first = transcript.lines().next().unwrap_or("<empty help output>");
        return Err(ToolError::SignatureMismatch(format!(
            "{}: {}",
            path.display(),
            first.trim()
        )));
    }

    let version = probe_version(&path, executor);
    debug!(tool = %path.display(), version = version.as_deref(), "validated disassembler");

    Ok(ToolDescriptor { path, verified: true, version })
}

/// Search `PATH` for the default tool name, equivalent to `which objdump`.
fn resolve_from_path() -> Result<PathBuf, ToolError> {
    let search = env::var_os("PATH")
        .ok_or_else(|| ToolError::NotFound("PATH is not set".to_string()))?;
    for dir in env::split_paths(&search) {
        let candidate = dir.join(tool_file_name());
        if candidate.is_file() && classify::classify(&candidate).is_executable {
            return Ok(candidate);
        }
    }
    Err(ToolError::NotFound(format!("no '{DEFAULT_TOOL_NAME}' on the system search path")))
}

fn tool_file_name() -> String {
    if cfg!(windows) {
        format!("{DEFAULT_TOOL_NAME}.exe")
    } else {
        DEFAULT_TOOL_NAME.to_string()
    }
}

/// The two recognized identities: the LLVM banner, and the GNU `Usage:`
/// line templated on the resolved path.
fn matches_known_signature(help: &str, path: &Path) -> bool {
    if help.contains(LLVM_USAGE_SIGNATURE) {
        return true;
    }
    help.contains(&format!("Usage: {} <option(s)> <file(s)>", path.display()))
}

/// Best-effort `--version` probe; first stdout line or nothing.
fn probe_version(path: &Path, executor: &dyn CommandExecutor) -> Option<String> {
    let output = executor.execute(path, &["--version".to_string()]).ok()?;
    if !output.success {
        return None;
    }
    let first = output.stdout.lines().next()?.trim();
    if first.is_empty() {
        None
    } else {
        Some(first.to_string())
    }
}
