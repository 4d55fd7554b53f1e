//! Services for locating, arming, and running the external disassembler,
//! plus the extractor that structures its output.

pub mod args;
pub mod exec;
pub mod extract;
pub mod invoke;
pub mod locator;
pub mod pipeline;

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while validating or running the external tool.
///
/// Every kind is recoverable by the caller retrying with corrected
/// configuration; nothing in the core treats these as fatal.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The tool path could not be resolved or accessed.
    #[error("Disassembler not found: {0}")]
    NotFound(String),
    /// The path exists but lacks execute permission.
    #[error("Not an executable: {0}")]
    NotExecutable(PathBuf),
    /// The help probe did not match any known disassembler signature.
    #[error("Help output does not identify a supported disassembler: {0}")]
    SignatureMismatch(String),
    /// Non-zero exit or non-empty stderr during the disassembly run.
    #[error("Disassembler invocation failed: {0}")]
    InvocationFailed(String),
    /// The invocation succeeded but produced no usable text.
    #[error("Disassembler produced no output for {0}")]
    EmptyOutput(PathBuf),
}

pub use args::build_args;
pub use exec::{CommandExecutor, CommandOutput, SystemExecutor};
pub use extract::extract;
pub use invoke::{invoke, InvocationRequest};
pub use locator::{validate, ToolDescriptor};
pub use pipeline::{disassemble_file, DisassemblyReport};
