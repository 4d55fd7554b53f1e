//! End-to-end disassembly pipeline.
//!
//! Ties the classifier, locator, argument builder, invoker, and extractor
//! together for one target file. The frontend decides what to do with the
//! classification verdict; the pipeline itself only refuses empty output.

use std::path::Path;

use serde::Serialize;

use crate::classify::{self, Classification};
use crate::config::DisasmConfig;
use crate::model::SymbolTree;
use crate::services::exec::CommandExecutor;
use crate::services::invoke::{invoke, InvocationRequest};
use crate::services::locator::{validate, ToolDescriptor};
use crate::services::{args, extract, ToolError};

/// Everything produced by one disassembly run.
#[derive(Debug, Clone, Serialize)]
pub struct DisassemblyReport {
    pub classification: Classification,
    pub tool: ToolDescriptor,
    pub args: Vec<String>,
    /// Raw disassembly text, exactly as printed by the tool.
    pub text: String,
    pub symbols: SymbolTree,
}

/// Disassemble `target` with the configured tool and structure the output.
///
/// The classification verdict is carried in the report rather than enforced
/// here; a caller that wants a hard gate checks `is_object_like` first.
pub fn disassemble_file(
    config: &DisasmConfig,
    target: &Path,
    executor: &dyn CommandExecutor,
) -> Result<DisassemblyReport, ToolError> {
    let classification = classify::classify(target);
    let tool = validate(config.tool_path.as_deref(), executor)?;
    let args = args::build_args(config);

    let request = InvocationRequest {
        target: target.to_path_buf(),
        tool_path: tool.path.clone(),
        args: args.clone(),
    };
    let text = invoke(&request, executor)?;
    if text.trim().is_empty() {
        return Err(ToolError::EmptyOutput(target.to_path_buf()));
    }

    let symbols = extract::extract(&text);
    Ok(DisassemblyReport { classification, tool, args, text, symbols })
}
