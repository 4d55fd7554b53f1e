//! objscope-core
//!
//! Core library for inspecting compiled binaries through an external
//! disassembler (objdump or a compatible drop-in).
//!
//! This crate defines the symbol model, target-file classification, tool
//! location and validation, argument construction, subprocess invocation,
//! and the line scanner that turns raw disassembly text into a two-level
//! symbol tree (sections containing functions).
//!
//! The goal is to keep all substantive logic here so it is fully testable
//! and reusable from multiple frontends (CLI, editor integrations, etc.).
//! The only OS surfaces are the process seam in [`services::exec`] and the
//! byte probe in [`classify`].

pub mod classify;
pub mod config;
pub mod model;
pub mod services;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
