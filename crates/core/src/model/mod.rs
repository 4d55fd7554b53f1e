//! Symbol model for disassembly outlines.
//!
//! The extractor produces a two-level tree: `Section` symbols at the root,
//! each owning the `Function` symbols that appear under its header in the
//! disassembly text. Functions seen before any section header are promoted
//! to root entries.

use serde::{Deserialize, Serialize};

/// Kind of a symbol found in disassembly text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    /// A named region introduced by a `Disassembly of section ...:` header.
    Section,
    /// A subroutine boundary introduced by an `<addr> <name>:` header.
    Function,
}

/// A named symbol with its position in the source text.
///
/// `start_line` is the 0-based line the header appeared on; `start_column`
/// and `end_column` are byte offsets of the captured name within that line.
/// Only `Section` symbols carry children; `Function` symbols are leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub start_line: usize,
    pub start_column: usize,
    pub end_column: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Symbol>,
}

impl Symbol {
    pub fn section(name: impl Into<String>, line: usize, start: usize, end: usize) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Section,
            start_line: line,
            start_column: start,
            end_column: end,
            children: Vec::new(),
        }
    }

    pub fn function(name: impl Into<String>, line: usize, start: usize, end: usize) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Function,
            start_line: line,
            start_column: start,
            end_column: end,
            children: Vec::new(),
        }
    }
}

/// Ordered collection of root symbols, in order of appearance in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolTree {
    pub roots: Vec<Symbol>,
}

impl SymbolTree {
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of symbols across both levels.
    pub fn len(&self) -> usize {
        self.roots.iter().map(|s| 1 + s.children.len()).sum()
    }
}
