//! Declarative configuration for the disassembler invocation.
//!
//! Mirrors a settings store: an optional explicit tool path, an optional raw
//! option override, and one boolean per recognized objdump long switch. The
//! whole structure deserializes from JSON with every field optional, so a
//! partial config file is valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Baseline argument vector used when neither an override nor any switch is
/// configured: disassemble and interleave source.
pub const BASELINE_ARGS: [&str; 2] = ["-d", "-S"];

/// One boolean per recognized objdump long-form switch.
///
/// The order of the fields below is the canonical enumeration order used by
/// the argument builder; see [`DisasmFlags::enabled`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DisasmFlags {
    pub archive_headers: bool,
    pub target: bool,
    pub demangle: bool,
    pub disassemble: bool,
    pub disassemble_all: bool,
    pub disassemble_zeroes: bool,
    pub file_headers: bool,
    pub file_offsets: bool,
    pub file_start_context: bool,
    pub debugging: bool,
    pub debugging_tags: bool,
    pub section_headers: bool,
    pub info: bool,
    pub line_numbers: bool,
    pub source: bool,
    pub private_headers: bool,
    pub reloc: bool,
    pub dynamic_reloc: bool,
    pub full_contents: bool,
    pub decompress: bool,
    pub process_links: bool,
    pub stabs: bool,
    pub syms: bool,
    pub dynamic_syms: bool,
    pub all_headers: bool,
    pub wide: bool,
    pub no_addresses: bool,
    pub prefix_addresses: bool,
    pub show_raw_insn: bool,
    pub show_all_symbols: bool,
    pub special_syms: bool,
}

/// Fixed enumeration order for flag emission. Output must never depend on
/// any map iteration order, only on this table.
static FLAG_TABLE: [(&str, fn(&DisasmFlags) -> bool); 31] = [
    ("archive-headers", |f| f.archive_headers),
    ("target", |f| f.target),
    ("demangle", |f| f.demangle),
    ("disassemble", |f| f.disassemble),
    ("disassemble-all", |f| f.disassemble_all),
    ("disassemble-zeroes", |f| f.disassemble_zeroes),
    ("file-headers", |f| f.file_headers),
    ("file-offsets", |f| f.file_offsets),
    ("file-start-context", |f| f.file_start_context),
    ("debugging", |f| f.debugging),
    ("debugging-tags", |f| f.debugging_tags),
    ("section-headers", |f| f.section_headers),
    ("info", |f| f.info),
    ("line-numbers", |f| f.line_numbers),
    ("source", |f| f.source),
    ("private-headers", |f| f.private_headers),
    ("reloc", |f| f.reloc),
    ("dynamic-reloc", |f| f.dynamic_reloc),
    ("full-contents", |f| f.full_contents),
    ("decompress", |f| f.decompress),
    ("process-links", |f| f.process_links),
    ("stabs", |f| f.stabs),
    ("syms", |f| f.syms),
    ("dynamic-syms", |f| f.dynamic_syms),
    ("all-headers", |f| f.all_headers),
    ("wide", |f| f.wide),
    ("no-addresses", |f| f.no_addresses),
    ("prefix-addresses", |f| f.prefix_addresses),
    ("show-raw-insn", |f| f.show_raw_insn),
    ("show-all-symbols", |f| f.show_all_symbols),
    ("special-syms", |f| f.special_syms),
];

impl DisasmFlags {
    /// Names of the enabled switches, in canonical enumeration order.
    pub fn enabled(&self) -> impl Iterator<Item = &'static str> + '_ {
        FLAG_TABLE.iter().filter(move |(_, get)| get(self)).map(|(name, _)| *name)
    }
}

/// Configuration consumed by the locator and argument builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DisasmConfig {
    /// Explicit disassembler path. `None` means "resolve objdump from the
    /// system search path".
    pub tool_path: Option<PathBuf>,
    /// Raw option override, space-delimited. A non-empty value replaces
    /// flag-derived argument construction entirely; empty or
    /// whitespace-only values are treated as absent.
    pub tool_options: Option<String>,
    pub flags: DisasmFlags,
}

impl DisasmConfig {
    /// Parse a config from its JSON representation.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_config_fills_defaults() {
        let config = DisasmConfig::from_json(r#"{"tool-options": "-d"}"#).expect("parse");
        assert_eq!(config.tool_options.as_deref(), Some("-d"));
        assert!(config.tool_path.is_none());
        assert_eq!(config.flags, DisasmFlags::default());
    }

    #[test]
    fn flag_enumeration_follows_declared_order() {
        let flags = DisasmFlags {
            special_syms: true,
            archive_headers: true,
            source: true,
            ..DisasmFlags::default()
        };
        let names: Vec<&str> = flags.enabled().collect();
        assert_eq!(names, ["archive-headers", "source", "special-syms"]);
    }
}
