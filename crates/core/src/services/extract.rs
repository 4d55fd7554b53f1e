//! Symbol extraction from raw disassembly text.
//!
//! A single linear pass classifies each line as a section header, a
//! function header, or noise. The scanner has two states: outside any
//! section, and inside the most recently seen section. Function headers
//! attach to the current section; with no section seen yet they are
//! promoted to root entries.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Symbol, SymbolTree};

// ELF-style header: `Disassembly of section .text:`
static ELF_SECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Disassembly of section \.([^\s:]+):$").unwrap());

// Mach-O-style header: `Disassembly of section __TEXT,__text:`
static MACHO_SECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Disassembly of section __[A-Za-z_]+,__([^\s:]+):$").unwrap());

// Function header: hex address, angle-bracketed name, colon.
static FUNCTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-f]+ <(.+)>:$").unwrap());

/// Scan `text` and build the section/function tree.
///
/// Total over arbitrary input: unrecognized lines emit nothing, and text
/// with no matches yields an empty tree.
pub fn extract(text: &str) -> SymbolTree {
    let mut tree = SymbolTree::default();
    // Index into `tree.roots` of the current section, if inside one.
    let mut current: Option<usize> = None;

    for (line_no, raw) in text.lines().enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if let Some((name, start, end)) = capture_section(line) {
            tree.roots.push(Symbol::section(name, line_no, start, end));
            current = Some(tree.roots.len() - 1);
            continue;
        }

        if let Some(m) = FUNCTION_RE.captures(line).and_then(|caps| caps.get(1)) {
            let symbol = Symbol::function(m.as_str(), line_no, m.start(), m.end());
            match current {
                Some(idx) => tree.roots[idx].children.push(symbol),
                // No section seen yet; keep the symbol at the root.
                None => tree.roots.push(symbol),
            }
        }
    }

    tree
}

fn capture_section(line: &str) -> Option<(&str, usize, usize)> {
    let caps = ELF_SECTION_RE.captures(line).or_else(|| MACHO_SECTION_RE.captures(line))?;
    let m = caps.get(1)?;
    Some((m.as_str(), m.start(), m.end()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_name_excludes_the_leading_dot() {
        let tree = extract("Disassembly of section .text:\n");
        assert_eq!(tree.roots.len(), 1);
        assert_eq!(tree.roots[0].name, "text");
    }

    #[test]
    fn macho_section_name_excludes_segment_prefix() {
        let tree = extract("Disassembly of section __TEXT,__stubs:\n");
        assert_eq!(tree.roots.len(), 1);
        assert_eq!(tree.roots[0].name, "stubs");
    }

    #[test]
    fn uppercase_hex_addresses_are_not_function_headers() {
        let tree = extract("00000000000011A0 <main>:\n");
        assert!(tree.is_empty());
    }
}
