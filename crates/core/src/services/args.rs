//! Argument construction for the disassembler command line.
//!
//! Pure function of the configuration, so identical config always yields an
//! identical argument vector. Precedence: raw override, then enabled
//! switches in their canonical order, then the `-d -S` baseline.

use crate::config::{DisasmConfig, BASELINE_ARGS};

/// Build the ordered argument vector for one invocation.
///
/// An override that is empty or whitespace-only counts as absent and falls
/// through to flag-derived construction.
pub fn build_args(config: &DisasmConfig) -> Vec<String> {
    if let Some(raw) = config.tool_options.as_deref() {
        let tokens: Vec<String> =
            raw.split_whitespace().map(|t| t.trim().to_string()).collect();
        if !tokens.is_empty() {
            return tokens;
        }
    }

    let flags: Vec<String> =
        config.flags.enabled().map(|name| format!("--{name}")).collect();
    if !flags.is_empty() {
        return flags;
    }

    BASELINE_ARGS.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisasmFlags;

    #[test]
    fn override_wins_over_enabled_flags() {
        let config = DisasmConfig {
            tool_options: Some("-d".to_string()),
            flags: DisasmFlags { demangle: true, ..DisasmFlags::default() },
            ..DisasmConfig::default()
        };
        assert_eq!(build_args(&config), ["-d"]);
    }

    #[test]
    fn whitespace_only_override_counts_as_absent() {
        let config = DisasmConfig {
            tool_options: Some("   ".to_string()),
            ..DisasmConfig::default()
        };
        assert_eq!(build_args(&config), BASELINE_ARGS);
    }
}
