use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;

use objscope::{canonicalize_or_current, sha256_file};
use objscope_core::classify::{classify, Classification};
use objscope_core::config::DisasmConfig;
use objscope_core::model::{Symbol, SymbolKind, SymbolTree};
use objscope_core::services::{self, SystemExecutor};

/// Disassembly outline CLI.
///
/// This CLI is a thin wrapper around `objscope-core` (exposed in code as
/// `objscope_core`). All substantive logic lives in the library so it can
/// be tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "objscope",
    version,
    about = "Disassemble binaries with an external tool and outline their symbols",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Disassemble a binary and print the text plus its symbol outline.
    ///
    /// The target must look like an object file (ELF or legacy COFF magic)
    /// unless `--no-classify-gate` is passed.
    Disassemble {
        /// Path to the binary or object file to disassemble.
        #[arg(long)]
        file: String,

        /// Explicit disassembler path. Defaults to resolving `objdump`
        /// from the system search path.
        #[arg(long)]
        tool: Option<String>,

        /// Raw option override, space-delimited (e.g., "-d --demangle").
        /// Replaces flag-derived argument construction entirely.
        #[arg(long, allow_hyphen_values = true)]
        options: Option<String>,

        /// Optional JSON config file with tool path, option override, and
        /// boolean switches.
        #[arg(long)]
        config: Option<String>,

        /// Emit a JSON report instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Disassemble even if the file does not classify as object-like.
        #[arg(long, default_value_t = false)]
        no_classify_gate: bool,
    },

    /// Extract a symbol outline from saved disassembly text.
    Outline {
        /// Path to a file holding disassembly text.
        #[arg(long)]
        file: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Validate the configured disassembler and report its identity.
    CheckTool {
        /// Explicit disassembler path. Defaults to resolving `objdump`
        /// from the system search path.
        #[arg(long)]
        tool: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Classify a file by magic bytes and permission bits.
    Classify {
        /// Path to the candidate file.
        #[arg(long)]
        file: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Diagnostics (resolved tool path, command lines) go to stderr behind
    // RUST_LOG; user-facing output stays on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Disassemble { file, tool, options, config, json, no_classify_gate } => {
            disassemble_command(&file, tool, options, config, json, no_classify_gate)
        }
        Command::Outline { file, json } => outline_command(&file, json),
        Command::CheckTool { tool, json } => check_tool_command(tool, json),
        Command::Classify { file, json } => classify_command(&file, json),
    }
}

/// JSON report emitted by `disassemble --json`.
#[derive(Debug, Serialize)]
struct DisassembleReport<'a> {
    generated_at: String,
    target: String,
    target_sha256: String,
    classification: Classification,
    tool: &'a services::ToolDescriptor,
    args: &'a [String],
    symbols: &'a SymbolTree,
    text: &'a str,
}

fn disassemble_command(
    file: &str,
    tool: Option<String>,
    options: Option<String>,
    config_path: Option<String>,
    json: bool,
    no_classify_gate: bool,
) -> Result<()> {
    let target = canonicalize_or_current(file)?;
    if !target.is_file() {
        return Err(anyhow!("Target does not exist: {}", target.display()));
    }

    // Settings-file values first, then CLI overrides on top.
    let mut config = match config_path {
        Some(p) => load_config(&p)?,
        None => DisasmConfig::default(),
    };
    if let Some(tool) = tool {
        config.tool_path = Some(PathBuf::from(tool));
    }
    if let Some(options) = options {
        config.tool_options = Some(options);
    }

    let verdict = classify(&target);
    if !verdict.is_object_like && !no_classify_gate {
        return Err(anyhow!(
            "{} does not look like an object file (no ELF/COFF magic); \
             pass --no-classify-gate to disassemble it anyway",
            target.display()
        ));
    }

    let report = services::disassemble_file(&config, &target, &SystemExecutor)
        .with_context(|| format!("Disassembly of {} failed", target.display()))?;

    if json {
        let out = DisassembleReport {
            generated_at: Utc::now().to_rfc3339(),
            target: target.display().to_string(),
            target_sha256: sha256_file(&target)?,
            classification: report.classification,
            tool: &report.tool,
            args: &report.args,
            symbols: &report.symbols,
            text: &report.text,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "Tool: {} ({})",
        report.tool.path.display(),
        report.tool.version.as_deref().unwrap_or("version unknown")
    );
    println!("Args: {}", report.args.join(" "));
    print_classification(&report.classification);
    println!();
    print_outline(&report.symbols);
    println!();
    print!("{}", report.text);
    Ok(())
}

fn outline_command(file: &str, json: bool) -> Result<()> {
    let path = canonicalize_or_current(file)?;
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read disassembly text: {}", path.display()))?;

    let tree = services::extract(&text);
    if json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
        return Ok(());
    }
    print_outline(&tree);
    Ok(())
}

fn check_tool_command(tool: Option<String>, json: bool) -> Result<()> {
    let configured = tool.map(PathBuf::from);
    let descriptor = services::validate(configured.as_deref(), &SystemExecutor)
        .map_err(|e| anyhow!("Tool validation failed: {e}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
        return Ok(());
    }
    println!("Tool: {}", descriptor.path.display());
    println!("Verified: {}", descriptor.verified);
    println!("Version: {}", descriptor.version.as_deref().unwrap_or("(unavailable)"));
    Ok(())
}

fn classify_command(file: &str, json: bool) -> Result<()> {
    let path = canonicalize_or_current(file)?;
    let verdict = classify(&path);

    if json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
        return Ok(());
    }
    println!("File: {}", path.display());
    print_classification(&verdict);
    Ok(())
}

fn load_config(path: &str) -> Result<DisasmConfig> {
    let resolved = canonicalize_or_current(path)?;
    let body = fs::read_to_string(&resolved)
        .with_context(|| format!("Failed to read config: {}", resolved.display()))?;
    DisasmConfig::from_json(&body)
        .with_context(|| format!("Failed to parse config: {}", resolved.display()))
}

fn print_classification(verdict: &Classification) {
    println!("Object-like: {}", verdict.is_object_like);
    println!("Executable: {}", verdict.is_executable);
}

/// Human-readable outline: sections at the left margin, functions indented,
/// 1-based line numbers for display.
fn print_outline(tree: &SymbolTree) {
    if tree.is_empty() {
        println!("Symbols: (none)");
        return;
    }
    println!("Symbols:");
    for root in &tree.roots {
        print_symbol(root, 0);
        for child in &root.children {
            print_symbol(child, 1);
        }
    }
}

fn print_symbol(symbol: &Symbol, depth: usize) {
    let label = match symbol.kind {
        SymbolKind::Section => "section",
        SymbolKind::Function => "fn",
    };
    println!("{}- {} {} (line {})", "  ".repeat(depth), label, symbol.name, symbol.start_line + 1);
}
