//! gddoc — transpile Godot-style documentation markup into resolved,
//! cross-referenced doc comments.
//!
//! Reads an extension API description (the symbol table source) and a
//! directory of per-class documentation records, then emits one comment
//! file per documented symbol:
//!
//! - `gddoc --api extension_api.json --docs doc/` prints to stdout
//! - `gddoc --api extension_api.json --docs doc/ -o out/ "Node*"` writes
//!   `out/<Name>.txt` for every matching symbol

mod api;
mod emit;
mod loader;
mod markup;
mod model;
mod naming;
mod resolve;
mod symbols;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use symbols::{SymbolKind, SymbolTable};

#[derive(Parser)]
#[command(
    name = "gddoc",
    about = "Generate resolved documentation comments from a Godot-style API description"
)]
struct Cli {
    /// Extension API description (JSON)
    #[arg(long)]
    api: PathBuf,

    /// Directory holding per-symbol documentation records (classes/*.json)
    #[arg(long)]
    docs: PathBuf,

    /// Output directory. If omitted, writes to stdout.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Symbol name patterns (glob syntax). If omitted, all symbols.
    patterns: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let api = api::load(&cli.api)?;
    let table = SymbolTable::build(&api);
    let patterns = compile_patterns(&cli.patterns)?;

    let mut names: Vec<&str> = table
        .names()
        .filter(|name| matches_any(&patterns, name))
        .collect();
    // Deterministic output order.
    names.sort_unstable();

    if let Some(dir) = &cli.output {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
    }

    for name in names {
        // Undocumented symbols produce no output and no error.
        let Some(text) = render_symbol(&table, &cli.docs, name) else {
            continue;
        };
        match &cli.output {
            Some(dir) => {
                let out_path = dir.join(format!("{name}.txt"));
                fs::write(&out_path, &text)
                    .with_context(|| format!("failed to write {}", out_path.display()))?;
            }
            None => print!("{text}"),
        }
    }

    Ok(())
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<glob::Pattern>> {
    patterns
        .iter()
        .map(|p| {
            glob::Pattern::new(p).with_context(|| format!("invalid symbol pattern: {p}"))
        })
        .collect()
}

fn matches_any(patterns: &[glob::Pattern], name: &str) -> bool {
    patterns.is_empty() || patterns.iter().any(|p| p.matches(name))
}

/// Transform one symbol's documentation record into its comment text.
/// Absent or malformed records yield `None`.
fn render_symbol(table: &SymbolTable, docs: &Path, name: &str) -> Option<String> {
    let entry = table.lookup(name)?;
    let mut p = emit::Printer::new();
    match entry.kind {
        SymbolKind::Class => {
            let doc = loader::load_class_doc(docs, name)?;
            emit::emit_class(&mut p, table, &doc);
        }
        SymbolKind::Builtin => {
            let doc = loader::load_builtin_doc(docs, name)?;
            emit::emit_builtin(&mut p, table, &doc);
        }
    }
    Some(p.finish())
}
