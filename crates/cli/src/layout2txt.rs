//! layout2txt - Reconstruct reading-order text and Markdown tables from
//! page-layout dumps.
//!
//! Walks an input directory tree for layout dumps produced by the
//! geometry engine, mirrors the tree under the output directory, and
//! writes one text/table file pair per document. A failing document is
//! logged and the batch continues.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::{error, info};
use walkdir::WalkDir;

use reflow_core::layout::table::drop_empty_columns;
use reflow_core::record::write_records;
use reflow_core::render::{write_document, write_tables};
use reflow_core::source::{parse_dump, process_dump};
use reflow_core::{ContentBlock, LayoutParams, merge_blocks};

/// Reconstruct reading-order text and Markdown tables from page-layout
/// dumps.
#[derive(Parser, Debug)]
#[command(name = "layout2txt")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing layout dump files (.json)
    input_dir: PathBuf,

    /// Directory to mirror the input tree into
    output_dir: PathBuf,

    /// Also persist the intermediate record file (.jsonl) per document
    #[arg(short = 'r', long, action = ArgAction::SetTrue)]
    records: bool,

    /// Number of preceding text blocks written ahead of each table in the
    /// companion file
    #[arg(long, default_value = "4")]
    context: usize,

    /// Drop table columns whose every cell is empty
    #[arg(long, action = ArgAction::SetTrue)]
    drop_empty_columns: bool,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let mut processed = 0usize;
    let mut failures = 0usize;
    for entry in WalkDir::new(&args.input_dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                error!("walk error: {err}");
                failures += 1;
                continue;
            }
        };
        if !entry.file_type().is_file()
            || entry.path().extension().is_none_or(|ext| ext != "json")
        {
            continue;
        }
        match process_file(entry.path(), &args) {
            Ok(()) => processed += 1,
            Err(err) => {
                error!(path = %entry.path().display(), "failed: {err:#}");
                failures += 1;
            }
        }
    }
    info!(processed, failures, "batch finished");
    Ok(())
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

fn process_file(path: &Path, args: &Args) -> anyhow::Result<()> {
    info!(path = %path.display(), "processing");
    let json =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let dump = parse_dump(&json)?;
    let ledger = process_dump(dump, LayoutParams::default());

    let base = output_base(path, args)?;
    if args.records {
        let record_path = base.with_extension("jsonl");
        let mut out = BufWriter::new(File::create(&record_path)
            .with_context(|| format!("creating {}", record_path.display()))?);
        write_records(&ledger, &mut out)?;
        out.flush()?;
    }

    let mut blocks = merge_blocks(&ledger);
    if args.drop_empty_columns {
        for block in &mut blocks {
            if let ContentBlock::Table(rows) = block {
                *rows = drop_empty_columns(rows);
            }
        }
    }
    write_outputs(&blocks, &base, args.context)
}

/// Mirror `path` under the output directory and strip its extension.
fn output_base(path: &Path, args: &Args) -> anyhow::Result<PathBuf> {
    let relative = path.strip_prefix(&args.input_dir).unwrap_or(path);
    let target = args.output_dir.join(relative);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    Ok(target.with_extension(""))
}

fn write_outputs(blocks: &[ContentBlock], base: &Path, context: usize) -> anyhow::Result<()> {
    let text_path = base.with_extension("txt");
    let mut out = BufWriter::new(File::create(&text_path)
        .with_context(|| format!("creating {}", text_path.display()))?);
    write_document(blocks, &mut out)?;
    out.flush()?;

    let table_path = table_companion(base);
    let mut out = BufWriter::new(File::create(&table_path)
        .with_context(|| format!("creating {}", table_path.display()))?);
    write_tables(blocks, context, &mut out)?;
    out.flush()?;
    Ok(())
}

/// `<base>_table.txt` next to `<base>.txt`.
fn table_companion(base: &Path) -> PathBuf {
    let mut name = base.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push("_table.txt");
    base.with_file_name(name)
}
