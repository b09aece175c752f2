//! records2txt - Re-merge persisted intermediate records into final text
//! and table output.
//!
//! Takes the `.jsonl` record files that layout2txt can leave behind and
//! re-runs block merging and rendering, so outputs can be regenerated
//! without the original layout dumps.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::{error, info};
use walkdir::WalkDir;

use reflow_core::layout::table::drop_empty_columns;
use reflow_core::record::read_records;
use reflow_core::render::{write_document, write_tables};
use reflow_core::{ContentBlock, merge_blocks};

/// Re-merge persisted record files into final text and table output.
#[derive(Parser, Debug)]
#[command(name = "records2txt")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing record files (.jsonl)
    input_dir: PathBuf,

    /// Directory to mirror the input tree into
    output_dir: PathBuf,

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

    let default_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

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
            || entry.path().extension().is_none_or(|ext| ext != "jsonl")
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

fn process_file(path: &Path, args: &Args) -> anyhow::Result<()> {
    info!(path = %path.display(), "processing");
    let input = BufReader::new(
        File::open(path).with_context(|| format!("opening {}", path.display()))?,
    );
    let ledger = read_records(input)?;

    let mut blocks = merge_blocks(&ledger);
    if args.drop_empty_columns {
        for block in &mut blocks {
            if let ContentBlock::Table(rows) = block {
                *rows = drop_empty_columns(rows);
            }
        }
    }

    let relative = path.strip_prefix(&args.input_dir).unwrap_or(path);
    let target = args.output_dir.join(relative);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let base = target.with_extension("");

    let text_path = base.with_extension("txt");
    let mut out = BufWriter::new(File::create(&text_path)
        .with_context(|| format!("creating {}", text_path.display()))?);
    write_document(&blocks, &mut out)?;
    out.flush()?;

    let mut name = base.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push("_table.txt");
    let table_path = base.with_file_name(name);
    let mut out = BufWriter::new(File::create(&table_path)
        .with_context(|| format!("creating {}", table_path.display()))?);
    write_tables(&blocks, args.context, &mut out)?;
    out.flush()?;
    Ok(())
}
