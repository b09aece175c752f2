//! Output rendering.
//!
//! Two renderings of the merged blocks: the full document (text lines
//! with Markdown tables inline) and a tables-only companion that repeats
//! a little preceding text ahead of each table for context.

use std::io::Write;

use itertools::Itertools;

use crate::error::Result;
use crate::merge::ContentBlock;

/// Render a table block as a Markdown table.
///
/// The first row becomes the header, followed by a `---` separator per
/// column and the remaining rows, all pipe-delimited. Three newlines
/// close the table off from what follows.
pub fn table_to_markdown(rows: &[Vec<String>]) -> String {
    let Some((header, body)) = rows.split_first() else {
        return String::new();
    };
    let mut md = format!("| {} |\n", header.iter().join(" | "));
    md.push_str("| ");
    for _ in 0..header.len() {
        md.push_str("--- | ");
    }
    md.push('\n');
    for row in body {
        md.push_str(&format!("| {} |\n", row.iter().join(" | ")));
    }
    md.push_str("\n\n\n");
    md
}

/// Write the full document: one line per text block, tables inline.
pub fn write_document<W: Write>(blocks: &[ContentBlock], out: &mut W) -> Result<()> {
    for block in blocks {
        match block {
            ContentBlock::Text(line) => {
                out.write_all(line.as_bytes())?;
                out.write_all(b"\n")?;
            }
            ContentBlock::Table(rows) => {
                out.write_all(table_to_markdown(rows).as_bytes())?;
            }
        }
    }
    Ok(())
}

/// Write the tables-only companion: each table preceded by the text of
/// the blocks in the `context` positions just before it.
pub fn write_tables<W: Write>(blocks: &[ContentBlock], context: usize, out: &mut W) -> Result<()> {
    for (i, block) in blocks.iter().enumerate() {
        let ContentBlock::Table(rows) = block else {
            continue;
        };
        for j in (1..=context).rev() {
            if let Some(ContentBlock::Text(line)) = i.checked_sub(j).map(|k| &blocks[k]) {
                out.write_all(line.as_bytes())?;
                out.write_all(b"\n")?;
            }
        }
        out.write_all(table_to_markdown(rows).as_bytes())?;
    }
    Ok(())
}
