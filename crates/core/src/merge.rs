//! Block merging.
//!
//! Converts the finished ledger into typed content blocks: non-empty
//! lines become text blocks, and consecutive table rows coalesce into one
//! table block per maximal run of rows sharing a column count. Table data
//! split across pages or across adjacent detected regions rejoins here,
//! because the zero-length lines at page seams are filtered before they
//! can break a run.

use crate::ledger::{EntryContent, Ledger};

/// A block of final document content.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    /// One line of free text.
    Text(String),
    /// A table as string rows.
    Table(Vec<Vec<String>>),
}

/// Merge a finished ledger into content blocks.
pub fn merge_blocks(ledger: &Ledger) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();
    let mut pending: Vec<Vec<String>> = Vec::new();

    for entry in ledger.iter() {
        match &entry.content {
            EntryContent::Line(line) => {
                if line.is_empty() {
                    continue;
                }
                flush_rows(&mut pending, &mut blocks);
                blocks.push(ContentBlock::Text(line.clone()));
            }
            EntryContent::Row(row) => pending.push(row.clone()),
        }
    }
    flush_rows(&mut pending, &mut blocks);
    blocks
}

/// Split an accumulated row group on column-count changes and emit one
/// table block per run.
fn flush_rows(pending: &mut Vec<Vec<String>>, blocks: &mut Vec<ContentBlock>) {
    for run in split_by_width(std::mem::take(pending)) {
        blocks.push(ContentBlock::Table(run));
    }
}

/// Group consecutive rows of equal width.
fn split_by_width(rows: Vec<Vec<String>>) -> Vec<Vec<Vec<String>>> {
    let mut runs: Vec<Vec<Vec<String>>> = Vec::new();
    for row in rows {
        match runs.last_mut() {
            Some(run) if run.last().is_some_and(|prev| prev.len() == row.len()) => run.push(row),
            _ => runs.push(vec![row]),
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| (*c).to_owned()).collect()
    }

    #[test]
    fn equal_widths_stay_in_one_run() {
        let runs = split_by_width(vec![row(&["a", "b"]), row(&["c", "d"])]);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].len(), 2);
    }

    #[test]
    fn width_change_starts_a_new_run() {
        let runs = split_by_width(vec![row(&["a", "b"]), row(&["c"]), row(&["d"])]);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec![row(&["a", "b"])]);
        assert_eq!(runs[1], vec![row(&["c"]), row(&["d"])]);
    }

    #[test]
    fn no_rows_no_runs() {
        assert!(split_by_width(Vec::new()).is_empty());
    }
}
