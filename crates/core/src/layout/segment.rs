//! Page segmentation.
//!
//! Walks a page's detected tables top to bottom, reconstructing the free
//! text between them and repairing each table's rows, appending everything
//! to the document ledger in reading order.

use tracing::debug;

use crate::layout::boundary;
use crate::layout::lines::reconstruct_lines;
use crate::layout::params::LayoutParams;
use crate::layout::table::repair_rows;
use crate::ledger::Ledger;
use crate::merge::{ContentBlock, merge_blocks};
use crate::model::{DetectedTable, Page};

/// Per-document processing session.
///
/// Owns the content ledger for exactly one document. Pages must be fed in
/// order, one call per page: each page's segmentation and boundary
/// tagging complete before the next page starts.
#[derive(Debug, Default)]
pub struct DocumentProcessor {
    params: LayoutParams,
    ledger: Ledger,
}

impl DocumentProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: LayoutParams) -> Self {
        Self {
            params,
            ledger: Ledger::new(),
        }
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// The ledger accumulated so far.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Segment one page: interleave its detected tables with the text
    /// around them, then retag the page's boundary lines.
    ///
    /// `tables` must be ordered top to bottom as detected. A table whose
    /// bottom edge lies above the running cursor duplicates an already
    /// covered region and is skipped; trailing page text is still emitted
    /// after the last table that was actually processed.
    pub fn process_page(&mut self, page: &Page, tables: &[DetectedTable]) {
        let start = self.ledger.len();
        if tables.is_empty() {
            for line in reconstruct_lines(page, None, None, &self.params) {
                self.ledger.push_line(page.number, line);
            }
        } else {
            debug!(page = page.number, tables = tables.len(), "segmenting page");
            let mut bottom = 0.0f64;
            for table in tables {
                if table.bottom < bottom {
                    continue;
                }
                for line in reconstruct_lines(page, Some(table.top), Some(bottom), &self.params) {
                    self.ledger.push_line(page.number, line);
                }
                bottom = table.bottom;
                for row in repair_rows(table.rows.clone()) {
                    self.ledger.push_row(page.number, row);
                }
            }
            for line in reconstruct_lines(page, None, Some(bottom), &self.params) {
                self.ledger.push_line(page.number, line);
            }
        }
        boundary::tag_page(&mut self.ledger, start, page.number);
    }

    /// Finish the document: consume the session and merge the ledger into
    /// content blocks.
    pub fn finish(self) -> Vec<ContentBlock> {
        merge_blocks(&self.ledger)
    }

    /// Consume the session, yielding the raw ledger.
    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }
}
