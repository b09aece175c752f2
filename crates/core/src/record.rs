//! The line-oriented intermediate record format.
//!
//! One JSON object per line, `{page, allrow, type, inside}`, with the
//! type vocabulary `text`/`excel`/页眉/页脚. Table rows are persisted as
//! structured string arrays; the reader rejects records whose index chain
//! breaks or whose payload shape disagrees with the type tag.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

use crate::error::{ReflowError, Result};
use crate::ledger::{EntryContent, EntryKind, Ledger, LedgerEntry};

/// Record classification, with the on-disk tag vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "excel")]
    Table,
    #[serde(rename = "页眉")]
    Header,
    #[serde(rename = "页脚")]
    Footer,
}

/// Record payload: a line of text or a table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordBody {
    Line(String),
    Row(Vec<String>),
}

/// One persisted ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub page: u32,
    pub allrow: usize,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub inside: RecordBody,
}

impl From<&LedgerEntry> for Record {
    fn from(entry: &LedgerEntry) -> Self {
        let kind = match entry.kind {
            EntryKind::Text => RecordKind::Text,
            EntryKind::TableRow => RecordKind::Table,
            EntryKind::Header => RecordKind::Header,
            EntryKind::Footer => RecordKind::Footer,
        };
        let inside = match &entry.content {
            EntryContent::Line(text) => RecordBody::Line(text.clone()),
            EntryContent::Row(cells) => RecordBody::Row(cells.clone()),
        };
        Record {
            page: entry.page,
            allrow: entry.index,
            kind,
            inside,
        }
    }
}

/// Persist a ledger, one record per line.
pub fn write_records<W: Write>(ledger: &Ledger, out: &mut W) -> Result<()> {
    for entry in ledger.iter() {
        let record = Record::from(entry);
        serde_json::to_writer(&mut *out, &record).map_err(std::io::Error::from)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Read records back into a ledger.
///
/// The chain must be exactly what was written: `allrow` contiguous from
/// zero and every payload shape agreeing with its type tag. Any violation
/// is fatal for the document, since downstream merging cannot proceed on
/// partial rows.
pub fn read_records<R: BufRead>(input: R) -> Result<Ledger> {
    let mut ledger = Ledger::new();
    for (lineno, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: Record = serde_json::from_str(&line).map_err(|source| {
            ReflowError::RecordSyntax {
                line: lineno + 1,
                source,
            }
        })?;
        if record.allrow != ledger.len() {
            return Err(ReflowError::RecordShape {
                line: lineno + 1,
                reason: format!(
                    "allrow {} does not continue the chain at {}",
                    record.allrow,
                    ledger.len()
                ),
            });
        }
        let (kind, content) = match (record.kind, record.inside) {
            (RecordKind::Text, RecordBody::Line(text)) => {
                (EntryKind::Text, EntryContent::Line(text))
            }
            (RecordKind::Header, RecordBody::Line(text)) => {
                (EntryKind::Header, EntryContent::Line(text))
            }
            (RecordKind::Footer, RecordBody::Line(text)) => {
                (EntryKind::Footer, EntryContent::Line(text))
            }
            (RecordKind::Table, RecordBody::Row(cells)) => {
                (EntryKind::TableRow, EntryContent::Row(cells))
            }
            (kind, _) => {
                return Err(ReflowError::RecordShape {
                    line: lineno + 1,
                    reason: format!("payload shape does not match {kind:?}"),
                });
            }
        };
        ledger.push_entry(record.page, kind, content);
    }
    Ok(ledger)
}
