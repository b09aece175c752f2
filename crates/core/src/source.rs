//! The geometry collaborator's handoff format.
//!
//! A layout dump is one JSON document per input file: every page with its
//! ordered words and detected tables, as produced by the external parsing
//! and table-detection engine. Words may carry the stroke/fill colors the
//! visibility predicate needs; dumps that omit them keep every word.

use serde::{Deserialize, Deserializer};

use crate::error::{ReflowError, Result};
use crate::layout::params::LayoutParams;
use crate::layout::segment::DocumentProcessor;
use crate::ledger::Ledger;
use crate::model::{Color, DetectedTable, Page, PageObject, Word, keep_visible};

/// A whole-document layout dump.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentDump {
    pub pages: Vec<PageDump>,
}

/// One dumped page.
#[derive(Debug, Clone, Deserialize)]
pub struct PageDump {
    pub number: u32,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub words: Vec<WordDump>,
    #[serde(default)]
    pub tables: Vec<TableDump>,
}

/// One dumped word.
///
/// The color fields distinguish "not reported" (field absent; the word is
/// kept) from "reported missing" (explicit `null`; the visibility
/// predicate drops the glyph run).
#[derive(Debug, Clone, Deserialize)]
pub struct WordDump {
    pub text: String,
    pub top: f64,
    pub x1: f64,
    #[serde(default, deserialize_with = "reported")]
    pub stroking_color: Option<Option<Color>>,
    #[serde(default, deserialize_with = "reported")]
    pub non_stroking_color: Option<Option<Color>>,
}

/// One dumped table region.
#[derive(Debug, Clone, Deserialize)]
pub struct TableDump {
    /// `(x0, top, x1, bottom)` of the detected region.
    pub bbox: (f64, f64, f64, f64),
    pub rows: Vec<Vec<Option<String>>>,
}

fn reported<'de, D>(deserializer: D) -> std::result::Result<Option<Option<Color>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Color>::deserialize(deserializer).map(Some)
}

impl WordDump {
    /// Apply the glyph-run visibility predicate where the dump reported
    /// colors; colorless dumps have nothing to filter on.
    fn is_visible(&self) -> bool {
        match (&self.stroking_color, &self.non_stroking_color) {
            (Some(stroke), Some(fill)) => keep_visible(&PageObject::Glyph {
                stroke: stroke.clone(),
                fill: fill.clone(),
            }),
            _ => true,
        }
    }
}

impl PageDump {
    /// Convert into the model page and its detected tables, dropping
    /// invisible glyph runs.
    pub fn into_page(self) -> (Page, Vec<DetectedTable>) {
        let words = self
            .words
            .into_iter()
            .filter(WordDump::is_visible)
            .map(|w| Word {
                text: w.text,
                top: w.top,
                x1: w.x1,
            })
            .collect();
        let tables = self
            .tables
            .into_iter()
            .map(|t| DetectedTable {
                top: t.bbox.1,
                bottom: t.bbox.3,
                rows: t.rows,
            })
            .collect();
        (
            Page {
                number: self.number,
                width: self.width,
                height: self.height,
                words,
            },
            tables,
        )
    }
}

/// Parse a layout dump from JSON text.
pub fn parse_dump(json: &str) -> Result<DocumentDump> {
    serde_json::from_str(json).map_err(ReflowError::Dump)
}

/// Run a parsed dump through a full processing session and return the
/// finished ledger.
pub fn process_dump(dump: DocumentDump, params: LayoutParams) -> Ledger {
    let mut processor = DocumentProcessor::with_params(params);
    for page in dump.pages {
        let (page, tables) = page.into_page();
        processor.process_page(&page, &tables);
    }
    processor.into_ledger()
}
