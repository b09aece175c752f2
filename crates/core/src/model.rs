//! Page-level data contract with the external geometry engine.
//!
//! Parsing documents, extracting word geometry and detecting table regions
//! all happen in a collaborating engine; these types are the narrow handoff
//! it fills in.

/// A positioned token on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    /// Token text.
    pub text: String,
    /// Distance from the top of the page to the top of the token.
    pub top: f64,
    /// Right edge of the token.
    pub x1: f64,
}

/// One page of a paginated document.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// 1-based page number.
    pub number: u32,
    pub width: f64,
    pub height: f64,
    /// Words in the order the geometry engine emits them.
    pub words: Vec<Word>,
}

/// A table region detected on a page, with its raw extracted cells.
///
/// Regions arrive ordered top to bottom as detected; the segmenter skips
/// a region whose bottom edge lies above its running cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedTable {
    /// Top edge of the region.
    pub top: f64,
    /// Bottom edge of the region.
    pub bottom: f64,
    /// Raw cell grid; `None` marks a cell the extractor could not assign.
    pub rows: Vec<Vec<Option<String>>>,
}

/// A color as reported by the geometry engine. Only presence matters here.
pub type Color = Vec<f64>;

/// A drawing primitive as reported by the geometry engine.
#[derive(Debug, Clone, PartialEq)]
pub enum PageObject {
    /// A vector rectangle (ruling lines come through as thin rects).
    Rect {
        fill: Option<Color>,
        width: f64,
        height: f64,
    },
    /// A glyph run.
    Glyph {
        stroke: Option<Color>,
        fill: Option<Color>,
    },
    /// Anything else the engine reports.
    Other,
}

/// Visibility predicate for drawing primitives, applied before table
/// detection: invisible ink and sub-unit ruling artifacts must not
/// influence table or text geometry.
///
/// A rectangle counts as visible only with a fill color and at least one
/// unit of width or height; a glyph run only with both a stroke and a
/// fill color.
pub fn keep_visible(obj: &PageObject) -> bool {
    match obj {
        PageObject::Rect {
            fill,
            width,
            height,
        } => fill.is_some() && (*width >= 1.0 || *height >= 1.0),
        PageObject::Glyph { stroke, fill } => stroke.is_some() && fill.is_some(),
        PageObject::Other => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfilled_rects_are_invisible() {
        assert!(!keep_visible(&PageObject::Rect {
            fill: None,
            width: 100.0,
            height: 2.0,
        }));
    }

    #[test]
    fn sub_unit_rects_are_invisible() {
        assert!(!keep_visible(&PageObject::Rect {
            fill: Some(vec![0.0]),
            width: 0.4,
            height: 0.4,
        }));
        assert!(keep_visible(&PageObject::Rect {
            fill: Some(vec![0.0]),
            width: 1.0,
            height: 0.4,
        }));
    }

    #[test]
    fn glyphs_need_both_colors() {
        assert!(!keep_visible(&PageObject::Glyph {
            stroke: Some(vec![0.0]),
            fill: None,
        }));
        assert!(keep_visible(&PageObject::Glyph {
            stroke: Some(vec![0.0]),
            fill: Some(vec![0.0]),
        }));
    }

    #[test]
    fn other_objects_pass_through() {
        assert!(keep_visible(&PageObject::Other));
    }
}
