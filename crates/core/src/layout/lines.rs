//! Line reconstruction from positioned words.
//!
//! Words arrive in the geometry engine's order. Whether two horizontally
//! adjacent fragments belong to the same logical line is decided from the
//! vertical delta, the previous word's distance to the right margin, and
//! whether the accumulated text already ends like a finished line.

use std::sync::LazyLock;

use regex::Regex;

use crate::layout::params::LayoutParams;
use crate::model::Page;

/// Text that already ends a line: terminal punctuation, a digit, a
/// unit/currency declaration, or a report-title suffix.
static LINE_TERMINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("(?:。|；|单位：元|单位：万元|币种：人民币|\\d|报告(?:全文)?(?:（修订版）|（修订稿）|（更正后）)?)$")
        .unwrap()
});

/// Reconstruct the text lines of `page` inside the vertical band
/// `(top, bottom)`. Both bounds are exclusive and either may be `None`,
/// leaving that side of the band open.
///
/// The returned lines preserve zero-length entries: a break is inserted
/// ahead of every word that opens a new line, including the first, so a
/// band normally leads with an empty entry. Filtering empties is the
/// block merger's job.
pub fn reconstruct_lines(
    page: &Page,
    top: Option<f64>,
    bottom: Option<f64>,
    params: &LayoutParams,
) -> Vec<String> {
    let break_ratio = if top.is_none() && bottom.is_none() {
        params.page_break_ratio
    } else {
        params.band_break_ratio
    };

    let mut text = String::new();
    let mut last_top = 0.0f64;
    let mut last_check = 0.0f64;

    for word in &page.words {
        let in_band = match (top, bottom) {
            (None, None) => true,
            (None, Some(b)) => word.top > b,
            (Some(t), None) => word.top < t,
            (Some(t), Some(b)) => word.top < t && word.top > b,
        };
        if in_band {
            if (last_top - word.top).abs() <= params.y_tolerance {
                // same visual line
                text.push_str(&word.text);
            } else if last_check > 0.0
                && page.height * break_ratio - word.top > 0.0
                && !LINE_TERMINAL.is_match(&text)
            {
                // the previous line ran into the right margin without a
                // terminal: a wrapped line, not a new one
                text.push_str(&word.text);
            } else {
                text.push('\n');
                text.push_str(&word.text);
            }
        }
        // scan state tracks every word, in or out of band
        last_top = word.top;
        last_check = word.x1 - page.width * params.margin_ratio;
    }

    text.split('\n').map(str::to_owned).collect()
}
