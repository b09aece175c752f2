//! Header and footer tagging at page seams.
//!
//! Report headers and footers are short formulaic strings, so matching
//! the first and last reconstructed lines of each page's contribution
//! against boundary patterns stands in for real layout-region
//! classification.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::ledger::{EntryContent, EntryKind, Ledger};

/// A report-title suffix not preceded by 计.
static HEADER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[^计](?:报告(?:全文)?(?:（修订版）|（修订稿）|（更正后）)?)$").unwrap()
});

/// A leading run of page-number tokens.
static FOOTER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d|\\|/|第|共|页|-|_| )+").unwrap());

/// Retag the boundary entries of the page whose entries start at `start`.
///
/// Line reconstruction emits a zero-length artifact ahead of a page's
/// first real line, so the header candidate sits at `start + 1`; the
/// footer candidate is the ledger's current tail. A page that contributed
/// too few entries is skipped.
pub(crate) fn tag_page(ledger: &mut Ledger, start: usize, page: u32) {
    let first_idx = start + 1;
    let Some(first) = ledger.get(first_idx) else {
        debug!(page, "no taggable lines on page");
        return;
    };
    let Some(last) = ledger.entries().last() else {
        return;
    };
    let last_idx = last.index;

    // a trailing table row blocks both boundary matches, like a
    // bracketed line
    let tail_blocked = match &last.content {
        EntryContent::Row(_) => true,
        EntryContent::Line(line) => line.contains('['),
    };

    let header = !tail_blocked
        && matches!(&first.content, EntryContent::Line(line) if HEADER_LINE.is_match(line));
    let footer = !tail_blocked
        && matches!(&last.content, EntryContent::Line(line) if FOOTER_LINE.is_match(line));

    if header {
        ledger.retag(first_idx, EntryKind::Header);
    }
    if footer {
        ledger.retag(last_idx, EntryKind::Footer);
    }
}
