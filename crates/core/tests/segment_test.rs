//! Page segmentation and boundary tagging tests.

use reflow_core::layout::lines::reconstruct_lines;
use reflow_core::{
    ContentBlock, DetectedTable, DocumentProcessor, EntryContent, EntryKind, LayoutParams, Page,
    Word,
};

fn word(text: &str, top: f64, x1: f64) -> Word {
    Word {
        text: text.to_owned(),
        top,
        x1,
    }
}

fn page(number: u32, words: Vec<Word>) -> Page {
    Page {
        number,
        width: 100.0,
        height: 100.0,
        words,
    }
}

fn table(top: f64, bottom: f64, rows: &[&[&str]]) -> DetectedTable {
    DetectedTable {
        top,
        bottom,
        rows: rows
            .iter()
            .map(|row| row.iter().map(|c| Some((*c).to_owned())).collect())
            .collect(),
    }
}

fn line(text: &str) -> EntryContent {
    EntryContent::Line(text.to_owned())
}

#[test]
fn page_without_tables_is_one_unbounded_reconstruction() {
    let p = page(1, vec![word("alpha", 10.0, 20.0), word("beta", 30.0, 20.0)]);
    let mut proc = DocumentProcessor::new();
    proc.process_page(&p, &[]);

    let expected = reconstruct_lines(&p, None, None, &LayoutParams::default());
    let got: Vec<String> = proc
        .ledger()
        .iter()
        .map(|e| match &e.content {
            EntryContent::Line(text) => text.clone(),
            EntryContent::Row(_) => panic!("unexpected row"),
        })
        .collect();
    assert_eq!(got, expected);
    assert!(proc.ledger().iter().all(|e| e.kind == EntryKind::Text));
}

#[test]
fn tables_interleave_with_surrounding_text() {
    let p = page(1, vec![word("概况", 10.0, 20.0), word("备注", 80.0, 20.0)]);
    let t = table(40.0, 60.0, &[&["h1", "h2"], &["a", "b"]]);
    let mut proc = DocumentProcessor::new();
    proc.process_page(&p, &[t]);

    let contents: Vec<EntryContent> =
        proc.ledger().iter().map(|e| e.content.clone()).collect();
    assert_eq!(
        contents,
        vec![
            line(""),
            line("概况"),
            EntryContent::Row(vec!["h1".to_owned(), "h2".to_owned()]),
            EntryContent::Row(vec!["a".to_owned(), "b".to_owned()]),
            line(""),
            line("备注"),
        ]
    );
}

#[test]
fn overlapping_table_is_skipped_and_tail_text_still_emitted() {
    let p = page(1, vec![word("尾行", 80.0, 20.0)]);
    let tables = vec![
        table(20.0, 60.0, &[&["h1", "h2"]]),
        // bottom edge above the cursor left by the first region
        table(30.0, 50.0, &[&["dup", "dup"]]),
    ];
    let mut proc = DocumentProcessor::new();
    proc.process_page(&p, &tables);

    let rows: Vec<&EntryContent> = proc
        .ledger()
        .iter()
        .filter(|e| matches!(e.content, EntryContent::Row(_)))
        .map(|e| &e.content)
        .collect();
    assert_eq!(
        rows,
        vec![&EntryContent::Row(vec!["h1".to_owned(), "h2".to_owned()])]
    );
    let last = proc.ledger().entries().last().unwrap();
    assert_eq!(last.content, line("尾行"));
}

#[test]
fn ledger_indices_are_contiguous_across_pages() {
    let mut proc = DocumentProcessor::new();
    proc.process_page(
        &page(1, vec![word("概况", 10.0, 20.0)]),
        &[table(40.0, 60.0, &[&["a", "b"]])],
    );
    proc.process_page(&page(2, vec![word("后页", 10.0, 20.0)]), &[]);

    for (i, entry) in proc.ledger().iter().enumerate() {
        assert_eq!(entry.index, i);
    }
    assert!(proc.ledger().len() > 4);
}

#[test]
fn page_number_footer_is_retagged() {
    let p = page(
        1,
        vec![word("正文内容", 10.0, 20.0), word("- 12 -", 90.0, 20.0)],
    );
    let mut proc = DocumentProcessor::new();
    proc.process_page(&p, &[]);

    let kinds: Vec<EntryKind> = proc.ledger().iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![EntryKind::Text, EntryKind::Text, EntryKind::Footer]);
}

#[test]
fn report_title_header_is_retagged() {
    let p = page(
        1,
        vec![
            word("2023年年度报告", 10.0, 20.0),
            word("正文", 40.0, 20.0),
            word("第 1 页 共 12 页", 90.0, 20.0),
        ],
    );
    let mut proc = DocumentProcessor::new();
    proc.process_page(&p, &[]);

    let kinds: Vec<EntryKind> = proc.ledger().iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EntryKind::Text,
            EntryKind::Header,
            EntryKind::Text,
            EntryKind::Footer,
        ]
    );
}

#[test]
fn bracketed_tail_blocks_boundary_tagging() {
    let p = page(
        1,
        vec![word("2023年年度报告", 10.0, 20.0), word("附注[1]", 90.0, 20.0)],
    );
    let mut proc = DocumentProcessor::new();
    proc.process_page(&p, &[]);

    assert!(proc.ledger().iter().all(|e| e.kind == EntryKind::Text));
}

#[test]
fn header_is_tested_on_every_page() {
    // the second page's title is tagged even though the first page had
    // no header
    let mut proc = DocumentProcessor::new();
    proc.process_page(&page(1, vec![word("正文", 10.0, 20.0)]), &[]);
    proc.process_page(
        &page(
            2,
            vec![word("2023年年度报告", 10.0, 20.0), word("正文乙", 40.0, 20.0)],
        ),
        &[],
    );

    let kinds: Vec<EntryKind> = proc.ledger().iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EntryKind::Text,
            EntryKind::Text,
            EntryKind::Text,
            EntryKind::Header,
            EntryKind::Text,
        ]
    );
}

#[test]
fn empty_page_is_tolerated() {
    let mut proc = DocumentProcessor::new();
    proc.process_page(&page(1, Vec::new()), &[]);

    assert_eq!(proc.ledger().len(), 1);
    assert_eq!(proc.ledger().get(0).unwrap().content, line(""));
    assert_eq!(proc.ledger().get(0).unwrap().kind, EntryKind::Text);
}

#[test]
fn table_continues_across_pages() {
    let mut proc = DocumentProcessor::new();
    proc.process_page(&page(1, Vec::new()), &[table(40.0, 60.0, &[&["a", "b"]])]);
    proc.process_page(&page(2, Vec::new()), &[table(40.0, 60.0, &[&["c", "d"]])]);

    let blocks = proc.finish();
    assert_eq!(
        blocks,
        vec![ContentBlock::Table(vec![
            vec!["a".to_owned(), "b".to_owned()],
            vec!["c".to_owned(), "d".to_owned()],
        ])]
    );
}
