//! Raw table repair.
//!
//! Cell extraction splits visually wrapped rows into a leading row plus
//! continuation rows whose first cell is empty. Repair folds those
//! continuations back up, then normalizes the surviving rows.

/// Repair wrapped rows and normalize a raw cell grid into string rows.
///
/// Continuation rows (first cell `None`) fold each non-blank cell onto
/// the corresponding cell of the row the current continuation run started
/// from, creating it there if absent. Afterwards, rows whose first cell
/// is still empty are dropped, remaining `None` cells become empty
/// strings, embedded newlines are stripped, and rows left with nothing
/// but empty cells are dropped too.
pub fn repair_rows(mut raw: Vec<Vec<Option<String>>>) -> Vec<Vec<String>> {
    let mut carry = 0usize;
    for r in 0..raw.len() {
        if raw[r].first().is_some_and(Option::is_none) {
            carry += 1;
            let Some(base) = r.checked_sub(carry) else {
                // continuation with nothing above it to merge into
                continue;
            };
            for c in 0..raw[r].len() {
                let blank = match &raw[r][c] {
                    None => true,
                    Some(cell) => cell.trim().is_empty(),
                };
                if blank || c >= raw[base].len() {
                    continue;
                }
                let Some(cell) = raw[r][c].take() else {
                    continue;
                };
                let merged = match raw[base][c].take() {
                    Some(mut target) => {
                        target.push_str(&cell);
                        target
                    }
                    None => cell,
                };
                raw[base][c] = Some(merged);
            }
        } else {
            carry = 0;
        }
    }

    let mut repaired = Vec::new();
    for row in raw {
        if row.first().is_none_or(Option::is_none) {
            continue;
        }
        let mut cells = Vec::with_capacity(row.len());
        let mut non_empty = false;
        for cell in row {
            let cell = cell.map(|s| s.replace('\n', "")).unwrap_or_default();
            if !cell.is_empty() {
                non_empty = true;
            }
            cells.push(cell);
        }
        if non_empty {
            repaired.push(cells);
        }
    }
    repaired
}

/// Drop columns whose every cell is empty. An opt-in transformation for
/// finished table blocks; never applied during repair.
pub fn drop_empty_columns(rows: &[Vec<String>]) -> Vec<Vec<String>> {
    let Some(width) = rows.iter().map(Vec::len).max() else {
        return Vec::new();
    };
    let keep: Vec<bool> = (0..width)
        .map(|c| {
            rows.iter()
                .any(|row| row.get(c).is_some_and(|cell| !cell.is_empty()))
        })
        .collect();
    rows.iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|(c, _)| keep.get(*c).copied().unwrap_or(false))
                .map(|(_, cell)| cell.clone())
                .collect()
        })
        .collect()
}
