//! Table column width distribution.

use unicode_width::UnicodeWidthChar;

use crate::model::Cell;

/// Distribute a table's total width over its columns in proportion to their
/// content.
///
/// Each column is weighted by the widest cell it contains, measured in
/// display cells (East Asian wide characters count double). A per-column cap
/// keeps any single column from swallowing the table; the cap relaxes as the
/// column count shrinks. Fractions trimmed by the cap are redistributed to
/// the uncapped columns in proportion to their weights.
///
/// Returns one truncated EMU width per column; ragged rows widen the result
/// to the longest row. A table with no columns yields an empty vector.
pub fn column_widths(head: &[Cell], body: &[Vec<Cell>], total_width: i64) -> Vec<i64> {
    let cols = body
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(head.len()))
        .max()
        .unwrap_or(0);
    if cols == 0 {
        return Vec::new();
    }

    let mut weights = vec![0u64; cols];
    for (i, cell) in head.iter().enumerate() {
        weights[i] = weights[i].max(display_width(&cell.plain_text()));
    }
    for row in body {
        for (i, cell) in row.iter().enumerate() {
            weights[i] = weights[i].max(display_width(&cell.plain_text()));
        }
    }

    let sum: u64 = weights.iter().sum();
    let mut fractions: Vec<f64> = if sum == 0 {
        // Nothing but empty cells: split evenly.
        vec![1.0 / cols as f64; cols]
    } else {
        weights.iter().map(|&w| w as f64 / sum as f64).collect()
    };

    let cap = column_cap(cols);
    let capped: Vec<bool> = fractions.iter().map(|&f| f > cap).collect();
    let excess: f64 = fractions
        .iter()
        .zip(&capped)
        .filter(|&(_, &c)| c)
        .map(|(&f, _)| f - cap)
        .sum();
    if excess > 0.0 {
        let uncapped_sum: f64 = fractions
            .iter()
            .zip(&capped)
            .filter(|&(_, &c)| !c)
            .map(|(&f, _)| f)
            .sum();
        for (fraction, is_capped) in fractions.iter_mut().zip(&capped) {
            if *is_capped {
                *fraction = cap;
            } else if uncapped_sum > 0.0 {
                *fraction += excess * *fraction / uncapped_sum;
            }
        }
    }

    fractions
        .iter()
        .map(|f| (f * total_width as f64) as i64)
        .collect()
}

/// Maximum fraction of the table any one column may take.
fn column_cap(cols: usize) -> f64 {
    match cols {
        0..=2 => 0.9,
        3 => 0.6,
        4 => 0.5,
        _ => 0.4,
    }
}

/// Display width of a string: wide characters count 2, everything else 1.
fn display_width(text: &str) -> u64 {
    text.chars()
        .map(|c| if UnicodeWidthChar::width(c) == Some(2) { 2 } else { 1 })
        .sum()
}
