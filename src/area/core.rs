use std::collections::HashMap;

use serde::Serialize;

use crate::error::{GridError, Result};

/// Span of grid lines covered by a named area, half-open on both axes.
///
/// Line 0 is the leading edge of track 0, so track `i` lies in
/// `[line i, line i+1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AreaSpan {
    pub column_start: usize,
    pub column_end: usize,
    pub row_start: usize,
    pub row_end: usize,
}

impl AreaSpan {
    pub const fn new(
        column_start: usize,
        column_end: usize,
        row_start: usize,
        row_end: usize,
    ) -> Self {
        Self {
            column_start,
            column_end,
            row_start,
            row_end,
        }
    }

    pub fn column_count(&self) -> usize {
        self.column_end.saturating_sub(self.column_start)
    }

    pub fn row_count(&self) -> usize {
        self.row_end.saturating_sub(self.row_start)
    }
}

/// Parse a line-coordinate spec: `"2"`, `"0/3"`, or `"1/span 3"`.
///
/// A bare line covers exactly one track. The `span` keyword is accepted for
/// familiarity; the integer that follows it is taken as the end line.
pub fn parse_line_span(spec: &str) -> Result<(usize, usize)> {
    let fail = |reason: &'static str| GridError::BadLineSpan {
        spec: spec.to_string(),
        reason,
    };

    if !spec.contains('/') {
        let start: usize = spec
            .trim()
            .parse()
            .map_err(|_| fail("expected an integer line"))?;
        return Ok((start, start + 1));
    }

    let parts: Vec<&str> = spec.split('/').collect();
    if parts.len() != 2 {
        return Err(fail("more than two line fields"));
    }

    let start = parts[0]
        .trim()
        .parse()
        .map_err(|_| fail("start line is not an integer"))?;
    let tail = parts[1].trim();
    let end = match tail.strip_prefix("span") {
        Some(rest) => rest
            .trim()
            .parse()
            .map_err(|_| fail("span is missing an integer"))?,
        None => tail.parse().map_err(|_| fail("end line is not an integer"))?,
    };

    Ok((start, end))
}

/// Parse a named-area grid: one text line per row track, whitespace-separated
/// cell tokens, the literal `.` marking an unassigned cell.
///
/// The whole grid is validated before anything is returned, so callers can
/// swap their area table atomically. Every row must have as many cells as
/// the first row, a name's run must keep the same columns on every row it
/// appears in, and a name may not come back once its rows have ended.
pub fn parse_area_grid(text: &str, expected_rows: usize) -> Result<HashMap<String, AreaSpan>> {
    let rows: Vec<Vec<&str>> = text
        .trim()
        .lines()
        .map(|line| line.split_whitespace().collect())
        .collect();

    if rows.len() != expected_rows {
        return Err(GridError::RowCountMismatch {
            expected: expected_rows,
            found: rows.len(),
        });
    }

    let column_count = rows.first().map(|cells| cells.len()).unwrap_or(0);
    let mut finished: HashMap<String, AreaSpan> = HashMap::new();
    let mut pending: HashMap<String, AreaSpan> = HashMap::new();

    for (row_idx, cells) in rows.iter().enumerate() {
        if cells.len() != column_count {
            return Err(GridError::ColumnCountMismatch {
                row: row_idx,
                expected: column_count,
                found: cells.len(),
            });
        }

        let runs = row_runs(cells, row_idx)?;

        for (name, &(start, len)) in &runs {
            if let Some(span) = pending.get(name) {
                // Continuation rows must line up exactly with the opening row.
                if len != span.column_count() {
                    return Err(GridError::RegionWidthMismatch {
                        name: name.clone(),
                        row: row_idx,
                        expected: span.column_count(),
                        found: len,
                    });
                }
                if start != span.column_start {
                    return Err(GridError::ShiftedRegion {
                        name: name.clone(),
                        row: row_idx,
                    });
                }
            } else {
                if finished.contains_key(name) {
                    return Err(GridError::DuplicateArea { name: name.clone() });
                }
                pending.insert(name.clone(), AreaSpan::new(start, start + len, row_idx, 0));
            }
        }

        // Pending areas absent from this row are closed just above it.
        let mut still_pending = HashMap::new();
        for (name, mut span) in pending.drain() {
            if runs.contains_key(&name) {
                still_pending.insert(name, span);
            } else {
                span.row_end = row_idx;
                finished.insert(name, span);
            }
        }
        pending = still_pending;
    }

    for (name, mut span) in pending.drain() {
        span.row_end = rows.len();
        finished.insert(name, span);
    }

    Ok(finished)
}

/// Column start and length of each named run in one row, keyed by name.
/// A name that reappears after a different token is not a contiguous region.
fn row_runs(cells: &[&str], row: usize) -> Result<HashMap<String, (usize, usize)>> {
    let mut runs: HashMap<String, (usize, usize)> = HashMap::new();
    let mut prev: Option<&str> = None;

    for (col, &cell) in cells.iter().enumerate() {
        if cell != "." {
            match runs.get_mut(cell) {
                Some((_, len)) if prev == Some(cell) => *len += 1,
                Some(_) => {
                    return Err(GridError::NonContiguousRegion {
                        name: cell.to_string(),
                        row,
                    });
                }
                None => {
                    runs.insert(cell.to_string(), (col, 1));
                }
            }
        }
        prev = Some(cell);
    }

    Ok(runs)
}
