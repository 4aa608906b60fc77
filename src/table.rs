//! # Table Layout
//!
//! Wraps and justifies rows of strings into fixed-width text lines for a
//! monospaced receipt font.
//!
//! ## Layout Steps
//!
//! 1. **Wrap**: a cell longer than its column keeps the first `width`
//!    characters; the rest moves into a continuation row inserted right
//!    after it. One continuation row per row, shared by every overflowing
//!    column, and continuation rows are wrapped again in turn.
//! 2. **Justify**: every cell is padded with spaces to its column width and
//!    the cells are concatenated with no separator.
//!
//! ```text
//! widths [6, 4], [left, right]
//!
//! ["Coffee beans", "12.50"]  ──►  "Coffee12.5"
//!                                 " beans   0"
//! ```
//!
//! Lengths are counted in `char`s.
//!
//! ## Example
//!
//! ```
//! use escpos_receipt::protocol::text::Justification;
//! use escpos_receipt::table;
//!
//! let lines = table::layout(
//!     &[5, 3],
//!     &[Justification::Left, Justification::Right],
//!     &[vec!["hello".into(), "ab".into()]],
//! )
//! .unwrap();
//! assert_eq!(lines, vec!["hello ab"]);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::EscPosError;
use crate::printer::PrinterProfile;
use crate::protocol::text::Justification;

/// One logical table row: one string per column.
pub type TableRow = Vec<String>;

/// A fully padded output line, `sum(widths)` characters long.
pub type WrappedLine = String;

/// Column layout of a table.
///
/// ## Example
///
/// ```
/// use escpos_receipt::table::TableSpec;
///
/// let spec: TableSpec = serde_json::from_str(
///     r#"{ "widths": [20, 4, 8], "justifications": ["left", "center", "right"] }"#,
/// ).unwrap();
/// assert_eq!(spec.total_width(), 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    pub widths: Vec<usize>,
    pub justifications: Vec<Justification>,
}

impl TableSpec {
    pub fn new(widths: Vec<usize>, justifications: Vec<Justification>) -> Self {
        Self {
            widths,
            justifications,
        }
    }

    /// Total line width in characters.
    pub fn total_width(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Whether a line of this table fits on one printed line of `profile`.
    pub fn fits(&self, profile: &PrinterProfile) -> bool {
        self.total_width() <= profile.chars_per_line
    }

    /// Check arity and widths without laying anything out.
    pub fn validate(&self) -> Result<(), EscPosError> {
        validate(&self.widths, &self.justifications, &[])
    }

    /// Lay out `rows` with this spec. See [`layout`].
    pub fn layout(&self, rows: &[TableRow]) -> Result<Vec<WrappedLine>, EscPosError> {
        layout(&self.widths, &self.justifications, rows)
    }

    /// Like [`TableSpec::layout`], but logs a warning when the table is wider
    /// than the printer line (the printer would wrap it again).
    pub fn layout_for(
        &self,
        profile: &PrinterProfile,
        rows: &[TableRow],
    ) -> Result<Vec<WrappedLine>, EscPosError> {
        if !self.fits(profile) {
            warn!(
                "table is {} chars wide but {} prints {} per line",
                self.total_width(),
                profile.name,
                profile.chars_per_line
            );
        }
        self.layout(rows)
    }
}

/// Wrap and justify `rows` into printable lines.
///
/// ## Errors
///
/// - [`EscPosError::ColumnArityMismatch`] if `justifications` or any row
///   does not have `widths.len()` entries
/// - [`EscPosError::InvalidWidth`] if any width is zero
///
/// Inputs are validated before any line is produced.
pub fn layout(
    widths: &[usize],
    justifications: &[Justification],
    rows: &[TableRow],
) -> Result<Vec<WrappedLine>, EscPosError> {
    validate(widths, justifications, rows)?;

    let physical = wrap_rows(widths, rows);
    debug!(
        "table: {} rows wrapped into {} lines of {} chars",
        rows.len(),
        physical.len(),
        widths.iter().sum::<usize>()
    );

    Ok(physical
        .iter()
        .map(|row| {
            row.iter()
                .zip(widths.iter().zip(justifications))
                .map(|(cell, (&width, &just))| justify_cell(cell, width, just))
                .collect()
        })
        .collect())
}

fn validate(
    widths: &[usize],
    justifications: &[Justification],
    rows: &[TableRow],
) -> Result<(), EscPosError> {
    if justifications.len() != widths.len() {
        return Err(EscPosError::ColumnArityMismatch {
            row: None,
            expected: widths.len(),
            found: justifications.len(),
        });
    }

    if let Some(column) = widths.iter().position(|&w| w == 0) {
        return Err(EscPosError::InvalidWidth { column });
    }

    if let Some((row, cells)) = rows
        .iter()
        .enumerate()
        .find(|(_, cells)| cells.len() != widths.len())
    {
        return Err(EscPosError::ColumnArityMismatch {
            row: Some(row),
            expected: widths.len(),
            found: cells.len(),
        });
    }

    Ok(())
}

/// Split overflowing cells into continuation rows.
///
/// Rows must already have `widths.len()` cells. Every returned cell is at
/// most its column's width.
///
/// ## Example
///
/// ```
/// use escpos_receipt::table::wrap_rows;
///
/// let rows = wrap_rows(&[3, 2], &[vec!["abcdefg".into(), "xyz".into()]]);
/// assert_eq!(
///     rows,
///     vec![
///         vec!["abc".to_string(), "xy".to_string()],
///         vec!["def".to_string(), "z".to_string()],
///         vec!["g".to_string(), "".to_string()],
///     ]
/// );
/// ```
pub fn wrap_rows(widths: &[usize], rows: &[TableRow]) -> Vec<TableRow> {
    let mut out = Vec::with_capacity(rows.len());

    for row in rows {
        let mut current = row.clone();
        loop {
            let mut continuation: Option<TableRow> = None;

            for (col, &width) in widths.iter().enumerate() {
                if let Some((head, tail)) = split_at_chars(&current[col], width) {
                    let next = continuation
                        .get_or_insert_with(|| vec![String::new(); widths.len()]);
                    next[col] = tail;
                    current[col] = head;
                }
            }

            out.push(current);
            match continuation {
                Some(next) => current = next,
                None => break,
            }
        }
    }

    out
}

/// Split `s` after `width` chars, or `None` if it already fits.
fn split_at_chars(s: &str, width: usize) -> Option<(String, String)> {
    let (idx, _) = s.char_indices().nth(width)?;
    Some((s[..idx].to_string(), s[idx..].to_string()))
}

/// Pad `cell` with spaces to exactly `width` chars.
///
/// Center justification puts `round((width - len) / 2)` spaces on the left,
/// rounding halves up, and the remaining slack on the right. Cells longer
/// than `width` are returned unchanged.
///
/// ## Example
///
/// ```
/// use escpos_receipt::protocol::text::Justification;
/// use escpos_receipt::table::justify_cell;
///
/// assert_eq!(justify_cell("ab", 6, Justification::Center), "  ab  ");
/// assert_eq!(justify_cell("ab", 5, Justification::Center), "  ab ");
/// assert_eq!(justify_cell("ab", 5, Justification::Right), "   ab");
/// ```
pub fn justify_cell(cell: &str, width: usize, justification: Justification) -> String {
    let len = cell.chars().count();
    let slack = width.saturating_sub(len);

    let left = match justification {
        Justification::Left => 0,
        Justification::Right => slack,
        Justification::Center => slack.div_ceil(2),
    };

    let mut out = String::with_capacity(cell.len() + slack);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(cell);
    out.extend(std::iter::repeat_n(' ', slack - left));
    out
}

// ============================================================================
// TESTS
// ============================================================================
