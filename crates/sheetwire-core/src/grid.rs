//! Grid ranges and sheet resolution
//!
//! [`GridRange`] is the numeric form the external service's structured
//! update API expects: zero-based indices, end-exclusive, addressed by a
//! numeric sheet id. The serialized field names (`sheetId`,
//! `startRowIndex`, ...) are part of the wire contract and must not change.

use crate::error::{Error, Result};
use crate::notation::{index_to_letters, quote_sheet_name, CellRangeRef, RangeNotation};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangular region on a sheet, zero-based and end-exclusive
///
/// Invariant: `end_*_index >= start_*_index` always holds, including for
/// degenerate single-cell ranges (where `end == start + 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRange {
    /// Numeric id of the sheet this range belongs to
    pub sheet_id: i64,
    /// First row (0-based, inclusive)
    pub start_row_index: u32,
    /// Last row + 1 (exclusive)
    pub end_row_index: u32,
    /// First column (0-based, inclusive)
    pub start_column_index: u32,
    /// Last column + 1 (exclusive)
    pub end_column_index: u32,
}

impl GridRange {
    /// Build a grid range from a notation cell range and a sheet id
    ///
    /// Endpoint order is normalized via min/max, so "B2:A1" covers the
    /// same region as "A1:B2".
    pub fn from_cells(cells: CellRangeRef, sheet_id: i64) -> Self {
        let (start_row, end_row) = min_max(cells.start.row, cells.end.row);
        let (start_col, end_col) = min_max(cells.start.col, cells.end.col);

        Self {
            sheet_id,
            start_row_index: start_row,
            end_row_index: end_row + 1,
            start_column_index: start_col,
            end_column_index: end_col + 1,
        }
    }

    /// Convert back to A1 notation, optionally qualified by a sheet name
    ///
    /// The inclusive last cell is recovered as `end - 1`. Output always
    /// uses the two-sided `A1:A1` form, and the sheet name is quoted when
    /// it needs it.
    ///
    /// # Examples
    /// ```
    /// use sheetwire_core::GridRange;
    ///
    /// let range = GridRange {
    ///     sheet_id: 0,
    ///     start_row_index: 0,
    ///     end_row_index: 1,
    ///     start_column_index: 0,
    ///     end_column_index: 1,
    /// };
    /// assert_eq!(range.to_notation(Some("Sheet 1")), "'Sheet 1'!A1:A1");
    /// ```
    pub fn to_notation(&self, sheet_name: Option<&str>) -> String {
        let start = format!(
            "{}{}",
            index_to_letters(self.start_column_index),
            self.start_row_index + 1
        );
        let end = format!(
            "{}{}",
            index_to_letters(self.end_column_index.saturating_sub(1).max(self.start_column_index)),
            self.end_row_index.max(self.start_row_index + 1)
        );

        match sheet_name {
            Some(name) => format!("{}!{}:{}", quote_sheet_name(name), start, end),
            None => format!("{}:{}", start, end),
        }
    }

    /// Number of rows covered
    ///
    /// Saturates to 0 if the end/start invariant was broken by hand, e.g.
    /// through direct field access or a malformed service response.
    pub fn row_count(&self) -> u32 {
        self.end_row_index.saturating_sub(self.start_row_index)
    }

    /// Number of columns covered
    pub fn column_count(&self) -> u32 {
        self.end_column_index.saturating_sub(self.start_column_index)
    }
}

impl fmt::Display for GridRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation(None))
    }
}

fn min_max(a: u32, b: u32) -> (u32, u32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Maps sheet qualifiers to numeric sheet ids
///
/// Parsing a [`RangeNotation`] never touches a resolver; one is consulted
/// only at the point a concrete [`GridRange`] is needed. `None` as the
/// qualifier means the notation was unqualified and the resolver's default
/// sheet applies.
pub trait SheetResolver {
    /// Resolve a qualifier (or the default sheet) to a sheet id
    fn resolve(&self, sheet: Option<&str>) -> Option<i64>;
}

impl<F> SheetResolver for F
where
    F: Fn(Option<&str>) -> Option<i64>,
{
    fn resolve(&self, sheet: Option<&str>) -> Option<i64> {
        self(sheet)
    }
}

/// A name → id lookup table with an optional default sheet
///
/// # Examples
/// ```
/// use sheetwire_core::{RangeNotation, SheetIndex};
///
/// let sheets = SheetIndex::new()
///     .with_sheet("Sheet1", 0)
///     .with_sheet("Data", 123)
///     .with_default(0);
///
/// let range = RangeNotation::parse("Data!A1:B2").unwrap();
/// let grid = range.to_grid_range(&sheets).unwrap();
/// assert_eq!(grid.sheet_id, 123);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SheetIndex {
    by_name: AHashMap<String, i64>,
    default: Option<i64>,
}

impl SheetIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named sheet
    pub fn with_sheet<S: Into<String>>(mut self, name: S, id: i64) -> Self {
        self.by_name.insert(name.into(), id);
        self
    }

    /// Set the sheet used for unqualified ranges
    pub fn with_default(mut self, id: i64) -> Self {
        self.default = Some(id);
        self
    }
}

impl SheetResolver for SheetIndex {
    fn resolve(&self, sheet: Option<&str>) -> Option<i64> {
        match sheet {
            Some(name) => self.by_name.get(name).copied(),
            None => self.default,
        }
    }
}

impl RangeNotation {
    /// Convert to a [`GridRange`], resolving the sheet qualifier
    ///
    /// This is the point where an unresolvable sheet becomes an error;
    /// parsing alone never requires resolution.
    pub fn to_grid_range<R: SheetResolver>(&self, resolver: &R) -> Result<GridRange> {
        let sheet_id = resolver
            .resolve(self.sheet.as_deref())
            .ok_or_else(|| match &self.sheet {
                Some(name) => Error::UnresolvedSheet(name.clone()),
                None => Error::UnresolvedSheet("no default sheet for unqualified range".into()),
            })?;

        Ok(GridRange::from_cells(self.cells, sheet_id))
    }
}
