//! Cell ranges and sheet-qualified range notation

use crate::error::{Error, Result};
use crate::notation::cell_ref::CellRef;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A cell range in notation terms (e.g., "A1:B10")
///
/// Both endpoints are inclusive. A single cell is a degenerate range where
/// start == end. Endpoints are kept exactly as written; ordering is
/// normalized only when converting to a [`GridRange`](crate::GridRange).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRangeRef {
    /// Start cell (as written, usually top-left)
    pub start: CellRef,
    /// End cell (as written, usually bottom-right)
    pub end: CellRef,
}

impl CellRangeRef {
    /// Create a range between two cells
    pub fn new(start: CellRef, end: CellRef) -> Self {
        Self { start, end }
    }

    /// Create a single-cell range
    pub fn single(cell: CellRef) -> Self {
        Self {
            start: cell,
            end: cell,
        }
    }

    /// Parse a range from "A1:B10" notation
    ///
    /// Splits on the first `:`; with no `:` the result is a single-cell
    /// range. Either side failing to parse propagates the offending
    /// substring in the error.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        match s.split_once(':') {
            Some((start, end)) => Ok(Self::new(CellRef::parse(start)?, CellRef::parse(end)?)),
            None => Ok(Self::single(CellRef::parse(s)?)),
        }
    }

    /// Check if this is a single-cell range
    pub fn is_single_cell(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for CellRangeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_cell() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}:{}", self.start, self.end)
        }
    }
}

impl FromStr for CellRangeRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A full range expression with an optional sheet qualifier
/// (e.g., "Sheet1!A1:B10", "'My Sheet'!A1", or bare "A1:B10")
///
/// Parsing never resolves the sheet to an id; an unqualified range stays
/// unqualified until a concrete sheet id is needed (see
/// [`RangeNotation::to_grid_range`](crate::grid)).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeNotation {
    /// Sheet name, with surrounding quotes stripped (None = unqualified)
    pub sheet: Option<String>,
    /// The cell range part
    pub cells: CellRangeRef,
}

impl RangeNotation {
    /// Create a sheet-qualified range
    pub fn qualified<S: Into<String>>(sheet: S, cells: CellRangeRef) -> Self {
        Self {
            sheet: Some(sheet.into()),
            cells,
        }
    }

    /// Create an unqualified range
    pub fn unqualified(cells: CellRangeRef) -> Self {
        Self { sheet: None, cells }
    }

    /// Parse a range expression
    ///
    /// Splits on the first `!` into sheet qualifier and cell range;
    /// matching surrounding quotes (`'...'` or `"..."`) are stripped from
    /// the qualifier.
    ///
    /// # Examples
    /// ```
    /// use sheetwire_core::RangeNotation;
    ///
    /// let range = RangeNotation::parse("'My Sheet'!A1:B10").unwrap();
    /// assert_eq!(range.sheet.as_deref(), Some("My Sheet"));
    ///
    /// let bare = RangeNotation::parse("A1:B10").unwrap();
    /// assert!(bare.sheet.is_none());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        match s.split_once('!') {
            Some((sheet, cells)) => Ok(Self {
                sheet: Some(strip_quotes(sheet).to_string()),
                cells: CellRangeRef::parse(cells)?,
            }),
            None => Ok(Self {
                sheet: None,
                cells: CellRangeRef::parse(s)?,
            }),
        }
    }
}

impl fmt::Display for RangeNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sheet {
            Some(sheet) => write!(f, "{}!{}", quote_sheet_name(sheet), self.cells),
            None => write!(f, "{}", self.cells),
        }
    }
}

impl FromStr for RangeNotation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Strip one pair of matching surrounding quotes, if present
fn strip_quotes(s: &str) -> &str {
    if s.len() >= 2
        && ((s.starts_with('\'') && s.ends_with('\'')) || (s.starts_with('"') && s.ends_with('"')))
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// Quote a sheet name for notation output if it needs it
///
/// Quoting (single quotes) triggers on whitespace or any of `- ( ) &`.
pub fn quote_sheet_name(name: &str) -> Cow<'_, str> {
    if name
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '-' | '(' | ')' | '&'))
    {
        Cow::Owned(format!("'{}'", name))
    } else {
        Cow::Borrowed(name)
    }
}
