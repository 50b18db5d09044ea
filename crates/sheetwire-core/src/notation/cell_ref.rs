//! Single cell references

use crate::error::{Error, Result};
use crate::notation::column::{index_to_letters, letters_to_index};
use std::fmt;
use std::str::FromStr;

/// A single cell reference (e.g., "A1", "AB12")
///
/// Both indices are 0-based internally. In notation, rows are written
/// 1-based and columns as letters, so `A1` is row 0, column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    /// Column index (0-based, A = 0)
    pub col: u32,
    /// Row index (0-based internally, 1-based in notation)
    pub row: u32,
}

impl CellRef {
    /// Create a cell reference from 0-based indices
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Parse a cell reference from A1-style notation
    ///
    /// The accepted form is one or more letters followed by one or more
    /// digits; letters are case-insensitive. Row 0 has no valid mapping
    /// (notation rows are 1-based) and is rejected.
    ///
    /// # Examples
    /// ```
    /// use sheetwire_core::CellRef;
    ///
    /// let cell = CellRef::parse("B3").unwrap();
    /// assert_eq!(cell.col, 1);
    /// assert_eq!(cell.row, 2);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidNotation("empty cell reference".into()));
        }

        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (letters, digits) = s.split_at(split);

        if letters.is_empty() {
            return Err(Error::InvalidNotation(format!(
                "no column letters in '{}'",
                s
            )));
        }
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidNotation(format!("no row number in '{}'", s)));
        }

        let col = letters_to_index(letters)?;
        let row: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidNotation(format!("invalid row number in '{}'", s)))?;

        // Notation rows are 1-based
        if row == 0 {
            return Err(Error::InvalidNotation(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Ok(Self { col, row: row - 1 })
    }

    /// Format as A1-style notation
    pub fn to_a1(&self) -> String {
        format!("{}{}", index_to_letters(self.col), self.row + 1)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1())
    }
}

impl FromStr for CellRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
