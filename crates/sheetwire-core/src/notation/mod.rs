//! A1 notation parsing
//!
//! This module contains the human-readable side of the translation layer:
//! - [`letters_to_index`] / [`index_to_letters`] - column letter conversions
//! - [`CellRef`] - a single cell reference
//! - [`CellRangeRef`] - an inclusive cell range
//! - [`RangeNotation`] - a range with an optional sheet qualifier

mod cell_ref;
mod column;
mod range;

pub use cell_ref::CellRef;
pub use column::{index_to_letters, letters_to_index};
pub use range::{quote_sheet_name, CellRangeRef, RangeNotation};
