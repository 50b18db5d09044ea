//! Column letter conversions
//!
//! Spreadsheet columns use bijective base-26 numbering: `A`-`Z` are digits
//! 1-26 and there is no digit for zero, so `Z` (25) is followed by `AA` (26).

use crate::error::{Error, Result};

/// Convert column letters to a 0-based index (`A` = 0, `Z` = 25, `AA` = 26).
///
/// Letters are case-insensitive. Fails on empty input, non-letter characters,
/// or an index that overflows `u32`.
///
/// # Examples
/// ```
/// use sheetwire_core::notation::letters_to_index;
///
/// assert_eq!(letters_to_index("A").unwrap(), 0);
/// assert_eq!(letters_to_index("aa").unwrap(), 26);
/// ```
pub fn letters_to_index(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidNotation("empty column letters".into()));
    }

    let mut index: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidNotation(format!(
                "invalid column letter '{}' in '{}'",
                c, letters
            )));
        }
        let digit = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        index = index
            .checked_mul(26)
            .and_then(|n| n.checked_add(digit))
            .ok_or_else(|| Error::InvalidNotation(format!("column '{}' out of range", letters)))?;
    }

    Ok(index - 1)
}

/// Convert a 0-based column index to letters (0 = `A`, 25 = `Z`, 26 = `AA`).
pub fn index_to_letters(index: u32) -> String {
    let mut result = String::new();
    let mut n = index as u64 + 1; // 1-based for the bijective divmod

    while n > 0 {
        n -= 1; // no zero digit
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}
