//! Number format descriptor and pattern-type inference

use serde::{Deserialize, Serialize};

/// Number format for cell display
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberFormat {
    /// Format category understood by the service
    #[serde(rename = "type")]
    pub format_type: NumberFormatType,
    /// Pattern string (e.g. "#,##0.00"); optional for type-only formats
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl NumberFormat {
    /// Create a format with an explicit type and pattern
    pub fn new<S: Into<String>>(format_type: NumberFormatType, pattern: S) -> Self {
        Self {
            format_type,
            pattern: Some(pattern.into()),
        }
    }

    /// Create a format from a pattern alone, inferring its type
    ///
    /// # Examples
    /// ```
    /// use sheetwire_core::{NumberFormat, NumberFormatType};
    ///
    /// let format = NumberFormat::from_pattern("$#,##0.00");
    /// assert_eq!(format.format_type, NumberFormatType::Currency);
    /// ```
    pub fn from_pattern<S: Into<String>>(pattern: S) -> Self {
        let pattern = pattern.into();
        Self {
            format_type: NumberFormatType::infer(&pattern),
            pattern: Some(pattern),
        }
    }
}

/// Number format categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberFormatType {
    Percent,
    Currency,
    Date,
    Time,
    Number,
    Text,
}

impl NumberFormatType {
    /// Infer the format type from a pattern string
    ///
    /// The precedence is deterministic and order matters: a pattern
    /// containing both `%` and `$` is PERCENT, not CURRENCY. Date checks
    /// key on `Y`/`D`, time checks on `H`/`SS`, and an `M` run (month vs.
    /// minute) counts as a date unless a time anchor is present, so `mmm`
    /// is a month but `h:mm` is a time.
    pub fn infer(pattern: &str) -> Self {
        let upper = pattern.to_ascii_uppercase();

        if upper.contains('%') {
            Self::Percent
        } else if upper.contains('$') || upper.contains('€') || upper.contains('£') {
            Self::Currency
        } else if upper.contains('Y') || upper.contains('D') {
            Self::Date
        } else if upper.contains('H') || upper.contains("SS") {
            Self::Time
        } else if upper.contains('M') {
            Self::Date
        } else if upper.contains('.') || upper.contains('#') || upper.contains('0') {
            Self::Number
        } else {
            Self::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer() {
        assert_eq!(NumberFormatType::infer("0%"), NumberFormatType::Percent);
        assert_eq!(NumberFormatType::infer("$0.00"), NumberFormatType::Currency);
        assert_eq!(NumberFormatType::infer("€0.00"), NumberFormatType::Currency);
        assert_eq!(NumberFormatType::infer("£0.00"), NumberFormatType::Currency);
        assert_eq!(NumberFormatType::infer("MM/DD/YYYY"), NumberFormatType::Date);
        assert_eq!(NumberFormatType::infer("d-mmm-yy"), NumberFormatType::Date);
        assert_eq!(NumberFormatType::infer("HH:MM:SS"), NumberFormatType::Time);
        assert_eq!(NumberFormatType::infer("h:mm"), NumberFormatType::Time);
        assert_eq!(NumberFormatType::infer("mm:ss"), NumberFormatType::Time);
        assert_eq!(NumberFormatType::infer("0.00"), NumberFormatType::Number);
        assert_eq!(NumberFormatType::infer("#,##0"), NumberFormatType::Number);
        assert_eq!(NumberFormatType::infer("@"), NumberFormatType::Text);
    }

    #[test]
    fn test_infer_precedence_is_load_bearing() {
        // PERCENT wins over CURRENCY when both symbols appear
        assert_eq!(NumberFormatType::infer("$0%"), NumberFormatType::Percent);
        // CURRENCY wins over DATE/NUMBER
        assert_eq!(NumberFormatType::infer("$ yy"), NumberFormatType::Currency);
    }

    #[test]
    fn test_month_only_patterns_are_dates() {
        // An M run with no H or SS anchor is a month, not minutes
        assert_eq!(NumberFormatType::infer("mmm"), NumberFormatType::Date);
        assert_eq!(NumberFormatType::infer("mm"), NumberFormatType::Date);
        assert_eq!(NumberFormatType::infer("mmmm"), NumberFormatType::Date);
    }

    #[test]
    fn test_from_pattern() {
        let format = NumberFormat::from_pattern("0%");
        assert_eq!(format.format_type, NumberFormatType::Percent);
        assert_eq!(format.pattern.as_deref(), Some("0%"));
    }

    #[test]
    fn test_wire_shape() {
        let value = serde_json::to_value(NumberFormat::from_pattern("0.00")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"type": "NUMBER", "pattern": "0.00"})
        );
    }
}
