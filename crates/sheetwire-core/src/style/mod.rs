//! Cell format descriptors
//!
//! This module contains the format payload types and the options builder:
//! - [`Color`] - normalized RGBA color with string parsing
//! - [`TextFormat`] - bold/italic/font settings
//! - [`NumberFormat`] - number format type + pattern
//! - [`Borders`] - edge borders
//! - [`FormatOptions`] - the typed options bag; [`FormatOptions::build`]
//!   produces a [`CellFormat`] payload and the matching field mask

mod alignment;
mod border;
mod color;
mod number_format;
mod text_format;

pub use alignment::{HorizontalAlignment, VerticalAlignment};
pub use border::{Border, BorderLineStyle, Borders};
pub use color::Color;
pub use number_format::{NumberFormat, NumberFormatType};
pub use text_format::TextFormat;

use crate::field_mask::FieldMask;
use serde::{Deserialize, Serialize};

/// The `userEnteredFormat` payload sent to the service
///
/// Only explicitly-set fields serialize, so a payload is always consistent
/// with the field mask built alongside it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellFormat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_format: Option<TextFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<HorizontalAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_alignment: Option<VerticalAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_format: Option<NumberFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borders: Option<Borders>,
}

/// Formatting options for a cell range
///
/// Every recognized option is a typed field, so unrecognized keys are
/// unrepresentable. [`build`](Self::build) includes exactly the set fields
/// in the payload and appends their dotted paths to the field mask in a
/// fixed declaration order, making the mask independent of the order
/// setters were called in.
///
/// # Examples
/// ```
/// use sheetwire_core::{Color, FormatOptions};
///
/// let (format, fields) = FormatOptions::new()
///     .background_color(Color::parse("#FF8000"))
///     .bold(true)
///     .font_size(12)
///     .build();
///
/// assert!(format.background_color.is_some());
/// assert_eq!(
///     fields.to_string(),
///     "backgroundColor,textFormat(bold,fontSize)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormatOptions {
    pub background_color: Option<Color>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub strikethrough: Option<bool>,
    pub font_family: Option<String>,
    pub font_size: Option<i32>,
    pub foreground_color: Option<Color>,
    pub horizontal_alignment: Option<HorizontalAlignment>,
    pub vertical_alignment: Option<VerticalAlignment>,
    pub number_format: Option<NumberFormat>,
    pub borders: Option<Borders>,
}

impl FormatOptions {
    /// Create an empty set of options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background color
    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Set bold text
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Set italic text
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Set underlined text
    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    /// Set struck-through text
    pub fn strikethrough(mut self, strikethrough: bool) -> Self {
        self.strikethrough = Some(strikethrough);
        self
    }

    /// Set the font family
    pub fn font_family<S: Into<String>>(mut self, family: S) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Set the font size in points
    pub fn font_size(mut self, size: i32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set the text color
    pub fn foreground_color(mut self, color: Color) -> Self {
        self.foreground_color = Some(color);
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.horizontal_alignment = Some(align);
        self
    }

    /// Set vertical alignment
    pub fn vertical_alignment(mut self, align: VerticalAlignment) -> Self {
        self.vertical_alignment = Some(align);
        self
    }

    /// Set the number format
    pub fn number_format(mut self, format: NumberFormat) -> Self {
        self.number_format = Some(format);
        self
    }

    /// Set borders
    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = Some(borders);
        self
    }

    /// Check if no options are set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Build the format payload and the field mask naming what was set
    ///
    /// Identical inputs always produce an identical mask; the path order
    /// is the declaration order of the options, not setter call order.
    pub fn build(&self) -> (CellFormat, FieldMask) {
        let mut format = CellFormat::default();
        let mut fields = FieldMask::new();

        if let Some(color) = self.background_color {
            format.background_color = Some(color);
            fields.push("backgroundColor");
        }

        let mut text = TextFormat::default();
        if let Some(bold) = self.bold {
            text.bold = Some(bold);
            fields.push("textFormat.bold");
        }
        if let Some(italic) = self.italic {
            text.italic = Some(italic);
            fields.push("textFormat.italic");
        }
        if let Some(underline) = self.underline {
            text.underline = Some(underline);
            fields.push("textFormat.underline");
        }
        if let Some(strikethrough) = self.strikethrough {
            text.strikethrough = Some(strikethrough);
            fields.push("textFormat.strikethrough");
        }
        if let Some(family) = &self.font_family {
            text.font_family = Some(family.clone());
            fields.push("textFormat.fontFamily");
        }
        if let Some(size) = self.font_size {
            text.font_size = Some(size);
            fields.push("textFormat.fontSize");
        }
        if let Some(color) = self.foreground_color {
            text.foreground_color = Some(color);
            fields.push("textFormat.foregroundColor");
        }
        if !text.is_empty() {
            format.text_format = Some(text);
        }

        if let Some(align) = self.horizontal_alignment {
            format.horizontal_alignment = Some(align);
            fields.push("horizontalAlignment");
        }
        if let Some(align) = self.vertical_alignment {
            format.vertical_alignment = Some(align);
            fields.push("verticalAlignment");
        }
        if let Some(number_format) = &self.number_format {
            format.number_format = Some(number_format.clone());
            fields.push("numberFormat");
        }
        if let Some(borders) = &self.borders {
            format.borders = Some(borders.clone());
            fields.push("borders");
        }

        (format, fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_empty() {
        let (format, fields) = FormatOptions::new().build();
        assert_eq!(format, CellFormat::default());
        assert!(fields.is_empty());
    }

    #[test]
    fn test_build_includes_only_set_fields() {
        let (format, fields) = FormatOptions::new()
            .bold(true)
            .number_format(NumberFormat::from_pattern("0.00"))
            .build();

        assert!(format.background_color.is_none());
        assert_eq!(format.text_format.as_ref().unwrap().bold, Some(true));
        assert_eq!(
            fields.paths(),
            ["textFormat.bold", "numberFormat"]
        );
    }

    #[test]
    fn test_mask_order_independent_of_setter_order() {
        let a = FormatOptions::new()
            .font_size(10)
            .background_color(Color::RED)
            .bold(true)
            .build()
            .1;
        let b = FormatOptions::new()
            .bold(true)
            .background_color(Color::RED)
            .font_size(10)
            .build()
            .1;
        assert_eq!(a, b);
        assert_eq!(
            a.to_string(),
            "backgroundColor,textFormat(bold,fontSize)"
        );
    }

    #[test]
    fn test_build_is_idempotent() {
        let options = FormatOptions::new()
            .italic(true)
            .horizontal_alignment(HorizontalAlignment::Center);
        assert_eq!(options.build(), options.build());
    }

    #[test]
    fn test_payload_wire_shape() {
        let (format, _) = FormatOptions::new()
            .background_color(Color::RED)
            .bold(true)
            .horizontal_alignment(HorizontalAlignment::Center)
            .build();

        let value = serde_json::to_value(&format).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "backgroundColor": {"red": 1.0, "green": 0.0, "blue": 0.0, "alpha": 1.0},
                "textFormat": {"bold": true},
                "horizontalAlignment": "CENTER"
            })
        );
    }
}
