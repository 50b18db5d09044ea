//! Color parsing and representation

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An RGBA color with channels in `[0, 1]`, as the service expects
///
/// Channels are clamped on construction, so a `Color` is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Named colors accepted by [`Color::parse`], matched case-insensitively
const NAMED_COLORS: [(&str, Color); 9] = [
    ("black", Color::BLACK),
    ("white", Color::WHITE),
    ("red", Color::RED),
    ("green", Color::GREEN),
    ("blue", Color::BLUE),
    ("yellow", Color::rgb(1.0, 1.0, 0.0)),
    ("purple", Color::rgb(0.5, 0.0, 0.5)),
    ("orange", Color::rgb(1.0, 0.65, 0.0)),
    ("gray", Color::rgb(0.5, 0.5, 0.5)),
];

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    /// Create an opaque color (alpha = 1.0); not clamped, const context
    const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Create an opaque color, clamping each channel to `[0, 1]`
    pub fn new(red: f32, green: f32, blue: f32) -> Self {
        Self::with_alpha(red, green, blue, 1.0)
    }

    /// Create a color with an explicit alpha, clamping all channels
    pub fn with_alpha(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red: red.clamp(0.0, 1.0),
            green: green.clamp(0.0, 1.0),
            blue: blue.clamp(0.0, 1.0),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Parse a color string, falling back to opaque black
    ///
    /// Tries, in order: the named-color table, `#rrggbb[aa]` hex (3-digit
    /// shorthand expands by doubling each nibble), and `rgb(r, g, b)`.
    /// Anything that matches none of those degrades to opaque black rather
    /// than erroring; this silent fallback is kept for compatibility with
    /// callers that relied on it, and emits a warning so it stays
    /// observable. Use [`Color::parse_strict`] to get an error instead.
    ///
    /// # Examples
    /// ```
    /// use sheetwire_core::Color;
    ///
    /// assert_eq!(Color::parse("white"), Color::WHITE);
    /// assert_eq!(Color::parse("#f00"), Color::RED);
    /// assert_eq!(Color::parse("rgb(0, 0, 255)"), Color::BLUE);
    /// assert_eq!(Color::parse("not-a-color"), Color::BLACK);
    /// ```
    pub fn parse(s: &str) -> Color {
        match Self::parse_strict(s) {
            Ok(color) => color,
            Err(_) => {
                tracing::warn!(input = s, "unparseable color, falling back to black");
                Color::BLACK
            }
        }
    }

    /// Parse a color string, erroring on malformed input
    pub fn parse_strict(s: &str) -> Result<Color> {
        let s = s.trim();

        let lower = s.to_ascii_lowercase();
        if let Some((_, color)) = NAMED_COLORS.iter().find(|(name, _)| *name == lower) {
            return Ok(*color);
        }

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex).ok_or_else(|| Error::InvalidColor(s.to_string()));
        }

        if let Some(color) = Self::parse_rgb_call(s) {
            return Ok(color);
        }

        Err(Error::InvalidColor(s.to_string()))
    }

    /// Parse hex digits (no leading `#`): 3 = shorthand RGB, 6 = RGB, 8 = RGBA
    fn parse_hex(hex: &str) -> Option<Color> {
        let expanded;
        let hex = if hex.len() == 3 {
            expanded = hex.chars().flat_map(|c| [c, c]).collect::<String>();
            expanded.as_str()
        } else {
            hex
        };

        if hex.len() != 6 && hex.len() != 8 {
            return None;
        }

        let byte = |range: std::ops::Range<usize>| -> Option<f32> {
            u8::from_str_radix(hex.get(range)?, 16)
                .ok()
                .map(|b| b as f32 / 255.0)
        };

        let red = byte(0..2)?;
        let green = byte(2..4)?;
        let blue = byte(4..6)?;
        let alpha = if hex.len() == 8 { byte(6..8)? } else { 1.0 };

        Some(Color::with_alpha(red, green, blue, alpha))
    }

    /// Parse the `rgb(r, g, b)` form; integers are divided by 255
    fn parse_rgb_call(s: &str) -> Option<Color> {
        let body = s.strip_prefix("rgb(")?.strip_suffix(')')?;
        let mut channels = body.split(',').map(|part| {
            let part = part.trim();
            if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) {
                part.parse::<u32>().ok().map(|n| n as f32 / 255.0)
            } else {
                None
            }
        });

        let red = channels.next()??;
        let green = channels.next()??;
        let blue = channels.next()??;
        if channels.next().is_some() {
            return None;
        }

        Some(Color::new(red, green, blue))
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque
    pub fn to_hex(&self) -> String {
        let to_byte = |c: f32| (c * 255.0).round() as u8;
        let (r, g, b, a) = (
            to_byte(self.red),
            to_byte(self.green),
            to_byte(self.blue),
            to_byte(self.alpha),
        );
        if a < 255 {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        } else {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_strict(s)
    }
}
