//! Border descriptors

use crate::style::Color;
use serde::{Deserialize, Serialize};

/// Borders for the four edges of a cell region
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Borders {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Border>,
}

impl Borders {
    /// No borders set
    pub fn new() -> Self {
        Self::default()
    }

    /// The same border on all four edges
    pub fn all(border: Border) -> Self {
        Self {
            top: Some(border.clone()),
            bottom: Some(border.clone()),
            left: Some(border.clone()),
            right: Some(border),
        }
    }

    /// Set the top border
    pub fn with_top(mut self, border: Border) -> Self {
        self.top = Some(border);
        self
    }

    /// Set the bottom border
    pub fn with_bottom(mut self, border: Border) -> Self {
        self.bottom = Some(border);
        self
    }

    /// Set the left border
    pub fn with_left(mut self, border: Border) -> Self {
        self.left = Some(border);
        self
    }

    /// Set the right border
    pub fn with_right(mut self, border: Border) -> Self {
        self.right = Some(border);
        self
    }

    /// Check if no edges are set
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none() && self.left.is_none() && self.right.is_none()
    }
}

/// A single border edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Border {
    /// Line style
    pub style: BorderLineStyle,
    /// Line width in pixels
    pub width: i32,
    /// Line color
    pub color: Color,
}

impl Border {
    /// Create a border edge
    pub fn new(style: BorderLineStyle, width: i32, color: Color) -> Self {
        Self {
            style,
            width,
            color,
        }
    }

    /// A 1px solid black border, the service's common default
    pub fn solid() -> Self {
        Self::new(BorderLineStyle::Solid, 1, Color::BLACK)
    }
}

impl Default for Border {
    fn default() -> Self {
        Self::solid()
    }
}

/// Border line styles understood by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BorderLineStyle {
    #[default]
    Solid,
    SolidMedium,
    SolidThick,
    Dotted,
    Dashed,
    Double,
    None,
}
