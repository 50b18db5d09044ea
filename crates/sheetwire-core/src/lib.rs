//! # sheetwire-core
//!
//! Translation layer between human-readable spreadsheet range notation
//! (`Sheet1!A1:B10`) and the zero-based, half-open grid coordinates a
//! remote spreadsheet service's structured update API expects, plus the
//! format/rule descriptors sent alongside those coordinates.
//!
//! Everything here is a pure function over immutable inputs: no I/O, no
//! shared state, safe to call concurrently without synchronization.
//!
//! ## Example
//!
//! ```rust
//! use sheetwire_core::{Color, FormatOptions, RangeNotation, SheetIndex};
//!
//! let sheets = SheetIndex::new().with_sheet("Sheet1", 0).with_default(0);
//!
//! // Notation -> grid coordinates
//! let range = RangeNotation::parse("Sheet1!A1:B10").unwrap();
//! let grid = range.to_grid_range(&sheets).unwrap();
//! assert_eq!(grid.end_row_index, 10); // end-exclusive
//!
//! // Format payload + field mask
//! let (format, fields) = FormatOptions::new()
//!     .background_color(Color::parse("#ff0000"))
//!     .bold(true)
//!     .build();
//! assert_eq!(fields.to_string(), "backgroundColor,textFormat.bold");
//! ```

pub mod chart;
pub mod conditional_format;
pub mod error;
pub mod field_mask;
pub mod grid;
pub mod notation;
pub mod style;

// Re-exports for convenience
pub use chart::{
    AddChartRequest, AxisPosition, BasicChartSpec, ChartAxis, ChartData, ChartDomain, ChartKind,
    ChartOptions, ChartSeries, ChartSourceRange, ChartSpec, ChartType, EmbeddedChart,
    EmbeddedObjectPosition, GridCoordinate, LegendPosition, OverlayPosition, PieChartSpec,
    UpdateChartSpecRequest,
};
pub use conditional_format::{
    AddConditionalFormatRuleRequest, BooleanCondition, BooleanRule, ConditionType,
    ConditionValue, ConditionalFormatRule, GradientRule, InterpolationPoint,
    InterpolationPointType, RuleKind,
};
pub use error::{Error, Result};
pub use field_mask::FieldMask;
pub use grid::{GridRange, SheetIndex, SheetResolver};
pub use notation::{
    index_to_letters, letters_to_index, quote_sheet_name, CellRangeRef, CellRef, RangeNotation,
};
pub use style::{
    Border, BorderLineStyle, Borders, CellFormat, Color, FormatOptions, HorizontalAlignment,
    NumberFormat, NumberFormatType, TextFormat, VerticalAlignment,
};
