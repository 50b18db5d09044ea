//! # sheetwire
//!
//! Translation between A1 range notation and the zero-based, half-open
//! grid coordinates a spreadsheet service's structured update API expects,
//! plus builders for the format descriptors and batch-update request
//! bodies sent alongside them.
//!
//! Sheetwire does no I/O: authentication, transport, and the service
//! itself are the caller's concern. This crate only produces and parses
//! the structured values exchanged with them.
//!
//! ## Example
//!
//! ```rust
//! use sheetwire::prelude::*;
//! use sheetwire::requests::{format_cells, Request};
//!
//! // Sheet ids come from the caller (usually a spreadsheet metadata fetch)
//! let sheets = SheetIndex::new().with_sheet("Report", 412).with_default(0);
//!
//! let grid = RangeNotation::parse("Report!B2:D10")
//!     .unwrap()
//!     .to_grid_range(&sheets)
//!     .unwrap();
//!
//! let request = format_cells(
//!     grid,
//!     &FormatOptions::new()
//!         .background_color(Color::parse("#ff8000"))
//!         .bold(true),
//! );
//! assert_eq!(
//!     request.fields,
//!     "userEnteredFormat(backgroundColor,textFormat.bold)"
//! );
//! ```

pub mod prelude;
pub mod requests;

// Re-export request types
pub use requests::{
    BatchUpdateBody, CellData, MergeCellsRequest, MergeType, RepeatCellRequest, Request,
    UpdateBordersRequest,
};

// Re-export core types
pub use sheetwire_core::{
    index_to_letters,
    letters_to_index,
    quote_sheet_name,
    // Chart types
    AddChartRequest,
    AddConditionalFormatRuleRequest,
    AxisPosition,
    BasicChartSpec,
    ChartKind,
    ChartOptions,
    ChartSpec,
    ChartType,
    EmbeddedChart,
    LegendPosition,
    PieChartSpec,
    UpdateChartSpecRequest,
    BooleanCondition,
    BooleanRule,
    Border,
    BorderLineStyle,
    Borders,
    // Notation types
    CellRangeRef,
    CellRef,
    // Format types
    CellFormat,
    Color,
    // Conditional formatting types
    ConditionType,
    ConditionValue,
    ConditionalFormatRule,
    // Error types
    Error,
    FieldMask,
    FormatOptions,
    GradientRule,
    // Grid types
    GridRange,
    HorizontalAlignment,
    InterpolationPoint,
    InterpolationPointType,
    NumberFormat,
    NumberFormatType,
    RangeNotation,
    Result,
    RuleKind,
    SheetIndex,
    SheetResolver,
    TextFormat,
    VerticalAlignment,
};
