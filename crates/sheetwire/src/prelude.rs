//! Convenient re-exports for common usage
//!
//! ```rust
//! use sheetwire::prelude::*;
//! ```

pub use crate::requests::{
    add_chart, add_conditional_format, format_cells, merge_cells, set_number_format,
    BatchUpdateBody, MergeCellsRequest, MergeType, RepeatCellRequest, Request,
    UpdateBordersRequest,
};
pub use sheetwire_core::{
    AddChartRequest, AddConditionalFormatRuleRequest, Border, BorderLineStyle, Borders,
    CellFormat, CellRangeRef, CellRef, ChartOptions, ChartSpec, ChartType, Color, ConditionType,
    ConditionalFormatRule, Error, FieldMask, FormatOptions, GridRange, HorizontalAlignment,
    InterpolationPoint, LegendPosition, NumberFormat, NumberFormatType, RangeNotation, Result,
    SheetIndex, SheetResolver, TextFormat, UpdateChartSpecRequest, VerticalAlignment,
};
