//! Batch-update request bodies
//!
//! These are the structured requests the core types exist to feed. Each
//! constructor consolidates a conversion the consuming call sites would
//! otherwise re-derive: range notation goes through the shared codec, the
//! format payload and its field mask are built together, and conditional
//! rules always land at index 0.

use serde::{Deserialize, Serialize};
use sheetwire_core::{
    AddChartRequest, AddConditionalFormatRuleRequest, Border, CellFormat, ChartOptions,
    ChartSpec, ChartType, ConditionType, ConditionalFormatRule, FormatOptions, GridRange,
    NumberFormat, UpdateChartSpecRequest,
};

/// One request inside a batch update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    RepeatCell(RepeatCellRequest),
    MergeCells(MergeCellsRequest),
    UpdateBorders(UpdateBordersRequest),
    AddConditionalFormatRule(AddConditionalFormatRuleRequest),
    AddChart(AddChartRequest),
    UpdateChartSpec(UpdateChartSpecRequest),
}

/// The body of a `batchUpdate` call
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateBody {
    pub requests: Vec<Request>,
}

impl BatchUpdateBody {
    /// Create an empty batch
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a request
    pub fn push(&mut self, request: Request) {
        self.requests.push(request);
    }
}

impl FromIterator<Request> for BatchUpdateBody {
    fn from_iter<I: IntoIterator<Item = Request>>(iter: I) -> Self {
        Self {
            requests: iter.into_iter().collect(),
        }
    }
}

/// Applies a format to every cell in a range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatCellRequest {
    pub range: GridRange,
    pub cell: CellData,
    /// Rendered field mask scoped under `userEnteredFormat`
    pub fields: String,
}

/// The cell payload of a repeat-cell request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellData {
    pub user_entered_format: CellFormat,
}

/// Build a repeat-cell request applying `options` to `range`
///
/// The field mask names exactly the options that were set, so unset
/// format fields on existing cells are left untouched.
///
/// # Examples
/// ```
/// use sheetwire::prelude::*;
/// use sheetwire::requests::format_cells;
///
/// let range = RangeNotation::parse("Sheet1!A1:B2")
///     .unwrap()
///     .to_grid_range(&SheetIndex::new().with_sheet("Sheet1", 0))
///     .unwrap();
/// let request = format_cells(range, &FormatOptions::new().bold(true));
/// assert_eq!(request.fields, "userEnteredFormat.textFormat.bold");
/// ```
pub fn format_cells(range: GridRange, options: &FormatOptions) -> RepeatCellRequest {
    let (format, fields) = options.build();
    RepeatCellRequest {
        range,
        cell: CellData {
            user_entered_format: format,
        },
        fields: fields.with_prefix("userEnteredFormat").to_string(),
    }
}

/// Build a repeat-cell request setting a number format from a pattern
///
/// The format type is inferred from the pattern ("0%" is PERCENT,
/// "$0.00" is CURRENCY, and so on).
pub fn set_number_format(range: GridRange, pattern: &str) -> RepeatCellRequest {
    format_cells(
        range,
        &FormatOptions::new().number_format(NumberFormat::from_pattern(pattern)),
    )
}

/// How cells combine when merging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MergeType {
    /// Merge the whole range into one cell
    MergeAll,
    /// Merge each column of the range
    MergeColumns,
    /// Merge each row of the range
    MergeRows,
}

/// Merges cells in a range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeCellsRequest {
    pub range: GridRange,
    pub merge_type: MergeType,
}

/// Build a merge-cells request
pub fn merge_cells(range: GridRange, merge_type: MergeType) -> MergeCellsRequest {
    MergeCellsRequest { range, merge_type }
}

/// Updates borders along the edges of a range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBordersRequest {
    pub range: GridRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Border>,
}

impl UpdateBordersRequest {
    /// Create a request with no edges set
    pub fn new(range: GridRange) -> Self {
        Self {
            range,
            top: None,
            bottom: None,
            left: None,
            right: None,
        }
    }

    /// Apply the same border to all four edges
    pub fn outline(range: GridRange, border: Border) -> Self {
        Self {
            range,
            top: Some(border.clone()),
            bottom: Some(border.clone()),
            left: Some(border.clone()),
            right: Some(border),
        }
    }
}

/// Build an add-conditional-format request from a condition and options
///
/// The rule is inserted at index 0, ahead of any existing rules.
pub fn add_conditional_format<I, S>(
    range: GridRange,
    condition_type: ConditionType,
    condition_values: I,
    options: &FormatOptions,
) -> AddConditionalFormatRuleRequest
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    AddConditionalFormatRuleRequest::new(ConditionalFormatRule::boolean(
        range,
        condition_type,
        condition_values,
        options,
    ))
}

/// Build an add-chart request over a data range
///
/// The chart lands at the sheet's default position (600x400, anchored at
/// the top-left cell of `anchor_sheet_id`); the data range may live on a
/// different sheet.
pub fn add_chart(
    anchor_sheet_id: i64,
    chart_type: ChartType,
    data: GridRange,
    options: &ChartOptions,
) -> AddChartRequest {
    AddChartRequest::new(anchor_sheet_id, ChartSpec::new(chart_type, data, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetwire_core::Color;

    fn range() -> GridRange {
        GridRange {
            sheet_id: 0,
            start_row_index: 0,
            end_row_index: 2,
            start_column_index: 0,
            end_column_index: 2,
        }
    }

    #[test]
    fn test_format_cells_fields() {
        let request = format_cells(
            range(),
            &FormatOptions::new()
                .background_color(Color::RED)
                .bold(true)
                .font_size(12),
        );
        assert_eq!(
            request.fields,
            "userEnteredFormat(backgroundColor,textFormat(bold,fontSize))"
        );
    }

    #[test]
    fn test_set_number_format_infers_type() {
        let request = set_number_format(range(), "0%");
        let format = request.cell.user_entered_format.number_format.unwrap();
        assert_eq!(format.pattern.as_deref(), Some("0%"));
        assert_eq!(
            serde_json::to_value(format.format_type).unwrap(),
            serde_json::json!("PERCENT")
        );
        assert_eq!(request.fields, "userEnteredFormat.numberFormat");
    }

    #[test]
    fn test_merge_cells_wire_shape() {
        let body: BatchUpdateBody =
            [Request::MergeCells(merge_cells(range(), MergeType::MergeAll))]
                .into_iter()
                .collect();
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "requests": [{
                    "mergeCells": {
                        "range": {
                            "sheetId": 0,
                            "startRowIndex": 0,
                            "endRowIndex": 2,
                            "startColumnIndex": 0,
                            "endColumnIndex": 2
                        },
                        "mergeType": "MERGE_ALL"
                    }
                }]
            })
        );
    }

    #[test]
    fn test_update_borders_outline() {
        let request = UpdateBordersRequest::outline(range(), Border::solid());
        assert_eq!(request.top, request.bottom);
        assert_eq!(request.left, request.right);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["top"]["style"], "SOLID");
        assert_eq!(value["top"]["width"], 1);
    }
}
