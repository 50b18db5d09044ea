//! Chart specifications
//!
//! Wire-shape builders for embedded charts: a [`ChartSpec`] is either a
//! basic chart (bar, line, column, area, scatter) or a pie chart, with its
//! data sourced from [`GridRange`]s. [`AddChartRequest`] and
//! [`UpdateChartSpecRequest`] wrap a spec for a batch update.

use crate::grid::GridRange;
use serde::{Deserialize, Serialize};

/// Chart types that can be created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChartType {
    Bar,
    Line,
    Column,
    Area,
    Scatter,
    Pie,
}

/// Where the chart legend is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegendPosition {
    Left,
    #[default]
    Right,
    Top,
    Bottom,
    None,
}

/// Options for building a chart spec
///
/// Like [`FormatOptions`](crate::FormatOptions), this is a typed bag
/// replacing a stringly-keyed option dictionary; unset options fall back
/// to the service's defaults (legend on the right, empty titles).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartOptions {
    pub title: Option<String>,
    pub legend_position: Option<LegendPosition>,
    pub h_axis_title: Option<String>,
    pub v_axis_title: Option<String>,
    /// Fraction of the pie cut out of the middle (pie charts only)
    pub pie_hole: Option<f64>,
}

impl ChartOptions {
    /// Create an empty set of options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chart title
    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the legend position
    pub fn legend_position(mut self, position: LegendPosition) -> Self {
        self.legend_position = Some(position);
        self
    }

    /// Set the horizontal axis title
    pub fn h_axis_title<S: Into<String>>(mut self, title: S) -> Self {
        self.h_axis_title = Some(title.into());
        self
    }

    /// Set the vertical axis title
    pub fn v_axis_title<S: Into<String>>(mut self, title: S) -> Self {
        self.v_axis_title = Some(title.into());
        self
    }

    /// Set the pie hole fraction (0 = solid pie, 0.5 = donut)
    pub fn pie_hole(mut self, fraction: f64) -> Self {
        self.pie_hole = Some(fraction);
        self
    }
}

/// A chart specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub title: String,
    #[serde(flatten)]
    pub kind: ChartKind,
}

/// The chart bodies the service understands here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartKind {
    #[serde(rename = "basicChart")]
    Basic(BasicChartSpec),
    #[serde(rename = "pieChart")]
    Pie(PieChartSpec),
}

impl ChartSpec {
    /// Build a chart spec of the given type over a data range
    ///
    /// Basic chart types get a bottom/left axis pair and a single series
    /// targeting the left axis, with the first row treated as headers.
    ///
    /// # Examples
    /// ```
    /// use sheetwire_core::{ChartOptions, ChartSpec, ChartType, GridRange};
    ///
    /// let data = GridRange {
    ///     sheet_id: 0,
    ///     start_row_index: 0,
    ///     end_row_index: 10,
    ///     start_column_index: 0,
    ///     end_column_index: 2,
    /// };
    /// let spec = ChartSpec::new(
    ///     ChartType::Column,
    ///     data,
    ///     &ChartOptions::new().title("Sales"),
    /// );
    /// assert_eq!(spec.title, "Sales");
    /// ```
    pub fn new(chart_type: ChartType, data: GridRange, options: &ChartOptions) -> Self {
        let title = options.title.clone().unwrap_or_default();
        let legend = options.legend_position.unwrap_or_default();
        let source_range = ChartSourceRange {
            sources: vec![data],
        };

        let kind = match chart_type {
            ChartType::Pie => ChartKind::Pie(PieChartSpec {
                legend_position: legend,
                domain: ChartData {
                    source_range: source_range.clone(),
                },
                series: ChartData { source_range },
                pie_hole: options.pie_hole.unwrap_or(0.0),
            }),
            basic => ChartKind::Basic(BasicChartSpec {
                chart_type: basic,
                legend_position: legend,
                axis: vec![
                    ChartAxis {
                        position: AxisPosition::BottomAxis,
                        title: options.h_axis_title.clone().unwrap_or_default(),
                    },
                    ChartAxis {
                        position: AxisPosition::LeftAxis,
                        title: options.v_axis_title.clone().unwrap_or_default(),
                    },
                ],
                domains: vec![ChartDomain {
                    domain: ChartData {
                        source_range: source_range.clone(),
                    },
                }],
                series: vec![ChartSeries {
                    series: ChartData { source_range },
                    target_axis: AxisPosition::LeftAxis,
                }],
                header_count: 1,
            }),
        };

        Self { title, kind }
    }
}

/// Spec body shared by the bar/line/column/area/scatter types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicChartSpec {
    pub chart_type: ChartType,
    pub legend_position: LegendPosition,
    pub axis: Vec<ChartAxis>,
    pub domains: Vec<ChartDomain>,
    pub series: Vec<ChartSeries>,
    /// Leading rows of the source data treated as headers
    pub header_count: i32,
}

/// Pie chart spec body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieChartSpec {
    pub legend_position: LegendPosition,
    pub domain: ChartData,
    pub series: ChartData,
    pub pie_hole: f64,
}

/// A titled chart axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartAxis {
    pub position: AxisPosition,
    pub title: String,
}

/// Axis slots on a basic chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisPosition {
    BottomAxis,
    LeftAxis,
    RightAxis,
}

/// A chart data reference (domain or series)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub source_range: ChartSourceRange,
}

/// The grid ranges a domain or series reads from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSourceRange {
    pub sources: Vec<GridRange>,
}

/// A domain of a basic chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDomain {
    pub domain: ChartData,
}

/// One series of a basic chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub series: ChartData,
    pub target_axis: AxisPosition,
}

/// A chart embedded on a sheet, with its spec and placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedChart {
    pub spec: ChartSpec,
    pub position: EmbeddedObjectPosition,
}

/// Placement of an embedded object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedObjectPosition {
    pub overlay_position: OverlayPosition,
}

/// A floating position anchored to a cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayPosition {
    pub anchor_cell: GridCoordinate,
    pub offset_x_pixels: i32,
    pub offset_y_pixels: i32,
    pub width_pixels: i32,
    pub height_pixels: i32,
}

impl OverlayPosition {
    /// A 600x400 chart anchored to a cell with no pixel offset
    pub fn anchored(anchor_cell: GridCoordinate) -> Self {
        Self {
            anchor_cell,
            offset_x_pixels: 0,
            offset_y_pixels: 0,
            width_pixels: 600,
            height_pixels: 400,
        }
    }
}

/// A single cell position on a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCoordinate {
    pub sheet_id: i64,
    pub row_index: u32,
    pub column_index: u32,
}

/// The `addChart` request wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChartRequest {
    pub chart: EmbeddedChart,
}

impl AddChartRequest {
    /// Embed a chart at the default position (600x400, anchored at A1 of
    /// the target sheet)
    pub fn new(sheet_id: i64, spec: ChartSpec) -> Self {
        Self {
            chart: EmbeddedChart {
                spec,
                position: EmbeddedObjectPosition {
                    overlay_position: OverlayPosition::anchored(GridCoordinate {
                        sheet_id,
                        row_index: 0,
                        column_index: 0,
                    }),
                },
            },
        }
    }
}

/// The `updateChartSpec` request wrapper, replacing an existing chart's spec
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChartSpecRequest {
    pub chart_id: i64,
    pub spec: ChartSpec,
}

impl UpdateChartSpecRequest {
    /// Replace the spec of the chart with the given id
    pub fn new(chart_id: i64, spec: ChartSpec) -> Self {
        Self { chart_id, spec }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn data() -> GridRange {
        GridRange {
            sheet_id: 3,
            start_row_index: 0,
            end_row_index: 10,
            start_column_index: 0,
            end_column_index: 2,
        }
    }

    #[test]
    fn test_basic_chart_spec_wire_shape() {
        let spec = ChartSpec::new(
            ChartType::Column,
            data(),
            &ChartOptions::new()
                .title("Sales Data")
                .legend_position(LegendPosition::Bottom)
                .h_axis_title("Month")
                .v_axis_title("Sales"),
        );

        let value = serde_json::to_value(&spec).unwrap();
        let source = serde_json::json!({
            "sources": [{
                "sheetId": 3,
                "startRowIndex": 0,
                "endRowIndex": 10,
                "startColumnIndex": 0,
                "endColumnIndex": 2
            }]
        });
        assert_eq!(
            value,
            serde_json::json!({
                "title": "Sales Data",
                "basicChart": {
                    "chartType": "COLUMN",
                    "legendPosition": "BOTTOM",
                    "axis": [
                        {"position": "BOTTOM_AXIS", "title": "Month"},
                        {"position": "LEFT_AXIS", "title": "Sales"}
                    ],
                    "domains": [{"domain": {"sourceRange": source}}],
                    "series": [{
                        "series": {"sourceRange": source},
                        "targetAxis": "LEFT_AXIS"
                    }],
                    "headerCount": 1
                }
            })
        );
    }

    #[test]
    fn test_pie_chart_spec_wire_shape() {
        let spec = ChartSpec::new(
            ChartType::Pie,
            data(),
            &ChartOptions::new().title("Share").pie_hole(0.4),
        );

        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["title"], "Share");
        assert_eq!(value["pieChart"]["legendPosition"], "RIGHT");
        assert_eq!(value["pieChart"]["pieHole"], 0.4);
        assert!(value.get("basicChart").is_none());
    }

    #[test]
    fn test_defaults() {
        let spec = ChartSpec::new(ChartType::Bar, data(), &ChartOptions::new());
        match &spec.kind {
            ChartKind::Basic(body) => {
                assert_eq!(body.legend_position, LegendPosition::Right);
                assert_eq!(body.header_count, 1);
                assert_eq!(body.axis[0].title, "");
            }
            other => panic!("expected basic chart, got {:?}", other),
        }
        assert_eq!(spec.title, "");
    }

    #[test]
    fn test_add_chart_default_position() {
        let request = AddChartRequest::new(
            7,
            ChartSpec::new(ChartType::Line, data(), &ChartOptions::new()),
        );
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value["chart"]["position"]["overlayPosition"],
            serde_json::json!({
                "anchorCell": {"sheetId": 7, "rowIndex": 0, "columnIndex": 0},
                "offsetXPixels": 0,
                "offsetYPixels": 0,
                "widthPixels": 600,
                "heightPixels": 400
            })
        );
    }

    #[test]
    fn test_update_chart_spec_wire_shape() {
        let request = UpdateChartSpecRequest::new(
            99,
            ChartSpec::new(ChartType::Line, data(), &ChartOptions::new().title("v2")),
        );
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["chartId"], 99);
        assert_eq!(value["spec"]["title"], "v2");
        assert_eq!(value["spec"]["basicChart"]["chartType"], "LINE");
    }
}
