//! Conditional formatting rules
//!
//! Rule bodies reference one or more [`GridRange`]s and carry either a
//! boolean condition with a format to apply, or a gradient over
//! interpolation points. The serialized shapes match the service's
//! `addConditionalFormatRule` request exactly.

use crate::grid::GridRange;
use crate::style::{CellFormat, Color, FormatOptions};
use serde::{Deserialize, Serialize};

/// A conditional formatting rule over one or more ranges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalFormatRule {
    /// Ranges the rule applies to
    pub ranges: Vec<GridRange>,
    /// The rule body (boolean or gradient)
    #[serde(flatten)]
    pub kind: RuleKind,
}

/// The two rule bodies the service understands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RuleKind {
    /// Apply a format when a condition holds
    #[serde(rename = "booleanRule")]
    Boolean(BooleanRule),
    /// Interpolate a background color across the range's values
    #[serde(rename = "gradientRule")]
    Gradient(GradientRule),
}

impl ConditionalFormatRule {
    /// Build a boolean rule from a condition and format options
    ///
    /// # Examples
    /// ```
    /// use sheetwire_core::{
    ///     Color, ConditionType, ConditionalFormatRule, FormatOptions, GridRange,
    /// };
    ///
    /// let range = GridRange {
    ///     sheet_id: 0,
    ///     start_row_index: 0,
    ///     end_row_index: 10,
    ///     start_column_index: 0,
    ///     end_column_index: 2,
    /// };
    /// let rule = ConditionalFormatRule::boolean(
    ///     range,
    ///     ConditionType::NumberGreater,
    ///     ["5"],
    ///     &FormatOptions::new().background_color(Color::RED),
    /// );
    /// ```
    pub fn boolean<I, S>(
        range: GridRange,
        condition_type: ConditionType,
        values: I,
        options: &FormatOptions,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (format, _) = options.build();
        Self {
            ranges: vec![range],
            kind: RuleKind::Boolean(BooleanRule {
                condition: BooleanCondition::new(condition_type, values),
                format,
            }),
        }
    }

    /// Build a boolean rule from a custom formula
    pub fn custom_formula<S: Into<String>>(
        range: GridRange,
        formula: S,
        options: &FormatOptions,
    ) -> Self {
        Self::boolean(range, ConditionType::CustomFormula, [formula], options)
    }

    /// Build a two-point gradient rule (min to max)
    pub fn gradient(range: GridRange, min: InterpolationPoint, max: InterpolationPoint) -> Self {
        Self {
            ranges: vec![range],
            kind: RuleKind::Gradient(GradientRule {
                minpoint: min,
                midpoint: None,
                maxpoint: max,
            }),
        }
    }

    /// Build a three-point gradient rule (min, mid, max)
    pub fn gradient_with_midpoint(
        range: GridRange,
        min: InterpolationPoint,
        mid: InterpolationPoint,
        max: InterpolationPoint,
    ) -> Self {
        Self {
            ranges: vec![range],
            kind: RuleKind::Gradient(GradientRule {
                minpoint: min,
                midpoint: Some(mid),
                maxpoint: max,
            }),
        }
    }

    /// Extend the rule to cover an additional range
    pub fn with_range(mut self, range: GridRange) -> Self {
        self.ranges.push(range);
        self
    }
}

/// A condition plus the format applied when it holds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanRule {
    pub condition: BooleanCondition,
    pub format: CellFormat,
}

/// A typed condition (e.g. NUMBER_GREATER with one operand)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanCondition {
    #[serde(rename = "type")]
    pub condition_type: ConditionType,
    /// Condition operands; omitted for operand-less types like BLANK
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub values: Vec<ConditionValue>,
}

impl BooleanCondition {
    /// Create a condition from a type and literal operands
    pub fn new<I, S>(condition_type: ConditionType, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            condition_type,
            values: values.into_iter().map(ConditionValue::literal).collect(),
        }
    }
}

/// A single condition operand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionValue {
    /// The literal the user entered, as a string
    pub user_entered_value: String,
}

impl ConditionValue {
    /// Wrap a literal operand
    pub fn literal<S: Into<String>>(value: S) -> Self {
        Self {
            user_entered_value: value.into(),
        }
    }
}

/// Condition vocabulary accepted by the service for conditional formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionType {
    NumberGreater,
    NumberGreaterThanEq,
    NumberLess,
    NumberLessThanEq,
    NumberEq,
    NumberNotEq,
    NumberBetween,
    NumberNotBetween,
    TextContains,
    TextNotContains,
    TextStartsWith,
    TextEndsWith,
    TextEq,
    DateEq,
    DateBefore,
    DateAfter,
    DateOnOrBefore,
    DateOnOrAfter,
    DateBetween,
    DateNotBetween,
    Blank,
    NotBlank,
    CustomFormula,
}

/// Gradient rule over min/mid/max interpolation points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientRule {
    pub minpoint: InterpolationPoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midpoint: Option<InterpolationPoint>,
    pub maxpoint: InterpolationPoint,
}

/// One anchor of a gradient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpolationPoint {
    pub color: Color,
    #[serde(rename = "type")]
    pub point_type: InterpolationPointType,
    /// Required for NUMBER/PERCENT/PERCENTILE anchors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl InterpolationPoint {
    /// Anchor at the range minimum
    pub fn min(color: Color) -> Self {
        Self {
            color,
            point_type: InterpolationPointType::Min,
            value: None,
        }
    }

    /// Anchor at the range maximum
    pub fn max(color: Color) -> Self {
        Self {
            color,
            point_type: InterpolationPointType::Max,
            value: None,
        }
    }

    /// Anchor at a percentile of the range values
    pub fn percentile<S: Into<String>>(color: Color, value: S) -> Self {
        Self {
            color,
            point_type: InterpolationPointType::Percentile,
            value: Some(value.into()),
        }
    }

    /// Anchor at a fixed number
    pub fn number<S: Into<String>>(color: Color, value: S) -> Self {
        Self {
            color,
            point_type: InterpolationPointType::Number,
            value: Some(value.into()),
        }
    }
}

/// How an interpolation point's value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterpolationPointType {
    Min,
    Max,
    Number,
    Percent,
    Percentile,
}

/// The `addConditionalFormatRule` request wrapper
///
/// New rules are always inserted at index 0 (highest priority). That is a
/// fixed policy, not a configuration knob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddConditionalFormatRuleRequest {
    pub rule: ConditionalFormatRule,
    pub index: u32,
}

impl AddConditionalFormatRuleRequest {
    /// Wrap a rule for insertion at the top of the rule list
    pub fn new(rule: ConditionalFormatRule) -> Self {
        Self { rule, index: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn range() -> GridRange {
        GridRange {
            sheet_id: 0,
            start_row_index: 0,
            end_row_index: 10,
            start_column_index: 0,
            end_column_index: 2,
        }
    }

    #[test]
    fn test_boolean_rule_wire_shape() {
        let rule = ConditionalFormatRule::boolean(
            range(),
            ConditionType::NumberGreater,
            ["5"],
            &FormatOptions::new().background_color(Color::RED),
        );
        let request = AddConditionalFormatRuleRequest::new(rule);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "rule": {
                    "ranges": [{
                        "sheetId": 0,
                        "startRowIndex": 0,
                        "endRowIndex": 10,
                        "startColumnIndex": 0,
                        "endColumnIndex": 2
                    }],
                    "booleanRule": {
                        "condition": {
                            "type": "NUMBER_GREATER",
                            "values": [{"userEnteredValue": "5"}]
                        },
                        "format": {
                            "backgroundColor": {
                                "red": 1.0, "green": 0.0, "blue": 0.0, "alpha": 1.0
                            }
                        }
                    }
                },
                "index": 0
            })
        );
    }

    #[test]
    fn test_operand_less_condition_omits_values() {
        let rule =
            ConditionalFormatRule::boolean(range(), ConditionType::NotBlank, Vec::<String>::new(), &FormatOptions::new());
        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(
            value["booleanRule"]["condition"],
            serde_json::json!({"type": "NOT_BLANK"})
        );
    }

    #[test]
    fn test_custom_formula_is_a_boolean_rule() {
        let rule = ConditionalFormatRule::custom_formula(
            range(),
            "=A1>B1",
            &FormatOptions::new().bold(true),
        );
        match &rule.kind {
            RuleKind::Boolean(body) => {
                assert_eq!(body.condition.condition_type, ConditionType::CustomFormula);
                assert_eq!(body.condition.values[0].user_entered_value, "=A1>B1");
            }
            other => panic!("expected boolean rule, got {:?}", other),
        }
    }

    #[test]
    fn test_gradient_rule_wire_shape() {
        let rule = ConditionalFormatRule::gradient_with_midpoint(
            range(),
            InterpolationPoint::min(Color::WHITE),
            InterpolationPoint::percentile(Color::parse("#ff8000"), "50"),
            InterpolationPoint::max(Color::RED),
        );

        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value["gradientRule"]["minpoint"]["type"], "MIN");
        assert_eq!(value["gradientRule"]["midpoint"]["type"], "PERCENTILE");
        assert_eq!(value["gradientRule"]["midpoint"]["value"], "50");
        assert_eq!(value["gradientRule"]["maxpoint"]["type"], "MAX");
    }

    #[test]
    fn test_insertion_index_is_always_zero() {
        let rule = ConditionalFormatRule::boolean(
            range(),
            ConditionType::TextContains,
            ["total"],
            &FormatOptions::new(),
        );
        assert_eq!(AddConditionalFormatRuleRequest::new(rule).index, 0);
    }

    #[test]
    fn test_with_range_appends() {
        let rule = ConditionalFormatRule::boolean(
            range(),
            ConditionType::Blank,
            Vec::<String>::new(),
            &FormatOptions::new(),
        )
        .with_range(range());
        assert_eq!(rule.ranges.len(), 2);
    }
}
