//! Chart request model
//!
//! Defines the argument shape accepted by the `generate_chart` tool and the
//! JSON body sent to the rendering service's `/plot` endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Chart kinds the rendering service knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
    Scatter,
    Pie,
}

impl ChartType {
    /// Every supported chart type, in the order they are advertised.
    pub const ALL: [ChartType; 4] =
        [ChartType::Line, ChartType::Bar, ChartType::Scatter, ChartType::Pie];

    /// Wire literal for this chart type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::Bar => "bar",
            ChartType::Scatter => "scatter",
            ChartType::Pie => "pie",
        }
    }

    /// Parse a wire literal. Matching is exact: `"Line"` is rejected.
    pub fn parse(value: &str) -> Result<Self, ChartValidationError> {
        Self::ALL.into_iter().find(|t| t.as_str() == value).ok_or_else(|| {
            ChartValidationError::UnknownChartType { value: value.to_string() }
        })
    }

    /// Accepted literals joined for error messages and tool descriptions.
    pub fn accepted() -> String {
        Self::ALL.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while turning tool arguments into a [`ChartRequest`].
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartValidationError {
    /// `chart_type` is not one of the supported literals
    #[error("unsupported chart_type '{value}' (expected one of: {})", ChartType::accepted())]
    UnknownChartType { value: String },
    /// Arguments do not have the shape of a chart request
    #[error("malformed arguments: {reason}")]
    MalformedArguments { reason: String },
    /// A data value cannot be represented in JSON
    #[error("data.values[{index}] is not a finite number ({value})")]
    NonFiniteValue { index: usize, value: f64 },
}

/// Labels and values of a single data series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub struct ChartData {
    /// Labels for data points
    pub labels: Vec<String>,

    /// Values for data points
    pub values: Vec<f64>,
}

/// Raw `generate_chart` arguments as delivered by the caller.
///
/// `chart_type` stays a plain string here so that an unsupported value is
/// reported as a chart validation failure rather than a schema mismatch.
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub struct ChartInput {
    /// Type of chart to generate
    #[cfg_attr(feature = "mcp", schemars(schema_with = "chart_type_schema"))]
    pub chart_type: String,

    /// Main title of the chart
    pub title: String,

    /// Subtitle of the chart (may be empty)
    pub subtitle: String,

    /// Label for the X-axis (may be empty)
    pub x_label: String,

    /// Label for the Y-axis (may be empty)
    pub y_label: String,

    /// Chart data with labels and values
    pub data: ChartData,
}

impl ChartInput {
    /// Decode untyped tool arguments.
    ///
    /// Missing fields and wrongly typed values are reported as
    /// [`ChartValidationError::MalformedArguments`].
    pub fn from_arguments(arguments: serde_json::Value) -> Result<Self, ChartValidationError> {
        serde_json::from_value(arguments)
            .map_err(|e| ChartValidationError::MalformedArguments { reason: e.to_string() })
    }
}

#[cfg(feature = "mcp")]
fn chart_type_schema(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
    schemars::json_schema!({
        "type": "string",
        "description": "Type of chart to generate",
        "enum": ["line", "bar", "scatter", "pie"]
    })
}

/// Body of `POST {base_url}/plot`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRequest {
    pub chart_type: ChartType,
    pub title: String,
    pub subtitle: String,
    pub data: ChartData,
    pub x_label: String,
    pub y_label: String,
}

impl ChartRequest {
    /// Validate caller arguments and build the outbound request.
    ///
    /// Label/value length mismatches are passed through; the rendering
    /// service owns that check.
    pub fn from_input(input: ChartInput) -> Result<Self, ChartValidationError> {
        let chart_type = ChartType::parse(&input.chart_type)?;

        if let Some((index, value)) =
            input.data.values.iter().enumerate().find(|(_, v)| !v.is_finite())
        {
            return Err(ChartValidationError::NonFiniteValue { index, value: *value });
        }

        Ok(Self {
            chart_type,
            title: input.title,
            subtitle: input.subtitle,
            data: input.data,
            x_label: input.x_label,
            y_label: input.y_label,
        })
    }
}
