//! MCP generate_chart tool: render a chart through the rendering service.

use std::borrow::Cow;

use rmcp::model::CallToolResult;
use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::to_call_tool_result;
use crate::chart::ChartInput;
use crate::marshal::Marshaler;

/// Input parameters for the generate_chart tool.
///
/// Accepts any JSON object so that arguments of the wrong shape still reach
/// the marshaler and come back as a tool error. The advertised schema is the
/// one of [`ChartInput`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct GenerateChartInput(pub Map<String, Value>);

impl JsonSchema for GenerateChartInput {
    fn schema_name() -> Cow<'static, str> {
        ChartInput::schema_name()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        ChartInput::json_schema(generator)
    }
}

/// Execute the generate_chart tool logic.
pub async fn run_generate_chart(
    marshaler: &Marshaler,
    input: GenerateChartInput,
) -> CallToolResult {
    to_call_tool_result(marshaler.generate_chart_from_arguments(Value::Object(input.0)).await)
}
