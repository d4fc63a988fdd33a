use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::arithmetic::{calculate_difference, calculate_mean, calculate_sum};
use crate::error::Result;
use crate::tools::base::{parse_arguments, ToolExecutor};
use crate::{ToolError, ToolFunction};

#[derive(Debug, Deserialize)]
struct ValuesArgs {
    values: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct PairArgs {
    num1: f64,
    num2: f64,
}

/// JSON has no encoding for infinities or NaN
fn number_value(result: f64) -> Result<Value> {
    if !result.is_finite() {
        return Err(ToolError::invalid_input(format!(
            "result is not a finite number: {}",
            result
        )));
    }
    Ok(serde_json::json!(result))
}

fn values_schema(description: &str) -> Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "values": {
                "type": "array",
                "items": { "type": "number" },
                "description": description
            }
        },
        "required": ["values"]
    })
}

/// Sum of a list of numbers
pub struct CalculateSumTool;

#[async_trait]
impl ToolExecutor for CalculateSumTool {
    async fn execute(&self, arguments: &str) -> Result<Value> {
        let args: ValuesArgs = parse_arguments("calculate_sum", arguments)?;
        number_value(calculate_sum(&args.values))
    }

    fn definition(&self) -> ToolFunction {
        ToolFunction {
            name: "calculate_sum".to_string(),
            description: Some("Calculate the sum of a list of values.".to_string()),
            parameters: values_schema("List of numerical values to sum"),
        }
    }
}

/// `num2 - num1`
pub struct CalculateDifferenceTool;

#[async_trait]
impl ToolExecutor for CalculateDifferenceTool {
    async fn execute(&self, arguments: &str) -> Result<Value> {
        let args: PairArgs = parse_arguments("calculate_difference", arguments)?;
        number_value(calculate_difference(args.num1, args.num2))
    }

    fn definition(&self) -> ToolFunction {
        ToolFunction {
            name: "calculate_difference".to_string(),
            description: Some(
                "Calculate the difference between two numbers. Returns the result of num2 - num1."
                    .to_string(),
            ),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "num1": { "type": "number", "description": "First number" },
                    "num2": { "type": "number", "description": "Second number" }
                },
                "required": ["num1", "num2"]
            }),
        }
    }
}

/// Arithmetic mean of a list of numbers
pub struct CalculateMeanTool;

#[async_trait]
impl ToolExecutor for CalculateMeanTool {
    async fn execute(&self, arguments: &str) -> Result<Value> {
        let args: ValuesArgs = parse_arguments("calculate_mean", arguments)?;
        number_value(calculate_mean(&args.values)?)
    }

    fn definition(&self) -> ToolFunction {
        ToolFunction {
            name: "calculate_mean".to_string(),
            description: Some("Calculate the mean of a list of values.".to_string()),
            parameters: values_schema("List of numerical values to calculate the mean of"),
        }
    }
}
