use crate::{error::Result, ToolError};

/// Sum of all values; zero for an empty slice
pub fn calculate_sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Returns `num2 - num1`.
///
/// The operand order is part of the published tool contract and is kept as is.
pub fn calculate_difference(num1: f64, num2: f64) -> f64 {
    num2 - num1
}

/// Arithmetic mean. An empty slice is a division by zero and is rejected.
pub fn calculate_mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(ToolError::invalid_field("values", "division by zero"));
    }
    Ok(calculate_sum(values) / values.len() as f64)
}
