use std::time::Duration;
use thiserror::Error;

/// Suggested backoff attached to every failure raised by the table dispatcher
pub const RETRY_AFTER: Duration = Duration::from_millis(500);

/// Error types surfaced by the DreamFactory tools
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolError {
    // Transport / decoding failures, all treated as transient
    #[error("{}", retryable_message(.operation, .table, .message))]
    Retryable {
        operation: String,
        table: Option<String>,
        message: String,
        retry_after: Duration,
    },

    // Caller input errors
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
    },

    #[error("Invalid tool parameters for {tool_name}: {message}")]
    InvalidToolParameters { tool_name: String, message: String },

    #[error("Tool not found: {tool_name}")]
    ToolNotFound {
        tool_name: String,
        available_tools: Vec<String>,
    },

    // Configuration errors
    #[error("Missing required configuration: {field}")]
    MissingConfiguration { field: String, description: String },

    #[error("Serialization error: {message}")]
    SerializationError { message: String },
}

fn retryable_message(operation: &str, table: &Option<String>, message: &str) -> String {
    match table {
        Some(table) => format!("Failed to {operation} for table {table}: {message}"),
        None => format!("Failed to {operation}: {message}"),
    }
}

impl ToolError {
    /// Build a retryable failure with the standard backoff
    pub fn retryable(
        operation: impl Into<String>,
        table: Option<&str>,
        cause: impl std::fmt::Display,
    ) -> Self {
        ToolError::Retryable {
            operation: operation.into(),
            table: table.map(str::to_string),
            message: cause.to_string(),
            retry_after: RETRY_AFTER,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        ToolError::InvalidInput {
            message: message.into(),
            field: None,
        }
    }

    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        ToolError::InvalidInput {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Check if the caller should re-attempt the operation
    pub fn is_retryable(&self) -> bool {
        matches!(self, ToolError::Retryable { .. })
    }

    /// Get retry delay if applicable
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            ToolError::Retryable { retry_after, .. } => Some(*retry_after),
            _ => None,
        }
    }

    /// Get the table this error refers to, if any
    pub fn table(&self) -> Option<&str> {
        match self {
            ToolError::Retryable { table, .. } => table.as_deref(),
            _ => None,
        }
    }

    /// Whether the error was caused by the caller rather than the environment
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ToolError::InvalidInput { .. }
                | ToolError::InvalidToolParameters { .. }
                | ToolError::ToolNotFound { .. }
        )
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        ToolError::SerializationError {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_message_with_table() {
        let err = ToolError::retryable("get records", Some("users"), "connection refused");
        assert_eq!(
            err.to_string(),
            "Failed to get records for table users: connection refused"
        );
        assert!(err.is_retryable());
        assert_eq!(err.retry_after(), Some(Duration::from_millis(500)));
        assert_eq!(err.table(), Some("users"));
    }

    #[test]
    fn test_retryable_message_without_table() {
        let err = ToolError::retryable("list table names", None, "timed out");
        assert_eq!(err.to_string(), "Failed to list table names: timed out");
        assert_eq!(err.table(), None);
    }

    #[test]
    fn test_invalid_input_is_not_retryable() {
        let err = ToolError::invalid_input("division by zero");
        assert!(!err.is_retryable());
        assert!(err.is_user_error());
        assert_eq!(err.retry_after(), None);
        assert_eq!(err.to_string(), "Invalid input: division by zero");
    }

    #[test]
    fn test_missing_configuration_is_not_user_error() {
        let err = ToolError::MissingConfiguration {
            field: "DREAM_FACTORY_API_KEY".to_string(),
            description: "API key".to_string(),
        };
        assert!(!err.is_retryable());
        assert!(!err.is_user_error());
    }
}
