use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::{error::Result, Tool, ToolCall, ToolError, ToolFunction, ToolType};

/// Trait for implementing tool executors
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute the tool with the given JSON arguments
    async fn execute(&self, arguments: &str) -> Result<Value>;

    /// Get the tool definition
    fn definition(&self) -> ToolFunction;
}

/// Deserialize tool-call arguments; an empty string counts as `{}`
pub(crate) fn parse_arguments<T: DeserializeOwned>(tool_name: &str, arguments: &str) -> Result<T> {
    let arguments = if arguments.trim().is_empty() {
        "{}"
    } else {
        arguments
    };
    serde_json::from_str(arguments).map_err(|e| ToolError::InvalidToolParameters {
        tool_name: tool_name.to_string(),
        message: e.to_string(),
    })
}

/// Registry for managing tools
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn ToolExecutor>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool
    pub fn register<S: Into<String>, E: ToolExecutor + 'static>(&mut self, name: S, executor: E) {
        self.tools.insert(name.into(), Arc::new(executor));
    }

    /// Get a tool executor by name
    pub fn get_executor(&self, name: &str) -> Option<Arc<dyn ToolExecutor>> {
        self.tools.get(name).cloned()
    }

    /// Convert to a vector of Tool definitions, sorted by name
    pub fn to_tools(&self) -> Vec<Tool> {
        let mut tools: Vec<Tool> = self
            .tools
            .iter()
            .map(|(name, executor)| {
                let mut definition = executor.definition();
                definition.name = name.clone(); // Ensure name matches registry key

                Tool {
                    r#type: ToolType::Function,
                    function: definition,
                }
            })
            .collect();
        tools.sort_by(|a, b| a.function.name.cmp(&b.function.name));
        tools
    }

    /// Get all tool names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Route a tool call to its executor
    pub async fn dispatch(&self, call: &ToolCall) -> Result<Value> {
        let executor = self
            .get_executor(&call.function.name)
            .ok_or_else(|| ToolError::ToolNotFound {
                tool_name: call.function.name.clone(),
                available_tools: self.names().into_iter().map(str::to_string).collect(),
            })?;

        tracing::debug!(tool = %call.function.name, call_id = %call.id, "executing tool");
        executor.execute(&call.function.arguments).await
    }

    /// Route a tool call and serialize its result for the host
    pub async fn dispatch_to_string(&self, call: &ToolCall) -> Result<String> {
        let value = self.dispatch(call).await?;
        Ok(serde_json::to_string(&value)?)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::CalculateSumTool;

    #[test]
    fn test_tool_registry() {
        let mut registry = ToolRegistry::new();

        registry.register("calculate_sum", CalculateSumTool);

        assert!(registry.contains("calculate_sum"));
        assert_eq!(registry.len(), 1);

        let tools = registry.to_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].function.name, "calculate_sum");
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool() {
        let mut registry = ToolRegistry::new();
        registry.register("calculate_sum", CalculateSumTool);

        let call = ToolCall::new("call_1", "drop_table", "{}");
        match registry.dispatch(&call).await {
            Err(ToolError::ToolNotFound {
                tool_name,
                available_tools,
            }) => {
                assert_eq!(tool_name, "drop_table");
                assert_eq!(available_tools, vec!["calculate_sum".to_string()]);
            }
            other => panic!("Expected ToolNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_dispatch_to_string() {
        let mut registry = ToolRegistry::new();
        registry.register("calculate_sum", CalculateSumTool);

        let call = ToolCall::new("call_1", "calculate_sum", r#"{"values": [1.0, 2.0, 3.5]}"#);
        assert_eq!(registry.dispatch_to_string(&call).await.unwrap(), "6.5");
    }

    #[test]
    fn test_parse_arguments_rejects_bad_json() {
        let err = parse_arguments::<Value>("calculate_sum", "{not json").unwrap_err();
        assert!(matches!(err, ToolError::InvalidToolParameters { .. }));
        assert!(err.is_user_error());
    }

    #[test]
    fn test_parse_arguments_empty_is_object() {
        let value: Value = parse_arguments("list_table_names", "").unwrap();
        assert!(value.as_object().unwrap().is_empty());
    }
}
