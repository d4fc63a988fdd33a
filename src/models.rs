use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of listing the tables exposed by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableList {
    pub available_tables: Vec<String>,
}

/// Table-collection response from the backing service
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ResourceList {
    pub resource: Vec<ResourceEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ResourceEntry {
    pub name: String,
}

impl From<ResourceList> for TableList {
    fn from(list: ResourceList) -> Self {
        TableList {
            available_tables: list.resource.into_iter().map(|r| r.name).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub r#type: ToolType,
    pub function: ToolFunction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolType {
    Function,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolFunction {
    pub name: String,
    pub description: Option<String>,
    pub parameters: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub r#type: ToolType,
    pub function: FunctionCall,
}

impl ToolCall {
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: impl Into<String>) -> Self {
        ToolCall {
            id: id.into(),
            r#type: ToolType::Function,
            function: FunctionCall {
                name: name.into(),
                arguments: arguments.into(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}
