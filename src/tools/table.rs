use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::error::Result;
use crate::params::{IdLookupRequest, QueryRequest};
use crate::tools::base::{parse_arguments, ToolExecutor};
use crate::traits::TableReader;
use crate::ToolFunction;

const FIELDS_DESCRIPTION: &str =
    "The fields to return. If ['*'] or omitted, all fields will be returned.";

const RELATED_DESCRIPTION: &str = "Names of related tables to join via foreign keys based on the \
     schema (e.g. hr_employees_by_department_id). Can be a single table name, a list of table \
     names, or ['*'] to include all related tables.";

const FILTER_GUIDE: &str = "\
Filter strings use ANSI SQL syntax.

Logical operators (each clause must be wrapped in parentheses): AND, OR, NOT.

Comparison operators:
- '=' or 'EQ': equality
- '!=' or 'NE' or '<>': inequality
- '>' or 'GT', '>=' or 'GTE', '<' or 'LT', '<=' or 'LTE'
- 'IN': membership in a set, e.g. a IN (1,2,3)
- 'NOT IN' or 'NIN': inverse of IN (MongoDB only)
- 'LIKE': pattern match with '%' wildcard
- 'CONTAINS': same as LIKE '%value%'
- 'STARTS WITH': same as LIKE 'value%'
- 'ENDS WITH': same as LIKE '%value'

Examples:
- (first_name='John') AND (last_name='Smith')
- (first_name='John') OR (first_name='Jane')
- first_name!='John'
- email like '%@mycompany.com'
- (Age >= 30) AND (Age < 40)";

fn selection_schema(description: &str) -> Value {
    serde_json::json!({
        "anyOf": [
            { "type": "string" },
            { "type": "array", "items": { "type": "string" } }
        ],
        "description": description
    })
}

fn table_name_schema(description: &str) -> Value {
    serde_json::json!({ "type": "string", "description": description })
}

/// Lists every table the service exposes
pub struct ListTableNamesTool {
    reader: Arc<dyn TableReader>,
}

impl ListTableNamesTool {
    pub fn new(reader: Arc<dyn TableReader>) -> Self {
        Self { reader }
    }
}

#[async_trait]
impl ToolExecutor for ListTableNamesTool {
    async fn execute(&self, _arguments: &str) -> Result<Value> {
        let tables = self.reader.list_table_names().await?;
        Ok(serde_json::to_value(tables)?)
    }

    fn definition(&self) -> ToolFunction {
        ToolFunction {
            name: "list_table_names".to_string(),
            description: Some("List the names of all the available tables.".to_string()),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {}
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SchemaArgs {
    table_name: String,
}

/// Fetches the schema document of one table
pub struct GetTableSchemaTool {
    reader: Arc<dyn TableReader>,
}

impl GetTableSchemaTool {
    pub fn new(reader: Arc<dyn TableReader>) -> Self {
        Self { reader }
    }
}

#[async_trait]
impl ToolExecutor for GetTableSchemaTool {
    async fn execute(&self, arguments: &str) -> Result<Value> {
        let args: SchemaArgs = parse_arguments("get_table_schema", arguments)?;
        self.reader.get_table_schema(&args.table_name).await
    }

    fn definition(&self) -> ToolFunction {
        ToolFunction {
            name: "get_table_schema".to_string(),
            description: Some("Get the schema of a table.".to_string()),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "table_name": table_name_schema("The name of the table to get the schema for")
                },
                "required": ["table_name"]
            }),
        }
    }
}

/// Filtered, paginated record query
pub struct GetTableRecordsTool {
    reader: Arc<dyn TableReader>,
}

impl GetTableRecordsTool {
    pub fn new(reader: Arc<dyn TableReader>) -> Self {
        Self { reader }
    }
}

#[async_trait]
impl ToolExecutor for GetTableRecordsTool {
    async fn execute(&self, arguments: &str) -> Result<Value> {
        let request: QueryRequest = parse_arguments("get_table_records", arguments)?;
        self.reader.get_table_records(&request).await
    }

    fn definition(&self) -> ToolFunction {
        ToolFunction {
            name: "get_table_records".to_string(),
            description: Some(format!("Get the records of a table.\n\n{}", FILTER_GUIDE)),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "table_name": table_name_schema("The name of the table to get the records from"),
                    "filter_str": {
                        "type": "string",
                        "description": "The filter to apply to the data. This is equivalent to the WHERE clause of a SQL statement"
                    },
                    "fields": selection_schema(FIELDS_DESCRIPTION),
                    "limit": {
                        "type": ["integer", "null"],
                        "minimum": 0,
                        "description": "Max number of records to return. If omitted, all matching records are returned, subject to the offset and the service maximum"
                    },
                    "offset": {
                        "type": "integer",
                        "minimum": 0,
                        "description": "Index of first record to return. For example, to get records 91-100, set offset to 90 and limit to 10. Default is 0"
                    },
                    "order_field": {
                        "type": "string",
                        "description": "The field to order the records by, optionally followed by ASC or DESC such as 'Name ASC'. Default direction is ASC"
                    },
                    "related": selection_schema(RELATED_DESCRIPTION)
                },
                "required": ["table_name"]
            }),
        }
    }
}

/// Record lookup by primary key
pub struct GetTableRecordsByIdsTool {
    reader: Arc<dyn TableReader>,
}

impl GetTableRecordsByIdsTool {
    pub fn new(reader: Arc<dyn TableReader>) -> Self {
        Self { reader }
    }
}

#[async_trait]
impl ToolExecutor for GetTableRecordsByIdsTool {
    async fn execute(&self, arguments: &str) -> Result<Value> {
        let request: IdLookupRequest = parse_arguments("get_table_records_by_ids", arguments)?;
        self.reader.get_table_records_by_ids(&request).await
    }

    fn definition(&self) -> ToolFunction {
        ToolFunction {
            name: "get_table_records_by_ids".to_string(),
            description: Some("Get one or more records from a table by their IDs.".to_string()),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "table_name": table_name_schema("The name of the table to get the records from"),
                    "ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "minItems": 1,
                        "description": "The IDs of the records to get"
                    },
                    "fields": selection_schema(FIELDS_DESCRIPTION),
                    "related": selection_schema(RELATED_DESCRIPTION)
                },
                "required": ["table_name", "ids"]
            }),
        }
    }
}
