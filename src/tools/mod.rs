// Base tools functionality
mod base;
pub use base::{ToolExecutor, ToolRegistry};

// Tool implementations
mod arithmetic;
mod table;

pub use arithmetic::{CalculateDifferenceTool, CalculateMeanTool, CalculateSumTool};
pub use table::{GetTableRecordsByIdsTool, GetTableRecordsTool, GetTableSchemaTool, ListTableNamesTool};

use std::sync::Arc;

use crate::traits::TableReader;

impl ToolRegistry {
    /// Registry with the four table tools and the three arithmetic helpers
    pub fn dreamfactory(reader: Arc<dyn TableReader>) -> Self {
        let mut registry = Self::new();
        registry.register("list_table_names", ListTableNamesTool::new(reader.clone()));
        registry.register("get_table_schema", GetTableSchemaTool::new(reader.clone()));
        registry.register("get_table_records", GetTableRecordsTool::new(reader.clone()));
        registry.register("get_table_records_by_ids", GetTableRecordsByIdsTool::new(reader));
        registry.register("calculate_sum", CalculateSumTool);
        registry.register("calculate_difference", CalculateDifferenceTool);
        registry.register("calculate_mean", CalculateMeanTool);
        registry
    }
}
