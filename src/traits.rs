use async_trait::async_trait;
use serde_json::Value;

use crate::{
    error::Result,
    models::TableList,
    params::{IdLookupRequest, QueryRequest},
};

/// Supplies secrets on demand. Implementations are consulted on every call,
/// so rotating a secret takes effect on the next request.
pub trait SecretProvider: Send + Sync {
    fn get_secret(&self, name: &str) -> Option<String>;
}

/// Read-only access to a REST-over-SQL table API
#[async_trait]
pub trait TableReader: Send + Sync {
    async fn list_table_names(&self) -> Result<TableList>;

    async fn get_table_schema(&self, table_name: &str) -> Result<Value>;

    async fn get_table_records(&self, request: &QueryRequest) -> Result<Value>;

    async fn get_table_records_by_ids(&self, request: &IdLookupRequest) -> Result<Value>;
}
