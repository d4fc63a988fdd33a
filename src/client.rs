use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;

use crate::{
    config::{DreamFactoryConfig, EnvSecretProvider},
    endpoint::EndpointTarget,
    error::Result,
    models::{ResourceList, TableList},
    params::{IdLookupRequest, ParamSet, QueryRequest},
    traits::{SecretProvider, TableReader},
    ToolError,
};

const LIST_TABLES: &str = "list table names";
const GET_SCHEMA: &str = "get schema";
const GET_RECORDS: &str = "get records";

/// Single-shot client for the DreamFactory table API.
///
/// Configuration is resolved from the secret provider on every call and each
/// operation issues exactly one GET. Nothing is retried here; failures come
/// back as [`ToolError::Retryable`] and the caller decides.
pub struct DreamFactoryClient {
    client: Client,
    secrets: Arc<dyn SecretProvider>,
}

impl DreamFactoryClient {
    pub fn new(secrets: Arc<dyn SecretProvider>) -> Self {
        Self::with_client(Client::new(), secrets)
    }

    pub fn with_client(client: Client, secrets: Arc<dyn SecretProvider>) -> Self {
        Self { client, secrets }
    }

    /// Client backed by process environment (and `.env`, if present)
    pub fn from_env() -> Self {
        Self::new(Arc::new(EnvSecretProvider::with_dotenv()))
    }

    fn config(&self) -> Result<DreamFactoryConfig> {
        DreamFactoryConfig::from_secrets(self.secrets.as_ref())
    }

    async fn fetch(
        &self,
        operation: &str,
        table: Option<&str>,
        target: EndpointTarget,
        params: Option<&ParamSet>,
        config: &DreamFactoryConfig,
    ) -> Result<Value> {
        tracing::debug!(
            operation,
            table = table.unwrap_or("-"),
            url = %target.url,
            params = ?params.map(|p| p.as_pairs()),
            "dispatching DreamFactory request"
        );

        let mut request = self
            .client
            .get(&target.url)
            .headers(target.headers)
            .timeout(config.timeout());
        if let Some(params) = params {
            request = request.query(params.as_pairs());
        }

        let response = request
            .send()
            .await
            .map_err(|e| retryable(operation, table, e))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| retryable(operation, table, e))?;

        let document: Value = serde_json::from_slice(&body).map_err(|e| {
            retryable(
                operation,
                table,
                format!("invalid JSON response (HTTP {}): {}", status.as_u16(), e),
            )
        })?;

        if !status.is_success() {
            tracing::debug!(
                operation,
                table = table.unwrap_or("-"),
                status = status.as_u16(),
                "DreamFactory returned an error document"
            );
        }
        Ok(document)
    }
}

fn retryable(operation: &str, table: Option<&str>, cause: impl std::fmt::Display) -> ToolError {
    let error = ToolError::retryable(operation, table, cause);
    tracing::warn!(
        operation,
        table = table.unwrap_or("-"),
        retry_after_ms = error.retry_after().map_or(0, |d| d.as_millis() as u64),
        error = %error,
        "DreamFactory request failed"
    );
    error
}

fn require_table(table_name: &str) -> Result<()> {
    if table_name.trim().is_empty() {
        return Err(ToolError::invalid_field("table_name", "table name must not be empty"));
    }
    Ok(())
}

#[async_trait]
impl TableReader for DreamFactoryClient {
    async fn list_table_names(&self) -> Result<TableList> {
        let config = self.config()?;
        let target = EndpointTarget::table_list(&config)?;
        let document = self.fetch(LIST_TABLES, None, target, None, &config).await?;

        let resources: ResourceList =
            serde_json::from_value(document).map_err(|e| retryable(LIST_TABLES, None, e))?;
        Ok(resources.into())
    }

    async fn get_table_schema(&self, table_name: &str) -> Result<Value> {
        require_table(table_name)?;
        let config = self.config()?;
        let target = EndpointTarget::schema(&config, table_name)?;
        self.fetch(GET_SCHEMA, Some(table_name), target, None, &config)
            .await
    }

    async fn get_table_records(&self, request: &QueryRequest) -> Result<Value> {
        require_table(&request.table_name)?;
        let params = request.to_params();
        let config = self.config()?;
        let target = EndpointTarget::table(&config, &request.table_name)?;
        self.fetch(GET_RECORDS, Some(&request.table_name), target, Some(&params), &config)
            .await
    }

    async fn get_table_records_by_ids(&self, request: &IdLookupRequest) -> Result<Value> {
        require_table(&request.table_name)?;
        let params = request.to_params()?;
        let config = self.config()?;
        let target = EndpointTarget::table(&config, &request.table_name)?;
        self.fetch(GET_RECORDS, Some(&request.table_name), target, Some(&params), &config)
            .await
    }
}
