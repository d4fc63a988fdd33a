use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::{config::DreamFactoryConfig, error::Result, ToolError};

pub const API_KEY_HEADER: &str = "X-DreamFactory-API-Key";

/// URL and auth headers for a single request
#[derive(Debug, Clone)]
pub struct EndpointTarget {
    pub url: String,
    pub headers: HeaderMap,
}

impl EndpointTarget {
    /// `{base_url}/_table`
    pub fn table_list(config: &DreamFactoryConfig) -> Result<Self> {
        Self::build(config, format!("{}/_table", config.base_url()))
    }

    /// `{base_url}/_table/{table}`
    pub fn table(config: &DreamFactoryConfig, table_name: &str) -> Result<Self> {
        Self::build(config, format!("{}/_table/{}", config.base_url(), table_name))
    }

    /// `{base_url}/_schema/{table}`
    pub fn schema(config: &DreamFactoryConfig, table_name: &str) -> Result<Self> {
        Self::build(config, format!("{}/_schema/{}", config.base_url(), table_name))
    }

    fn build(config: &DreamFactoryConfig, url: String) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(config.api_key()).map_err(|_| {
            ToolError::MissingConfiguration {
                field: crate::config::API_KEY_SECRET.to_string(),
                description: "API key contains characters not allowed in a header".to_string(),
            }
        })?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static("x-dreamfactory-api-key"), api_key);
        Ok(Self { url, headers })
    }
}
