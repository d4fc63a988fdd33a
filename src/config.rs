use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use std::time::Duration;

use crate::{error::Result, traits::SecretProvider, ToolError};

pub const BASE_URL_SECRET: &str = "DREAM_FACTORY_BASE_URL";
pub const API_KEY_SECRET: &str = "DREAM_FACTORY_API_KEY";
pub const TIMEOUT_SECRET: &str = "DREAM_FACTORY_TIMEOUT_SECS";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for one DreamFactory service
#[derive(Debug)]
pub struct DreamFactoryConfig {
    base_url: String,
    api_key: SecretString,
    timeout: Duration,
}

impl DreamFactoryConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let api_key: String = api_key.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: SecretString::from(api_key),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the transport timeout applied to each request
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve the configuration from a secret provider.
    ///
    /// Base URL and API key are required; the timeout falls back to
    /// [`DEFAULT_TIMEOUT`] when unset or unparseable.
    pub fn from_secrets(provider: &dyn SecretProvider) -> Result<Self> {
        let base_url = required_secret(provider, BASE_URL_SECRET, "DreamFactory base URL")?;
        let api_key = required_secret(provider, API_KEY_SECRET, "DreamFactory API key")?;

        url::Url::parse(&base_url).map_err(|e| ToolError::MissingConfiguration {
            field: BASE_URL_SECRET.to_string(),
            description: format!("not a valid URL: {}", e),
        })?;

        let timeout = provider
            .get_secret(TIMEOUT_SECRET)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Ok(Self::new(base_url, api_key).with_timeout(timeout))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn required_secret(provider: &dyn SecretProvider, name: &str, description: &str) -> Result<String> {
    match provider.get_secret(name) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ToolError::MissingConfiguration {
            field: name.to_string(),
            description: description.to_string(),
        }),
    }
}

/// Reads secrets from the process environment
#[derive(Debug, Clone, Default)]
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    pub fn new() -> Self {
        Self
    }

    /// Load a `.env` file from the working directory first, if one exists
    pub fn with_dotenv() -> Self {
        dotenv::dotenv().ok();
        Self
    }
}

impl SecretProvider for EnvSecretProvider {
    fn get_secret(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed in-memory secrets, for hosts that inject values directly
#[derive(Default)]
pub struct StaticSecretProvider {
    secrets: HashMap<String, SecretString>,
}

impl StaticSecretProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secret(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let value: String = value.into();
        self.secrets.insert(name.into(), SecretString::from(value));
        self
    }

    /// Shorthand for the two required DreamFactory secrets
    pub fn dreamfactory(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::new()
            .with_secret(BASE_URL_SECRET, base_url)
            .with_secret(API_KEY_SECRET, api_key)
    }
}

impl std::fmt::Debug for StaticSecretProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.secrets.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        f.debug_struct("StaticSecretProvider")
            .field("secrets", &names)
            .finish()
    }
}

impl SecretProvider for StaticSecretProvider {
    fn get_secret(&self, name: &str) -> Option<String> {
        self.secrets
            .get(name)
            .map(|secret| secret.expose_secret().to_string())
    }
}
