#![allow(dead_code)]

use dreamfactory_tools::{
    config::{API_KEY_SECRET, BASE_URL_SECRET},
    tools::ToolRegistry,
    DreamFactoryClient, SecretProvider, StaticSecretProvider,
};
use mockito::ServerGuard;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const API_KEY: &str = "test-key";
pub const API_KEY_HEADER: &str = "X-DreamFactory-API-Key";

// Helper to create a mock DreamFactory service
pub async fn create_mock_server() -> ServerGuard {
    mockito::Server::new_async().await
}

pub fn client_for(server: &ServerGuard) -> DreamFactoryClient {
    DreamFactoryClient::new(Arc::new(StaticSecretProvider::dreamfactory(server.url(), API_KEY)))
}

pub fn registry_for(server: &ServerGuard) -> ToolRegistry {
    ToolRegistry::dreamfactory(Arc::new(client_for(server)))
}

/// Client pointed at a port nothing listens on
pub fn unreachable_client() -> DreamFactoryClient {
    DreamFactoryClient::new(Arc::new(StaticSecretProvider::dreamfactory(
        "http://127.0.0.1:1",
        API_KEY,
    )))
}

/// Secret provider that counts lookups of the base URL
pub struct CountingSecretProvider {
    base_url: String,
    pub base_url_reads: AtomicUsize,
}

impl CountingSecretProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            base_url_reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.base_url_reads.load(Ordering::SeqCst)
    }
}

impl SecretProvider for CountingSecretProvider {
    fn get_secret(&self, name: &str) -> Option<String> {
        match name {
            BASE_URL_SECRET => {
                self.base_url_reads.fetch_add(1, Ordering::SeqCst);
                Some(self.base_url.clone())
            }
            API_KEY_SECRET => Some(API_KEY.to_string()),
            _ => None,
        }
    }
}
