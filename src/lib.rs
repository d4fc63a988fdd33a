pub mod traits;
pub mod models;
pub mod error;
pub mod config;
pub mod params;
pub mod endpoint;
pub mod client;
pub mod arithmetic;
pub mod retry;
pub mod tools;

pub use traits::*;
pub use models::*;
pub use error::*;
pub use client::DreamFactoryClient;
pub use config::{DreamFactoryConfig, EnvSecretProvider, StaticSecretProvider};
pub use params::{IdLookupRequest, ParamSet, QueryRequest, Selection};
