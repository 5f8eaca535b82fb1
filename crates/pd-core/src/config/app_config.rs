//! Application configuration domain model

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog server settings
    pub api: ApiConfig,

    /// Local persistence settings
    pub storage: StorageConfig,
}

/// Catalog server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the catalog server, without a trailing slash
    pub base_url: String,

    /// Bearer token sent with every request; unauthenticated when absent
    pub bearer_token: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

/// Local persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the roster snapshot file; the platform data
    /// directory when absent
    pub data_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            bearer_token: None,
            timeout_secs: 10,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: None }
    }
}
