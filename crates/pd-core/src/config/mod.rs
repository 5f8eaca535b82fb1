//! Application configuration data structures.
//!
//! Pure data with defaults; TOML loading lives in the application shell.

pub mod app_config;

pub use app_config::{ApiConfig, AppConfig, StorageConfig};
