//! Configuration file loading.
//!
//! Pure data loading: read the file, parse the TOML, hand back the config.
//! Validation belongs to whoever consumes the values.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pd_core::config::AppConfig;

/// Default config location under the platform data directory.
pub fn default_config_path() -> Result<PathBuf> {
    Ok(pd_infra::fs::app_data_dir()?.join("config.toml"))
}

/// Load configuration from a TOML file.
///
/// Every key is optional and falls back to its default; a missing file is
/// not an error and yields the full default configuration, same as the
/// roster snapshot on first run.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(error) => {
            return Err(error)
                .with_context(|| format!("failed to read config file: {}", path.display()));
        }
    };

    toml::from_str(&content).context("failed to parse config as TOML")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [api]
            base_url = "https://pokedeck.example"
            bearer_token = "sekrit"
            timeout_secs = 30

            [storage]
            data_dir = "/var/lib/pokedeck"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.api.base_url, "https://pokedeck.example");
        assert_eq!(config.api.bearer_token.as_deref(), Some("sekrit"));
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(
            config.storage.data_dir,
            Some(PathBuf::from("/var/lib/pokedeck"))
        );
    }

    #[test]
    fn test_load_config_fills_missing_sections_with_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\nbase_url = \"https://pokedeck.example\"\n")
            .unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.api.base_url, "https://pokedeck.example");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.storage.data_dir, None);
    }

    #[test]
    fn test_load_config_defaults_when_file_is_missing() {
        let config = load_config(Path::new("/does/not/exist/config.toml")).unwrap();

        assert_eq!(config.api.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"this is { not toml").unwrap();

        let result = load_config(temp_file.path());

        assert!(result.is_err());
    }
}
