//! Configuration management for the store.
//!
//! Settings come from an optional TOML file (path in `PHONE_STORE_CONFIG`,
//! default `config.toml`), with every field defaulted so the binary runs with
//! no file at all. `DATABASE_URL` and `BIND_ADDRESS` environment variables
//! override the file, which keeps deployment overrides out of the config file.

/// Database connection and table creation
pub mod database;

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{env, fs, path::PathBuf};

/// Application configuration
#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP listener binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// SeaORM connection string for the SQLite store
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Directory uploaded product images are written to
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,
    /// File extensions the upload path accepts, matched case-insensitively
    #[serde(default = "default_allowed_image_extensions")]
    pub allowed_image_extensions: Vec<String>,
}

fn default_bind_address() -> String {
    "0.0.0.0:5000".to_string()
}

fn default_database_url() -> String {
    "sqlite://phone_store.sqlite?mode=rwc".to_string()
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_allowed_image_extensions() -> Vec<String> {
    ["png", "jpg", "jpeg", "gif", "webp"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            database_url: default_database_url(),
            upload_dir: default_upload_dir(),
            allowed_image_extensions: default_allowed_image_extensions(),
        }
    }
}

/// Loads the application configuration from the TOML file, falling back to
/// defaults when the file is absent, then applies environment overrides.
///
/// # Errors
/// Returns [`Error::Config`] if the file exists but cannot be read or parsed.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = env::var("PHONE_STORE_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

    let mut config = if fs::exists(&path).unwrap_or(false) {
        tracing::debug!("Loading configuration from: {path}");
        let contents = fs::read_to_string(&path).map_err(|e| Error::Config {
            message: format!("Failed to read config file {path}: {e}"),
        })?;
        toml::from_str(&contents).map_err(|e| Error::Config {
            message: format!("Failed to parse TOML from config file {path}: {e}"),
        })?
    } else {
        tracing::debug!("No config file at {path}, using defaults");
        AppConfig::default()
    };

    if let Ok(url) = env::var("DATABASE_URL") {
        config.database_url = url;
    }
    if let Ok(addr) = env::var("BIND_ADDRESS") {
        config.bind_address = addr;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_defaults_cover_every_field() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address, "0.0.0.0:5000");
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert!(config.allowed_image_extensions.contains(&"png".to_string()));
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let config: AppConfig = toml::from_str(r#"bind_address = "127.0.0.1:8080""#).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.database_url, default_database_url());
    }

    #[test]
    fn test_full_toml_round_trip() {
        let config: AppConfig = toml::from_str(
            r#"
            bind_address = "0.0.0.0:9000"
            database_url = "sqlite::memory:"
            upload_dir = "/tmp/store-uploads"
            allowed_image_extensions = ["png"]
            "#,
        )
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.allowed_image_extensions, vec!["png".to_string()]);
    }
}
