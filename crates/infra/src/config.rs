//! Application configuration loading
//!
//! Every setting has a default, so a missing config file is not an error.
//!
//! ## Loading Strategy
//! 1. Start from defaults
//! 2. Merge a config file if one is found (probed paths, TOML or JSON)
//! 3. Apply environment variable overrides (a `.env` file is honored)
//!
//! ## Environment Variables
//! - `PAWTRACK_API_URL`: Backend base URL
//! - `PAWTRACK_API_TIMEOUT_SECS`: Request timeout in seconds
//! - `PAWTRACK_PAGE_SIZE`: Default page size for list endpoints
//! - `PAWTRACK_TOKEN_PATH`: Token file location
//!
//! ## File Locations
//! The loader probes `./pawtrack.toml`, `./config.toml`, `./pawtrack.json`
//! and `./config.json` in the current working directory, then one parent up.

use std::path::{Path, PathBuf};
use std::time::Duration;

use pawtrack_domain::constants::DEFAULT_PAGE_SIZE;
use pawtrack_domain::{PawTrackError, Result};
use serde::Deserialize;

use crate::api::ApiClientConfig;

/// Backend connection settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let defaults = ApiClientConfig::default();
        Self {
            base_url: defaults.base_url,
            timeout_secs: defaults.timeout.as_secs(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ApiConfig {
    /// Build the client configuration from these settings.
    #[must_use]
    pub fn client_config(&self) -> ApiClientConfig {
        ApiClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            page_size: self.page_size,
        }
    }
}

/// Local storage settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub token_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { token_path: PathBuf::from(".pawtrack/tokens.json") }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

/// Load configuration from file and environment.
///
/// # Errors
/// Returns `PawTrackError::Config` if a config file exists but cannot be
/// read or parsed, or if an environment override has an invalid value.
pub fn load() -> Result<AppConfig> {
    // Populate process env from a local .env if present.
    dotenvy::dotenv().ok();

    let mut config = match probe_config_paths() {
        Some(path) => load_from_file(&path)?,
        None => {
            tracing::debug!("no config file found, using defaults");
            AppConfig::default()
        }
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a specific file.
///
/// Format is detected by extension (`.toml` or `.json`).
///
/// # Errors
/// Returns `PawTrackError::Config` if the file cannot be read or parsed.
pub fn load_from_file(path: &Path) -> Result<AppConfig> {
    tracing::info!(path = %path.display(), "loading configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| PawTrackError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, path)
}

fn parse_config(contents: &str, path: &Path) -> Result<AppConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| PawTrackError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| PawTrackError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(PawTrackError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe standard locations for a configuration file.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;

    let candidates = [
        cwd.join("pawtrack.toml"),
        cwd.join("config.toml"),
        cwd.join("pawtrack.json"),
        cwd.join("config.json"),
        cwd.join("../pawtrack.toml"),
        cwd.join("../config.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
}

fn apply_env_overrides(config: &mut AppConfig) -> Result<()> {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from a variable lookup. Split from the env read so tests
/// can feed values without touching the process environment.
fn apply_overrides(
    config: &mut AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(url) = lookup("PAWTRACK_API_URL") {
        config.api.base_url = url;
    }

    if let Some(timeout) = lookup("PAWTRACK_API_TIMEOUT_SECS") {
        config.api.timeout_secs = timeout
            .parse()
            .map_err(|e| PawTrackError::Config(format!("Invalid timeout override: {e}")))?;
    }

    if let Some(page_size) = lookup("PAWTRACK_PAGE_SIZE") {
        config.api.page_size = page_size
            .parse()
            .map_err(|e| PawTrackError::Config(format!("Invalid page size override: {e}")))?;
    }

    if let Some(path) = lookup("PAWTRACK_TOKEN_PATH") {
        config.storage.token_path = PathBuf::from(path);
    }

    Ok(())
}
