use crate::constants::{DEFAULT_BASE_URL, DEFAULT_DOWNLOAD_DIR, DEFAULT_TIMEOUT, DEFAULT_TOKEN_FILE};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Artifact Registry client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Session persistence configuration
    pub session: SessionConfig,
    /// File download configuration
    pub downloads: DownloadConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the registry REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests. Carried for embedders;
    /// the transport itself defers to the HTTP client defaults.
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for bearer token persistence
pub struct SessionConfig {
    /// File where the bearer token is persisted between runs.
    /// `None` keeps the token in memory only.
    pub token_file: Option<PathBuf>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for file downloads
pub struct DownloadConfig {
    /// Directory where downloaded files are saved
    pub dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from environment variables
    ///
    /// Loads a `.env` file if present, then reads:
    /// - `REGISTRY_REST_BASE_URL` (default `http://127.0.0.1:8000`)
    /// - `REGISTRY_REST_TIMEOUT` (default 30 seconds)
    /// - `REGISTRY_TOKEN_FILE` (default `.registry_token`)
    /// - `REGISTRY_DOWNLOAD_DIR` (default current directory)
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "REGISTRY_REST_BASE_URL",
                    String::from(DEFAULT_BASE_URL),
                ),
                timeout: get_env_or_default("REGISTRY_REST_TIMEOUT", DEFAULT_TIMEOUT),
            },
            session: SessionConfig {
                token_file: Some(PathBuf::from(
                    get_env_or_none::<String>("REGISTRY_TOKEN_FILE")
                        .unwrap_or_else(|| String::from(DEFAULT_TOKEN_FILE)),
                )),
            },
            downloads: DownloadConfig {
                dir: PathBuf::from(get_env_or_default(
                    "REGISTRY_DOWNLOAD_DIR",
                    String::from(DEFAULT_DOWNLOAD_DIR),
                )),
            },
        }
    }

    /// Creates a configuration pointing at the given base URL, with in-memory
    /// token storage. Useful for tests and short-lived tooling.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT,
            },
            session: SessionConfig { token_file: None },
            downloads: DownloadConfig {
                dir: PathBuf::from(DEFAULT_DOWNLOAD_DIR),
            },
        }
    }
}
