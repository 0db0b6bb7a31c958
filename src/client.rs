/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/11/25
******************************************************************************/

//! Simplified client for the Artifact Registry API
//!
//! This module provides a facade that wires configuration, token storage,
//! transport and the per-resource services together:
//! - Bearer token persistence across runs
//! - Automatic credential injection on every call
//! - Session invalidation on 401
//!
//! # Example
//! ```ignore
//! use artifact_registry_client::client::RegistryClient;
//! use artifact_registry_client::config::Config;
//!
//! let client = RegistryClient::new(Config::new())?;
//! client.login("a@x.com", "pw123456").await?;
//! let mine = client.artifacts().list_mine().await?;
//! ```

use crate::application::interfaces::{AuthService, FileService};
use crate::application::models::responses::TokenResponse;
use crate::application::services::{
    ArtifactServiceImpl, AuthServiceImpl, FileServiceImpl, VersionServiceImpl,
};
use crate::config::Config;
use crate::error::AppError;
use crate::session::TokenStore;
use crate::transport::RegistryHttpClientImpl;
use std::path::PathBuf;
use std::sync::Arc;

/// High-level client for the Artifact Registry API
///
/// Owns the token store and shares one transport between all services, so a
/// login performed through any path is visible to every subsequent call.
pub struct RegistryClient {
    config: Arc<Config>,
    store: Arc<TokenStore>,
    auth: AuthServiceImpl<RegistryHttpClientImpl>,
    artifacts: ArtifactServiceImpl<RegistryHttpClientImpl>,
    versions: VersionServiceImpl<RegistryHttpClientImpl>,
    files: FileServiceImpl<RegistryHttpClientImpl>,
}

impl RegistryClient {
    /// Creates a new client from the given configuration
    ///
    /// A token persisted by a previous run is picked up automatically when
    /// the configuration points at a token file.
    ///
    /// # Returns
    /// * `Ok(RegistryClient)` - Client ready to use
    /// * `Err(AppError)` - If the HTTP client cannot be constructed
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let store = Arc::new(TokenStore::from_config(&config.session));
        let http = Arc::new(RegistryHttpClientImpl::new(config.clone(), store.clone())?);

        Ok(Self {
            auth: AuthServiceImpl::new(http.clone(), store.clone()),
            artifacts: ArtifactServiceImpl::new(http.clone()),
            versions: VersionServiceImpl::new(http.clone()),
            files: FileServiceImpl::new(http),
            config,
            store,
        })
    }

    /// Authentication operations
    pub fn auth(&self) -> &AuthServiceImpl<RegistryHttpClientImpl> {
        &self.auth
    }

    /// Artifact operations
    pub fn artifacts(&self) -> &ArtifactServiceImpl<RegistryHttpClientImpl> {
        &self.artifacts
    }

    /// Version operations
    pub fn versions(&self) -> &VersionServiceImpl<RegistryHttpClientImpl> {
        &self.versions
    }

    /// File operations
    pub fn files(&self) -> &FileServiceImpl<RegistryHttpClientImpl> {
        &self.files
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The token store shared by all services
    pub fn token_store(&self) -> &Arc<TokenStore> {
        &self.store
    }

    /// Logs in and stores the issued bearer token
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, AppError> {
        self.auth.login(email, password).await
    }

    /// Clears the stored credential
    pub fn logout(&self) -> Result<(), AppError> {
        self.auth.logout()
    }

    /// Returns true if a credential is currently stored
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    /// Downloads a file into the configured download directory
    ///
    /// # Returns
    /// The path of the saved file
    pub async fn download_file(&self, file_id: i64) -> Result<PathBuf, AppError> {
        self.files.download(file_id, &self.config.downloads.dir).await
    }
}

impl Default for RegistryClient {
    fn default() -> Self {
        Self::new(Config::default()).expect("Failed to create HTTP client")
    }
}
