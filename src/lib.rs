/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! # Artifact Registry Client
//!
//! This crate provides a typed client for the Artifact Registry REST API:
//! account registration and login, artifact creation and listing, artifact
//! versioning, file upload/download and sharing.
//!
//! The crate is organised in layers:
//! - [`config`]: environment-driven configuration
//! - [`session`]: bearer token storage with optional on-disk persistence
//! - [`transport`]: the HTTP client that attaches credentials and normalises
//!   error responses
//! - [`application`]: request/response models and per-resource services
//! - [`client`]: a facade wiring everything together
//!
//! # Example
//! ```ignore
//! use artifact_registry_client::prelude::*;
//!
//! let client = RegistryClient::new(Config::new());
//! client.auth().login("a@x.com", "pw123456").await?;
//! let mine = client.artifacts().list_mine().await?;
//! ```

/// Application layer: models, service interfaces and implementations
pub mod application;
/// High-level client facade
pub mod client;
/// Configuration loaded from environment variables
pub mod config;
/// Global constants
pub mod constants;
/// Error types for the library
pub mod error;
/// Commonly used re-exports
pub mod prelude;
/// Bearer token storage
pub mod session;
/// HTTP transport layer
pub mod transport;
/// Utility helpers (env parsing, logging)
pub mod utils;

/// Library version, taken from Cargo metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version string
pub fn version() -> &'static str {
    VERSION
}
