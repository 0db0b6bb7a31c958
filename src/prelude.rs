/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/11/25
******************************************************************************/

//! # Artifact Registry Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the library.
//!
//! ## Usage
//!
//! ```rust
//! use artifact_registry_client::prelude::*;
//!
//! let config = Config::with_base_url("http://127.0.0.1:8000");
//! let client = RegistryClient::new(config);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Artifact Registry client
pub use crate::config::{Config, DownloadConfig, RestApiConfig, SessionConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// SESSION MANAGEMENT
// ============================================================================

/// Bearer token storage
pub use crate::session::TokenStore;

// ============================================================================
// TRANSPORT AND HTTP CLIENT
// ============================================================================

/// HTTP client trait
pub use crate::transport::RegistryHttpClient;

/// HTTP client implementation
pub use crate::transport::RegistryHttpClientImpl;

/// Upload and download payloads
pub use crate::transport::{DownloadedContent, FileUpload};

// ============================================================================
// SERVICES (TRAITS AND IMPLEMENTATIONS)
// ============================================================================

/// Per-resource service traits
pub use crate::application::interfaces::{
    ArtifactService, AuthService, FileService, VersionService,
};

/// Service implementations
pub use crate::application::services::{
    ArtifactServiceImpl, AuthServiceImpl, FileServiceImpl, VersionServiceImpl,
};

// ============================================================================
// HIGH-LEVEL CLIENT
// ============================================================================

/// Facade wiring configuration, token store, transport and services
pub use crate::client::RegistryClient;

// ============================================================================
// MODELS
// ============================================================================

/// Request payloads
pub use crate::application::models::requests::{
    CreateArtifactRequest, CreateVersionRequest, LoginRequest, RegisterRequest, ShareRequest,
};

/// Response payloads
pub use crate::application::models::responses::{
    Artifact, ArtifactFile, ArtifactType, ArtifactVersion, MessageResponse, TokenResponse,
    UserResponse, Visibility,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest essentials for custom transport implementations
pub use reqwest::Method;
