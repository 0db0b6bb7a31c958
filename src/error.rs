/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Error types for the Artifact Registry client
//!
//! Every failure in the library surfaces as a single [`AppError`] carrying a
//! descriptive message. Non-2xx API responses are reduced to their
//! human-readable message before reaching the caller.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// An operation that requires a credential was called with none stored.
    /// Raised locally, before any network call is made.
    NotAuthenticated,
    /// The server rejected the stored credential (HTTP 401). The token store
    /// has already been cleared when this error is returned.
    SessionExpired,
    /// Any other non-2xx response, with the message derived from the body
    Api {
        /// HTTP status returned by the server
        status: StatusCode,
        /// Human-readable message extracted from the response body
        message: String,
    },
    /// Network-level failure surfaced by the underlying HTTP client
    Network(reqwest::Error),
    /// JSON serialization or deserialization failure
    Json(serde_json::Error),
    /// Filesystem failure (token persistence, file download)
    Io(std::io::Error),
    /// Invalid caller input rejected before any network call
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotAuthenticated => write!(f, "not authenticated"),
            AppError::SessionExpired => write!(f, "session expired, please login again"),
            AppError::Api { message, .. } => write!(f, "{message}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Network(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Io(error)
    }
}

impl AppError {
    /// Returns the HTTP status for API errors, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::SessionExpired => Some(StatusCode::UNAUTHORIZED),
            _ => None,
        }
    }
}
