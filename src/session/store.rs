/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Bearer token storage
//!
//! Holds the single active credential for the client. The store can be backed
//! by a file so that a login survives process restarts, mirroring how the
//! registry web frontend keeps its token in browser storage. At most one
//! credential is active at a time; writes are last-writer-wins.

use crate::config::SessionConfig;
use crate::error::AppError;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;
use tracing::{debug, warn};

/// Holder of the current bearer credential
///
/// No expiry tracking is performed here; an expired token is detected
/// reactively when the server rejects it with a 401, at which point the
/// transport clears this store.
pub struct TokenStore {
    path: Option<PathBuf>,
    token: RwLock<Option<String>>,
}

impl TokenStore {
    /// Opens a store persisted at the given path
    ///
    /// If the file exists its contents become the current credential. An
    /// unreadable file is treated as "no credential" rather than an error.
    pub fn open(path: PathBuf) -> Self {
        let token = match fs::read_to_string(&path) {
            Ok(contents) => {
                let trimmed = contents.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    debug!("Loaded persisted token from {}", path.display());
                    Some(trimmed.to_string())
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Could not read token file {}: {e}", path.display());
                None
            }
        };

        Self {
            path: Some(path),
            token: RwLock::new(token),
        }
    }

    /// Creates a memory-only store with no persistence
    pub fn ephemeral() -> Self {
        Self {
            path: None,
            token: RwLock::new(None),
        }
    }

    /// Creates a store according to the session configuration
    pub fn from_config(config: &SessionConfig) -> Self {
        match &config.token_file {
            Some(path) => Self::open(path.clone()),
            None => Self::ephemeral(),
        }
    }

    /// Returns the current credential, if any
    pub fn get(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Returns true if a credential is currently held
    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }

    /// Stores a new credential, replacing any previous one
    ///
    /// When the store is file-backed the credential is written to disk so it
    /// survives process restarts.
    pub fn set(&self, token: &str) -> Result<(), AppError> {
        {
            let mut guard = match self.token.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            *guard = Some(token.to_string());
        }

        if let Some(path) = &self.path {
            fs::write(path, token)?;
            debug!("Persisted token to {}", path.display());
        }
        Ok(())
    }

    /// Clears the current credential, in memory and on disk
    pub fn clear(&self) -> Result<(), AppError> {
        {
            let mut guard = match self.token.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            *guard = None;
        }

        if let Some(path) = &self.path {
            match fs::remove_file(path) {
                Ok(()) => debug!("Removed token file {}", path.display()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(AppError::Io(e)),
            }
        }
        Ok(())
    }
}
