use crate::application::models::responses::{TokenResponse, UserResponse};
use crate::error::AppError;
use async_trait::async_trait;

/// Account registration and session management
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Creates a new account
    ///
    /// The password must be at least 8 characters; shorter inputs are
    /// rejected locally with [`AppError::InvalidInput`].
    async fn register(&self, email: &str, password: &str) -> Result<UserResponse, AppError>;

    /// Logs in and persists the returned bearer token into the token store
    ///
    /// # Returns
    /// * `Ok(TokenResponse)` - The issued credential, already stored
    /// * `Err(AppError)` - If the credentials are rejected
    async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, AppError>;

    /// Clears the stored credential
    ///
    /// Purely local; the registry has no logout endpoint. Any navigation back
    /// to a login surface is the embedder's concern.
    fn logout(&self) -> Result<(), AppError>;

    /// Fetches the account behind the current credential
    async fn current_user(&self) -> Result<UserResponse, AppError>;

    /// Returns true if a credential is currently stored
    fn is_authenticated(&self) -> bool;
}
