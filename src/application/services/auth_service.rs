/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/11/25
******************************************************************************/

use crate::application::interfaces::AuthService;
use crate::application::models::requests::{LoginRequest, RegisterRequest};
use crate::application::models::responses::{TokenResponse, UserResponse};
use crate::constants::MIN_PASSWORD_LENGTH;
use crate::error::AppError;
use crate::session::TokenStore;
use crate::transport::RegistryHttpClient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Implementation of the authentication service
pub struct AuthServiceImpl<T: RegistryHttpClient> {
    client: Arc<T>,
    store: Arc<TokenStore>,
}

impl<T: RegistryHttpClient> AuthServiceImpl<T> {
    /// Creates a new instance of the authentication service
    pub fn new(client: Arc<T>, store: Arc<TokenStore>) -> Self {
        Self { client, store }
    }
}

#[async_trait]
impl<T: RegistryHttpClient + 'static> AuthService for AuthServiceImpl<T> {
    async fn register(&self, email: &str, password: &str) -> Result<UserResponse, AppError> {
        if email.trim().is_empty() {
            return Err(AppError::InvalidInput("email must not be empty".to_string()));
        }
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::InvalidInput(format!(
                "password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }

        let body = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.client.post("/auth/register", &body).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, AppError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let token: TokenResponse = self.client.post("/auth/login", &body).await?;

        // Persisting the credential is part of a successful login
        self.store.set(&token.access_token)?;
        info!("Logged in as {}", email);
        Ok(token)
    }

    fn logout(&self) -> Result<(), AppError> {
        self.store.clear()?;
        info!("Logged out");
        Ok(())
    }

    async fn current_user(&self) -> Result<UserResponse, AppError> {
        self.client.get("/auth/me").await
    }

    fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }
}
