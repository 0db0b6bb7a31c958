/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/11/25
******************************************************************************/

use crate::application::interfaces::ArtifactService;
use crate::application::models::requests::{CreateArtifactRequest, ShareRequest};
use crate::application::models::responses::{Artifact, MessageResponse};
use crate::error::AppError;
use crate::transport::RegistryHttpClient;
use async_trait::async_trait;
use std::sync::Arc;

/// Implementation of the artifact service
pub struct ArtifactServiceImpl<T: RegistryHttpClient> {
    client: Arc<T>,
}

impl<T: RegistryHttpClient> ArtifactServiceImpl<T> {
    /// Creates a new instance of the artifact service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: RegistryHttpClient + 'static> ArtifactService for ArtifactServiceImpl<T> {
    async fn list_mine(&self) -> Result<Vec<Artifact>, AppError> {
        self.client.get("/artifacts/me").await
    }

    async fn list_accessible(&self) -> Result<Vec<Artifact>, AppError> {
        self.client.get("/artifacts").await
    }

    async fn create(&self, request: &CreateArtifactRequest) -> Result<Artifact, AppError> {
        if request.title.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "artifact title must not be empty".to_string(),
            ));
        }
        self.client.post("/artifacts", request).await
    }

    async fn get(&self, artifact_id: i64) -> Result<Artifact, AppError> {
        self.client.get(&format!("/artifacts/{artifact_id}")).await
    }

    async fn share(&self, artifact_id: i64, email: &str) -> Result<MessageResponse, AppError> {
        let body = ShareRequest {
            email: email.to_string(),
        };
        self.client
            .post(&format!("/artifacts/{artifact_id}/share"), &body)
            .await
    }
}
