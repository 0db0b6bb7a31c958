use crate::application::models::requests::CreateArtifactRequest;
use crate::application::models::responses::{Artifact, MessageResponse};
use crate::error::AppError;
use async_trait::async_trait;

/// Artifact registration, listing and sharing
#[async_trait]
pub trait ArtifactService: Send + Sync {
    /// Lists artifacts owned by the caller
    async fn list_mine(&self) -> Result<Vec<Artifact>, AppError>;

    /// Lists artifacts accessible to the caller: owned, shared with them,
    /// or public, per server policy
    async fn list_accessible(&self) -> Result<Vec<Artifact>, AppError>;

    /// Registers a new artifact
    ///
    /// The title must not be empty; an empty title is rejected locally with
    /// [`AppError::InvalidInput`].
    async fn create(&self, request: &CreateArtifactRequest) -> Result<Artifact, AppError>;

    /// Fetches a single artifact
    async fn get(&self, artifact_id: i64) -> Result<Artifact, AppError>;

    /// Shares an artifact with another user by email
    async fn share(&self, artifact_id: i64, email: &str) -> Result<MessageResponse, AppError>;
}
