use crate::application::models::requests::CreateVersionRequest;
use crate::application::models::responses::ArtifactVersion;
use crate::error::AppError;
use async_trait::async_trait;

/// Artifact version listing and creation
#[async_trait]
pub trait VersionService: Send + Sync {
    /// Lists the versions of an artifact
    async fn list(&self, artifact_id: i64) -> Result<Vec<ArtifactVersion>, AppError>;

    /// Creates a new version of an artifact
    async fn create(
        &self,
        artifact_id: i64,
        request: &CreateVersionRequest,
    ) -> Result<ArtifactVersion, AppError>;
}
