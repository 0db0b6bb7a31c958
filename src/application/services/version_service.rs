/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/11/25
******************************************************************************/

use crate::application::interfaces::VersionService;
use crate::application::models::requests::CreateVersionRequest;
use crate::application::models::responses::ArtifactVersion;
use crate::error::AppError;
use crate::transport::RegistryHttpClient;
use async_trait::async_trait;
use std::sync::Arc;

/// Implementation of the version service
pub struct VersionServiceImpl<T: RegistryHttpClient> {
    client: Arc<T>,
}

impl<T: RegistryHttpClient> VersionServiceImpl<T> {
    /// Creates a new instance of the version service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: RegistryHttpClient + 'static> VersionService for VersionServiceImpl<T> {
    async fn list(&self, artifact_id: i64) -> Result<Vec<ArtifactVersion>, AppError> {
        self.client
            .get(&format!("/artifacts/{artifact_id}/versions"))
            .await
    }

    async fn create(
        &self,
        artifact_id: i64,
        request: &CreateVersionRequest,
    ) -> Result<ArtifactVersion, AppError> {
        self.client
            .post(&format!("/artifacts/{artifact_id}/versions"), request)
            .await
    }
}
