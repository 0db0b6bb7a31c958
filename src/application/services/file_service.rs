/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/11/25
******************************************************************************/

use crate::application::interfaces::FileService;
use crate::application::models::responses::{ArtifactFile, MessageResponse};
use crate::error::AppError;
use crate::transport::{FileUpload, RegistryHttpClient};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Implementation of the file service
pub struct FileServiceImpl<T: RegistryHttpClient> {
    client: Arc<T>,
}

impl<T: RegistryHttpClient> FileServiceImpl<T> {
    /// Creates a new instance of the file service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: RegistryHttpClient + 'static> FileService for FileServiceImpl<T> {
    async fn list(&self, version_id: i64) -> Result<Vec<ArtifactFile>, AppError> {
        self.client.get(&format!("/versions/{version_id}/files")).await
    }

    async fn upload(
        &self,
        version_id: i64,
        file: FileUpload,
    ) -> Result<Option<ArtifactFile>, AppError> {
        self.client
            .upload(&format!("/versions/{version_id}/files"), file)
            .await
    }

    async fn download(&self, file_id: i64, dest_dir: &Path) -> Result<PathBuf, AppError> {
        let content = self.client.download(&format!("/files/{file_id}")).await?;

        // The header value is untrusted; keep only the final path component
        let name = content
            .filename
            .as_deref()
            .and_then(|n| Path::new(n).file_name())
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("file_{file_id}"));

        let dest = dest_dir.join(name);
        tokio::fs::write(&dest, &content.bytes).await?;
        info!(
            "Saved file {} ({} bytes) to {}",
            file_id,
            content.bytes.len(),
            dest.display()
        );
        Ok(dest)
    }

    async fn delete(&self, file_id: i64) -> Result<MessageResponse, AppError> {
        self.client.delete(&format!("/files/{file_id}")).await
    }
}
