use crate::application::models::responses::{ArtifactFile, MessageResponse};
use crate::error::AppError;
use crate::transport::FileUpload;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// File upload, download, listing and deletion for artifact versions
///
/// Upload and download require an active credential and fail locally with
/// [`AppError::NotAuthenticated`] before any network call when none is stored.
#[async_trait]
pub trait FileService: Send + Sync {
    /// Lists the files attached to a version
    async fn list(&self, version_id: i64) -> Result<Vec<ArtifactFile>, AppError>;

    /// Uploads a file to a version as a multipart body
    ///
    /// Returns `None` when the server sends no metadata body on success.
    async fn upload(
        &self,
        version_id: i64,
        file: FileUpload,
    ) -> Result<Option<ArtifactFile>, AppError>;

    /// Downloads a file and saves it under `dest_dir`
    ///
    /// The filename is taken from the `Content-Disposition` header when
    /// present, else synthesized as `file_<id>`.
    ///
    /// # Returns
    /// The path of the saved file
    async fn download(&self, file_id: i64, dest_dir: &Path) -> Result<PathBuf, AppError>;

    /// Deletes a file
    async fn delete(&self, file_id: i64) -> Result<MessageResponse, AppError>;
}
