/// Artifact service implementation
pub mod artifact_service;
/// Authentication service implementation
pub mod auth_service;
/// File service implementation
pub mod file_service;
/// Version service implementation
pub mod version_service;

pub use artifact_service::ArtifactServiceImpl;
pub use auth_service::AuthServiceImpl;
pub use file_service::FileServiceImpl;
pub use version_service::VersionServiceImpl;
