/// Artifact operations
pub mod artifact;
/// Authentication operations
pub mod auth;
/// File operations
pub mod file;
/// Version operations
pub mod version;

pub use artifact::ArtifactService;
pub use auth::AuthService;
pub use file::FileService;
pub use version::VersionService;
