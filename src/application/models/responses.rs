/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/11/25
******************************************************************************/

//! Response payloads returned by the registry API
//!
//! `created_at` timestamps arrive as ISO-8601 strings without a timezone
//! suffix, hence `NaiveDateTime`.

use chrono::NaiveDateTime;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(DebugPretty, DisplaySimple, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
/// Classification of a registry artifact
pub enum ArtifactType {
    /// A trained model
    Model,
    /// A dataset
    Dataset,
    /// An embedding table
    Embedding,
    /// An experiment run
    Run,
    /// A paper or report
    Paper,
}

#[derive(DebugPretty, DisplaySimple, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
/// Who can see an artifact
pub enum Visibility {
    /// Any authenticated user
    Public,
    /// Owner plus explicitly granted users
    Shared,
    /// Owner only
    Private,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// Bearer credential issued on login
pub struct TokenResponse {
    /// Opaque bearer token
    pub access_token: String,
    /// Token scheme, always "bearer"
    pub token_type: String,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// Account information
pub struct UserResponse {
    /// Account identifier
    pub id: i64,
    /// Account email address
    pub email: String,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// A registry artifact
pub struct Artifact {
    /// Artifact identifier
    pub id: i64,
    /// Identifier of the owning account
    pub owner_id: i64,
    /// Artifact title
    pub title: String,
    /// Classification of the artifact
    pub artifact_type: ArtifactType,
    /// Free-form description
    pub description: String,
    /// Who can see the artifact
    pub visibility: Visibility,
    /// Creation timestamp
    pub created_at: NaiveDateTime,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// An immutable revision of an artifact
pub struct ArtifactVersion {
    /// Version identifier
    pub id: i64,
    /// Identifier of the parent artifact
    pub artifact_id: i64,
    /// Version label
    pub version: String,
    /// Description of what changed
    pub changelog: String,
    /// Creation timestamp
    pub created_at: NaiveDateTime,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// Metadata for a file attached to a version
pub struct ArtifactFile {
    /// File identifier
    pub id: i64,
    /// Identifier of the parent version
    pub version_id: i64,
    /// Original filename
    pub filename: String,
    /// MIME type recorded at upload
    pub content_type: String,
    /// File size in bytes
    pub size_bytes: i64,
    /// Upload timestamp
    pub created_at: NaiveDateTime,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// Generic confirmation message (share, delete)
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}
