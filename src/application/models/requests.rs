/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/11/25
******************************************************************************/

//! Request payloads sent to the registry API

use crate::application::models::responses::{ArtifactType, Visibility};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// Payload for `POST /auth/register`
pub struct RegisterRequest {
    /// Email address of the new account
    pub email: String,
    /// Password, at least 8 characters
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// Payload for `POST /auth/login`
pub struct LoginRequest {
    /// Email address of the account
    pub email: String,
    /// Account password
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// Payload for `POST /artifacts`
pub struct CreateArtifactRequest {
    /// Title of the artifact, must not be empty
    pub title: String,
    /// Classification of the artifact
    pub artifact_type: ArtifactType,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Who can see the artifact
    pub visibility: Visibility,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// Payload for `POST /artifacts/{id}/versions`
pub struct CreateVersionRequest {
    /// Version label, e.g. "1.0.0"
    pub version: String,
    /// Description of what changed in this version
    #[serde(default)]
    pub change_log: String,
}

#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
/// Payload for `POST /artifacts/{id}/share`
pub struct ShareRequest {
    /// Email of the user the artifact is shared with
    pub email: String,
}
