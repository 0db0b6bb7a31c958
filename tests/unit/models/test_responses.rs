use artifact_registry_client::prelude::*;
use chrono::{Datelike, Timelike};

#[test]
fn test_token_response_deserialization() {
    let json = r#"{"access_token": "tok1", "token_type": "bearer"}"#;
    let token: TokenResponse = serde_json::from_str(json).unwrap();
    assert_eq!(token.access_token, "tok1");
    assert_eq!(token.token_type, "bearer");
}

#[test]
fn test_artifact_deserialization() {
    let json = r#"{
        "id": 1,
        "owner_id": 7,
        "title": "M1",
        "artifact_type": "MODEL",
        "description": "a model",
        "visibility": "PRIVATE",
        "created_at": "2025-11-14T10:30:00.123456"
    }"#;
    let artifact: Artifact = serde_json::from_str(json).unwrap();
    assert_eq!(artifact.title, "M1");
    assert_eq!(artifact.artifact_type, ArtifactType::Model);
    assert_eq!(artifact.visibility, Visibility::Private);
    assert_eq!(artifact.created_at.year(), 2025);
    assert_eq!(artifact.created_at.hour(), 10);
}

#[test]
fn test_artifact_version_uses_changelog_key() {
    let json = r#"{
        "id": 3,
        "artifact_id": 1,
        "version": "1.0.0",
        "changelog": "initial release",
        "created_at": "2025-11-14T10:30:00"
    }"#;
    let version: ArtifactVersion = serde_json::from_str(json).unwrap();
    assert_eq!(version.version, "1.0.0");
    assert_eq!(version.changelog, "initial release");
}

#[test]
fn test_artifact_file_deserialization() {
    let json = r#"{
        "id": 42,
        "version_id": 3,
        "filename": "model.bin",
        "content_type": "application/octet-stream",
        "size_bytes": 1024,
        "created_at": "2025-11-14T10:30:00"
    }"#;
    let file: ArtifactFile = serde_json::from_str(json).unwrap();
    assert_eq!(file.filename, "model.bin");
    assert_eq!(file.size_bytes, 1024);
}

#[test]
fn test_artifact_type_serialization_is_uppercase() {
    assert_eq!(
        serde_json::to_string(&ArtifactType::Dataset).unwrap(),
        r#""DATASET""#
    );
    assert_eq!(
        serde_json::to_string(&Visibility::Shared).unwrap(),
        r#""SHARED""#
    );
}

#[test]
fn test_unknown_artifact_type_is_rejected() {
    let result = serde_json::from_str::<ArtifactType>(r#""NOTEBOOK""#);
    assert!(result.is_err());
}

#[test]
fn test_message_response_deserialization() {
    let json = r#"{"message": "File deleted successfully"}"#;
    let message: MessageResponse = serde_json::from_str(json).unwrap();
    assert_eq!(message.message, "File deleted successfully");
}
