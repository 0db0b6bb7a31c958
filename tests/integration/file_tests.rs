use crate::common::{authenticated_client, test_client};
use artifact_registry_client::prelude::*;
use tempfile::tempdir;

#[tokio::test]
async fn upload_sends_multipart_and_returns_metadata() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/versions/3/files")
        .match_header("authorization", "Bearer tok1")
        .match_header(
            "content-type",
            mockito::Matcher::Regex("^multipart/form-data.*".to_string()),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "id": 42,
                "version_id": 3,
                "filename": "model.bin",
                "content_type": "application/octet-stream",
                "size_bytes": 4,
                "created_at": "2025-11-14T10:30:00"
            }"#,
        )
        .create_async()
        .await;

    let client = authenticated_client(&server.url(), "tok1");
    let payload = FileUpload::new("model.bin", "application/octet-stream", b"DATA".to_vec());
    let metadata = client.files().upload(3, payload).await.unwrap();

    let metadata = metadata.expect("expected file metadata");
    assert_eq!(metadata.id, 42);
    assert_eq!(metadata.filename, "model.bin");
    mock.assert_async().await;
}

#[tokio::test]
async fn upload_without_json_body_returns_none() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/versions/3/files")
        .with_status(204)
        .create_async()
        .await;

    let client = authenticated_client(&server.url(), "tok1");
    let payload = FileUpload::new("empty.txt", "text/plain", Vec::new());
    let metadata: Option<ArtifactFile> = client.files().upload(3, payload).await.unwrap();
    assert!(metadata.is_none());
}

#[tokio::test]
async fn upload_without_credential_fails_before_any_network_call() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/versions/3/files")
        .expect(0)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let payload = FileUpload::new("model.bin", "application/octet-stream", b"DATA".to_vec());
    let err = client.files().upload(3, payload).await.unwrap_err();

    assert!(matches!(err, AppError::NotAuthenticated));
    mock.assert_async().await;
}

#[tokio::test]
async fn upload_401_clears_token_like_every_other_path() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/versions/3/files")
        .with_status(401)
        .with_body("unauthorized")
        .create_async()
        .await;

    let client = authenticated_client(&server.url(), "stale-token");
    let payload = FileUpload::new("model.bin", "application/octet-stream", b"DATA".to_vec());
    let err = client.files().upload(3, payload).await.unwrap_err();

    assert!(matches!(err, AppError::SessionExpired));
    assert!(client.token_store().get().is_none());
}

#[tokio::test]
async fn download_401_clears_token_like_every_other_path() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/files/9")
        .with_status(401)
        .with_body("unauthorized")
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let client = authenticated_client(&server.url(), "stale-token");
    let err = client.files().download(9, dir.path()).await.unwrap_err();

    assert!(matches!(err, AppError::SessionExpired));
    assert!(client.token_store().get().is_none());
}

#[tokio::test]
async fn upload_payload_can_be_read_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("weights.bin");
    std::fs::write(&path, b"WEIGHTS").unwrap();

    let payload = FileUpload::from_path(&path).await.unwrap();
    assert_eq!(payload.filename, "weights.bin");
    assert_eq!(payload.content_type, "application/octet-stream");
    assert_eq!(payload.data, b"WEIGHTS");
}

#[tokio::test]
async fn download_uses_the_suggested_filename() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/files/9")
        .match_header("authorization", "Bearer tok1")
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_header("content-disposition", r#"attachment; filename="model.bin""#)
        .with_body(b"BINARYDATA".to_vec())
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let client = authenticated_client(&server.url(), "tok1");
    let saved = client.files().download(9, dir.path()).await.unwrap();

    assert_eq!(saved.file_name().unwrap(), "model.bin");
    assert_eq!(std::fs::read(&saved).unwrap(), b"BINARYDATA");
}

#[tokio::test]
async fn download_without_disposition_falls_back_to_file_id_name() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/files/42")
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_body(b"DATA".to_vec())
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let client = authenticated_client(&server.url(), "tok1");
    let saved = client.files().download(42, dir.path()).await.unwrap();

    assert_eq!(saved.file_name().unwrap(), "file_42");
    assert_eq!(std::fs::read(&saved).unwrap(), b"DATA");
}

#[tokio::test]
async fn download_strips_path_components_from_the_header_name() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/files/9")
        .with_status(200)
        .with_header(
            "content-disposition",
            r#"attachment; filename="../../evil.sh""#,
        )
        .with_body(b"DATA".to_vec())
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let client = authenticated_client(&server.url(), "tok1");
    let saved = client.files().download(9, dir.path()).await.unwrap();

    assert_eq!(saved.file_name().unwrap(), "evil.sh");
    assert!(saved.starts_with(dir.path()));
}

#[tokio::test]
async fn download_without_credential_fails_before_any_network_call() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("GET", "/files/9").expect(0).create_async().await;

    let dir = tempdir().unwrap();
    let client = test_client(&server.url());
    let err = client.files().download(9, dir.path()).await.unwrap_err();

    assert!(matches!(err, AppError::NotAuthenticated));
    mock.assert_async().await;
}

#[tokio::test]
async fn download_error_body_is_extracted_like_json_errors() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/files/9")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"File not found"}"#)
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let client = authenticated_client(&server.url(), "tok1");
    let err = client.files().download(9, dir.path()).await.unwrap_err();

    match err {
        AppError::Api { status, message } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(message, "File not found");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn list_and_delete_files() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/versions/3/files")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{
                "id": 42,
                "version_id": 3,
                "filename": "model.bin",
                "content_type": "application/octet-stream",
                "size_bytes": 4,
                "created_at": "2025-11-14T10:30:00"
            }]"#,
        )
        .create_async()
        .await;
    server
        .mock("DELETE", "/files/42")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"File deleted successfully"}"#)
        .create_async()
        .await;

    let client = authenticated_client(&server.url(), "tok1");

    let files = client.files().list(3).await.unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].filename, "model.bin");

    let response = client.files().delete(42).await.unwrap();
    assert_eq!(response.message, "File deleted successfully");
}
