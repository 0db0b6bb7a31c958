use crate::common::{authenticated_client, test_client};
use artifact_registry_client::prelude::*;

#[tokio::test]
async fn bearer_header_is_attached_to_authenticated_calls() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/artifacts/me")
        .match_header("authorization", "Bearer tok1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let client = authenticated_client(&server.url(), "tok1");
    let artifacts = client.artifacts().list_mine().await.unwrap();
    assert!(artifacts.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn unauthenticated_calls_carry_no_bearer_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/artifacts")
        .match_header("authorization", mockito::Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let client = test_client(&server.url());
    client.artifacts().list_accessible().await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn status_401_clears_token_and_reports_session_expiry() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/artifacts/me")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Could not validate credentials"}"#)
        .create_async()
        .await;

    let client = authenticated_client(&server.url(), "stale-token");
    let err = client.artifacts().list_mine().await.unwrap_err();

    assert!(matches!(err, AppError::SessionExpired));
    assert_eq!(err.to_string(), "session expired, please login again");
    assert!(client.token_store().get().is_none());
}

#[tokio::test]
async fn status_401_on_post_clears_token_too() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/artifacts")
        .with_status(401)
        .with_body("unauthorized")
        .create_async()
        .await;

    let client = authenticated_client(&server.url(), "stale-token");
    let request = CreateArtifactRequest {
        title: "M1".to_string(),
        artifact_type: ArtifactType::Model,
        description: String::new(),
        visibility: Visibility::Private,
    };
    let err = client.artifacts().create(&request).await.unwrap_err();

    assert!(matches!(err, AppError::SessionExpired));
    assert!(client.token_store().get().is_none());
}

#[tokio::test]
async fn json_detail_field_becomes_the_error_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/auth/register")
        .with_status(409)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Email already exists"}"#)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let err = client
        .auth()
        .register("a@x.com", "pw123456")
        .await
        .unwrap_err();

    match err {
        AppError::Api { status, message } => {
            assert_eq!(status.as_u16(), 409);
            assert_eq!(message, "Email already exists");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn plain_text_body_becomes_the_error_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/artifacts/5")
        .with_status(500)
        .with_header("content-type", "text/plain")
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let client = authenticated_client(&server.url(), "tok1");
    let err = client.artifacts().get(5).await.unwrap_err();

    match err {
        AppError::Api { status, message } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn network_failure_surfaces_as_network_error() {
    // Point at a closed port; no server is listening
    let client = test_client("http://127.0.0.1:1");
    let err = client.artifacts().list_accessible().await.unwrap_err();
    assert!(matches!(err, AppError::Network(_)));
}
