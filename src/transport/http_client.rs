/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/11/25
******************************************************************************/

//! HTTP transport for the Artifact Registry API
//!
//! All authenticated traffic goes through one request primitive with a single
//! 401 policy, parameterised by body encoding (JSON, multipart, binary
//! download) rather than duplicating header logic per call site:
//! - JSON requests attach the bearer header when a credential is stored and
//!   a JSON content type only when a body is present.
//! - Upload and download require a stored credential and fail locally with
//!   [`AppError::NotAuthenticated`] before any network call when it is absent.
//! - Any 401 clears the token store and fails with
//!   [`AppError::SessionExpired`]; there is no retry. Navigation back to a
//!   login surface is the embedder's concern, not this layer's.
//! - Any other non-2xx is reduced to a single human-readable message.

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::session::TokenStore;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{AUTHORIZATION, CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, warn};

static FILENAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)filename="?([^";]+)"?"#).expect("valid filename pattern"));

/// A file payload for multipart upload
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// Name the server should record for the file
    pub filename: String,
    /// MIME type of the payload
    pub content_type: String,
    /// Raw file contents
    pub data: Vec<u8>,
}

impl FileUpload {
    /// Creates an upload payload from in-memory bytes
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            data,
        }
    }

    /// Reads a local file into an upload payload
    ///
    /// The filename is taken from the path's final component and the content
    /// type defaults to `application/octet-stream`.
    pub async fn from_path(path: &Path) -> Result<Self, AppError> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AppError::InvalidInput(format!("invalid file path: {path:?}")))?
            .to_string();
        let data = tokio::fs::read(path).await?;
        Ok(Self::new(filename, "application/octet-stream", data))
    }
}

/// A binary response body with the server's suggested filename, if any
#[derive(Debug, Clone)]
pub struct DownloadedContent {
    /// Filename extracted from the `Content-Disposition` header
    pub filename: Option<String>,
    /// Raw response bytes
    pub bytes: Vec<u8>,
}

/// HTTP client trait for the registry API
///
/// Services are generic over this trait so they can be exercised against a
/// stub transport in tests.
#[async_trait]
pub trait RegistryHttpClient: Send + Sync {
    /// Makes a JSON request and deserializes the JSON response
    async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync;

    /// Uploads a file as a multipart body
    ///
    /// Returns `None` when the server replies with a non-JSON (e.g. empty)
    /// success body.
    async fn upload<T>(&self, path: &str, file: FileUpload) -> Result<Option<T>, AppError>
    where
        T: DeserializeOwned;

    /// Downloads a binary response body
    async fn download(&self, path: &str) -> Result<DownloadedContent, AppError>;

    /// Makes a GET request
    async fn get<T>(&self, path: &str) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    /// Makes a POST request with a JSON body
    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a DELETE request
    async fn delete<T>(&self, path: &str) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        self.request::<T, ()>(Method::DELETE, path, None).await
    }
}

/// Reqwest-backed implementation of [`RegistryHttpClient`]
pub struct RegistryHttpClientImpl {
    config: Arc<Config>,
    store: Arc<TokenStore>,
    http: Client,
}

impl RegistryHttpClientImpl {
    /// Creates a new transport bound to the given configuration and token store
    pub fn new(config: Arc<Config>, store: Arc<TokenStore>) -> Result<Self, AppError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            config,
            store,
            http,
        })
    }

    /// The token store this transport consults for credentials
    pub fn token_store(&self) -> &Arc<TokenStore> {
        &self.store
    }

    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            let path = path.trim_start_matches('/');
            let base = self.config.rest_api.base_url.trim_end_matches('/');
            format!("{base}/{path}")
        }
    }

    /// Requires a stored credential, without touching the network
    fn bearer_token(&self) -> Result<String, AppError> {
        self.store.get().ok_or(AppError::NotAuthenticated)
    }

    /// Sends the request and applies the shared status policy
    ///
    /// 401 clears the token store and becomes [`AppError::SessionExpired`];
    /// this fires at most once per call, there is no retry. Any other non-2xx
    /// becomes [`AppError::Api`] with the derived message.
    async fn execute(&self, request: RequestBuilder) -> Result<Response, AppError> {
        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status == StatusCode::UNAUTHORIZED {
            if let Err(e) = self.store.clear() {
                warn!("Failed to clear token store after 401: {e}");
            }
            let body = response.text().await.unwrap_or_default();
            error!("Unauthorized: {}", body);
            return Err(AppError::SessionExpired);
        }

        if !status.is_success() {
            let message = extract_error_message(response).await;
            error!("Request failed with status {}: {}", status, message);
            return Err(AppError::Api { status, message });
        }

        Ok(response)
    }
}

#[async_trait]
impl RegistryHttpClient for RegistryHttpClientImpl {
    async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        let url = self.build_url(path);
        debug!("{} {}", method, url);

        let mut request = self.http.request(method, &url);

        if let Some(token) = self.store.get() {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        // .json() sets the JSON content type; no body means no content type
        if let Some(b) = body {
            request = request.json(b);
        }

        let response = self.execute(request).await?;
        Ok(response.json().await?)
    }

    async fn upload<T>(&self, path: &str, file: FileUpload) -> Result<Option<T>, AppError>
    where
        T: DeserializeOwned,
    {
        let token = self.bearer_token()?;
        let url = self.build_url(path);
        debug!("POST {} (multipart, {} bytes)", url, file.data.len());

        let part = Part::bytes(file.data)
            .file_name(file.filename)
            .mime_str(&file.content_type)?;
        let form = Form::new().part("file", part);

        // The multipart boundary header is set by reqwest; adding a JSON
        // content type here would corrupt the request.
        let request = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .multipart(form);

        let response = self.execute(request).await?;

        if is_json_response(&response) {
            Ok(Some(response.json().await?))
        } else {
            Ok(None)
        }
    }

    async fn download(&self, path: &str) -> Result<DownloadedContent, AppError> {
        let token = self.bearer_token()?;
        let url = self.build_url(path);
        debug!("GET {} (binary)", url);

        let request = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {token}"));

        let response = self.execute(request).await?;

        let filename = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(extract_disposition_filename);

        let bytes = response.bytes().await?.to_vec();
        Ok(DownloadedContent { filename, bytes })
    }
}

fn is_json_response(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.contains("application/json"))
        .unwrap_or(false)
}

/// Extracts the suggested filename from a `Content-Disposition` header value
pub fn extract_disposition_filename(header: &str) -> Option<String> {
    FILENAME_RE
        .captures(header)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

async fn extract_error_message(response: Response) -> String {
    let is_json = is_json_response(&response);
    let body = response.text().await.unwrap_or_default();
    derive_error_message(is_json, &body)
}

/// Derives a human-readable message from an error response body
///
/// JSON bodies prefer the `detail` field when it is a string; a non-string
/// `detail` or a body without one is stringified wholesale. Non-JSON bodies
/// are returned as raw text.
pub fn derive_error_message(is_json: bool, body: &str) -> String {
    if !is_json {
        return body.to_string();
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(s)) => s,
        Ok(value) => match value.get("detail") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => value.to_string(),
        },
        Err(_) => body.to_string(),
    }
}
