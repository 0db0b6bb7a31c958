/// HTTP client: credential injection, error normalisation, upload/download
pub mod http_client;

pub use http_client::{
    DownloadedContent, FileUpload, RegistryHttpClient, RegistryHttpClientImpl,
};
