/// User agent string used in HTTP requests to identify this client to the registry API
pub const USER_AGENT: &str = "artifact-registry-client/0.1.0";
/// Default base URL for the registry REST API when none is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT: u64 = 30;
/// Default file used to persist the bearer token between runs
pub const DEFAULT_TOKEN_FILE: &str = ".registry_token";
/// Default directory where downloaded files are saved
pub const DEFAULT_DOWNLOAD_DIR: &str = ".";
/// Minimum password length accepted by the registry on registration
pub const MIN_PASSWORD_LENGTH: usize = 8;
