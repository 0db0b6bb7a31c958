// Common utilities for integration tests

use artifact_registry_client::prelude::*;

/// Creates a client with in-memory token storage pointed at a mock server
pub fn test_client(base_url: &str) -> RegistryClient {
    setup_logger();
    RegistryClient::new(Config::with_base_url(base_url)).expect("Failed to create client")
}

/// Creates a client that already holds a credential
pub fn authenticated_client(base_url: &str, token: &str) -> RegistryClient {
    let client = test_client(base_url);
    client.token_store().set(token).expect("Failed to set token");
    client
}
