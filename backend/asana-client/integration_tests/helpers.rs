//! Shared setup for wiremock-backed client tests.

use asana_client::{AsanaClient, ClientConfig};

use std::time::Duration;

use wiremock::MockServer;

pub const TEST_API_KEY: &str = "0/integration-key";

/// `Basic base64("0/integration-key:")`
pub const TEST_AUTHORIZATION: &str = "Basic MC9pbnRlZ3JhdGlvbi1rZXk6";

pub const API_PREFIX: &str = "/api/1.0";

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new(TEST_API_KEY)
        .with_base_url(format!("{}{API_PREFIX}", server.uri()))
        .with_timeout(Duration::from_secs(5))
}

pub fn client_for(server: &MockServer) -> AsanaClient {
    AsanaClient::from_config(config_for(server)).expect("client should build")
}
