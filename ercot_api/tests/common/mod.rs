#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ercot_api::{Client, Error, SecretProvider};
use wiremock::MockServer;

/// In-memory stand-in for the secret store, keyed by the default credential
/// references.
#[derive(Default)]
pub struct FakeSecrets {
    pub resolve_calls: AtomicUsize,
}

#[async_trait::async_trait]
impl SecretProvider for FakeSecrets {
    async fn resolve(&self, reference: &str) -> Result<String, Error> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        match reference {
            "ERCOT_API_USERNAME" => Ok("test-user".to_string()),
            "ERCOT_API_PASSWORD" => Ok("test-pass".to_string()),
            "ERCOT_SUBSCRIPTION_KEY" => Ok("sub-key".to_string()),
            other => Err(Error::Secret(format!("unknown reference {}", other))),
        }
    }
}

/// A client pointed at the mock server for both data pages and the token
/// endpoint (mounted at `/token`).
pub fn test_client(server: &MockServer) -> Client {
    Client::with_base_url(&server.uri(), Arc::new(FakeSecrets::default()))
        .unwrap()
        .with_token_url(&format!("{}/token", server.uri()))
}

pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}
