//! The secret-store seam.

use async_trait::async_trait;

use crate::Error;

/// Resolves a named credential from a secret store.
///
/// The client never caches a resolved value beyond the call that asked for
/// it; every token exchange resolves its credentials fresh. Tests inject
/// fakes through this trait instead of touching a real store.
#[async_trait]
pub trait SecretProvider: Send + Sync {
    /// Resolves the credential named by `reference`.
    async fn resolve(&self, reference: &str) -> Result<String, Error>;
}

/// A [`SecretProvider`] backed by process environment variables.
///
/// The reference string is used directly as the variable name. Deployments
/// seed the environment from the real secret store (authenticated via its
/// own service-account token variable) before the process starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecrets;

#[async_trait]
impl SecretProvider for EnvSecrets {
    async fn resolve(&self, reference: &str) -> Result<String, Error> {
        std::env::var(reference)
            .map_err(|_| Error::Secret(format!("environment variable {} is not set", reference)))
    }
}

/// The three credential references a client needs: the identity-provider
/// username and password, and the static subscription key.
#[derive(Debug, Clone)]
pub struct CredentialRefs {
    pub username: String,
    pub password: String,
    pub subscription_key: String,
}

impl Default for CredentialRefs {
    fn default() -> Self {
        Self {
            username: "ERCOT_API_USERNAME".to_string(),
            password: "ERCOT_API_PASSWORD".to_string(),
            subscription_key: "ERCOT_SUBSCRIPTION_KEY".to_string(),
        }
    }
}
