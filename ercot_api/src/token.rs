//! Token acquisition and auth header construction.

use std::sync::Arc;
use std::time::Duration;

use reqwest::RequestBuilder;

use crate::secrets::{CredentialRefs, SecretProvider};
use crate::types::TokenResponse;
use crate::Error;

/// ERCOT's B2C ROPC token endpoint.
const TOKEN_URL: &str = "https://ercotb2c.b2clogin.com/ercotb2c.onmicrosoft.com/B2C_1_PUBAPI-ROPC-FLOW/oauth2/v2.0/token";
const CLIENT_ID: &str = "fec253ea-0d06-4272-a5e6-b478baeecd70";
const SCOPE: &str = "openid fec253ea-0d06-4272-a5e6-b478baeecd70 offline_access";

const TOKEN_TIMEOUT: Duration = Duration::from_secs(10);

/// Exchanges a username/password credential pair for a short-lived bearer
/// token and pairs it with the static subscription key.
///
/// Tokens expire after roughly an hour and are never cached here: every
/// [`TokenManager::build_header`] call without explicit inputs performs a
/// fresh exchange, which keeps each fetch cycle within the token's validity
/// window.
pub struct TokenManager {
    secrets: Arc<dyn SecretProvider>,
    http: reqwest::Client,
    token_url: String,
    refs: CredentialRefs,
}

impl TokenManager {
    pub fn new(secrets: Arc<dyn SecretProvider>) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(TOKEN_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            secrets,
            http,
            token_url: TOKEN_URL.to_string(),
            refs: CredentialRefs::default(),
        })
    }

    /// Points the manager at a different token endpoint. Used for testing
    /// with wiremock.
    pub fn with_token_url(mut self, token_url: &str) -> Self {
        self.token_url = token_url.to_string();
        self
    }

    pub fn with_credential_refs(mut self, refs: CredentialRefs) -> Self {
        self.refs = refs;
        self
    }

    /// Exchanges the resolved username and password for a bearer token.
    ///
    /// The provider expects the grant parameters on the URL query string,
    /// not as a form body. A non-success status fails with
    /// [`Error::Auth`] carrying that status.
    pub async fn acquire_token(&self) -> Result<String, Error> {
        let username = self.secrets.resolve(&self.refs.username).await?;
        let password = self.secrets.resolve(&self.refs.password).await?;

        let resp = self
            .http
            .post(&self.token_url)
            .query(&[
                ("username", username.as_str()),
                ("password", password.as_str()),
                ("grant_type", "password"),
                ("scope", SCOPE),
                ("client_id", CLIENT_ID),
                ("response_type", "id_token"),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Token request failed: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::error!("Token request failed with status {}", status);
            return Err(Error::Auth {
                status: status.as_u16(),
            });
        }

        let token: TokenResponse = resp.json().await.map_err(|e| {
            tracing::error!("Failed to parse token response: {}", e);
            Error::RequestFailed
        })?;
        Ok(token.access_token)
    }

    /// Builds the auth header for one fetch cycle.
    ///
    /// An absent token triggers a fresh [`TokenManager::acquire_token`]; an
    /// absent key is resolved through the secret provider. Passing both
    /// explicitly makes no outbound calls.
    pub async fn build_header(
        &self,
        token: Option<String>,
        key: Option<String>,
    ) -> Result<AuthHeader, Error> {
        let bearer = match token {
            Some(token) => token,
            None => self.acquire_token().await?,
        };
        let subscription_key = match key {
            Some(key) => key,
            None => self.secrets.resolve(&self.refs.subscription_key).await?,
        };
        Ok(AuthHeader {
            bearer,
            subscription_key,
        })
    }
}

/// The two headers every data request carries: the bearer token and the
/// subscription key. Built fresh per fetch cycle and short-lived.
#[derive(Debug, Clone)]
pub struct AuthHeader {
    pub bearer: String,
    pub subscription_key: String,
}

impl AuthHeader {
    /// Applies both headers to a request.
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("Authorization", format!("Bearer {}", self.bearer))
            .header("Ocp-Apim-Subscription-Key", &self.subscription_key)
    }
}
