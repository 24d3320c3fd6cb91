//! Error types for the API client.

/// Errors that can occur when fetching data from the public reports API.
///
/// None of these are retried: any failure aborts the whole fetch and no
/// partial table is returned.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The identity provider rejected the token exchange.
    #[error("token request failed with status {status}")]
    Auth { status: u16 },
    /// A credential reference could not be resolved.
    #[error("secret resolution failed: {0}")]
    Secret(String),
    /// An HTTP request failed (network error, timeout, or unreadable response).
    #[error("request failed")]
    RequestFailed,
    /// A data-page request returned a non-success status with a body snippet.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// A response body did not match the documented page envelope shape.
    #[error("unexpected response shape: {0}")]
    Format(String),
}
