//! Client for the ERCOT Public Data API.
//!
//! Fetches paginated report datasets, authenticating each request with a
//! short-lived bearer token (password-grant exchange against ERCOT's B2C
//! identity provider) plus a static subscription key, and reassembles
//! multi-page responses into a single [`ResultTable`].

mod client;
mod errors;
mod query;
mod secrets;
mod table;
mod token;
pub mod types;

pub use self::client::{Client, PagePolicy, BASE_URL};
pub use self::errors::Error;
pub use self::query::ReportQuery;
pub use self::secrets::{CredentialRefs, EnvSecrets, SecretProvider};
pub use self::table::ResultTable;
pub use self::token::{AuthHeader, TokenManager};
