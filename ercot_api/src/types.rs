//! Wire types for the public reports API.

use serde::Deserialize;
use serde_json::Value;

use crate::Error;

/// One page of a report response: ordered field descriptors, positional row
/// data, and pagination metadata.
#[derive(Debug, Deserialize)]
pub struct PageEnvelope {
    pub fields: Vec<FieldDescriptor>,
    pub data: Vec<Vec<Value>>,
    #[serde(rename = "_meta")]
    pub meta: Meta,
}

impl PageEnvelope {
    /// Parses a response body into an envelope. Any deviation from the
    /// documented shape (missing `fields`, `data`, or `_meta`) is a
    /// [`Error::Format`].
    pub fn parse(body: &str) -> Result<Self, Error> {
        serde_json::from_str(body).map_err(|e| Error::Format(e.to_string()))
    }

    /// Total page count for the query this page belongs to.
    pub fn page_count(&self) -> i64 {
        self.meta.total_pages
    }
}

/// A column descriptor. Only `name` matters for unpacking; the API also
/// reports a label and data type which are carried through for callers that
/// want them.
#[derive(Debug, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, rename = "dataType")]
    pub data_type: Option<String>,
}

/// Pagination metadata (`_meta` on the wire).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(default)]
    pub total_records: Option<i64>,
    #[serde(default)]
    pub page_size: Option<i64>,
    #[serde(default)]
    pub current_page: Option<i64>,
    pub total_pages: i64,
}

/// The identity provider's reply to a successful token exchange.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}
