//! HTTP client for the ERCOT Public Data API.

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::query::ReportQuery;
use crate::secrets::{CredentialRefs, SecretProvider};
use crate::table::ResultTable;
use crate::token::{AuthHeader, TokenManager};
use crate::types::PageEnvelope;
use crate::Error;

/// Production base URL for the public reports API.
pub const BASE_URL: &str = "https://api.ercot.com/api/public-reports";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Which page indices a multi-page fetch requests after the first.
///
/// The upstream consumer of this API iterated page indices from 2 up to
/// `totalPages - 1` inclusive, which drops the final page's rows. That is
/// very likely an off-by-one, but until the intended semantics are confirmed
/// both readings are first-class, with the historical one as the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagePolicy {
    /// Stop one short of the final page (historical behavior).
    #[default]
    SkipFinalPage,
    /// Request every page through `totalPages`.
    AllPages,
}

impl PagePolicy {
    fn last_page(&self, total_pages: i64) -> i64 {
        match self {
            PagePolicy::SkipFinalPage => total_pages - 1,
            PagePolicy::AllPages => total_pages,
        }
    }
}

/// Client for fetching paginated report data.
///
/// Each [`Client::fetch`] builds a fresh auth header (token exchange plus
/// subscription-key resolution), requests the first page, then walks the
/// remaining pages strictly sequentially, concatenating the unpacked
/// fragments. Every request carries a fixed 10-second timeout; there is no
/// retry, no backoff, and no overall deadline across the sequence.
pub struct Client {
    base_url: String,
    http: reqwest::Client,
    tokens: TokenManager,
    page_policy: PagePolicy,
}

impl Client {
    /// Creates a client pointing at the production public reports API.
    pub fn new(secrets: Arc<dyn SecretProvider>) -> Result<Self, Error> {
        Self::with_base_url(BASE_URL, secrets)
    }

    /// Creates a client with a custom base URL. Used for testing with
    /// wiremock.
    pub fn with_base_url(base_url: &str, secrets: Arc<dyn SecretProvider>) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            tokens: TokenManager::new(secrets)?,
            page_policy: PagePolicy::default(),
        })
    }

    /// Points the token manager at a different identity-provider endpoint.
    pub fn with_token_url(mut self, token_url: &str) -> Self {
        self.tokens = self.tokens.with_token_url(token_url);
        self
    }

    pub fn with_credential_refs(mut self, refs: CredentialRefs) -> Self {
        self.tokens = self.tokens.with_credential_refs(refs);
        self
    }

    pub fn with_page_policy(mut self, page_policy: PagePolicy) -> Self {
        self.page_policy = page_policy;
        self
    }

    /// Fetches every page of the given query into one table.
    ///
    /// The first request uses whatever page the caller set (default 1); the
    /// total page count is read from its `_meta`, and the remaining indices
    /// per the [`PagePolicy`] are fetched with the same header. Any failure
    /// aborts the whole fetch; no partial table is returned.
    pub async fn fetch(&self, query: &ReportQuery) -> Result<ResultTable, Error> {
        let url = self.endpoint_url(&query.endpoint)?;
        let header = self.tokens.build_header(None, None).await?;

        let first = self.get_page(&url, query, &header).await?;
        let pages = first.page_count();
        tracing::info!(pages, endpoint = %query.endpoint, "fetched first page");

        let mut table = ResultTable::from_envelope(&first)?;
        if pages <= 1 {
            return Ok(table);
        }

        for page in 2..=self.page_policy.last_page(pages) {
            let page_query = query.for_page(page);
            let envelope = self.get_page(&url, &page_query, &header).await?;
            table.append(ResultTable::from_envelope(&envelope)?)?;
        }
        Ok(table)
    }

    /// Reports the API version from the `/version` probe endpoint.
    pub async fn api_version(&self) -> Result<String, Error> {
        let url = self.endpoint_url("version")?;
        let resp = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("Version request failed: {}", e);
            Error::RequestFailed
        })?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read version response: {}", e);
            Error::RequestFailed
        })?;
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }
        Ok(body)
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, Error> {
        Url::parse(&format!("{}/{}", self.base_url, endpoint)).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    async fn get_page(
        &self,
        url: &Url,
        query: &ReportQuery,
        header: &AuthHeader,
    ) -> Result<PageEnvelope, Error> {
        let url = query.add_to_url(url);
        let resp = header.apply(self.http.get(url)).send().await.map_err(|e| {
            tracing::error!("Failed to get page {}: {}", query.page, e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        PageEnvelope::parse(&body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
