pub mod dam_prices;
pub mod fetch;

use std::sync::Arc;

use anyhow::Result;
use ercot_api::{Client, EnvSecrets, PagePolicy};

/// Builds a client against the production API, or against
/// `ERCOT_BASE_URL` when set (used for testing against a local mock).
pub fn build_client(all_pages: bool) -> Result<Client> {
    let client = match std::env::var("ERCOT_BASE_URL") {
        Ok(url) => Client::with_base_url(&url, Arc::new(EnvSecrets))?,
        Err(_) => Client::new(Arc::new(EnvSecrets))?,
    };
    let policy = if all_pages {
        PagePolicy::AllPages
    } else {
        PagePolicy::SkipFinalPage
    };
    Ok(client.with_page_policy(policy))
}

pub async fn version() -> Result<()> {
    let client = build_client(false)?;
    println!("{}", client.api_version().await?);
    Ok(())
}
