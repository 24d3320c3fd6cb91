//! The `fetch` subcommand: dump any public-reports endpoint to CSV.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use ercot_api::ReportQuery;

use crate::output;

/// Arguments for the `fetch` subcommand.
#[derive(Args)]
pub struct FetchArgs {
    /// Endpoint path, e.g. np4-190-cd/dam_stlmnt_pnt_prices
    #[arg(long)]
    pub endpoint: String,

    /// Extra query parameter as key=value (repeatable)
    #[arg(long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// First page to request
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Also request the final page of multi-page responses
    #[arg(long)]
    pub all_pages: bool,

    /// Output CSV path
    #[arg(long)]
    pub out: PathBuf,
}

pub async fn run(args: &FetchArgs) -> Result<()> {
    let client = super::build_client(args.all_pages)?;

    let mut query = ReportQuery::new(&args.endpoint).with_page(args.page);
    for (key, value) in &args.params {
        query = query.with_param(key, value);
    }

    let table = client.fetch(&query).await?;
    output::write_csv(&table, &args.out)?;
    eprintln!("Wrote {} rows to {}", table.len(), args.out.display());
    Ok(())
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got `{}`", s)),
    }
}
