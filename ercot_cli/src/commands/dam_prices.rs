//! The `dam-prices` subcommand: day-ahead market settlement point prices.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use ercot_api::ReportQuery;

use crate::output;

const ENDPOINT: &str = "np4-190-cd/dam_stlmnt_pnt_prices";

/// Arguments for the `dam-prices` subcommand.
#[derive(Args)]
pub struct DamPricesArgs {
    /// Delivery date lower bound (YYYY-MM-DD)
    #[arg(long)]
    pub from: NaiveDate,

    /// Delivery date upper bound (YYYY-MM-DD)
    #[arg(long)]
    pub to: NaiveDate,

    /// Settlement point to filter on
    #[arg(long, default_value = "HB_HOUSTON")]
    pub settlement_point: String,

    /// Also request the final page of multi-page responses
    #[arg(long)]
    pub all_pages: bool,

    /// Output CSV path
    #[arg(long)]
    pub out: PathBuf,
}

pub async fn run(args: &DamPricesArgs) -> Result<()> {
    let client = super::build_client(args.all_pages)?;

    let query = ReportQuery::new(ENDPOINT)
        .with_delivery_date_from(args.from)
        .with_delivery_date_to(args.to)
        .with_settlement_point(&args.settlement_point);

    let table = client.fetch(&query).await?;
    output::write_csv(&table, &args.out)?;
    eprintln!(
        "Wrote {} rows for {} to {}",
        table.len(),
        args.settlement_point,
        args.out.display()
    );
    Ok(())
}
