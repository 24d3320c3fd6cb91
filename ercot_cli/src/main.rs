mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ercot")]
#[command(about = "Fetch paginated datasets from the ERCOT Public Data API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch an arbitrary public-reports endpoint to CSV
    Fetch(commands::fetch::FetchArgs),
    /// Fetch day-ahead market settlement point prices to CSV
    DamPrices(commands::dam_prices::DamPricesArgs),
    /// Print the public-reports API version
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ercot_api=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Fetch(args) => commands::fetch::run(args).await?,
        Commands::DamPrices(args) => commands::dam_prices::run(args).await?,
        Commands::Version => commands::version().await?,
    }

    Ok(())
}
