use anyhow::Result;
use clap::Parser;
use fxconv::core::config::AppConfig;
use fxconv::core::log::init_logging;
use fxconv::providers::exchange_rate_api::ExchangeRateApiProvider;
use std::io;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // The API key may live in a .env file in the working directory.
    dotenv::dotenv().ok();

    let result = run().await;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

async fn run() -> Result<()> {
    let config = AppConfig::from_env()?;
    let provider = ExchangeRateApiProvider::new(&config)?;

    let stdin = io::stdin();
    fxconv::run(&provider, &mut stdin.lock()).await
}
