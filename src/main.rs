use anyhow::Result;
use aqi_forecast::cli::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.one_shot {
        return aqi_forecast::run_one_shot(cli).await;
    }
    aqi_forecast::run(cli).await
}
