use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use volscore::application::volatility_service::VolatilityService;
use volscore::cli::Args;
use volscore::config::AppConfig;
use volscore::infrastructure::binance_dex_client::BinanceDexClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional; flags and the process environment still apply
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let config = AppConfig::from_args(&args)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let service = VolatilityService::new(Arc::new(BinanceDexClient::new()));
    let report = service.evaluate(&config.window, &config.market).await?;

    println!(
        "volatility score: {:.6} with bonus: {:.6}",
        report.score, report.bonus
    );

    Ok(())
}
