use anyhow::Context;
use catalog_aggregator::adapters::http;
use catalog_aggregator::utils::logger;
use catalog_aggregator::{Aggregator, AppConfig, CliConfig, HttpCatalogClient};
use clap::Parser;
use std::sync::Arc;

fn init_logging(config: &AppConfig) {
    if config.json_logs() {
        logger::init_json_logger(config.logging.verbose);
    } else {
        logger::init_cli_logger(config.logging.verbose);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入並驗證配置
    let config = match cli.load() {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    init_logging(&config);

    tracing::info!("🚀 Starting catalog-aggregator");
    tracing::debug!("Config: {:?}", config);
    tracing::info!(
        "📚 Catalog: {} (concurrency {})",
        config.catalog.base_url,
        config.aggregation.concurrent_requests
    );

    let client = HttpCatalogClient::from_config(&config)
        .context("failed to create catalog client")?;
    let aggregator = Arc::new(Aggregator::from_config(client, &config));

    http::serve(&config.bind_address(), aggregator)
        .await
        .with_context(|| format!("server on {} failed", config.bind_address()))?;

    Ok(())
}
