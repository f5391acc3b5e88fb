use catalog_aggregator::core::aggregator::DEFAULT_COUNT;
use catalog_aggregator::utils::logger;
use catalog_aggregator::{Aggregator, AggregatorError, CliConfig, HttpCatalogClient};
use clap::Parser;

#[derive(Parser)]
#[command(name = "fetch-records")]
#[command(about = "Fetch aggregated catalog records once and print them as JSON")]
struct Args {
    /// Number of records to request (1-100)
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT, allow_hyphen_values = true)]
    count: i64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    #[command(flatten)]
    common: CliConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.common.verbose);

    let config = match args.common.load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let client = HttpCatalogClient::from_config(&config)?;
    let aggregator = Aggregator::from_config(client, &config);

    match aggregator.fetch_aggregated_records(args.count).await {
        Ok(records) => {
            let output = if args.pretty {
                serde_json::to_string_pretty(&records)?
            } else {
                serde_json::to_string(&records)?
            };
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            let exit_code = match e {
                AggregatorError::InvalidArgument { .. } => 2,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
