use crate::config::toml_config::AppConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

// 命令列選項；有指定的值會覆蓋設定檔
#[derive(Debug, Clone, Parser)]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "AGGREGATOR_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(long)]
    pub port: Option<u16>,

    /// Base URL of the remote catalog API
    #[arg(long, env = "CATALOG_BASE_URL")]
    pub base_url: Option<String>,

    /// Maximum number of per-item lookups in flight for one request
    #[arg(long)]
    pub concurrent_requests: Option<usize>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 設定檔（若有）→ 命令列覆蓋 → 驗證
    pub fn load(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(base_url) = &self.base_url {
            config.catalog.base_url = base_url.clone();
        }
        if let Some(concurrent) = self.concurrent_requests {
            config.aggregation.concurrent_requests = concurrent;
        }
        if let Some(timeout) = self.timeout_seconds {
            config.catalog.timeout_seconds = Some(timeout);
        }
        if self.json_logs {
            config.logging.format = "json".to_string();
        }
        if self.verbose {
            config.logging.verbose = true;
        }
    }
}
