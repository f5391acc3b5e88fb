pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::AppConfig;

pub use crate::adapters::{catalog::HttpCatalogClient, http::router};
pub use crate::core::aggregator::Aggregator;
pub use crate::domain::model::AggregatedRecord;
pub use crate::utils::error::{AggregatorError, Result};
