pub mod aggregator;
pub mod normalize;

pub use crate::domain::model::{AggregatedRecord, DetailRecord, ItemReference, SpeciesRecord};
pub use crate::domain::ports::{CatalogClient, ConfigProvider};
pub use crate::utils::error::Result;
