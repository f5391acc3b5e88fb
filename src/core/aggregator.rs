use crate::core::normalize::display_name;
use crate::domain::model::{
    AggregatedRecord, DetailRecord, ItemReference, ResolveStage, SpeciesRecord,
};
use crate::domain::ports::{CatalogClient, ConfigProvider};
use crate::utils::error::{AggregatorError, Result};
use futures::stream::{self, StreamExt};
use std::time::Instant;

pub const MIN_COUNT: i64 = 1;
pub const MAX_COUNT: i64 = 100;
pub const DEFAULT_COUNT: i64 = 20;

/// 單一參照解析失敗：記錄失敗的參照、當時所在階段與原因
#[derive(Debug)]
pub struct ItemFailure {
    pub reference: ItemReference,
    pub stage: ResolveStage,
    pub error: AggregatorError,
}

/// 三階段聚合流程：列表 → 詳細資料 → 物種資料。
///
/// 單一項目的失敗只會讓該項目被略過，不影響其他項目；
/// 只有參數錯誤或列表取得失敗會讓整個請求失敗。
pub struct Aggregator<C: CatalogClient> {
    client: C,
    concurrent_requests: usize,
}

impl<C: CatalogClient> Aggregator<C> {
    pub fn new(client: C, concurrent_requests: usize) -> Self {
        Self {
            client,
            concurrent_requests: concurrent_requests.max(1),
        }
    }

    pub fn from_config<P: ConfigProvider>(client: C, config: &P) -> Self {
        Self::new(client, config.concurrent_requests())
    }

    pub fn concurrent_requests(&self) -> usize {
        self.concurrent_requests
    }

    /// 驗證請求數量，必須介於 1 到 100 之間
    pub fn validate_count(requested_count: i64) -> Result<u32> {
        if !(MIN_COUNT..=MAX_COUNT).contains(&requested_count) {
            return Err(AggregatorError::InvalidArgument {
                message: format!("Count must be between {} and {}", MIN_COUNT, MAX_COUNT),
            });
        }
        Ok(requested_count as u32)
    }

    /// 取得聚合記錄。結果依列表順序排列，失敗的項目直接略過。
    ///
    /// 同時進行中的單項請求不超過 `concurrent_requests`；
    /// 若呼叫端放棄此 future，尚未完成的單項請求也會一併取消。
    pub async fn fetch_aggregated_records(
        &self,
        requested_count: i64,
    ) -> Result<Vec<AggregatedRecord>> {
        let limit = Self::validate_count(requested_count)?;
        let started = Instant::now();

        tracing::info!("🚀 Fetching reference list (limit={})", limit);
        let references = match self.client.fetch_list(limit).await {
            Ok(references) => references,
            Err(e) => {
                tracing::error!("❌ Failed to fetch reference list: {}", e);
                return Err(e);
            }
        };
        tracing::info!("📋 Received {} references", references.len());

        let outcomes: Vec<_> = stream::iter(references)
            .map(|reference| async move { self.resolve(&reference).await })
            .buffered(self.concurrent_requests)
            .collect()
            .await;

        let mut records = Vec::with_capacity(outcomes.len());
        let mut skipped = 0usize;
        for outcome in outcomes {
            match outcome {
                Ok(record) => records.push(record),
                Err(failure) => {
                    skipped += 1;
                    tracing::warn!(
                        reference = %failure.reference.name,
                        url = %failure.reference.detail_url,
                        "⚠️ Skipping '{}' after failed {}: {}",
                        failure.reference.name,
                        failure.stage.next_step(),
                        failure.error
                    );
                }
            }
        }

        tracing::info!(
            "✅ Aggregated {} records ({} skipped) in {:?}",
            records.len(),
            skipped,
            started.elapsed()
        );

        Ok(records)
    }

    /// 解析單一參照：詳細資料 → 物種資料 → 組合
    pub async fn resolve(
        &self,
        reference: &ItemReference,
    ) -> std::result::Result<AggregatedRecord, ItemFailure> {
        let fail = |stage, error| ItemFailure {
            reference: reference.clone(),
            stage,
            error,
        };

        let mut stage = ResolveStage::Pending;
        let detail = self
            .client
            .fetch_detail(&reference.detail_url)
            .await
            .map_err(|e| fail(stage, e))?;

        stage = ResolveStage::DetailFetched;
        let species = self
            .client
            .fetch_species(&detail.species_url)
            .await
            .map_err(|e| fail(stage, e))?;

        stage = ResolveStage::SpeciesFetched;
        tracing::debug!("🔗 {}: {:?}, assembling record", reference.name, stage);
        Ok(assemble(&detail, &species))
    }
}

/// 合併詳細資料與物種資料；身高體重原樣保留
pub fn assemble(detail: &DetailRecord, species: &SpeciesRecord) -> AggregatedRecord {
    AggregatedRecord {
        display_name: display_name(detail.raw_name.as_deref()),
        height: detail.height,
        weight: detail.weight,
        display_species: display_name(species.raw_name.as_deref()),
    }
}
