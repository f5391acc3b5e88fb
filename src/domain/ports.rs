use crate::domain::model::{DetailRecord, ItemReference, SpeciesRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 遠端目錄 API。實作必須可同時被多個請求共用，且不保存每次呼叫的狀態。
///
/// 任何非 2xx 狀態與傳輸失敗都應回傳 `UpstreamUnavailable`；
/// 無法解碼或缺少必要欄位的回應回傳 `MalformedResponse`。
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn fetch_list(&self, limit: u32) -> Result<Vec<ItemReference>>;
    async fn fetch_detail(&self, detail_url: &str) -> Result<DetailRecord>;
    async fn fetch_species(&self, species_url: &str) -> Result<SpeciesRecord>;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_base_url(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
    fn user_agent(&self) -> &str;
    fn concurrent_requests(&self) -> usize;
}
