use serde::{Deserialize, Serialize};

/// 列表頁中的一筆項目參照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemReference {
    pub name: String,
    pub detail_url: String,
}

/// 詳細資料；`species_url` 已驗證為絕對 http(s) URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRecord {
    pub raw_name: Option<String>,
    /// 單位為 0.1 長度單位（公寸）
    pub height: u32,
    /// 單位為 0.1 質量單位（百公克）
    pub weight: u32,
    pub species_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesRecord {
    pub raw_name: Option<String>,
}

/// 回傳給呼叫端的聚合記錄
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedRecord {
    #[serde(rename = "name")]
    pub display_name: String,
    pub height: u32,
    pub weight: u32,
    #[serde(rename = "species")]
    pub display_species: String,
}

/// 單一項目解析流程目前所在的階段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveStage {
    Pending,
    DetailFetched,
    SpeciesFetched,
}

impl ResolveStage {
    /// 此階段接下來要執行的步驟，用於失敗日誌
    pub fn next_step(&self) -> &'static str {
        match self {
            ResolveStage::Pending => "detail fetch",
            ResolveStage::DetailFetched => "species fetch",
            ResolveStage::SpeciesFetched => "record assembly",
        }
    }
}
