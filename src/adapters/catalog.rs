use crate::domain::model::{DetailRecord, ItemReference, SpeciesRecord};
use crate::domain::ports::{CatalogClient, ConfigProvider};
use crate::utils::error::{AggregatorError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

// 目錄 API 的回應結構；解碼失敗一律視為 MalformedResponse

#[derive(Debug, Deserialize)]
struct ListPagePayload {
    results: Vec<ListEntryPayload>,
}

#[derive(Debug, Deserialize)]
struct ListEntryPayload {
    name: String,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailPayload {
    name: Option<String>,
    // 身高體重以 u32 解碼；負值會讓該項目解碼失敗而被略過
    height: u32,
    weight: u32,
    species: ResourceLinkPayload,
}

#[derive(Debug, Deserialize)]
struct ResourceLinkPayload {
    url: String,
}

#[derive(Debug, Deserialize)]
struct SpeciesPayload {
    name: Option<String>,
}

impl DetailPayload {
    fn into_record(self, source_url: &str) -> Result<DetailRecord> {
        let species_url = self.species.url.trim();
        if species_url.is_empty() {
            return Err(AggregatorError::malformed(source_url, "species.url is empty"));
        }

        match Url::parse(species_url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.has_host() => {}
            Ok(parsed) => {
                return Err(AggregatorError::malformed(
                    source_url,
                    format!("species.url has unsupported scheme '{}'", parsed.scheme()),
                ))
            }
            Err(e) => {
                return Err(AggregatorError::malformed(
                    source_url,
                    format!("species.url '{}' is not an absolute URL: {}", species_url, e),
                ))
            }
        }

        Ok(DetailRecord {
            raw_name: self.name,
            height: self.height,
            weight: self.weight,
            species_url: species_url.to_string(),
        })
    }
}

/// 以 reqwest 實作的目錄客戶端。`Client` 內部為 Arc，可直接 clone 共用。
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent().to_string());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| AggregatorError::ConfigError {
            message: format!("Failed to build HTTP client: {}", e),
        })?;

        Self::with_client(client, config.catalog_base_url())
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        validate_url("catalog.base_url", base_url)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn list_url(&self, limit: u32) -> String {
        format!("{}/pokemon?limit={}", self.base_url, limit)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("📡 GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AggregatorError::upstream(url, e))?;

        let status = response.status();
        tracing::debug!("📡 {} -> {}", url, status);
        if !status.is_success() {
            return Err(AggregatorError::upstream(
                url,
                format!("unexpected HTTP status {}", status),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AggregatorError::upstream(url, e))?;

        serde_json::from_str(&body).map_err(|e| AggregatorError::malformed(url, e))
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn fetch_list(&self, limit: u32) -> Result<Vec<ItemReference>> {
        let url = self.list_url(limit);
        let page: ListPagePayload = self.get_json(&url).await?;

        let mut references = Vec::with_capacity(page.results.len());
        for entry in page.results {
            let detail_url = match entry.url {
                Some(url) if !url.trim().is_empty() => url,
                _ => {
                    tracing::warn!("⚠️ Skipping list entry '{}' without a detail URL", entry.name);
                    continue;
                }
            };
            references.push(ItemReference {
                name: entry.name,
                detail_url,
            });
        }

        Ok(references)
    }

    async fn fetch_detail(&self, detail_url: &str) -> Result<DetailRecord> {
        let payload: DetailPayload = self.get_json(detail_url).await?;
        payload.into_record(detail_url)
    }

    async fn fetch_species(&self, species_url: &str) -> Result<SpeciesRecord> {
        let payload: SpeciesPayload = self.get_json(species_url).await?;
        Ok(SpeciesRecord {
            raw_name: payload.name,
        })
    }
}
