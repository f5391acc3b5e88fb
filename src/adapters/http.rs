use crate::core::aggregator::{Aggregator, DEFAULT_COUNT};
use crate::domain::model::AggregatedRecord;
use crate::domain::ports::CatalogClient;
use crate::utils::error::{AggregatorError, Result};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const RECORDS_PATH: &str = "/api/pokemon";
pub const HEALTH_PATH: &str = "/health";

#[derive(Debug, Deserialize)]
pub struct RecordsQuery {
    pub count: Option<i64>,
}

// 400 只用於參數錯誤，其餘請求層級失敗一律 500
impl IntoResponse for AggregatorError {
    fn into_response(self) -> Response {
        match self {
            AggregatorError::InvalidArgument { message } => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error fetching Pokemon data",
            )
                .into_response(),
        }
    }
}

pub fn router<C: CatalogClient + 'static>(aggregator: Arc<Aggregator<C>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(RECORDS_PATH, get(get_records::<C>))
        .route(HEALTH_PATH, get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(aggregator)
}

pub async fn serve<C: CatalogClient + 'static>(
    addr: &str,
    aggregator: Arc<Aggregator<C>>,
) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🌐 Listening on http://{}", listener.local_addr()?);
    tracing::info!("📡 Records endpoint: http://{}{}", addr, RECORDS_PATH);

    axum::serve(listener, router(aggregator))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn get_records<C: CatalogClient + 'static>(
    State(aggregator): State<Arc<Aggregator<C>>>,
    Query(query): Query<RecordsQuery>,
) -> std::result::Result<Json<Vec<AggregatedRecord>>, AggregatorError> {
    let count = query.count.unwrap_or(DEFAULT_COUNT);
    let records = aggregator.fetch_aggregated_records(count).await?;
    Ok(Json(records))
}

async fn health() -> &'static str {
    "ok"
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("❌ Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("🛑 Shutdown signal received");
}
