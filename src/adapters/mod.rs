// Adapters layer: concrete implementations for external systems.
// catalog: outbound reqwest client for the remote catalog API
// http: inbound axum router exposing the aggregated records

pub mod catalog;
pub mod http;
