//! Health check endpoint
//!
//! Reports liveness and whether the storage configuration is present.
//! Never touches the network and never reveals the connection string.

use std::sync::Arc;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::db::Connector;
use crate::http::server::AppState;

/// Storage section of the health report
#[derive(Debug, Serialize)]
pub struct StorageStatus {
    pub uri_configured: bool,
    pub database: String,
    /// A verified handle is cached
    pub connected: bool,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub storage: StorageStatus,
}

/// GET / and GET /health
async fn health<C: Connector>(State(state): State<Arc<AppState<C>>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        storage: StorageStatus {
            uri_configured: state.storage.uri_configured,
            database: state.storage.database.clone(),
            connected: state.users.connections().is_connected().await,
        },
    })
}

/// Health routes
pub fn router<C: Connector>() -> Router<Arc<AppState<C>>> {
    Router::new()
        .route("/", get(health::<C>))
        .route("/health", get(health::<C>))
}
