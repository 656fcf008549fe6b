//! Health Route
//!
//! - GET /health - Liveness with uptime and version

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::web::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub data_provider: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// GET /health
///
/// Returns 200 while the process is serving requests.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        data_provider: state.data.name().to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn test_health() {
        let state = Arc::new(AppState::with_fixtures(Config::default()));
        let Json(body) = health(State(state)).await;

        assert_eq!(body.status, "ok");
        assert_eq!(body.data_provider, "fixtures");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }
}
