//! Handlers for the service banner and health probe.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Human-readable service name reported by `GET /`.
pub const SERVICE_NAME: &str = "Kortex API";

/// Service banner payload.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub status: &'static str,
}

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` when every component is up, `degraded` otherwise.
    pub status: &'static str,
    pub components: HealthComponents,
}

#[derive(Debug, Serialize)]
pub struct HealthComponents {
    pub api: &'static str,
    /// `connected` or `unavailable`.
    pub database: &'static str,
}

/// GET /
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })
}

/// GET /health -- returns service and database health.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match kortex_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            false
        }
    };

    Json(HealthResponse {
        status: if db_healthy { "healthy" } else { "degraded" },
        components: HealthComponents {
            api: "ok",
            database: if db_healthy { "connected" } else { "unavailable" },
        },
    })
}
