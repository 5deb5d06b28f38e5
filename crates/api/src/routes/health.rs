//! Root-level `/health` endpoint.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers and the schema is migrated, `degraded` otherwise.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub db_healthy: bool,
    /// Latest applied migration (e.g. `20201016090000`), when known.
    pub schema_version: Option<i64>,
}

impl HealthResponse {
    fn new(db_healthy: bool, schema_version: Option<i64>) -> Self {
        let status = if db_healthy && schema_version.is_some() {
            "ok"
        } else {
            "degraded"
        };
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            schema_version,
        }
    }
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    if let Err(err) = cinema_db::health_check(&state.pool).await {
        tracing::warn!(error = %err, "Database health check failed");
        return Json(HealthResponse::new(false, None));
    }

    let schema_version = match cinema_db::schema_version(&state.pool).await {
        Ok(version) => version,
        Err(err) => {
            tracing::warn!(error = %err, "Could not read migration history");
            None
        }
    };

    Json(HealthResponse::new(true, schema_version))
}

/// Mount health check routes (root level, outside `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_and_migrated_is_ok() {
        let health = HealthResponse::new(true, Some(20201016090000));
        assert_eq!(health.status, "ok");
    }

    #[test]
    fn unmigrated_or_unreachable_is_degraded() {
        assert_eq!(HealthResponse::new(true, None).status, "degraded");
        assert_eq!(HealthResponse::new(false, None).status, "degraded");
    }
}
