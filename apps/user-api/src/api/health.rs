//! Readiness check against the configured storage.

use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

/// Ready once the database answers a ping. The in-memory store is always ready.
pub async fn ready_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut checks: Vec<(&str, HealthCheckFuture<'_>)> = Vec::new();

    if let Some(db) = &state.db {
        let check: HealthCheckFuture<'_> = Box::pin(async move {
            database::sql::check_health(db)
                .await
                .map_err(|e| e.to_string())
        });
        checks.push(("database", check));
    }

    run_health_checks(checks).await
}
