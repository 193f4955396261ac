use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Probe the database and report whether it answered.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let probe = state
        .run_store_call("health_check", state.quiz_store().health_check())
        .await;

    if let Err(err) = &probe {
        warn!(error = %err, "database health check failed");
    }
    HealthResponse::from_probe(probe.is_ok())
}
