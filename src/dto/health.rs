use serde::Serialize;
use utoipa::ToSchema;

/// Overall service health as seen by `/healthcheck`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// The database answered the probe.
    Ok,
    /// The HTTP layer is up but the database did not answer.
    Degraded,
}

/// Simple health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
}

impl HealthResponse {
    /// Build a response from the outcome of the database probe.
    pub fn from_probe(database_reachable: bool) -> Self {
        let status = if database_reachable {
            HealthStatus::Ok
        } else {
            HealthStatus::Degraded
        };
        Self { status }
    }
}
