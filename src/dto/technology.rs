use serde::Serialize;
use utoipa::ToSchema;

/// Size of the technology catalog, as reported by `GetTechnologiesLength`.
#[derive(Debug, Serialize, ToSchema)]
pub struct TechnologyCountResponse {
    pub tech_length: u64,
}
