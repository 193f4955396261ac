//! Service helpers exposing the technology catalog.

use crate::{dto::technology::TechnologyCountResponse, error::ServiceError, state::SharedState};

/// Return the number of technologies in the catalog.
pub async fn get_technology_count(
    state: &SharedState,
) -> Result<TechnologyCountResponse, ServiceError> {
    let tech_length = state
        .run_store_call(
            "GetTechnologiesLength",
            state.quiz_store().technologies_length(),
        )
        .await?
        .ok_or_else(|| ServiceError::UnexpectedOutput("tech_length is NULL".into()))?;

    let tech_length = u64::try_from(tech_length)
        .map_err(|_| ServiceError::UnexpectedOutput(format!("negative tech_length {tech_length}")))?;
    Ok(TechnologyCountResponse { tech_length })
}

/// Return the image reference of the technology at `index`.
pub async fn get_technology_image(state: &SharedState, index: u32) -> Result<String, ServiceError> {
    state
        .run_store_call(
            "GetTechnologyImage",
            state.quiz_store().technology_image(index),
        )
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("technology {index}")))
}
