use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use tracing::debug;

use crate::{
    dto::{
        technology::TechnologyCountResponse,
        validation::{field_error, parse_technology_index},
    },
    error::AppError,
    services::technology_service,
    state::SharedState,
};

/// Read-only endpoints over the technology catalog.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/technologies/count", get(get_technology_count))
        .route("/api/technologies/image/{number}", get(get_technology_image))
}

#[utoipa::path(
    get,
    path = "/api/technologies/count",
    tag = "technologies",
    responses(
        (status = 200, description = "Number of technologies", body = TechnologyCountResponse),
        (status = 500, description = "Database failure")
    )
)]
/// Return the number of technologies available to guess.
pub async fn get_technology_count(
    State(state): State<SharedState>,
) -> Result<Json<TechnologyCountResponse>, AppError> {
    let payload = technology_service::get_technology_count(&state).await?;
    Ok(Json(payload))
}

#[utoipa::path(
    get,
    path = "/api/technologies/image/{number}",
    tag = "technologies",
    params(("number" = u32, Path, description = "Index of the technology")),
    responses(
        (status = 200, description = "Image reference of the technology", body = String),
        (status = 400, description = "Index is not a non-negative integer"),
        (status = 404, description = "No technology at this index"),
        (status = 500, description = "Database failure")
    )
)]
/// Return the image reference (URL or path) of a technology.
pub async fn get_technology_image(
    State(state): State<SharedState>,
    Path(number): Path<String>,
) -> Result<Json<String>, AppError> {
    let index = parse_technology_index(&number).map_err(|err| field_error("number", err))?;
    debug!(index, "technology image requested");
    let image = technology_service::get_technology_image(&state, index).await?;
    Ok(Json(image))
}
