use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde_json::Value;
use tracing::info;

use crate::{error::AppError, services::score_service, state::SharedState};

/// Score board endpoints; the player segment is optional.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/getScores", get(get_all_scores))
        .route("/api/getScores/", get(get_all_scores))
        .route("/api/getScores/{player_name}", get(get_player_scores))
}

#[utoipa::path(
    get,
    path = "/api/getScores",
    tag = "game",
    responses(
        (status = 200, description = "Decoded scores of every player"),
        (status = 500, description = "Database or decode failure")
    )
)]
/// Return the scores of every player.
pub async fn get_all_scores(State(state): State<SharedState>) -> Result<Json<Value>, AppError> {
    info!(player = score_service::ALL_PLAYERS, "scores requested");
    let scores = score_service::get_scores(&state, None).await?;
    Ok(Json(scores))
}

#[utoipa::path(
    get,
    path = "/api/getScores/{player_name}",
    tag = "game",
    params(("player_name" = String, Path, description = "Player whose score is requested")),
    responses(
        (status = 200, description = "Decoded score entry of the player"),
        (status = 500, description = "Database or decode failure")
    )
)]
/// Return the scores of a single player.
pub async fn get_player_scores(
    State(state): State<SharedState>,
    Path(player_name): Path<String>,
) -> Result<Json<Value>, AppError> {
    info!(player = %player_name, "scores requested");
    let scores = score_service::get_scores(&state, Some(player_name)).await?;
    Ok(Json(scores))
}
