use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use tracing::debug;

use crate::{
    dto::guess::{GuessRequest, GuessResponse, GuessSubmission},
    error::AppError,
    services::guess_service,
    state::SharedState,
};

/// Routes handling guess submission.
pub fn router() -> Router<SharedState> {
    Router::new().route("/api/guess", post(submit_guess))
}

/// Check a guess and update the player's score.
#[utoipa::path(
    post,
    path = "/api/guess",
    tag = "game",
    request_body = GuessRequest,
    responses(
        (status = 200, description = "Guess checked", body = GuessResponse),
        (status = 400, description = "Missing or invalid techIndex or guessedName"),
        (status = 404, description = "No technology at this index"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn submit_guess(
    State(state): State<SharedState>,
    payload: Result<Json<GuessRequest>, JsonRejection>,
) -> Result<Json<GuessResponse>, AppError> {
    let Json(request) = payload?;
    debug!(
        tech_index = ?request.tech_index,
        guessed_name = ?request.guessed_name,
        player_name = ?request.player_name,
        "guess received"
    );

    let submission = GuessSubmission::try_from(request)?;
    let response = guess_service::submit_guess(&state, submission).await?;
    Ok(Json(response))
}
