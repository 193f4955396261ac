use tracing::info;

use crate::{
    dto::guess::{GuessResponse, GuessSubmission},
    error::ServiceError,
    state::SharedState,
};

/// Check a guess against the catalog; the procedure updates the player's score as a side effect.
pub async fn submit_guess(
    state: &SharedState,
    submission: GuessSubmission,
) -> Result<GuessResponse, ServiceError> {
    let tech_index = submission.tech_index;
    let player_name = submission.player_name.clone();

    let record = state
        .run_store_call(
            "CheckGuessAndUpdateScore",
            state.quiz_store().check_guess(submission.into()),
        )
        .await?;

    let response = GuessResponse::from_record(record)
        .ok_or_else(|| ServiceError::NotFound(format!("technology {tech_index}")))?;
    info!(
        tech_index,
        player = %player_name,
        is_correct = response.is_correct,
        "guess checked"
    );
    Ok(response)
}
