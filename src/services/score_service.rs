use serde_json::Value;

use crate::{error::ServiceError, state::SharedState};

/// Sentinel understood by `getScores` as "every player".
pub const ALL_PLAYERS: &str = "all";

/// Return the decoded score board for `player_name`, or for everyone when it is `None`.
///
/// The procedure hands back JSON text; a NULL result decodes to JSON `null`.
pub async fn get_scores(
    state: &SharedState,
    player_name: Option<String>,
) -> Result<Value, ServiceError> {
    let player_name = player_name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| ALL_PLAYERS.to_owned());

    let raw = state
        .run_store_call("getScores", state.quiz_store().scores(player_name))
        .await?;

    match raw {
        Some(text) => serde_json::from_str(&text).map_err(|source| ServiceError::Decode {
            what: "player scores",
            source,
        }),
        None => Ok(Value::Null),
    }
}
