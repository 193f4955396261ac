use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::{
    dao::models::{GuessEntity, GuessRecord},
    dto::validation::{missing_field, validate_tech_index, validate_text},
};

/// Player credited with a guess when the request does not name one.
pub const DEFAULT_PLAYER_NAME: &str = "guest";

/// Raw guess payload as posted by the quiz client.
///
/// Fields are kept loosely typed so that a missing or mistyped value is reported as a
/// validation failure rather than a deserialization rejection.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    /// Index of the technology whose logo is displayed.
    #[serde(default)]
    #[schema(value_type = u32)]
    pub tech_index: Option<Value>,
    /// Name typed by the player.
    #[serde(default)]
    #[schema(value_type = String)]
    pub guessed_name: Option<Value>,
    /// Player to credit; defaults to `guest`.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub player_name: Option<Value>,
}

/// Guess that passed validation and is ready for the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessSubmission {
    pub tech_index: u32,
    pub guessed_name: String,
    pub player_name: String,
}

impl TryFrom<GuessRequest> for GuessSubmission {
    type Error = ValidationErrors;

    fn try_from(request: GuessRequest) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::new();

        let tech_index = match request.tech_index.as_ref() {
            None => {
                errors.add("techIndex", missing_field());
                None
            }
            Some(value) => validate_tech_index(value)
                .map_err(|e| errors.add("techIndex", e))
                .ok(),
        };

        let guessed_name = match request.guessed_name.as_ref() {
            None => {
                errors.add("guessedName", missing_field());
                None
            }
            Some(value) => validate_text(value, "guessed_name_type")
                .map_err(|e| errors.add("guessedName", e))
                .ok(),
        };

        let player_name = match request.player_name.as_ref() {
            None => Some(DEFAULT_PLAYER_NAME.to_owned()),
            Some(value) => validate_text(value, "player_name_type")
                .map_err(|e| errors.add("playerName", e))
                .ok(),
        };

        match (tech_index, guessed_name, player_name) {
            (Some(tech_index), Some(guessed_name), Some(player_name)) if errors.is_empty() => {
                Ok(Self {
                    tech_index,
                    guessed_name,
                    player_name,
                })
            }
            _ => Err(errors),
        }
    }
}

impl From<GuessSubmission> for GuessEntity {
    fn from(submission: GuessSubmission) -> Self {
        Self {
            tech_index: submission.tech_index,
            guessed_name: submission.guessed_name,
            player_name: submission.player_name,
        }
    }
}

/// Outcome of a guess, mirroring the procedure's output parameters.
#[derive(Debug, Serialize, ToSchema)]
pub struct GuessResponse {
    pub is_correct: bool,
    pub tech_name: String,
}

impl GuessResponse {
    /// Build the response from the procedure output, or `None` when no technology matched.
    pub fn from_record(record: GuessRecord) -> Option<Self> {
        let tech_name = record.tech_name?;
        Some(Self {
            is_correct: record.is_correct.unwrap_or(false),
            tech_name,
        })
    }
}
