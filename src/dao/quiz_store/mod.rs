#[cfg(feature = "mysql-store")]
pub mod mysql;

use crate::dao::models::{GuessEntity, GuessRecord};
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;

/// Abstraction over the stored procedures backing the quiz.
///
/// Each method is one logical procedure call: implementations run the call and the read of its
/// output parameters on the same connection and never expose the two steps to callers.
pub trait QuizStore: Send + Sync {
    /// `GetTechnologiesLength(OUT tech_length)`.
    fn technologies_length(&self) -> BoxFuture<'static, StorageResult<Option<i64>>>;
    /// `GetTechnologyImage(IN tech_index, OUT tech_image)`.
    fn technology_image(&self, index: u32) -> BoxFuture<'static, StorageResult<Option<String>>>;
    /// `CheckGuessAndUpdateScore(IN tech_index, IN guessed_name, IN player_name, OUT is_correct, OUT tech_name)`.
    fn check_guess(&self, guess: GuessEntity) -> BoxFuture<'static, StorageResult<GuessRecord>>;
    /// `getScores(IN player_name, OUT player_scores)`, returning the raw JSON text.
    fn scores(&self, player_name: String) -> BoxFuture<'static, StorageResult<Option<String>>>;
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
