use std::sync::Arc;

use futures::future::BoxFuture;
use sqlx::{Connection, MySqlConnection, mysql::MySqlConnectOptions};
use tracing::{debug, warn};

use crate::dao::{
    models::{GuessEntity, GuessRecord},
    quiz_store::QuizStore,
    storage::StorageResult,
};

use super::{
    config::MySqlConfig,
    error::{MySqlDaoError, MySqlResult},
};

const GET_TECHNOLOGIES_LENGTH: &str = "GetTechnologiesLength";
const GET_TECHNOLOGY_IMAGE: &str = "GetTechnologyImage";
const CHECK_GUESS_AND_UPDATE_SCORE: &str = "CheckGuessAndUpdateScore";
const GET_SCORES: &str = "getScores";

/// Quiz store opening one MySQL connection per procedure call.
///
/// Output parameters are session variables, so the `CALL` and the `SELECT` reading them back
/// must share a connection. The connection lives for exactly one logical call and is dropped
/// on every early return.
#[derive(Clone)]
pub struct MySqlQuizStore {
    options: Arc<MySqlConnectOptions>,
    host: Arc<str>,
    port: u16,
}

impl MySqlQuizStore {
    /// Create a store from an explicit configuration. No connection is opened until first use.
    pub fn new(config: &MySqlConfig) -> Self {
        Self {
            options: Arc::new(config.connect_options()),
            host: Arc::from(config.host.as_str()),
            port: config.port,
        }
    }

    async fn open(&self) -> MySqlResult<MySqlConnection> {
        MySqlConnection::connect_with(&self.options)
            .await
            .map_err(|source| MySqlDaoError::Connect {
                host: self.host.to_string(),
                port: self.port,
                source,
            })
    }

    pub async fn technologies_length(&self) -> MySqlResult<Option<i64>> {
        let mut connection = self.open().await?;

        sqlx::query("CALL GetTechnologiesLength(@tech_length)")
            .execute(&mut connection)
            .await
            .map_err(|source| MySqlDaoError::CallProcedure {
                procedure: GET_TECHNOLOGIES_LENGTH,
                source,
            })?;
        let tech_length: Option<i64> = sqlx::query_scalar("SELECT CAST(@tech_length AS SIGNED)")
            .fetch_one(&mut connection)
            .await
            .map_err(|source| MySqlDaoError::ReadOutput {
                procedure: GET_TECHNOLOGIES_LENGTH,
                source,
            })?;

        release(connection).await;
        Ok(tech_length)
    }

    pub async fn technology_image(&self, index: u32) -> MySqlResult<Option<String>> {
        let mut connection = self.open().await?;

        sqlx::query("CALL GetTechnologyImage(?, @tech_image)")
            .bind(index)
            .execute(&mut connection)
            .await
            .map_err(|source| MySqlDaoError::CallProcedure {
                procedure: GET_TECHNOLOGY_IMAGE,
                source,
            })?;
        let tech_image: Option<String> = sqlx::query_scalar("SELECT CAST(@tech_image AS CHAR)")
            .fetch_one(&mut connection)
            .await
            .map_err(|source| MySqlDaoError::ReadOutput {
                procedure: GET_TECHNOLOGY_IMAGE,
                source,
            })?;

        debug!(index, found = tech_image.is_some(), "read technology image");
        release(connection).await;
        Ok(tech_image)
    }

    pub async fn check_guess(&self, guess: GuessEntity) -> MySqlResult<GuessRecord> {
        let mut connection = self.open().await?;

        sqlx::query("CALL CheckGuessAndUpdateScore(?, ?, ?, @is_correct, @tech_name)")
            .bind(guess.tech_index)
            .bind(&guess.guessed_name)
            .bind(&guess.player_name)
            .execute(&mut connection)
            .await
            .map_err(|source| MySqlDaoError::CallProcedure {
                procedure: CHECK_GUESS_AND_UPDATE_SCORE,
                source,
            })?;
        let (is_correct, tech_name): (Option<i64>, Option<String>) = sqlx::query_as(
            "SELECT CAST(@is_correct AS SIGNED) AS is_correct, CAST(@tech_name AS CHAR) AS tech_name",
        )
        .fetch_one(&mut connection)
        .await
        .map_err(|source| MySqlDaoError::ReadOutput {
            procedure: CHECK_GUESS_AND_UPDATE_SCORE,
            source,
        })?;

        release(connection).await;
        Ok(GuessRecord {
            is_correct: is_correct.map(|flag| flag != 0),
            tech_name,
        })
    }

    pub async fn scores(&self, player_name: String) -> MySqlResult<Option<String>> {
        let mut connection = self.open().await?;

        sqlx::query("CALL getScores(?, @player_scores)")
            .bind(&player_name)
            .execute(&mut connection)
            .await
            .map_err(|source| MySqlDaoError::CallProcedure {
                procedure: GET_SCORES,
                source,
            })?;
        let player_scores: Option<String> =
            sqlx::query_scalar("SELECT CAST(@player_scores AS CHAR)")
                .fetch_one(&mut connection)
                .await
                .map_err(|source| MySqlDaoError::ReadOutput {
                    procedure: GET_SCORES,
                    source,
                })?;

        release(connection).await;
        Ok(player_scores)
    }

    /// Open a connection and run `SELECT 1` on it.
    pub async fn health_check(&self) -> MySqlResult<()> {
        let mut connection = self.open().await?;
        let _: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&mut connection)
            .await
            .map_err(|source| MySqlDaoError::HealthCheck { source })?;
        release(connection).await;
        Ok(())
    }
}

/// Close the connection gracefully. A failed close only loses the goodbye packet, the socket
/// is dropped either way.
async fn release(connection: MySqlConnection) {
    if let Err(err) = connection.close().await {
        warn!(error = %err, "failed to close MySQL connection cleanly");
    }
}

impl QuizStore for MySqlQuizStore {
    fn technologies_length(&self) -> BoxFuture<'static, StorageResult<Option<i64>>> {
        let store = self.clone();
        Box::pin(async move { store.technologies_length().await.map_err(Into::into) })
    }

    fn technology_image(&self, index: u32) -> BoxFuture<'static, StorageResult<Option<String>>> {
        let store = self.clone();
        Box::pin(async move { store.technology_image(index).await.map_err(Into::into) })
    }

    fn check_guess(&self, guess: GuessEntity) -> BoxFuture<'static, StorageResult<GuessRecord>> {
        let store = self.clone();
        Box::pin(async move { store.check_guess(guess).await.map_err(Into::into) })
    }

    fn scores(&self, player_name: String) -> BoxFuture<'static, StorageResult<Option<String>>> {
        let store = self.clone();
        Box::pin(async move { store.scores(player_name).await.map_err(Into::into) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.health_check().await.map_err(Into::into) })
    }
}
