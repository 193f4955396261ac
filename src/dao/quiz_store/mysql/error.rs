//! Error types shared by the MySQL storage implementation.

use std::num::ParseIntError;

use thiserror::Error;

use crate::dao::storage::StorageError;

/// Convenient result alias returning [`MySqlDaoError`] failures.
pub type MySqlResult<T> = Result<T, MySqlDaoError>;

/// Failures that can occur while interacting with MySQL.
#[derive(Debug, Error)]
pub enum MySqlDaoError {
    /// Required environment variable is missing.
    #[error("missing MySQL environment variable `{var}`")]
    MissingEnvVar { var: &'static str },
    /// The configured port is not a valid TCP port.
    #[error("invalid MySQL port `{value}`")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    /// Opening a connection to the server failed.
    #[error("failed to connect to MySQL at `{host}:{port}`")]
    Connect {
        host: String,
        port: u16,
        #[source]
        source: sqlx::Error,
    },
    /// The `CALL` statement was rejected.
    #[error("failed to call procedure `{procedure}`")]
    CallProcedure {
        procedure: &'static str,
        #[source]
        source: sqlx::Error,
    },
    /// Reading the session variables populated by the procedure failed.
    #[error("failed to read output parameters of `{procedure}`")]
    ReadOutput {
        procedure: &'static str,
        #[source]
        source: sqlx::Error,
    },
    /// The server did not answer the `SELECT 1` probe.
    #[error("MySQL health check query failed")]
    HealthCheck {
        #[source]
        source: sqlx::Error,
    },
}

impl From<MySqlDaoError> for StorageError {
    fn from(err: MySqlDaoError) -> Self {
        match err {
            MySqlDaoError::CallProcedure { .. } | MySqlDaoError::ReadOutput { .. } => {
                StorageError::query(err.to_string(), err)
            }
            _ => StorageError::unavailable(err.to_string(), err),
        }
    }
}
