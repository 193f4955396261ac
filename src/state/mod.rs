use std::{future::Future, sync::Arc};

use tokio::time::timeout;
use tracing::warn;

use crate::{
    config::AppConfig,
    dao::{quiz_store::QuizStore, storage::StorageResult},
    error::ServiceError,
};

pub type SharedState = Arc<AppState>;

/// Central application state: the procedure gateway and the runtime configuration.
///
/// Nothing here is mutated after construction; every request works on its own connection.
pub struct AppState {
    quiz_store: Arc<dyn QuizStore>,
    config: AppConfig,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(quiz_store: Arc<dyn QuizStore>, config: AppConfig) -> SharedState {
        Arc::new(Self { quiz_store, config })
    }

    /// Handle to the procedure gateway.
    pub fn quiz_store(&self) -> &dyn QuizStore {
        self.quiz_store.as_ref()
    }

    /// Runtime configuration the state was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Await a store call, giving up after the configured request timeout.
    pub async fn run_store_call<Fut, T>(
        &self,
        call: &'static str,
        work: Fut,
    ) -> Result<T, ServiceError>
    where
        Fut: Future<Output = StorageResult<T>>,
    {
        let limit = self.config.request_timeout();
        match timeout(limit, work).await {
            Ok(result) => result.map_err(ServiceError::from),
            Err(_) => {
                warn!(call, timeout_ms = limit.as_millis() as u64, "store call timed out");
                Err(ServiceError::Timeout)
            }
        }
    }
}
