#![allow(dead_code)]

use std::collections::BTreeMap;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use futures::future::BoxFuture;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use logo_quiz_back::{
    config::AppConfig,
    dao::{
        models::{GuessEntity, GuessRecord},
        quiz_store::QuizStore,
        storage::{StorageError, StorageResult},
    },
    routes,
    state::AppState,
};

// =============================================================================
// In-memory procedures
// =============================================================================

/// Catalog seeded into every fixture: (name, image).
pub const CATALOG: [(&str, &str); 5] = [
    ("Rust", "rust.png"),
    ("Docker", "docker.png"),
    ("Kubernetes", "kubernetes.png"),
    ("React", "react.png"),
    ("PostgreSQL", "postgresql.png"),
];

#[derive(Clone)]
enum Behavior {
    Normal,
    Failing,
    Slow(Duration),
    RawScores(Option<String>),
}

/// Stand-in for the MySQL procedures, keeping scores in memory.
#[derive(Clone)]
pub struct MemoryQuizStore {
    scores: Arc<Mutex<BTreeMap<String, i64>>>,
    behavior: Behavior,
}

impl MemoryQuizStore {
    pub fn seeded() -> Self {
        Self {
            scores: Arc::new(Mutex::new(BTreeMap::new())),
            behavior: Behavior::Normal,
        }
    }

    /// Every call fails as if the database refused the connection.
    pub fn failing() -> Self {
        Self {
            behavior: Behavior::Failing,
            ..Self::seeded()
        }
    }

    /// Every call stalls for `delay` before answering.
    pub fn slow(delay: Duration) -> Self {
        Self {
            behavior: Behavior::Slow(delay),
            ..Self::seeded()
        }
    }

    /// `getScores` returns `raw` verbatim.
    pub fn with_raw_scores(raw: Option<&str>) -> Self {
        Self {
            behavior: Behavior::RawScores(raw.map(str::to_owned)),
            ..Self::seeded()
        }
    }

    pub fn score_of(&self, player: &str) -> Option<i64> {
        self.scores.lock().unwrap().get(player).copied()
    }

    async fn gate(&self) -> StorageResult<()> {
        match &self.behavior {
            Behavior::Failing => Err(StorageError::unavailable(
                "failed to connect to MySQL at `db:3306`".into(),
                io::Error::new(
                    io::ErrorKind::ConnectionRefused,
                    "Access denied for user 'quiz'@'10.0.0.7'",
                ),
            )),
            Behavior::Slow(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn render_scores(&self, player_name: &str) -> String {
        let scores = self.scores.lock().unwrap();
        let entries: Vec<Value> = scores
            .iter()
            .filter(|(player, _)| player_name == "all" || player.as_str() == player_name)
            .map(|(player, score)| json!({ "player_name": player, "score": score }))
            .collect();
        Value::Array(entries).to_string()
    }
}

impl QuizStore for MemoryQuizStore {
    fn technologies_length(&self) -> BoxFuture<'static, StorageResult<Option<i64>>> {
        let store = self.clone();
        Box::pin(async move {
            store.gate().await?;
            Ok(Some(CATALOG.len() as i64))
        })
    }

    fn technology_image(&self, index: u32) -> BoxFuture<'static, StorageResult<Option<String>>> {
        let store = self.clone();
        Box::pin(async move {
            store.gate().await?;
            Ok(CATALOG
                .get(index as usize)
                .map(|(_, image)| (*image).to_owned()))
        })
    }

    fn check_guess(&self, guess: GuessEntity) -> BoxFuture<'static, StorageResult<GuessRecord>> {
        let store = self.clone();
        Box::pin(async move {
            store.gate().await?;
            let Some((name, _)) = CATALOG.get(guess.tech_index as usize) else {
                return Ok(GuessRecord {
                    is_correct: Some(false),
                    tech_name: None,
                });
            };

            let is_correct = name.eq_ignore_ascii_case(guess.guessed_name.trim());
            *store
                .scores
                .lock()
                .unwrap()
                .entry(guess.player_name)
                .or_insert(0) += i64::from(is_correct);

            Ok(GuessRecord {
                is_correct: Some(is_correct),
                tech_name: Some((*name).to_owned()),
            })
        })
    }

    fn scores(&self, player_name: String) -> BoxFuture<'static, StorageResult<Option<String>>> {
        let store = self.clone();
        Box::pin(async move {
            store.gate().await?;
            match &store.behavior {
                Behavior::RawScores(raw) => Ok(raw.clone()),
                _ => Ok(Some(store.render_scores(&player_name))),
            }
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.gate().await })
    }
}

// =============================================================================
// Request helpers
// =============================================================================

pub fn app_with(store: MemoryQuizStore) -> Router {
    app_with_config(store, AppConfig::default())
}

pub fn app_with_config(store: MemoryQuizStore, config: AppConfig) -> Router {
    routes::app(AppState::new(Arc::new(store), config))
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}
