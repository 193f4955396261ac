use axum::{
    Router,
    http::{Method, header},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::state::SharedState;

pub mod docs;
pub mod guess;
pub mod health;
pub mod scores;
pub mod technology;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(technology::router())
        .merge(guess::router())
        .merge(scores::router())
        .merge(docs::router());

    api_router.with_state(state)
}

/// Build the top-level application and attach cross-cutting middleware layers.
pub fn app(state: SharedState) -> Router<()> {
    let origin = state.config().allowed_origin().clone();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
