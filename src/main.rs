//! Logo quiz backend binary entrypoint wiring the REST layer to the MySQL procedures.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logo_quiz_back::{
    config::AppConfig,
    dao::quiz_store::{
        QuizStore,
        mysql::{MySqlConfig, MySqlQuizStore},
    },
    routes,
    state::{AppState, SharedState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load();
    let mysql_config = MySqlConfig::from_env().context("loading MySQL configuration")?;
    info!(
        host = %mysql_config.host,
        port = mysql_config.port,
        database = %mysql_config.database,
        "using MySQL backend"
    );

    let store: Arc<dyn QuizStore> = Arc::new(MySqlQuizStore::new(&mysql_config));
    let app_state = AppState::new(store, config.clone());
    let app = routes::app(app_state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port()));
    info!(%addr, "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    tokio::spawn(probe_database(app_state));

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    Ok(())
}

/// Open one connection at startup so misconfiguration shows up in the logs early.
async fn probe_database(state: SharedState) {
    let probe = state
        .run_store_call("startup_probe", state.quiz_store().health_check())
        .await;
    match probe {
        Ok(()) => info!("database connected successfully"),
        Err(err) => error!(error = %err, "database connection failed"),
    }
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut term = signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
