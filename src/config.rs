//! Application-level configuration loading from the process environment.

use std::{env, time::Duration};

use axum::http::HeaderValue;
use tracing::{info, warn};

/// Port the HTTP server binds to when `SERVER_PORT` is absent or invalid.
const DEFAULT_SERVER_PORT: u16 = 3000;
/// Single origin allowed by the CORS layer unless overridden.
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3001";
/// Upper bound on a single database round-trip (procedure call plus output read).
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const SERVER_PORT_ENV: &str = "SERVER_PORT";
const ALLOWED_ORIGIN_ENV: &str = "CORS_ALLOWED_ORIGIN";
const REQUEST_TIMEOUT_ENV: &str = "DB_TIMEOUT_MS";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    server_port: u16,
    allowed_origin: HeaderValue,
    request_timeout: Duration,
}

impl AppConfig {
    /// Load the configuration from the process environment, falling back to defaults.
    pub fn load() -> Self {
        let config = Self::from_lookup(|key| env::var(key).ok());
        info!(
            port = config.server_port,
            origin = ?config.allowed_origin,
            timeout_ms = config.request_timeout.as_millis() as u64,
            "loaded application config"
        );
        config
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Values that are present but unparsable are logged and replaced by their default so a typo
    /// in the deployment never prevents the server from starting.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_port = match lookup(SERVER_PORT_ENV) {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|err| {
                warn!(value = %raw, error = %err, "invalid {SERVER_PORT_ENV}; using default");
                DEFAULT_SERVER_PORT
            }),
            None => DEFAULT_SERVER_PORT,
        };

        let allowed_origin = lookup(ALLOWED_ORIGIN_ENV)
            .filter(|value| !value.trim().is_empty())
            .and_then(|raw| match HeaderValue::from_str(raw.trim()) {
                Ok(value) => Some(value),
                Err(err) => {
                    warn!(value = %raw, error = %err, "invalid {ALLOWED_ORIGIN_ENV}; using default");
                    None
                }
            })
            .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN));

        let request_timeout = match lookup(REQUEST_TIMEOUT_ENV) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) => {
                    warn!("{REQUEST_TIMEOUT_ENV} must be positive; using default");
                    DEFAULT_REQUEST_TIMEOUT
                }
                Ok(ms) => Duration::from_millis(ms),
                Err(err) => {
                    warn!(value = %raw, error = %err, "invalid {REQUEST_TIMEOUT_ENV}; using default");
                    DEFAULT_REQUEST_TIMEOUT
                }
            },
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        Self {
            server_port,
            allowed_origin,
            request_timeout,
        }
    }

    /// Replace the database timeout.
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Port the HTTP listener binds to.
    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    /// Origin accepted by the CORS layer.
    pub fn allowed_origin(&self) -> &HeaderValue {
        &self.allowed_origin
    }

    /// Maximum time granted to a single store call.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
