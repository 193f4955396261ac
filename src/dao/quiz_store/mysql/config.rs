use std::{env, fmt};

use sqlx::mysql::MySqlConnectOptions;

use super::error::{MySqlDaoError, MySqlResult};

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 3306;

/// Runtime configuration describing how to connect to MySQL.
#[derive(Clone, PartialEq, Eq)]
pub struct MySqlConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: Option<String>,
    pub database: String,
}

impl MySqlConfig {
    /// Construct a configuration targeting `database` on the default host and port.
    pub fn new(username: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            username: username.into(),
            password: None,
            database: database.into(),
        }
    }

    /// Point the configuration at another server.
    pub fn with_host(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    /// Attach a password to the configuration.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Build a configuration by reading the expected environment variables.
    pub fn from_env() -> MySqlResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// `DB_USER` and `DB_NAME` are required; `DB_HOST`, `DB_PORT` and `DB_PASSWORD` are optional.
    pub fn from_lookup<F>(lookup: F) -> MySqlResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let username = lookup("DB_USER").ok_or(MySqlDaoError::MissingEnvVar { var: "DB_USER" })?;
        let database = lookup("DB_NAME").ok_or(MySqlDaoError::MissingEnvVar { var: "DB_NAME" })?;
        let host = lookup("DB_HOST")
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = match lookup("DB_PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| MySqlDaoError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        let mut config = Self::new(username, database).with_host(host, port);
        if let Some(password) = lookup("DB_PASSWORD") {
            config = config.with_password(password);
        }
        Ok(config)
    }

    /// Translate the configuration into driver connect options.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .database(&self.database);

        match self.password.as_deref() {
            Some(password) => options.password(password),
            None => options,
        }
    }
}

impl fmt::Debug for MySqlConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MySqlConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("database", &self.database)
            .finish()
    }
}
