use std::fmt;

use crate::error::CoreError;

pub const ENV_HOST: &str = "PGHOST";
pub const ENV_PORT: &str = "PGPORT";
pub const ENV_DATABASE: &str = "PGDATABASE";
pub const ENV_USER: &str = "PGUSER";
pub const ENV_PASSWORD: &str = "PGPASSWORD";

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5432;

/// Variables that must be present and non-empty.
pub const REQUIRED_VARS: &[&str] = &[ENV_DATABASE, ENV_USER, ENV_PASSWORD];

/// PostgreSQL connection settings, built once at start-up.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl DbConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var      | Default     |
    /// |--------------|-------------|
    /// | `PGHOST`     | `localhost` |
    /// | `PGPORT`     | `5432`      |
    /// | `PGDATABASE` | required    |
    /// | `PGUSER`     | required    |
    /// | `PGPASSWORD` | required    |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Every missing required variable is collected before failing, so the
    /// operator sees the full list in one go.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let missing: Vec<&'static str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|key| present(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(CoreError::MissingConfig(missing));
        }

        let host = present(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match present(ENV_PORT) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                CoreError::InvalidConfig(format!("{ENV_PORT} must be a valid port, got '{raw}'"))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host,
            port,
            database: present(ENV_DATABASE).unwrap_or_default(),
            user: present(ENV_USER).unwrap_or_default(),
            password: present(ENV_PASSWORD).unwrap_or_default(),
        })
    }

    /// `host:port` for display.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}
