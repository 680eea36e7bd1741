use thiserror::Error;

/// Configuration errors - surfaced at startup, never at request time
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration - everything is read from the environment once at
/// startup and passed into the components that need it.
///
/// # Environment variables
///
/// Required (startup fails when any is absent):
///
/// | Env var | Meaning |
/// |---------|---------|
/// | DATABASE_PATH | SQLite database file |
/// | JWT_SECRET | session signing key (at least 32 bytes) |
/// | ADMIN_ALLOWLIST | comma-separated admin emails |
///
/// Optional:
///
/// | Env var | Default | Meaning |
/// |---------|---------|---------|
/// | HTTP_PORT | 3000 | HTTP API port |
/// | LOG_LEVEL | info | tracing level |
/// | JWT_EXPIRATION_MINUTES | 1440 | session lifetime |
/// | BOOTSTRAP_ADMIN_EMAIL / _PASSWORD | unset | first-run admin account |
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file path
    pub database_path: String,
    /// HTTP API port
    pub http_port: u16,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
    /// JWT signing key
    pub jwt_secret: String,
    /// Session lifetime in minutes
    pub jwt_expiration_minutes: i64,
    /// Comma-separated admin emails (parsed into an `Allowlist` at init)
    pub admin_allowlist: String,
    /// Seed account for the first startup, if configured
    pub bootstrap_admin: Option<(String, String)>,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Missing required fields are a startup error - there are no
    /// fallbacks for the store path, the signing key or the allowlist.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_path = require("DATABASE_PATH")?;
        let jwt_secret = require("JWT_SECRET")?;
        if jwt_secret.len() < 32 {
            return Err(ConfigError::Invalid(
                "JWT_SECRET must be at least 32 characters long".into(),
            ));
        }
        let admin_allowlist = require("ADMIN_ALLOWLIST")?;

        let bootstrap_admin = match (env("BOOTSTRAP_ADMIN_EMAIL"), env("BOOTSTRAP_ADMIN_PASSWORD"))
        {
            (Some(email), Some(password)) => Some((email, password)),
            _ => None,
        };

        Ok(Self {
            database_path,
            http_port: env("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            log_level: env("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            jwt_secret,
            jwt_expiration_minutes: env("JWT_EXPIRATION_MINUTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(1440),
            admin_allowlist,
            bootstrap_admin,
        })
    }
}

fn env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn require(key: &'static str) -> Result<String, ConfigError> {
    env(key).ok_or(ConfigError::MissingVar(key))
}
