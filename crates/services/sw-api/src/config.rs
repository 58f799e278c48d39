//! Service configuration.
//!
//! All configuration is read once at startup from environment variables with
//! development defaults, then carried in an immutable [`Config`] passed to
//! each component at construction time. Secret values are never logged;
//! [`Config`] deliberately implements neither `Debug` nor `Display`.

use std::str::FromStr;

use sw_models::db::config::DbConfig;

use crate::prelude::*;

/// SMTP relay settings for the notification mailer.
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
}

/// Immutable service configuration.
pub struct Config {
    /// Public base URL; doubles as the token issuer and audience identity.
    pub base_url: String,
    /// Port the HTTP listener binds to.
    pub http_port: u16,
    /// Secret for cookie signing and sealing.
    pub cookie_secret_key: String,
    /// Secret for JWT signing.
    pub jwt_secret_key: String,
    /// Database connection settings.
    pub db: DbConfig,
    /// Whether to run pending migrations at startup.
    pub automigrate: bool,
    /// Recipient for registration notifications; empty disables them.
    pub notifications_email: String,
    /// SMTP relay settings.
    pub smtp: SmtpConfig,
}

fn get_string(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| String::from(default))
}

fn get_parsed<T: FromStr>(name: &str, default: T) -> Result<T> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| Error::InvalidEnv(String::from(name))),
        Err(_) => Ok(default),
    }
}

impl Config {
    /// Reads the configuration from the environment.
    ///
    /// Missing variables fall back to development defaults; present but
    /// unparseable numeric or boolean values are startup errors.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: get_string("BASE_URL", "http://localhost:6020"),
            http_port: get_parsed("HTTP_PORT", 6020)?,
            cookie_secret_key: get_string("COOKIE_SECRET_KEY", "cpcgzjcote6h5hakeglpbzixhbuog2zc"),
            jwt_secret_key: get_string("JWT_SECRET_KEY", "fb57i5hiud5mzmykaquqsln5gcmolbac"),
            db: DbConfig::from_env(),
            automigrate: get_parsed("DB_AUTOMIGRATE", true)?,
            notifications_email: get_string("NOTIFICATIONS_EMAIL", ""),
            smtp: SmtpConfig {
                host: get_string("SMTP_HOST", "example.smtp.host"),
                port: get_parsed("SMTP_PORT", 25)?,
                username: get_string("SMTP_USERNAME", "example_username"),
                password: get_string("SMTP_PASSWORD", "pa55word"),
                from: get_string("SMTP_FROM", "Example Name <no_reply@example.org>"),
            },
        })
    }
}
