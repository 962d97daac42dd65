use serde::Deserialize;
use std::env;
use std::str::FromStr;

// Main configuration container, loaded once at startup
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
}

// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

// Database settings
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub pool_size: u32,
    pub acquire_timeout_secs: u64,
    pub run_migrations: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// `DATABASE_URL` wins when present; otherwise the DSN is composed from
    /// the individual `DB_*` settings.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let user = text("DB_USER", "postgres");
        let password = text("DB_PASSWORD", "");
        let host = text("DB_HOST", "localhost");
        let port = parse(&lookup, "DB_PORT", 5432u16, "a valid port number")?;
        let name = text("DB_NAME", "cinema");
        let url = lookup("DATABASE_URL")
            .unwrap_or_else(|| compose_url(&user, &password, &host, port, &name));

        let log_format = match text("LOG_FORMAT", "pretty").to_ascii_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            other => {
                return Err(ConfigError::Invalid {
                    key: "LOG_FORMAT",
                    expected: "pretty or json",
                    value: other.to_string(),
                })
            }
        };

        Ok(Config {
            app: AppConfig {
                host: text("HOST", "0.0.0.0"),
                port: parse(&lookup, "PORT", 8000u16, "a valid number")?,
                environment: text("ENVIRONMENT", "development"),
                rust_log: text("RUST_LOG", "cinema_admin=debug,tower_http=debug"),
                log_format,
            },
            database: DatabaseConfig {
                url,
                user,
                password,
                host,
                port,
                name,
                pool_size: parse(&lookup, "DB_POOL_SIZE", 10u32, "a valid number")?,
                acquire_timeout_secs: parse(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5u64, "a valid number")?,
                run_migrations: parse(&lookup, "RUN_MIGRATIONS", false, "true or false")?,
            },
        })
    }
}

fn parse<F, T>(lookup: &F, key: &'static str, default: T, expected: &'static str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            expected,
            value,
        }),
    }
}

fn compose_url(user: &str, password: &str, host: &str, port: u16, name: &str) -> String {
    if password.is_empty() {
        format!("postgres://{}@{}:{}/{}", user, host, port, name)
    } else {
        format!("postgres://{}:{}@{}:{}/{}", user, password, host, port, name)
    }
}
