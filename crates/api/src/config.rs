use std::str::FromStr;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development except the
/// database URL, which is read separately at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on pooled database connections (default: `10`).
    pub db_max_connections: u32,
    /// Apply the embedded migrations at startup (default: `false`).
    pub run_migrations: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    /// | `DB_MAX_CONNECTIONS`   | `10`      |
    /// | `RUN_MIGRATIONS`       | `false`   |
    ///
    /// Panics on unparseable values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        Self {
            host,
            port: env_or("PORT", 3000),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 10),
            run_migrations: std::env::var("RUN_MIGRATIONS")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} has invalid value '{raw}': {e}")),
        Err(_) => default,
    }
}

/// `1`, `true`, `yes`, `on` (any case) enable a flag; anything else disables it.
fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
