//! Server configuration.

use std::{env, fmt::Display, str::FromStr, time::Duration};

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Log level, used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Simulated latency of a sign-in, in milliseconds.
    pub login_delay_ms: u64,
    /// Whether the store starts with the mock roster, tickets and activities.
    pub seed_mock_data: bool,
    /// Whether `/api/*` routes other than auth need a signed-in dispatcher.
    pub require_session: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 54880,
            log_level: "info".to_string(),
            login_delay_ms: 800,
            seed_mock_data: true,
            require_session: true,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            host: lookup("DISPATCH_SERVER_HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "DISPATCH_SERVER_PORT", defaults.port)?,
            log_level: lookup("DISPATCH_LOG_LEVEL").unwrap_or(defaults.log_level),
            login_delay_ms: parse_var(&lookup, "DISPATCH_LOGIN_DELAY_MS", defaults.login_delay_ms)?,
            seed_mock_data: parse_flag(&lookup, "DISPATCH_SEED_MOCK_DATA", defaults.seed_mock_data)?,
            require_session: parse_flag(
                &lookup,
                "DISPATCH_REQUIRE_SESSION",
                defaults.require_session,
            )?,
        })
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the simulated sign-in latency.
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{name} has an invalid value {value:?}: {e}")),
        None => Ok(default),
    }
}

fn parse_flag(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: bool,
) -> anyhow::Result<bool> {
    match lookup(name).map(|v| v.trim().to_lowercase()) {
        Some(value) => match value.as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => anyhow::bail!("{name} must be true, false, 1 or 0, got {value:?}"),
        },
        None => Ok(default),
    }
}
