use crate::app_config::{AppConfig, Environment};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process. Does NOT load `.env` files — useful for testing or when the
/// caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("PULSE_ENV", "development"));

    let bind_addr = parse_addr("PULSE_BIND_ADDR", "127.0.0.1:5000")?;
    let log_level = or_default("PULSE_LOG_LEVEL", "info");

    let request_timeout_secs = parse_u64("PULSE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        "PULSE_USER_AGENT",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    );
    let fetch_delay_min_ms = parse_u64("PULSE_FETCH_DELAY_MIN_MS", "1500")?;
    let fetch_delay_max_ms = parse_u64("PULSE_FETCH_DELAY_MAX_MS", "3000")?;
    if fetch_delay_max_ms < fetch_delay_min_ms {
        return Err(ConfigError::InvalidEnvVar {
            var: "PULSE_FETCH_DELAY_MAX_MS".to_string(),
            reason: format!("must be >= PULSE_FETCH_DELAY_MIN_MS ({fetch_delay_min_ms})"),
        });
    }

    let dump_dir = lookup("PULSE_DUMP_DIR").ok().map(PathBuf::from);

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        request_timeout_secs,
        user_agent,
        fetch_delay_min_ms,
        fetch_delay_max_ms,
        dump_dir,
    })
}

fn parse_environment(raw: &str) -> Environment {
    match raw {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
