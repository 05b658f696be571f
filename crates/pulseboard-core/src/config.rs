use std::num::NonZeroU64;

use crate::app_config::{Baselines, DashboardConfig, Environment};
use crate::ConfigError;

/// Load dashboard configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_dashboard_config() -> Result<DashboardConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_dashboard_config_from_env()
}

/// Load dashboard configuration from environment variables already in the process.
///
/// Unlike [`load_dashboard_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_dashboard_config_from_env() -> Result<DashboardConfig, ConfigError> {
    build_dashboard_config(|key| std::env::var(key))
}

/// Build dashboard configuration using the provided env-var lookup function.
///
/// Every variable is optional; absent ones take the [`DashboardConfig`] defaults.
fn build_dashboard_config<F>(lookup: F) -> Result<DashboardConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = DashboardConfig::default();

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    let parse_non_zero = |var: &str, default: NonZeroU64| -> Result<NonZeroU64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .trim()
                .parse::<NonZeroU64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(default),
        }
    };

    let env = parse_environment(&or_default("PULSEBOARD_ENV", "development"))?;
    let log_level = or_default("PULSEBOARD_LOG_LEVEL", &defaults.log_level);

    let api_base_url = or_default("PULSEBOARD_API_URL", &defaults.api_base_url);
    if api_base_url.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "PULSEBOARD_API_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let request_timeout_secs =
        parse_u64("PULSEBOARD_REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PULSEBOARD_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let user_agent = or_default("PULSEBOARD_USER_AGENT", &defaults.user_agent);

    let baselines = Baselines {
        likes: parse_non_zero("PULSEBOARD_BASELINE_LIKES", Baselines::DEFAULT_LIKES)?,
        views: parse_non_zero("PULSEBOARD_BASELINE_VIEWS", Baselines::DEFAULT_VIEWS)?,
    };

    Ok(DashboardConfig {
        env,
        log_level,
        api_base_url,
        request_timeout_secs,
        user_agent,
        baselines,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PULSEBOARD_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
