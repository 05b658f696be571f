pub mod app_config;
pub mod config;
pub mod platform;
pub mod profiles;

pub use app_config::{Baselines, DashboardConfig, Environment};
pub use config::{load_dashboard_config, load_dashboard_config_from_env};
pub use platform::Platform;
pub use profiles::{Niche, PlatformStats, Profile, ProfileRegistry, ProfileStats};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
