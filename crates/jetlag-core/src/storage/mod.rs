mod config;

pub use config::{Config, OutputConfig, PlannerConfig, SleepConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/jetlag[-dev]/` based on JETLAG_ENV.
///
/// Set JETLAG_ENV=dev to use the development data directory. The directory
/// is not created here; [`Config::save`] creates it on first write.
///
/// # Errors
/// Returns an error if the home directory cannot be determined.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?.join(".config");

    let env = std::env::var("JETLAG_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("jetlag-dev")
    } else {
        base_dir.join("jetlag")
    };

    Ok(dir)
}
