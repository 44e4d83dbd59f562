mod config;

pub use config::{Config, DisplayConfig, LogConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the configuration directory, creating it if needed.
///
/// `RESTBREAK_HOME` overrides the location outright. Otherwise this is
/// `~/.config/restbreak[-dev]/`, with `RESTBREAK_ENV=dev` selecting the
/// development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("RESTBREAK_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("RESTBREAK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("restbreak-dev")
            } else {
                base_dir.join("restbreak")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DirUnavailable {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
