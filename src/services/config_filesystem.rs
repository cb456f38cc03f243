//! Configuration loading from the filesystem.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, CONFIG_FILE, SwitchConfig, parse_config_content};

/// Load configuration from an explicit file, or from `autonav.toml` in `dir`.
///
/// An explicit file must exist; a missing default file yields the defaults.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<SwitchConfig, AppError> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::config_error(format!("Cannot read config {}: {}", path.display(), e))
        })?;
        return parse_config_content(&content);
    }

    let path = dir.join(CONFIG_FILE);
    match fs::read_to_string(&path) {
        Ok(content) => {
            debug!(path = %path.display(), "Loaded configuration");
            parse_config_content(&content)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(SwitchConfig::default()),
        Err(err) => Err(err.into()),
    }
}
