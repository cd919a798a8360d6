//! Loads [`AppConfig`] from `config.toml`.

use std::path::{Path, PathBuf};

use aspersax_core::{AppConfig, AspersaxError, Result};

use crate::paths::AspersaxPaths;

/// Reads the application configuration from one TOML file.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service over the platform default `config.toml`.
    pub fn from_default_location() -> Result<Self> {
        Ok(Self::new(AspersaxPaths::config_file()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration.
    ///
    /// # Returns
    ///
    /// - `Ok(config)`: parsed file, or defaults when it is missing or empty
    /// - `Err(AspersaxError::Config)`: the file exists but is not valid TOML
    pub fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            tracing::debug!(
                "[ConfigService] No config at {}, using defaults",
                self.path.display()
            );
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        let config: AppConfig = toml::from_str(&content).map_err(|e| {
            AspersaxError::config(format!("{}: {}", self.path.display(), e))
        })?;
        tracing::debug!("[ConfigService] Loaded {}", self.path.display());
        Ok(config)
    }
}
