//! Platform locations for Aspersax files.
//!
//! ```text
//! ~/.config/aspersax/          # Config directory
//! ├── config.toml              # Application configuration
//! └── profile.json             # Acting user profile (optional)
//!
//! ~/.local/share/aspersax/     # Data directory
//! ├── aspersax_robots.json
//! ├── aspersax_tanques.json
//! ├── aspersax_jornadas.json
//! └── aspersax_malezas.json
//! ```

use std::path::PathBuf;

use aspersax_core::{AspersaxError, Result};

const APP_DIR: &str = "aspersax";

pub struct AspersaxPaths;

impl AspersaxPaths {
    /// Returns the configuration directory (e.g. `~/.config/aspersax/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| AspersaxError::config("cannot determine the config directory"))
    }

    /// Returns the data directory holding the persisted collections.
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| AspersaxError::config("cannot determine the data directory"))
    }

    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn profile_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("profile.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_under_the_app_directory() {
        // Headless CI may have no home directory; only check when resolvable.
        if let (Ok(dir), Ok(file)) = (AspersaxPaths::config_dir(), AspersaxPaths::config_file()) {
            assert!(dir.ends_with("aspersax"));
            assert_eq!(file, dir.join("config.toml"));
        }
    }
}
