//! Reads the acting user's profile from a JSON file.

use async_trait::async_trait;
use std::path::PathBuf;

use aspersax_core::permission::{ProfileProvider, UserProfile};
use aspersax_core::{AspersaxError, Result};

/// Profile provider backed by a file such as
/// `{"username": "ana", "rol": "admin", "is_superuser": false}`.
#[derive(Debug, Clone)]
pub struct FileProfileProvider {
    path: PathBuf,
}

impl FileProfileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProfileProvider for FileProfileProvider {
    async fn fetch_profile(&self) -> Result<UserProfile> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AspersaxError::profile(format!("cannot read {}: {}", self.path.display(), e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            AspersaxError::profile(format!("invalid profile {}: {}", self.path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aspersax_core::permission::Role;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_profile_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profile.json");
        std::fs::write(&path, r#"{"username": "ana", "rol": "admin"}"#).unwrap();

        let profile = FileProfileProvider::new(&path).fetch_profile().await.unwrap();

        assert_eq!(profile.username, "ana");
        assert_eq!(profile.role, Role::Admin);
        assert!(!profile.is_superuser);
    }

    #[tokio::test]
    async fn test_missing_file_is_a_profile_error() {
        let temp_dir = TempDir::new().unwrap();
        let provider = FileProfileProvider::new(temp_dir.path().join("none.json"));

        let err = provider.fetch_profile().await.unwrap_err();

        assert!(matches!(err, AspersaxError::Profile(_)));
    }
}
