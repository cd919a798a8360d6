//! Loading the acting user's profile and caching the derived permissions.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::engine::{PermissionState, derive_permissions};
use super::model::UserProfile;
use crate::error::{AspersaxError, Result};

/// Source of the acting user's profile.
///
/// Implementations perform a single read; retries and caching are handled by
/// [`PermissionService`].
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    async fn fetch_profile(&self) -> Result<UserProfile>;
}

/// Provider returning a fixed profile, or a fixed error.
#[derive(Debug, Clone)]
pub struct StaticProfileProvider {
    profile: Option<UserProfile>,
}

impl StaticProfileProvider {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile: Some(profile),
        }
    }

    /// A provider whose fetch always fails.
    pub fn failing() -> Self {
        Self { profile: None }
    }
}

#[async_trait]
impl ProfileProvider for StaticProfileProvider {
    async fn fetch_profile(&self) -> Result<UserProfile> {
        self.profile
            .clone()
            .ok_or_else(|| AspersaxError::profile("no profile configured"))
    }
}

/// Resolves and caches the permission state of the acting user.
///
/// The state starts as [`PermissionState::Pending`]. The first successful
/// [`resolve`](Self::resolve) caches the result for the rest of the session;
/// a failed one leaves the state `Unavailable` and is retried by the next call.
pub struct PermissionService {
    provider: Arc<dyn ProfileProvider>,
    state: RwLock<PermissionState>,
}

impl PermissionService {
    pub fn new(provider: Arc<dyn ProfileProvider>) -> Self {
        Self {
            provider,
            state: RwLock::new(PermissionState::Pending),
        }
    }

    /// Current state without triggering a fetch.
    pub async fn current(&self) -> PermissionState {
        self.state.read().await.clone()
    }

    /// Fetches the profile unless a resolved state is already cached.
    ///
    /// # Returns
    ///
    /// The state after the fetch: `Resolved` on success, `Unavailable` if the
    /// provider failed.
    pub async fn resolve(&self) -> PermissionState {
        if let resolved @ PermissionState::Resolved(_) = self.current().await {
            return resolved;
        }

        let next = match self.provider.fetch_profile().await {
            Ok(profile) => {
                let set = derive_permissions(profile.role, profile.is_superuser);
                tracing::info!(
                    "[PermissionService] Resolved '{}' as {} ({} capabilities)",
                    profile.username,
                    set.role,
                    set.granted.len()
                );
                PermissionState::Resolved(set)
            }
            Err(e) => {
                tracing::error!("[PermissionService] Failed to load user profile: {}", e);
                PermissionState::Unavailable(e.to_string())
            }
        };

        *self.state.write().await = next.clone();
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::{Capability, Role};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider {
        calls: AtomicUsize,
        profile: UserProfile,
    }

    #[async_trait]
    impl ProfileProvider for CountingProvider {
        async fn fetch_profile(&self) -> Result<UserProfile> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.profile.clone())
        }
    }

    fn viewer() -> UserProfile {
        UserProfile {
            username: "campo".to_string(),
            role: Role::Viewer,
            is_superuser: false,
        }
    }

    #[tokio::test]
    async fn test_pending_until_resolved() {
        let service = PermissionService::new(Arc::new(StaticProfileProvider::new(viewer())));

        assert!(service.current().await.is_pending());

        let state = service.resolve().await;
        assert!(state.has(Capability::ViewReports));
        assert!(!state.has(Capability::ControlRobots));
        assert_eq!(service.current().await, state);
    }

    #[tokio::test]
    async fn test_resolved_state_is_cached() {
        let provider = Arc::new(CountingProvider {
            calls: AtomicUsize::new(0),
            profile: viewer(),
        });
        let service = PermissionService::new(provider.clone());

        service.resolve().await;
        service.resolve().await;

        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_unavailable() {
        let service = PermissionService::new(Arc::new(StaticProfileProvider::failing()));

        let state = service.resolve().await;

        assert!(matches!(state, PermissionState::Unavailable(_)));
        assert!(!state.is_pending());
        assert!(!state.has(Capability::ViewDashboard));
    }
}
