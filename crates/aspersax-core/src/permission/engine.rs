//! Capability table and access checks.
//!
//! [`derive_permissions`] is the single source of truth for what a role may do.
//! Views ask a [`PermissionState`] whether an [`AccessRequirement`] holds and get
//! back an [`AccessDecision`]. A pending state is never a denial: the caller is
//! expected to show a loading indicator until the profile resolves.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::model::{Capability, PermissionSet, Role};

/// Builds the permission set of a role.
///
/// A superuser is treated exactly like [`Role::Admin`], whatever its stored
/// role is.
pub fn derive_permissions(role: Role, is_superuser: bool) -> PermissionSet {
    let role = if is_superuser { Role::Admin } else { role };

    let granted: BTreeSet<Capability> = match role {
        Role::Admin => Capability::all().collect(),
        Role::Viewer => Capability::VIEWER.into_iter().collect(),
    };

    PermissionSet { role, granted }
}

/// What a guarded view or action needs. Both parts are optional and ANDed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequirement {
    pub capability: Option<Capability>,
    pub role: Option<Role>,
}

impl AccessRequirement {
    pub fn capability(capability: Capability) -> Self {
        Self {
            capability: Some(capability),
            role: None,
        }
    }

    pub fn role(role: Role) -> Self {
        Self {
            capability: None,
            role: Some(role),
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Evaluates the requirement against a resolved set.
    ///
    /// Admins pass any role check. The capability check is never bypassed,
    /// though admins hold every capability anyway.
    pub fn evaluate(&self, permissions: &PermissionSet) -> AccessDecision {
        if let Some(required) = self.role {
            if required != permissions.role && !permissions.is_admin() {
                return AccessDecision::Denied(DenialReason::MissingRole(required));
            }
        }

        if let Some(capability) = self.capability {
            if !permissions.has(capability) {
                return AccessDecision::Denied(DenialReason::MissingCapability(capability));
            }
        }

        AccessDecision::Granted
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DenialReason {
    MissingRole(Role),
    MissingCapability(Capability),
    /// The profile could not be loaded.
    ProfileUnavailable,
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialReason::MissingRole(role) => write!(f, "requires role '{}'", role),
            DenialReason::MissingCapability(capability) => {
                write!(f, "missing permission '{}'", capability)
            }
            DenialReason::ProfileUnavailable => write!(f, "user profile unavailable"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessDecision {
    /// The profile has not been resolved yet.
    Pending,
    Granted,
    Denied(DenialReason),
}

impl AccessDecision {
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessDecision::Granted)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, AccessDecision::Pending)
    }
}

/// Permission state of the acting user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionState {
    Pending,
    Resolved(PermissionSet),
    /// Fetching the profile failed; every check is denied.
    Unavailable(String),
}

impl PermissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, PermissionState::Pending)
    }

    pub fn permissions(&self) -> Option<&PermissionSet> {
        match self {
            PermissionState::Resolved(set) => Some(set),
            _ => None,
        }
    }

    /// `false` until resolved.
    pub fn has(&self, capability: Capability) -> bool {
        self.permissions().is_some_and(|set| set.has(capability))
    }

    pub fn check(&self, requirement: &AccessRequirement) -> AccessDecision {
        match self {
            PermissionState::Pending => AccessDecision::Pending,
            PermissionState::Resolved(set) => requirement.evaluate(set),
            PermissionState::Unavailable(_) => {
                AccessDecision::Denied(DenialReason::ProfileUnavailable)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MUTATIONS: [Capability; 12] = [
        Capability::ManageUsers,
        Capability::ControlRobots,
        Capability::ConfigureSystem,
        Capability::CreateJornadas,
        Capability::EditJornadas,
        Capability::DeleteJornadas,
        Capability::ManageTanques,
        Capability::ExportData,
        Capability::ViewLogs,
        Capability::ManageMalezas,
        Capability::ViewAllUsers,
        Capability::EditAnyProfile,
    ];

    #[test]
    fn test_viewer_denies_every_mutation() {
        let set = derive_permissions(Role::Viewer, false);
        for capability in MUTATIONS {
            assert!(!set.has(capability), "viewer should not have {}", capability);
        }
        assert!(set.has(Capability::ViewDashboard));
        assert!(set.has(Capability::ViewReports));
        assert!(set.has(Capability::EditOwnProfile));
        assert_eq!(set.granted.len(), 3);
    }

    #[test]
    fn test_superuser_is_admin() {
        let set = derive_permissions(Role::Viewer, true);
        assert_eq!(set, derive_permissions(Role::Admin, false));
        assert!(Capability::all().all(|c| set.has(c)));
    }

    #[test]
    fn test_role_check_with_admin_bypass() {
        let admin = derive_permissions(Role::Admin, false);
        let viewer = derive_permissions(Role::Viewer, false);
        let viewer_only = AccessRequirement::role(Role::Viewer);
        let admin_only = AccessRequirement::role(Role::Admin);

        assert!(viewer_only.evaluate(&admin).is_granted());
        assert!(viewer_only.evaluate(&viewer).is_granted());
        assert_eq!(
            admin_only.evaluate(&viewer),
            AccessDecision::Denied(DenialReason::MissingRole(Role::Admin))
        );
    }

    #[test]
    fn test_role_and_capability_are_anded() {
        let viewer = derive_permissions(Role::Viewer, false);
        let requirement = AccessRequirement::capability(Capability::ManageTanques).with_role(Role::Viewer);

        assert_eq!(
            requirement.evaluate(&viewer),
            AccessDecision::Denied(DenialReason::MissingCapability(Capability::ManageTanques))
        );
    }

    #[test]
    fn test_pending_is_not_a_denial() {
        let requirement = AccessRequirement::capability(Capability::ViewDashboard);

        assert_eq!(PermissionState::Pending.check(&requirement), AccessDecision::Pending);
        assert!(!PermissionState::Pending.has(Capability::ViewDashboard));
        assert_eq!(
            PermissionState::Unavailable("timeout".into()).check(&requirement),
            AccessDecision::Denied(DenialReason::ProfileUnavailable)
        );
    }
}
