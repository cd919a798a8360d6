//! Roles, capabilities and the acting user's profile.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::{Display, EnumIter, IntoEnumIterator};

/// Role stored on a user profile.
///
/// Anything other than `"admin"` parses as [`Role::Viewer`], so an unknown or
/// misspelled role never grants more than read access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(from = "String", rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    Viewer,
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            "viewer" => Role::Viewer,
            other => {
                tracing::debug!("[Permission] Unknown role '{}', treating as viewer", other);
                Role::Viewer
            }
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Role::parse(&raw)
    }
}

/// Everything a user may be allowed to do in the console.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Capability {
    ViewDashboard,
    ManageUsers,
    ControlRobots,
    ConfigureSystem,
    CreateJornadas,
    EditJornadas,
    DeleteJornadas,
    ManageTanques,
    ViewReports,
    ExportData,
    ViewLogs,
    ManageMalezas,
    ViewAllUsers,
    EditOwnProfile,
    EditAnyProfile,
}

impl Capability {
    /// Capabilities every signed-in user has.
    pub const VIEWER: [Capability; 3] = [
        Capability::ViewDashboard,
        Capability::ViewReports,
        Capability::EditOwnProfile,
    ];

    pub fn all() -> impl Iterator<Item = Capability> {
        Capability::iter()
    }
}

/// The resolved role and granted capabilities of one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    pub role: Role,
    pub granted: BTreeSet<Capability>,
}

impl PermissionSet {
    pub fn has(&self, capability: Capability) -> bool {
        self.granted.contains(&capability)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// The acting user, as returned by the profile endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(rename = "rol")]
    pub role: Role,
    #[serde(default)]
    pub is_superuser: bool,
}
