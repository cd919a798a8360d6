use std::sync::Arc;

use aspersax_core::permission::{
    AccessDecision, AccessRequirement, Capability, DenialReason, PermissionService,
    PermissionState, Role, StaticProfileProvider, UserProfile, derive_permissions,
};

fn profile(role: Role, is_superuser: bool) -> UserProfile {
    UserProfile {
        username: "operador".to_string(),
        role,
        is_superuser,
    }
}

#[test]
fn test_viewer_profile_is_read_only() {
    let set = derive_permissions(Role::Viewer, false);
    let granted: Vec<_> = Capability::all().filter(|c| set.has(*c)).collect();

    assert_eq!(
        granted,
        vec![
            Capability::ViewDashboard,
            Capability::ViewReports,
            Capability::EditOwnProfile
        ]
    );
}

#[test]
fn test_superuser_viewer_gets_everything() {
    let set = derive_permissions(Role::Viewer, true);
    assert!(Capability::all().all(|c| set.has(c)));
    assert_eq!(set.role, Role::Admin);
}

#[tokio::test]
async fn test_service_reports_pending_then_resolves() {
    let service = PermissionService::new(Arc::new(StaticProfileProvider::new(profile(
        Role::Viewer,
        false,
    ))));
    let manage_tanks = AccessRequirement::capability(Capability::ManageTanques);

    assert_eq!(service.current().await, PermissionState::Pending);
    assert_eq!(service.current().await.check(&manage_tanks), AccessDecision::Pending);

    let state = service.resolve().await;

    assert_eq!(
        state.check(&manage_tanks),
        AccessDecision::Denied(DenialReason::MissingCapability(Capability::ManageTanques))
    );
    assert!(state.check(&AccessRequirement::capability(Capability::ViewReports)).is_granted());
}

#[tokio::test]
async fn test_admin_passes_role_gated_views() {
    let service = PermissionService::new(Arc::new(StaticProfileProvider::new(profile(
        Role::Admin,
        false,
    ))));

    let state = service.resolve().await;

    assert!(state.check(&AccessRequirement::role(Role::Viewer)).is_granted());
    assert!(
        state
            .check(&AccessRequirement::capability(Capability::EditAnyProfile).with_role(Role::Admin))
            .is_granted()
    );
}

#[tokio::test]
async fn test_failed_profile_fetch_is_unavailable() {
    let service = PermissionService::new(Arc::new(StaticProfileProvider::failing()));

    let state = service.resolve().await;

    assert!(matches!(state, PermissionState::Unavailable(_)));
    assert!(matches!(service.current().await, PermissionState::Unavailable(_)));
}
