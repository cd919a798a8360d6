//! Capability table for a role or a user profile.

use anyhow::{Result, bail};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

use aspersax_core::AppConfig;
use aspersax_core::permission::{
    Capability, PermissionService, PermissionState, ProfileProvider, Role, StaticProfileProvider,
    UserProfile,
};
use aspersax_infrastructure::{AspersaxPaths, FileProfileProvider};

fn provider(
    config: &AppConfig,
    role: Option<Role>,
    superuser: bool,
    profile: Option<PathBuf>,
) -> Result<Arc<dyn ProfileProvider>> {
    if role.is_some() || superuser {
        return Ok(Arc::new(StaticProfileProvider::new(UserProfile {
            username: "cli".to_string(),
            role: role.unwrap_or(Role::Viewer),
            is_superuser: superuser,
        })));
    }

    let path = match profile.or_else(|| config.profile_path.clone()) {
        Some(path) => path,
        None => AspersaxPaths::profile_file()?,
    };
    Ok(Arc::new(FileProfileProvider::new(path)))
}

pub async fn show(
    config: &AppConfig,
    role: Option<Role>,
    superuser: bool,
    profile: Option<PathBuf>,
) -> Result<()> {
    let service = PermissionService::new(provider(config, role, superuser, profile)?);

    let set = match service.resolve().await {
        PermissionState::Resolved(set) => set,
        PermissionState::Unavailable(reason) => bail!("user profile unavailable: {}", reason),
        PermissionState::Pending => bail!("user profile did not resolve"),
    };

    println!("{} {}", "Role:".bold(), set.role.to_string().cyan());
    for capability in Capability::all() {
        let mark = if set.has(capability) {
            "✓".green()
        } else {
            "✗".red()
        };
        println!("  {} {}", mark, capability);
    }

    Ok(())
}
