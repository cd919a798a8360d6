//! Role-based permission engine.
//!
//! # Usage
//!
//! ```ignore
//! use aspersax_core::permission::{AccessRequirement, Capability, PermissionService};
//!
//! let state = service.resolve().await;
//! if state.check(&AccessRequirement::capability(Capability::ManageTanques)).is_granted() {
//!     // show the tank editor
//! }
//! ```

mod engine;
mod model;
mod service;

pub use engine::{AccessDecision, AccessRequirement, DenialReason, PermissionState, derive_permissions};
pub use model::{Capability, PermissionSet, Role, UserProfile};
pub use service::{PermissionService, ProfileProvider, StaticProfileProvider};
