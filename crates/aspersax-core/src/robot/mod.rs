//! Robot domain module.
//!
//! # Usage
//!
//! ```ignore
//! use aspersax_core::robot::{Robot, RobotDraft, RobotPatch, RobotStatus};
//! ```

mod model;

pub use model::{Robot, RobotDraft, RobotPatch, RobotStatus};
