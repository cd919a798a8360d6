//! Tank domain module.

mod model;

pub use model::{Tank, TankDraft, TankPatch, TankStatus};
