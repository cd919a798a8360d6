//! Maleza (detected weed) domain module.

mod model;

pub use model::{InfestationLevel, Maleza, MalezaDraft, MalezaPatch, MalezaStatus};
