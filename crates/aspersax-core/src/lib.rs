//! Core domain of the Aspersax weed-control fleet console.
//!
//! Holds the entity store for robots, tanks, work sessions (jornadas) and
//! detected weeds (malezas), the dashboard and report aggregates computed from
//! it, and the role-based permission engine.

pub mod config;
pub mod entity;
pub mod error;
pub mod jornada;
pub mod maleza;
pub mod permission;
pub mod report;
pub mod robot;
pub mod seed;
pub mod stats;
pub mod storage;
pub mod store;
pub mod tank;
pub mod timestamp;

// Re-export the types most callers need
pub use config::AppConfig;
pub use entity::{Entity, EntityId};
pub use error::{AspersaxError, Result, StorageError};
pub use seed::Seed;
pub use storage::{KeyValueStore, MemoryStorage};
pub use store::EntityStore;
