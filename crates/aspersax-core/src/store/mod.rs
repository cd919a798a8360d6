//! Entity store: the in-memory collections and their persistence.
//!
//! # Usage
//!
//! ```ignore
//! use aspersax_core::store::EntityStore;
//! use aspersax_core::tank::{Tank, TankPatch};
//!
//! let mut store = EntityStore::open(storage);
//! let tank = store.update::<Tank>(1, TankPatch { level: Some(200.0), ..Default::default() });
//! ```

mod codec;
mod collection;
mod entity_store;

pub use codec::{decode_collection, encode_collection};
pub use collection::Collection;
pub use entity_store::{EntityStore, HoldsCollection};
