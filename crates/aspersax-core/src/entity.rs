//! The contract every stored record kind implements.

use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Debug;

use crate::robot::Robot;

/// Identifier assigned by the store. Unique within one collection.
pub type EntityId = u32;

/// A record kind held by the [`EntityStore`](crate::store::EntityStore).
///
/// Each implementor names its storage key, how a form draft becomes a stored
/// record, and how a patch is merged into one. Derived fields are never part of
/// a draft or a patch; they are recomputed by [`Entity::refresh_derived`] after
/// every create, update and load.
pub trait Entity: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    /// Form data accepted by `add`: every field except the id and derived fields.
    type Draft;

    /// Partial update accepted by `update`; `None` fields are left untouched.
    type Patch;

    /// Fixed key the collection is persisted under.
    const COLLECTION: &'static str;

    /// Human readable name used in logs and errors.
    const ENTITY_NAME: &'static str;

    fn id(&self) -> EntityId;

    /// Builds a stored record from a draft and a freshly assigned id.
    fn from_draft(id: EntityId, draft: Self::Draft) -> Self;

    /// Merges a patch over the record. Must not touch the id.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Recomputes fields that are a pure function of other fields.
    fn refresh_derived(&mut self) {}

    /// Refreshes denormalized copies of robot data (e.g. a name snapshot).
    fn snapshot_references(&mut self, _robots: &[Robot]) {}
}
