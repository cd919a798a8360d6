//! The session-lived store holding the four fleet collections.

use chrono::NaiveDate;
use std::sync::Arc;

use super::codec::{decode_collection, encode_collection};
use super::collection::Collection;
use crate::entity::{Entity, EntityId};
use crate::jornada::Jornada;
use crate::maleza::Maleza;
use crate::report::{CostRates, Report, ReportFilter, build_report};
use crate::robot::Robot;
use crate::seed::Seed;
use crate::stats::{ActivityPoint, DashboardStats, FleetSnapshot, activity_between};
use crate::storage::KeyValueStore;
use crate::tank::Tank;

/// Gives generic store operations access to the collection of one entity kind.
pub trait HoldsCollection<E: Entity> {
    fn collection(&self) -> &Collection<E>;
    fn collection_mut(&mut self) -> &mut Collection<E>;
}

/// Authoritative in-memory copy of the fleet data, mirrored to a
/// [`KeyValueStore`] after every mutation.
///
/// Lookups with an unknown id answer `None`/`false`; they are never errors.
/// A failed write is logged and flips [`is_degraded`](Self::is_degraded), but
/// the in-memory change stands.
pub struct EntityStore {
    storage: Arc<dyn KeyValueStore>,
    robots: Collection<Robot>,
    tanks: Collection<Tank>,
    jornadas: Collection<Jornada>,
    malezas: Collection<Maleza>,
    degraded: bool,
}

macro_rules! holds {
    ($entity:ty, $field:ident) => {
        impl HoldsCollection<$entity> for EntityStore {
            fn collection(&self) -> &Collection<$entity> {
                &self.$field
            }

            fn collection_mut(&mut self) -> &mut Collection<$entity> {
                &mut self.$field
            }
        }
    };
}

holds!(Robot, robots);
holds!(Tank, tanks);
holds!(Jornada, jornadas);
holds!(Maleza, malezas);

/// Reads one collection, falling back to its seed when the key is absent or
/// its content cannot be used.
fn load_collection<E: Entity>(storage: &dyn KeyValueStore, seed: Vec<E>) -> Collection<E> {
    match storage.get(E::COLLECTION) {
        Ok(Some(raw)) => match decode_collection::<E>(&raw) {
            Ok(items) => {
                tracing::debug!(
                    "[EntityStore] Loaded {} {} record(s) from '{}'",
                    items.len(),
                    E::ENTITY_NAME,
                    E::COLLECTION
                );
                Collection::from_items(items)
            }
            Err(e) => {
                tracing::warn!(
                    "[EntityStore] Discarding stored '{}', using seed data: {}",
                    E::COLLECTION,
                    e
                );
                Collection::from_items(seed)
            }
        },
        Ok(None) => {
            tracing::debug!(
                "[EntityStore] No stored '{}', using {} seed record(s)",
                E::COLLECTION,
                seed.len()
            );
            Collection::from_items(seed)
        }
        Err(e) => {
            tracing::warn!(
                "[EntityStore] Failed to read '{}', using seed data: {}",
                E::COLLECTION,
                e
            );
            Collection::from_items(seed)
        }
    }
}

impl EntityStore {
    /// Opens the store over `storage`, seeding missing collections with the
    /// default dataset.
    pub fn open(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::open_with_seed(storage, Seed::default_dataset())
    }

    /// Opens the store over `storage` with an explicit seed.
    pub fn open_with_seed(storage: Arc<dyn KeyValueStore>, seed: Seed) -> Self {
        let robots = load_collection(storage.as_ref(), seed.robots);
        let tanks = load_collection(storage.as_ref(), seed.tanks);
        let jornadas = load_collection(storage.as_ref(), seed.jornadas);
        let malezas = load_collection(storage.as_ref(), seed.malezas);

        tracing::info!(
            "[EntityStore] Opened with {} robots, {} tanks, {} jornadas, {} malezas",
            robots.len(),
            tanks.len(),
            jornadas.len(),
            malezas.len()
        );

        Self {
            storage,
            robots,
            tanks,
            jornadas,
            malezas,
            degraded: false,
        }
    }

    fn coll<E: Entity>(&self) -> &Collection<E>
    where
        Self: HoldsCollection<E>,
    {
        <Self as HoldsCollection<E>>::collection(self)
    }

    fn coll_mut<E: Entity>(&mut self) -> &mut Collection<E>
    where
        Self: HoldsCollection<E>,
    {
        <Self as HoldsCollection<E>>::collection_mut(self)
    }

    /// Writes the whole collection of `E` under its key.
    fn persist<E: Entity>(&mut self)
    where
        Self: HoldsCollection<E>,
    {
        let result = encode_collection(self.coll::<E>().items())
            .and_then(|raw| self.storage.set(E::COLLECTION, &raw));

        if let Err(e) = result {
            if !self.degraded {
                tracing::warn!("[EntityStore] Persistence failed, continuing in memory only");
            }
            tracing::warn!("[EntityStore] Failed to persist '{}': {}", E::COLLECTION, e);
            self.degraded = true;
        }
    }

    // ============================================================================
    // Reads
    // ============================================================================

    /// Copy of the whole collection in insertion order.
    pub fn list<E: Entity>(&self) -> Vec<E>
    where
        Self: HoldsCollection<E>,
    {
        self.coll::<E>().items().to_vec()
    }

    pub fn get<E: Entity>(&self, id: EntityId) -> Option<E>
    where
        Self: HoldsCollection<E>,
    {
        self.coll::<E>().get(id).cloned()
    }

    /// Records matching `predicate`, in insertion order.
    pub fn find<E: Entity>(&self, predicate: impl Fn(&E) -> bool) -> Vec<E>
    where
        Self: HoldsCollection<E>,
    {
        self.coll::<E>()
            .items()
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    pub fn count<E: Entity>(&self) -> usize
    where
        Self: HoldsCollection<E>,
    {
        self.coll::<E>().len()
    }

    // ============================================================================
    // Mutations
    // ============================================================================

    /// Creates a record from `draft` under a fresh id and persists the
    /// collection.
    ///
    /// # Returns
    ///
    /// The stored record, including its id and derived fields.
    pub fn add<E: Entity>(&mut self, draft: E::Draft) -> E
    where
        Self: HoldsCollection<E>,
    {
        let id = self.coll::<E>().next_id();
        let mut entity = E::from_draft(id, draft);
        entity.snapshot_references(self.robots.items());
        entity.refresh_derived();

        self.coll_mut::<E>().push(entity.clone());
        tracing::debug!("[EntityStore] Added {} {}", E::ENTITY_NAME, id);
        self.persist::<E>();
        entity
    }

    /// Merges `patch` into the record with `id` and persists the collection.
    ///
    /// # Returns
    ///
    /// The updated record, or `None` (with no change) when `id` is unknown.
    pub fn update<E: Entity>(&mut self, id: EntityId, patch: E::Patch) -> Option<E>
    where
        Self: HoldsCollection<E>,
    {
        let mut updated = self.coll::<E>().get(id)?.clone();
        updated.apply_patch(patch);
        updated.snapshot_references(self.robots.items());
        updated.refresh_derived();

        self.coll_mut::<E>().replace(updated.clone());
        tracing::debug!("[EntityStore] Updated {} {}", E::ENTITY_NAME, id);
        self.persist::<E>();
        Some(updated)
    }

    /// Removes the record with `id`. Returns whether anything was removed.
    pub fn delete<E: Entity>(&mut self, id: EntityId) -> bool
    where
        Self: HoldsCollection<E>,
    {
        if self.coll_mut::<E>().remove(id).is_none() {
            return false;
        }
        tracing::debug!("[EntityStore] Deleted {} {}", E::ENTITY_NAME, id);
        self.persist::<E>();
        true
    }

    /// Replaces all four collections with `seed` and persists them.
    pub fn reset_to_seed(&mut self, seed: Seed) {
        self.robots = Collection::from_items(seed.robots);
        self.tanks = Collection::from_items(seed.tanks);
        self.jornadas = Collection::from_items(seed.jornadas);
        self.malezas = Collection::from_items(seed.malezas);

        self.persist::<Robot>();
        self.persist::<Tank>();
        self.persist::<Jornada>();
        self.persist::<Maleza>();
        tracing::info!("[EntityStore] Reset all collections to seed data");
    }

    // ============================================================================
    // Aggregates
    // ============================================================================

    pub fn snapshot(&self) -> FleetSnapshot<'_> {
        FleetSnapshot {
            robots: self.robots.items(),
            tanks: self.tanks.items(),
            jornadas: self.jornadas.items(),
            malezas: self.malezas.items(),
        }
    }

    pub fn aggregate_stats(&self) -> DashboardStats {
        DashboardStats::from_snapshot(&self.snapshot())
    }

    pub fn activity_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<ActivityPoint> {
        activity_between(self.jornadas.items(), start, end)
    }

    pub fn build_report(&self, filter: &ReportFilter, rates: &CostRates) -> Report {
        build_report(&self.snapshot(), filter, rates)
    }

    /// True once any write has failed during this session.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jornada::{JornadaDraft, JornadaPatch, JornadaStatus};
    use crate::robot::RobotPatch;
    use crate::storage::MemoryStorage;

    fn store() -> (MemoryStorage, EntityStore) {
        let storage = MemoryStorage::new();
        let store = EntityStore::open(Arc::new(storage.clone()));
        (storage, store)
    }

    #[test]
    fn test_open_does_not_write() {
        let (storage, _store) = store();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_mutation_persists_only_its_collection() {
        let (storage, mut store) = store();

        assert!(store.delete::<Tank>(5));

        assert!(storage.get("aspersax_tanques").unwrap().is_some());
        assert!(storage.get("aspersax_robots").unwrap().is_none());
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_jornada_snapshots_robot_name() {
        let (_, mut store) = store();

        let added: Jornada = store.add(JornadaDraft {
            date: NaiveDate::from_ymd_opt(2025, 8, 28).unwrap(),
            robot_id: 5,
            robot_name: "typed by hand".to_string(),
            area_covered: 4.0,
            weeds_detected: 12,
            herbicide_used: 3.5,
            duration_minutes: 60,
            status: JornadaStatus::Scheduled,
        });
        assert_eq!(added.id, 11);
        assert_eq!(added.robot_name, "AgriBot Precision");

        let moved = store
            .update::<Jornada>(
                added.id,
                JornadaPatch {
                    robot_id: Some(2),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(moved.robot_name, "WeedHunter Pro Max");
    }

    #[test]
    fn test_renaming_robot_keeps_recorded_jornada_names() {
        let (_, mut store) = store();

        store.update::<Robot>(
            1,
            RobotPatch {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        );

        let first: Jornada = store.get(1).unwrap();
        assert_eq!(first.robot_name, "AgroBot Sentinel X1");
    }

    #[test]
    fn test_find_filters_in_order() {
        let (_, store) = store();
        let operating = store.find::<Robot>(|r| r.is_operating());
        let ids: Vec<_> = operating.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 4, 6]);
    }

    #[test]
    fn test_reset_restores_seed_and_persists() {
        let (storage, mut store) = store();
        store.delete::<Robot>(1);

        store.reset_to_seed(Seed::empty());

        assert_eq!(store.count::<Robot>(), 0);
        assert_eq!(storage.get("aspersax_malezas").unwrap().as_deref(), Some("[]"));
    }
}
