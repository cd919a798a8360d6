//! An ordered, id-keyed collection of one entity kind.

use crate::entity::{Entity, EntityId};

/// Insertion-ordered records plus the id bookkeeping for one entity kind.
///
/// `high_water` is the largest id ever held during this session, so an id
/// freed by a delete is never handed out again.
#[derive(Debug, Clone)]
pub struct Collection<E: Entity> {
    items: Vec<E>,
    high_water: EntityId,
}

impl<E: Entity> Default for Collection<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            high_water: 0,
        }
    }
}

impl<E: Entity> Collection<E> {
    /// Adopts loaded or seeded records, re-deriving their computed fields.
    pub fn from_items(mut items: Vec<E>) -> Self {
        for item in &mut items {
            item.refresh_derived();
        }
        let high_water = items.iter().map(|item| item.id()).max().unwrap_or(0);
        Self { items, high_water }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Id for the next record: one past the highest id seen, 1 when none.
    ///
    /// Once the id space is exhausted the lowest id not currently held is
    /// used instead, so an add never collides with a live record.
    pub fn next_id(&self) -> EntityId {
        if let Some(id) = self.high_water.checked_add(1) {
            return id;
        }
        let free = (1..=EntityId::MAX)
            .find(|candidate| self.get(*candidate).is_none())
            .unwrap_or(EntityId::MAX);
        tracing::warn!(
            "[Collection] {} ids exhausted, reusing free id {}",
            E::ENTITY_NAME,
            free
        );
        free
    }

    pub(crate) fn push(&mut self, item: E) {
        self.high_water = self.high_water.max(item.id());
        self.items.push(item);
    }

    /// Replaces the record with the same id in place. Returns false if absent.
    pub(crate) fn replace(&mut self, item: E) -> bool {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove(&mut self, id: EntityId) -> Option<E> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }
}
