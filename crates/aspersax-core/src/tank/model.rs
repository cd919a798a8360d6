//! Tank domain model.
//!
//! A tank holds herbicide for the fleet. Its qualitative [`TankStatus`] is a
//! derived field: it is recomputed from `level` and `capacity` on every create,
//! update and load, and can never be set by a caller.

use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::entity::{Entity, EntityId};

/// Qualitative fill status of a tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TankStatus {
    #[serde(rename = "Lleno")]
    Full,
    #[serde(rename = "Medio")]
    Medium,
    #[serde(rename = "Bajo")]
    Low,
    #[serde(rename = "Vacío")]
    Empty,
}

impl TankStatus {
    /// Buckets the fill percentage `(level / capacity) * 100`.
    ///
    /// `0% -> Empty`, `(0, 25] -> Low`, `(25, 75] -> Medium`, `(75, 100] -> Full`.
    /// A non-positive capacity or level counts as empty.
    pub fn from_levels(level: f64, capacity: f64) -> Self {
        if capacity <= 0.0 || level <= 0.0 {
            return TankStatus::Empty;
        }

        let percentage = (level / capacity) * 100.0;
        if percentage <= 25.0 {
            TankStatus::Low
        } else if percentage <= 75.0 {
            TankStatus::Medium
        } else {
            TankStatus::Full
        }
    }
}

/// A herbicide tank.
///
/// Stored through `TankRecord`, which also writes the legacy
/// `capacidad_total` key and ignores any stored `estado`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TankRecord", into = "TankRecord")]
pub struct Tank {
    pub id: EntityId,
    pub name: String,
    /// Total capacity in liters.
    pub capacity: f64,
    /// Current level in liters.
    pub level: f64,
    status: TankStatus,
    pub herbicide_type: String,
    pub last_refill: DateTime<Utc>,
    pub active: bool,
}

/// Wire form of a tank.
///
/// The web console writes the capacity twice, as `capacidad` and
/// `capacidad_total`; either one is enough on read.
#[derive(Serialize, Deserialize)]
struct TankRecord {
    id_tanque: EntityId,
    nombre: String,
    #[serde(default)]
    capacidad: Option<f64>,
    #[serde(default)]
    capacidad_total: Option<f64>,
    nivel_actual: f64,
    #[serde(default, deserialize_with = "discard_status")]
    estado: Option<TankStatus>,
    tipo_herbicida: String,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    ultima_recarga: DateTime<Utc>,
    activo: bool,
}

/// The stored status is derived data; any label, known or not, is dropped.
fn discard_status<'de, D>(deserializer: D) -> Result<Option<TankStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer)?;
    Ok(None)
}

impl TryFrom<TankRecord> for Tank {
    type Error = String;

    fn try_from(record: TankRecord) -> Result<Self, Self::Error> {
        let capacity = record
            .capacidad
            .or(record.capacidad_total)
            .ok_or_else(|| format!("tank {} has no capacidad", record.id_tanque))?;

        Ok(Tank::new(
            record.id_tanque,
            record.nombre,
            capacity,
            record.nivel_actual,
            record.tipo_herbicida,
            record.ultima_recarga,
            record.activo,
        ))
    }
}

impl From<Tank> for TankRecord {
    fn from(tank: Tank) -> Self {
        Self {
            id_tanque: tank.id,
            nombre: tank.name,
            capacidad: Some(tank.capacity),
            capacidad_total: Some(tank.capacity),
            nivel_actual: tank.level,
            estado: Some(tank.status),
            tipo_herbicida: tank.herbicide_type,
            ultima_recarga: tank.last_refill,
            activo: tank.active,
        }
    }
}

/// Form data for creating a tank. The refill timestamp is stamped on creation.
#[derive(Debug, Clone, PartialEq)]
pub struct TankDraft {
    pub name: String,
    pub capacity: f64,
    pub level: f64,
    pub herbicide_type: String,
    pub active: bool,
}

/// Partial tank update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TankPatch {
    pub name: Option<String>,
    pub capacity: Option<f64>,
    pub level: Option<f64>,
    pub herbicide_type: Option<String>,
    pub active: Option<bool>,
}

impl Tank {
    /// Builds a tank with an explicit refill timestamp; the status is derived.
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        capacity: f64,
        level: f64,
        herbicide_type: impl Into<String>,
        last_refill: DateTime<Utc>,
        active: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            capacity,
            level,
            status: TankStatus::from_levels(level, capacity),
            herbicide_type: herbicide_type.into(),
            last_refill,
            active,
        }
    }

    pub fn status(&self) -> TankStatus {
        self.status
    }

    /// A tank is in use when it is active and not empty.
    pub fn is_in_use(&self) -> bool {
        self.active && self.status != TankStatus::Empty
    }
}

impl Entity for Tank {
    type Draft = TankDraft;
    type Patch = TankPatch;

    const COLLECTION: &'static str = "aspersax_tanques";
    const ENTITY_NAME: &'static str = "tank";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: TankDraft) -> Self {
        Self::new(
            id,
            draft.name,
            draft.capacity,
            draft.level,
            draft.herbicide_type,
            Utc::now(),
            draft.active,
        )
    }

    fn apply_patch(&mut self, patch: TankPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(capacity) = patch.capacity {
            self.capacity = capacity;
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
        if let Some(herbicide_type) = patch.herbicide_type {
            self.herbicide_type = herbicide_type;
        }
        if let Some(active) = patch.active {
            self.active = active;
        }
    }

    fn refresh_derived(&mut self) {
        self.status = TankStatus::from_levels(self.level, self.capacity);
    }
}
