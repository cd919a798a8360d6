//! Robot domain model.
//!
//! A robot is a single weed-control unit of the fleet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId};

/// Operational status of a robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RobotStatus {
    #[serde(rename = "Disponible")]
    Available,
    /// Older builds wrote the short label "Mantenimiento".
    #[serde(rename = "En Mantenimiento", alias = "Mantenimiento")]
    InMaintenance,
    #[serde(rename = "En Operación")]
    InOperation,
    #[serde(rename = "Fuera de Servicio", alias = "Inactivo")]
    OutOfService,
}

/// A weed-control robot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Robot {
    #[serde(rename = "id_robot")]
    pub id: EntityId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "estado")]
    pub status: RobotStatus,
    /// Battery charge in percent, 0..=100.
    #[serde(rename = "bateria")]
    pub battery: u8,
    #[serde(rename = "ultima_actividad", deserialize_with = "crate::timestamp::deserialize")]
    pub last_activity: DateTime<Utc>,
    #[serde(rename = "activo")]
    pub active: bool,
    #[serde(rename = "ubicacion", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "modelo", default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Form data for creating a robot.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotDraft {
    pub name: String,
    pub status: RobotStatus,
    pub battery: u8,
    pub last_activity: DateTime<Utc>,
    pub active: bool,
    pub location: Option<String>,
    pub model: Option<String>,
}

/// Partial robot update.
///
/// `location` and `model` are doubly optional: `Some(None)` clears the field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RobotPatch {
    pub name: Option<String>,
    pub status: Option<RobotStatus>,
    pub battery: Option<u8>,
    pub last_activity: Option<DateTime<Utc>>,
    pub active: Option<bool>,
    pub location: Option<Option<String>>,
    pub model: Option<Option<String>>,
}

impl Robot {
    pub fn is_operating(&self) -> bool {
        self.status == RobotStatus::InOperation
    }
}

impl Entity for Robot {
    type Draft = RobotDraft;
    type Patch = RobotPatch;

    const COLLECTION: &'static str = "aspersax_robots";
    const ENTITY_NAME: &'static str = "robot";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: RobotDraft) -> Self {
        Self {
            id,
            name: draft.name,
            status: draft.status,
            battery: draft.battery,
            last_activity: draft.last_activity,
            active: draft.active,
            location: draft.location,
            model: draft.model,
        }
    }

    fn apply_patch(&mut self, patch: RobotPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(battery) = patch.battery {
            self.battery = battery;
        }
        if let Some(last_activity) = patch.last_activity {
            self.last_activity = last_activity;
        }
        if let Some(active) = patch.active {
            self.active = active;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(model) = patch.model {
            self.model = model;
        }
    }
}
