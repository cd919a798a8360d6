//! Maleza (detected weed) domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId};

/// Treatment status of a detected weed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MalezaStatus {
    #[serde(rename = "Detectada")]
    Detected,
    #[serde(rename = "Tratada", alias = "En Tratamiento")]
    Treated,
    #[serde(rename = "Eliminada")]
    Eliminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InfestationLevel {
    #[serde(rename = "Bajo")]
    Low,
    #[serde(rename = "Medio")]
    Medium,
    #[serde(rename = "Alto")]
    High,
}

/// A weed detected in the field.
///
/// `detected_by` is the detecting robot's name as a plain string, not a
/// reference into the robot collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maleza {
    #[serde(rename = "id_maleza")]
    pub id: EntityId,
    /// Species label.
    #[serde(rename = "tipo")]
    pub species: String,
    #[serde(rename = "ubicacion_x")]
    pub x: f64,
    #[serde(rename = "ubicacion_y")]
    pub y: f64,
    #[serde(rename = "fecha_deteccion", deserialize_with = "crate::timestamp::deserialize")]
    pub detected_at: DateTime<Utc>,
    #[serde(rename = "estado")]
    pub status: MalezaStatus,
    #[serde(rename = "robot_detector")]
    pub detected_by: String,
    #[serde(rename = "nivel_infestacion")]
    pub infestation: InfestationLevel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MalezaDraft {
    pub species: String,
    pub x: f64,
    pub y: f64,
    pub detected_at: DateTime<Utc>,
    pub status: MalezaStatus,
    pub detected_by: String,
    pub infestation: InfestationLevel,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MalezaPatch {
    pub species: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub detected_at: Option<DateTime<Utc>>,
    pub status: Option<MalezaStatus>,
    pub detected_by: Option<String>,
    pub infestation: Option<InfestationLevel>,
}

impl Entity for Maleza {
    type Draft = MalezaDraft;
    type Patch = MalezaPatch;

    const COLLECTION: &'static str = "aspersax_malezas";
    const ENTITY_NAME: &'static str = "maleza";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: MalezaDraft) -> Self {
        Self {
            id,
            species: draft.species,
            x: draft.x,
            y: draft.y,
            detected_at: draft.detected_at,
            status: draft.status,
            detected_by: draft.detected_by,
            infestation: draft.infestation,
        }
    }

    fn apply_patch(&mut self, patch: MalezaPatch) {
        if let Some(species) = patch.species {
            self.species = species;
        }
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(detected_at) = patch.detected_at {
            self.detected_at = detected_at;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(detected_by) = patch.detected_by {
            self.detected_by = detected_by;
        }
        if let Some(infestation) = patch.infestation {
            self.infestation = infestation;
        }
    }
}
