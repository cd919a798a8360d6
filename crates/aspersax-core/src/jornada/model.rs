//! Jornada (work session) domain model.
//!
//! A jornada is one robot work run. It references its robot by id and keeps a
//! snapshot of the robot's name taken when the jornada is created or edited.
//! Later robot renames do not rewrite old snapshots.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId};
use crate::robot::Robot;

/// Lifecycle status of a jornada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JornadaStatus {
    #[serde(rename = "Programada")]
    Scheduled,
    #[serde(rename = "En Progreso")]
    InProgress,
    #[serde(rename = "Pausada")]
    Paused,
    #[serde(rename = "Completada")]
    Completed,
    #[serde(rename = "Cancelada")]
    Cancelled,
}

/// A single robot work session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jornada {
    #[serde(rename = "id_jornada")]
    pub id: EntityId,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    pub robot_id: EntityId,
    #[serde(rename = "robot_nombre")]
    pub robot_name: String,
    /// Covered area in hectares.
    #[serde(rename = "area_cubierta")]
    pub area_covered: f64,
    #[serde(rename = "malezas_detectadas")]
    pub weeds_detected: u32,
    /// Herbicide used in liters.
    #[serde(rename = "herbicida_usado")]
    pub herbicide_used: f64,
    /// Duration in minutes.
    #[serde(rename = "duracion")]
    pub duration_minutes: u32,
    #[serde(rename = "estado")]
    pub status: JornadaStatus,
}

/// Form data for creating a jornada.
///
/// `robot_name` is only used when `robot_id` does not match a known robot;
/// otherwise the store snapshots the robot's current name.
#[derive(Debug, Clone, PartialEq)]
pub struct JornadaDraft {
    pub date: NaiveDate,
    pub robot_id: EntityId,
    pub robot_name: String,
    pub area_covered: f64,
    pub weeds_detected: u32,
    pub herbicide_used: f64,
    pub duration_minutes: u32,
    pub status: JornadaStatus,
}

/// Partial jornada update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JornadaPatch {
    pub date: Option<NaiveDate>,
    pub robot_id: Option<EntityId>,
    pub area_covered: Option<f64>,
    pub weeds_detected: Option<u32>,
    pub herbicide_used: Option<f64>,
    pub duration_minutes: Option<u32>,
    pub status: Option<JornadaStatus>,
}

impl Jornada {
    /// Hectares per hour, rounded to two decimals. 0 for a zero duration.
    pub fn efficiency(&self) -> f64 {
        if self.duration_minutes == 0 {
            return 0.0;
        }
        let per_hour = self.area_covered / f64::from(self.duration_minutes) * 60.0;
        (per_hour * 100.0).round() / 100.0
    }
}

impl Entity for Jornada {
    type Draft = JornadaDraft;
    type Patch = JornadaPatch;

    const COLLECTION: &'static str = "aspersax_jornadas";
    const ENTITY_NAME: &'static str = "jornada";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: JornadaDraft) -> Self {
        Self {
            id,
            date: draft.date,
            robot_id: draft.robot_id,
            robot_name: draft.robot_name,
            area_covered: draft.area_covered,
            weeds_detected: draft.weeds_detected,
            herbicide_used: draft.herbicide_used,
            duration_minutes: draft.duration_minutes,
            status: draft.status,
        }
    }

    fn apply_patch(&mut self, patch: JornadaPatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(robot_id) = patch.robot_id {
            self.robot_id = robot_id;
        }
        if let Some(area_covered) = patch.area_covered {
            self.area_covered = area_covered;
        }
        if let Some(weeds_detected) = patch.weeds_detected {
            self.weeds_detected = weeds_detected;
        }
        if let Some(herbicide_used) = patch.herbicide_used {
            self.herbicide_used = herbicide_used;
        }
        if let Some(duration_minutes) = patch.duration_minutes {
            self.duration_minutes = duration_minutes;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    fn snapshot_references(&mut self, robots: &[Robot]) {
        if let Some(robot) = robots.iter().find(|r| r.id == self.robot_id) {
            self.robot_name = robot.name.clone();
        }
    }
}
