//! Fixed default dataset used when storage holds nothing for a collection.
//!
//! Session 1 and 7 reference robot 1 under an older name ("AgroBot Sentinel
//! X1"); jornada robot names are snapshots and are left as recorded.

use chrono::{DateTime, NaiveDate, Utc};

use crate::jornada::{Jornada, JornadaStatus};
use crate::maleza::{InfestationLevel, Maleza, MalezaStatus};
use crate::robot::{Robot, RobotStatus};
use crate::tank::Tank;
use crate::timestamp;

/// Initial contents for the four collections.
#[derive(Debug, Clone, Default)]
pub struct Seed {
    pub robots: Vec<Robot>,
    pub tanks: Vec<Tank>,
    pub jornadas: Vec<Jornada>,
    pub malezas: Vec<Maleza>,
}

fn at(raw: &str) -> DateTime<Utc> {
    timestamp::parse(raw).unwrap_or_default()
}

fn day(date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn robot(
    id: u32,
    name: &str,
    status: RobotStatus,
    battery: u8,
    last_activity: &str,
    active: bool,
    location: &str,
    model: &str,
) -> Robot {
    Robot {
        id,
        name: name.to_string(),
        status,
        battery,
        last_activity: at(last_activity),
        active,
        location: Some(location.to_string()),
        model: Some(model.to_string()),
    }
}

#[allow(clippy::too_many_arguments)]
fn jornada(
    id: u32,
    date: &str,
    robot_id: u32,
    robot_name: &str,
    area_covered: f64,
    weeds_detected: u32,
    herbicide_used: f64,
    duration_minutes: u32,
    status: JornadaStatus,
) -> Jornada {
    Jornada {
        id,
        date: day(date),
        robot_id,
        robot_name: robot_name.to_string(),
        area_covered,
        weeds_detected,
        herbicide_used,
        duration_minutes,
        status,
    }
}

#[allow(clippy::too_many_arguments)]
fn maleza(
    id: u32,
    species: &str,
    x: f64,
    y: f64,
    detected_at: &str,
    status: MalezaStatus,
    detected_by: &str,
    infestation: InfestationLevel,
) -> Maleza {
    Maleza {
        id,
        species: species.to_string(),
        x,
        y,
        detected_at: at(detected_at),
        status,
        detected_by: detected_by.to_string(),
        infestation,
    }
}

impl Seed {
    /// No records at all; ids start at 1.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The demo fleet the console ships with.
    pub fn default_dataset() -> Self {
        use InfestationLevel as Lvl;
        use JornadaStatus as J;
        use MalezaStatus as M;
        use RobotStatus as R;

        let robots = vec![
            robot(1, "Robot-001", R::InOperation, 85, "2024-01-15T10:30:00", true, "Sector A", "AgriBot Pro"),
            robot(2, "WeedHunter Pro Max", R::Available, 92, "2025-08-27T11:30:00", true, "Estación de Carga Principal", "WHP-3000"),
            robot(3, "SprayMaster Elite", R::InMaintenance, 23, "2025-08-26T16:20:00", true, "Taller de Mantenimiento", "SME-2023"),
            robot(4, "CropGuardian V2", R::InOperation, 78, "2025-08-27T14:15:00", true, "Campo Sur - Lote 22B", "CGV2-2024"),
            robot(5, "AgriBot Precision", R::Available, 95, "2025-08-27T09:45:00", true, "Base Operativa Este", "ABP-2024"),
            robot(6, "FieldScanner Alpha", R::InOperation, 65, "2025-08-27T14:00:00", true, "Campo Oeste - Lote 8C", "FSA-2023"),
            robot(7, "HerbicideBot Pro", R::InMaintenance, 41, "2025-08-26T14:30:00", false, "Taller de Reparaciones", "HBP-2022"),
            robot(8, "SmartSprayer X3", R::Available, 88, "2025-08-27T12:00:00", true, "Almacén Central", "SSX3-2024"),
            robot(9, "Aspersax01", R::InMaintenance, 50, "2025-08-28T12:03:42", true, "Taller de Mantenimiento", "ASX-2024"),
            robot(10, "Robot Test", R::OutOfService, 0, "2025-08-28T12:07:07", false, "Almacén", "RT-2024"),
        ];

        let tanks = vec![
            Tank::new(1, "Tanque Principal Norte", 2500.0, 1875.0, "Glifosato 48% SL", at("2025-08-27T06:30:00"), true),
            Tank::new(2, "Tanque Selectivo Sur", 1800.0, 720.0, "2,4-D Amina 72%", at("2025-08-26T14:15:00"), true),
            Tank::new(3, "Tanque Preemergente Este", 1200.0, 240.0, "Atrazina 50% SC", at("2025-08-25T09:45:00"), true),
            Tank::new(4, "Tanque Residual Oeste", 800.0, 560.0, "Pendimetalina 33% EC", at("2025-08-26T11:20:00"), true),
            Tank::new(5, "Tanque Emergencia Central", 1500.0, 0.0, "Dicamba 48% SL", at("2025-08-22T16:00:00"), false),
            Tank::new(6, "Tanque Sistémico A", 2000.0, 1600.0, "Glufosinato 20% SL", at("2025-08-27T07:45:00"), true),
        ];

        let jornadas = vec![
            jornada(1, "2025-08-27", 1, "AgroBot Sentinel X1", 15.7, 342, 47.3, 285, J::Completed),
            jornada(2, "2025-08-27", 4, "CropGuardian V2", 12.4, 198, 35.8, 220, J::InProgress),
            jornada(3, "2025-08-26", 6, "FieldScanner Alpha", 18.9, 456, 62.1, 315, J::Completed),
            jornada(4, "2025-08-26", 2, "WeedHunter Pro Max", 9.8, 127, 28.4, 195, J::Completed),
            jornada(5, "2025-08-25", 8, "SmartSprayer X3", 21.3, 589, 78.9, 380, J::Completed),
            jornada(6, "2025-08-25", 5, "AgriBot Precision", 14.2, 234, 41.7, 265, J::Completed),
            jornada(7, "2025-08-24", 1, "AgroBot Sentinel X1", 16.5, 298, 52.3, 295, J::Completed),
            jornada(8, "2025-08-24", 4, "CropGuardian V2", 11.7, 176, 33.2, 210, J::Paused),
            jornada(9, "2025-08-23", 6, "FieldScanner Alpha", 19.8, 412, 67.4, 340, J::Completed),
            jornada(10, "2025-08-23", 2, "WeedHunter Pro Max", 13.6, 203, 38.9, 245, J::Completed),
        ];

        let malezas = vec![
            maleza(1, "Amaranthus retroflexus (Yuyo Colorado)", 234.7, 156.2, "2025-08-27T09:15:00", M::Detected, "AgroBot Sentinel X1", Lvl::High),
            maleza(2, "Sorghum halepense (Sorgo de Alepo)", 187.3, 298.4, "2025-08-27T10:30:00", M::Treated, "CropGuardian V2", Lvl::High),
            maleza(3, "Digitaria sanguinalis (Pata de Gallina)", 345.8, 89.7, "2025-08-26T14:45:00", M::Eliminated, "FieldScanner Alpha", Lvl::Medium),
            maleza(4, "Portulaca oleracea (Verdolaga)", 412.1, 203.6, "2025-08-26T11:20:00", M::Treated, "WeedHunter Pro Max", Lvl::Medium),
            maleza(5, "Chenopodium album (Quinoa Silvestre)", 156.9, 367.2, "2025-08-25T16:10:00", M::Eliminated, "SmartSprayer X3", Lvl::Low),
            maleza(6, "Cynodon dactylon (Gramilla)", 289.4, 134.8, "2025-08-25T13:25:00", M::Detected, "AgriBot Precision", Lvl::High),
            maleza(7, "Taraxacum officinale (Diente de León)", 98.7, 245.3, "2025-08-24T15:40:00", M::Eliminated, "AgroBot Sentinel X1", Lvl::Low),
            maleza(8, "Echinochloa crus-galli (Capín)", 367.2, 178.9, "2025-08-24T12:15:00", M::Treated, "CropGuardian V2", Lvl::High),
            maleza(9, "Setaria viridis (Cola de Zorro Verde)", 203.5, 312.7, "2025-08-23T17:30:00", M::Eliminated, "FieldScanner Alpha", Lvl::Medium),
            maleza(10, "Convolvulus arvensis (Correhuela)", 445.1, 267.4, "2025-08-23T14:50:00", M::Detected, "WeedHunter Pro Max", Lvl::Medium),
            maleza(11, "Rumex crispus (Lengua de Vaca)", 134.6, 398.2, "2025-08-22T10:25:00", M::Eliminated, "SmartSprayer X3", Lvl::Low),
            maleza(12, "Polygonum aviculare (Sanguinaria)", 321.8, 87.6, "2025-08-22T08:40:00", M::Treated, "AgriBot Precision", Lvl::High),
        ];

        Self {
            robots,
            tanks,
            jornadas,
            malezas,
        }
    }
}
