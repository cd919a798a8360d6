//! The entity store persisting through a real data directory.

use std::sync::Arc;

use aspersax_core::jornada::{Jornada, JornadaDraft, JornadaStatus};
use aspersax_core::robot::{Robot, RobotPatch, RobotStatus};
use aspersax_core::tank::{Tank, TankPatch, TankStatus};
use aspersax_core::{EntityStore, Seed};
use aspersax_infrastructure::JsonDirStorage;
use chrono::NaiveDate;
use tempfile::TempDir;

fn open(dir: &TempDir) -> EntityStore {
    EntityStore::open(Arc::new(JsonDirStorage::new(dir.path()).unwrap()))
}

#[test]
fn test_mutations_survive_restart() {
    let temp_dir = TempDir::new().unwrap();
    {
        let mut store = open(&temp_dir);
        store.update::<Robot>(
            3,
            RobotPatch {
                status: Some(RobotStatus::Available),
                battery: Some(100),
                ..Default::default()
            },
        );
        store.update::<Tank>(
            1,
            TankPatch {
                level: Some(100.0),
                ..Default::default()
            },
        );
        let _: Jornada = store.add(JornadaDraft {
            date: NaiveDate::from_ymd_opt(2025, 8, 28).unwrap(),
            robot_id: 3,
            robot_name: String::new(),
            area_covered: 7.5,
            weeds_detected: 90,
            herbicide_used: 20.0,
            duration_minutes: 120,
            status: JornadaStatus::Completed,
        });
    }

    let store = open(&temp_dir);

    let robot = store.get::<Robot>(3).unwrap();
    assert_eq!(robot.status, RobotStatus::Available);
    assert_eq!(robot.battery, 100);
    assert_eq!(store.get::<Tank>(1).unwrap().status(), TankStatus::Low);
    let jornada = store.get::<Jornada>(11).unwrap();
    assert_eq!(jornada.robot_name, "SprayMaster Elite");
    assert!(!store.is_degraded());
}

#[test]
fn test_files_use_wire_field_names() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open(&temp_dir);
    store.delete::<Robot>(10);

    let raw = std::fs::read_to_string(temp_dir.path().join("aspersax_robots.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(json[0]["id_robot"], 1);
    assert_eq!(json[0]["estado"], "En Operación");
    assert_eq!(json.as_array().unwrap().len(), 9);
}

#[test]
fn test_corrupted_file_only_resets_its_collection() {
    let temp_dir = TempDir::new().unwrap();
    {
        let mut store = open(&temp_dir);
        store.delete::<Robot>(1);
        store.delete::<Tank>(1);
    }
    std::fs::write(temp_dir.path().join("aspersax_tanques.json"), "[{\"id_tanque\":").unwrap();

    let store = open(&temp_dir);

    assert_eq!(store.count::<Robot>(), 9);
    assert_eq!(store.count::<Tank>(), 6);
}

#[test]
fn test_reset_writes_every_collection() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open(&temp_dir);

    store.reset_to_seed(Seed::default_dataset());

    for key in [
        "aspersax_robots",
        "aspersax_tanques",
        "aspersax_jornadas",
        "aspersax_malezas",
    ] {
        assert!(temp_dir.path().join(format!("{}.json", key)).exists(), "{}", key);
    }
}
