//! Store-backed commands. Each prints JSON on stdout.

use anyhow::{Result, bail};
use chrono::{Days, NaiveDate, Utc};
use serde::Serialize;
use std::sync::Arc;

use aspersax_core::jornada::Jornada;
use aspersax_core::maleza::Maleza;
use aspersax_core::report::ReportFilter;
use aspersax_core::robot::Robot;
use aspersax_core::tank::Tank;
use aspersax_core::{AppConfig, EntityStore, KeyValueStore, MemoryStorage, Seed};
use aspersax_infrastructure::{AspersaxPaths, JsonDirStorage};

use crate::EntityKind;

/// Opens the store over the configured data directory.
///
/// Falls back to memory-only storage when the directory cannot be used.
fn open_store(config: &AppConfig) -> Result<EntityStore> {
    let dir = match &config.data_dir {
        Some(dir) => dir.clone(),
        None => AspersaxPaths::data_dir()?,
    };

    let storage: Arc<dyn KeyValueStore> = match JsonDirStorage::new(&dir) {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            tracing::warn!(
                "[CLI] Cannot use data directory {} ({}), running in memory only",
                dir.display(),
                e
            );
            Arc::new(MemoryStorage::new())
        }
    };

    Ok(EntityStore::open(storage))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn stats(config: &AppConfig) -> Result<()> {
    let store = open_store(config)?;
    print_json(&store.aggregate_stats())
}

pub fn list(config: &AppConfig, kind: EntityKind) -> Result<()> {
    let store = open_store(config)?;
    match kind {
        EntityKind::Robots => print_json(&store.list::<Robot>()),
        EntityKind::Tanks => print_json(&store.list::<Tank>()),
        EntityKind::Jornadas => print_json(&store.list::<Jornada>()),
        EntityKind::Malezas => print_json(&store.list::<Maleza>()),
    }
}

pub fn activity(config: &AppConfig, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<()> {
    let end = to.unwrap_or_else(|| Utc::now().date_naive());
    let start = from.unwrap_or_else(|| end.checked_sub_days(Days::new(6)).unwrap_or(end));

    let store = open_store(config)?;
    print_json(&store.activity_between(start, end))
}

pub fn report(
    config: &AppConfig,
    robot_id: Option<u32>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<()> {
    let store = open_store(config)?;
    let filter = ReportFilter { robot_id, from, to };
    print_json(&store.build_report(&filter, &config.costs))
}

pub fn reset(config: &AppConfig, empty: bool) -> Result<()> {
    let mut store = open_store(config)?;
    let seed = if empty {
        Seed::empty()
    } else {
        Seed::default_dataset()
    };

    store.reset_to_seed(seed);
    if store.is_degraded() {
        bail!("reset applied in memory only, storage rejected the write");
    }

    print_json(&store.aggregate_stats())
}
