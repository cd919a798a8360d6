//! Dashboard aggregates computed from the raw collections.
//!
//! Everything here is a pure fold over a [`FleetSnapshot`]; nothing is cached,
//! so the numbers always reflect the collections at call time.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::jornada::Jornada;
use crate::maleza::{Maleza, MalezaStatus};
use crate::robot::Robot;
use crate::tank::Tank;

/// Borrowed view over the four collections at one point in time.
#[derive(Debug, Clone, Copy)]
pub struct FleetSnapshot<'a> {
    pub robots: &'a [Robot],
    pub tanks: &'a [Tank],
    pub jornadas: &'a [Jornada],
    pub malezas: &'a [Maleza],
}

/// Headline numbers shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_robots: usize,
    /// Robots currently in operation.
    pub robots_activos: usize,
    pub total_tanques: usize,
    /// Tanks that are active and not empty.
    pub tanques_en_uso: usize,
    pub total_malezas: usize,
    /// Weeds still in the detected state.
    pub malezas_detectadas: usize,
    /// Hectares covered across all jornadas.
    pub area_cubierta: f64,
    /// Liters of herbicide used across all jornadas.
    pub herbicida_usado: f64,
}

impl DashboardStats {
    pub fn from_snapshot(snapshot: &FleetSnapshot<'_>) -> Self {
        Self {
            total_robots: snapshot.robots.len(),
            robots_activos: snapshot.robots.iter().filter(|r| r.is_operating()).count(),
            total_tanques: snapshot.tanks.len(),
            tanques_en_uso: snapshot.tanks.iter().filter(|t| t.is_in_use()).count(),
            total_malezas: snapshot.malezas.len(),
            malezas_detectadas: snapshot
                .malezas
                .iter()
                .filter(|m| m.status == MalezaStatus::Detected)
                .count(),
            area_cubierta: snapshot.jornadas.iter().map(|j| j.area_covered).sum(),
            herbicida_usado: snapshot.jornadas.iter().map(|j| j.herbicide_used).sum(),
        }
    }
}

/// Activity for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityPoint {
    pub fecha: NaiveDate,
    /// Number of jornadas run that day.
    pub robots: usize,
    /// Weeds detected across those jornadas.
    pub malezas: u64,
}

/// Iterates the days of `[start, end]` in ascending order.
pub(crate) fn days_between(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start), |day| day.checked_add_days(Days::new(1)))
        .take_while(move |day| *day <= end)
}

/// One point per day of `[start, end]`, empty when `start > end`.
pub fn activity_between(jornadas: &[Jornada], start: NaiveDate, end: NaiveDate) -> Vec<ActivityPoint> {
    days_between(start, end)
        .map(|fecha| {
            let of_day = jornadas.iter().filter(|j| j.date == fecha);
            let (robots, malezas) = of_day.fold((0usize, 0u64), |(count, weeds), j| {
                (count + 1, weeds + u64::from(j.weeds_detected))
            });
            ActivityPoint {
                fecha,
                robots,
                malezas,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::Seed;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_stats_over_default_dataset() {
        let seed = Seed::default_dataset();
        let snapshot = FleetSnapshot {
            robots: &seed.robots,
            tanks: &seed.tanks,
            jornadas: &seed.jornadas,
            malezas: &seed.malezas,
        };

        let stats = DashboardStats::from_snapshot(&snapshot);

        assert_eq!(stats.total_robots, 10);
        assert_eq!(stats.robots_activos, 3);
        assert_eq!(stats.total_tanques, 6);
        assert_eq!(stats.tanques_en_uso, 5);
        assert_eq!(stats.total_malezas, 12);
        assert_eq!(stats.malezas_detectadas, 3);
        assert!((stats.area_cubierta - 153.9).abs() < 1e-9);
        assert!((stats.herbicida_usado - 486.0).abs() < 1e-9);
    }

    #[test]
    fn test_stats_on_empty_fleet() {
        let snapshot = FleetSnapshot {
            robots: &[],
            tanks: &[],
            jornadas: &[],
            malezas: &[],
        };
        let stats = DashboardStats::from_snapshot(&snapshot);
        assert_eq!(stats.total_robots, 0);
        assert_eq!(stats.area_cubierta, 0.0);
    }

    #[test]
    fn test_activity_covers_every_day_in_range() {
        let seed = Seed::default_dataset();
        let points = activity_between(&seed.jornadas, date(2025, 8, 22), date(2025, 8, 27));

        assert_eq!(points.len(), 6);
        assert_eq!(points[0].fecha, date(2025, 8, 22));
        assert_eq!(points[0].robots, 0);
        assert_eq!(points[1].robots, 2);
        assert_eq!(points[1].malezas, 412 + 203);
        assert_eq!(points[5].fecha, date(2025, 8, 27));
        assert_eq!(points[5].malezas, 342 + 198);
    }

    #[test]
    fn test_activity_with_inverted_range_is_empty() {
        let seed = Seed::default_dataset();
        assert!(activity_between(&seed.jornadas, date(2025, 8, 27), date(2025, 8, 20)).is_empty());
    }
}
