//! Report data assembled for the reports page and its PDF/Excel exporters.
//!
//! The exporters only lay out bytes; every number they print comes from
//! [`build_report`].

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::entity::EntityId;
use crate::jornada::Jornada;
use crate::maleza::MalezaStatus;
use crate::robot::RobotStatus;
use crate::stats::{FleetSnapshot, days_between};
use crate::tank::TankStatus;

/// Length of the trend series when the filter gives no start date.
const DEFAULT_TREND_DAYS: u64 = 7;

/// Which jornadas and robots a report covers. Every bound is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportFilter {
    pub robot_id: Option<EntityId>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ReportFilter {
    fn matches(&self, jornada: &Jornada) -> bool {
        self.robot_id.is_none_or(|id| jornada.robot_id == id)
            && self.from.is_none_or(|from| jornada.date >= from)
            && self.to.is_none_or(|to| jornada.date <= to)
    }
}

/// Unit costs used for the cost breakdown, in local currency (COP).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostRates {
    pub herbicide_per_liter: f64,
    pub energy_per_hour: f64,
    pub maintenance_per_robot: f64,
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            herbicide_per_liter: 12_500.0,
            energy_per_hour: 3_200.0,
            maintenance_per_robot: 250_000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductivityRow {
    pub fecha: NaiveDate,
    pub robot: String,
    pub area: f64,
    pub malezas: u32,
    pub herbicida: f64,
    /// Hectares per hour.
    pub eficiencia: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemStatus {
    pub robots_activos: usize,
    pub robots_mantenimiento: usize,
    pub tanques_llenos: usize,
    pub tanques_bajos: usize,
    pub malezas_detectadas: usize,
    pub malezas_tratadas: usize,
    pub malezas_eliminadas: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub fecha: NaiveDate,
    pub jornadas: usize,
    pub area: f64,
    pub malezas: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub herbicida: f64,
    pub energia: f64,
    pub mantenimiento: f64,
    pub total: f64,
}

/// Everything the reports page and the exporters need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub filter: ReportFilter,
    pub productividad: Vec<ProductivityRow>,
    pub estado_sistema: SystemStatus,
    pub tendencias: Vec<TrendPoint>,
    pub costos: CostBreakdown,
}

/// Builds a report over the snapshot.
///
/// When `filter.robot_id` is set, robot counts, maintenance costs and weed
/// counts are restricted to that robot (weeds by `robot_detector` name). Tank
/// counts always cover the whole fleet.
pub fn build_report(snapshot: &FleetSnapshot<'_>, filter: &ReportFilter, rates: &CostRates) -> Report {
    let jornadas: Vec<&Jornada> = snapshot.jornadas.iter().filter(|j| filter.matches(j)).collect();

    let robots_in_scope: Vec<_> = snapshot
        .robots
        .iter()
        .filter(|r| filter.robot_id.is_none_or(|id| r.id == id))
        .collect();

    let selected_name = filter
        .robot_id
        .and_then(|id| snapshot.robots.iter().find(|r| r.id == id))
        .map(|r| r.name.as_str());

    let malezas: Vec<_> = snapshot
        .malezas
        .iter()
        .filter(|m| selected_name.is_none_or(|name| m.detected_by == name))
        .collect();

    let productividad = jornadas
        .iter()
        .map(|j| ProductivityRow {
            fecha: j.date,
            robot: j.robot_name.clone(),
            area: j.area_covered,
            malezas: j.weeds_detected,
            herbicida: j.herbicide_used,
            eficiencia: j.efficiency(),
        })
        .collect();

    let count_robots = |status: RobotStatus| robots_in_scope.iter().filter(|r| r.status == status).count();
    let count_tanks = |status: TankStatus| snapshot.tanks.iter().filter(|t| t.status() == status).count();
    let count_weeds = |status: MalezaStatus| malezas.iter().filter(|m| m.status == status).count();

    let estado_sistema = SystemStatus {
        robots_activos: count_robots(RobotStatus::InOperation),
        robots_mantenimiento: count_robots(RobotStatus::InMaintenance),
        tanques_llenos: count_tanks(TankStatus::Full),
        tanques_bajos: count_tanks(TankStatus::Low),
        malezas_detectadas: count_weeds(MalezaStatus::Detected),
        malezas_tratadas: count_weeds(MalezaStatus::Treated),
        malezas_eliminadas: count_weeds(MalezaStatus::Eliminated),
    };

    let tendencias = trend(snapshot.jornadas, filter);

    let liters: f64 = jornadas.iter().map(|j| j.herbicide_used).sum();
    let minutes: u64 = jornadas.iter().map(|j| u64::from(j.duration_minutes)).sum();
    let herbicida = liters * rates.herbicide_per_liter;
    let energia = minutes as f64 / 60.0 * rates.energy_per_hour;
    let mantenimiento = robots_in_scope.len() as f64 * rates.maintenance_per_robot;

    Report {
        filter: filter.clone(),
        productividad,
        estado_sistema,
        tendencias,
        costos: CostBreakdown {
            herbicida,
            energia,
            mantenimiento,
            total: herbicida + energia + mantenimiento,
        },
    }
}

/// Daily series over the filter range.
///
/// The range ends at `filter.to`, or at the latest matching jornada, and starts
/// at `filter.from` or seven days before the end.
fn trend(all: &[Jornada], filter: &ReportFilter) -> Vec<TrendPoint> {
    let by_robot: Vec<&Jornada> = all
        .iter()
        .filter(|j| filter.robot_id.is_none_or(|id| j.robot_id == id))
        .collect();

    let Some(end) = filter.to.or_else(|| by_robot.iter().map(|j| j.date).max()) else {
        return Vec::new();
    };
    let start = filter.from.unwrap_or_else(|| {
        end.checked_sub_days(Days::new(DEFAULT_TREND_DAYS - 1))
            .unwrap_or(end)
    });

    days_between(start, end)
        .map(|fecha| {
            let of_day: Vec<_> = by_robot.iter().filter(|j| j.date == fecha).collect();
            TrendPoint {
                fecha,
                jornadas: of_day.len(),
                area: of_day.iter().map(|j| j.area_covered).sum(),
                malezas: of_day.iter().map(|j| u64::from(j.weeds_detected)).sum(),
            }
        })
        .collect()
}
