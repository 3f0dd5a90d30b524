use serde::{Deserialize, Serialize};

use crate::core::{ChartPoint, OccupancyChart};
use crate::error::{DashboardError, DashboardResult};
use crate::payload::{AlertEvent, EntryRecord};
use crate::render::Surface;

use super::{Dashboard, DemographicsView, Pager};

pub const DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Everything a surface needs to draw one frame of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub live_occupancy: i64,
    pub footfall: i64,
    pub dwell_time: String,
    pub occupancy_chart: Option<OccupancyChart>,
    pub hovered_point: Option<ChartPoint>,
    pub demographics: DemographicsView,
    pub entries: Vec<EntryRecord>,
    pub pager: Pager,
    pub total_pages: u32,
    pub visible_pages: Vec<u32>,
    pub alerts: Vec<AlertEvent>,
    pub unread_alerts: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: DashboardSnapshot,
}

impl DashboardSnapshot {
    /// Rejects geometry no surface can draw: non-finite coordinates or paths
    /// that do not start with a move command.
    pub fn validate(&self) -> DashboardResult<()> {
        if let Some(chart) = &self.occupancy_chart {
            for point in &chart.points {
                if !point.x.is_finite() || !point.y.is_finite() {
                    return Err(DashboardError::InvalidData(format!(
                        "chart point `{}` has non-finite coordinates",
                        point.time
                    )));
                }
            }
            if !chart.live_x.is_finite() {
                return Err(DashboardError::InvalidData(
                    "live marker x must be finite".to_owned(),
                ));
            }
            for (name, path) in [("line", &chart.line_path), ("fill", &chart.fill_path)] {
                validate_path(name, path)?;
            }
        }
        validate_path("male trend", &self.demographics.trend.male_path)?;
        validate_path("female trend", &self.demographics.trend.female_path)?;
        Ok(())
    }

    pub fn to_json_contract_v1_pretty(&self) -> DashboardResult<String> {
        let payload = DashboardSnapshotJsonContractV1 {
            schema_version: DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            DashboardError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts both a bare snapshot and a versioned contract.
    pub fn from_json_compat_str(input: &str) -> DashboardResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<DashboardSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: DashboardSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                DashboardError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(DashboardError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

fn validate_path(name: &str, path: &str) -> DashboardResult<()> {
    if !path.starts_with('M') || path.contains("NaN") || path.contains("inf") {
        return Err(DashboardError::InvalidData(format!(
            "{name} path is not drawable: `{path}`"
        )));
    }
    Ok(())
}

impl<S: Surface> Dashboard<S> {
    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            live_occupancy: self.live_occupancy,
            footfall: self.footfall,
            dwell_time: self.dwell_time.clone(),
            occupancy_chart: self.occupancy_chart.clone(),
            hovered_point: self.hovered_point().cloned(),
            demographics: self.demographics.clone(),
            entries: self.entries.clone(),
            pager: self.pager,
            total_pages: self.pager.total_pages(),
            visible_pages: self.visible_pages(),
            alerts: self.alerts.iter().cloned().collect(),
            unread_alerts: self.alerts.has_unread(),
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> DashboardResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }

    /// Hands the current snapshot to the surface.
    pub fn render(&mut self) -> DashboardResult<()> {
        let snapshot = self.snapshot();
        self.surface.present(&snapshot)
    }
}
