use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    BucketWindow, ChartPoint, DemographicSplit, DemographicTrend, OccupancyChart,
};
use crate::error::DashboardResult;
use crate::payload::{EntryRecord, MISSING_TEXT};
use crate::render::Surface;

use super::{AlertFeed, DashboardConfig, Pager};

/// Donut split plus trend lines, replaced together on each demographics update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicsView {
    pub split: DemographicSplit,
    pub trend: DemographicTrend,
}

/// Single-site dashboard state.
///
/// Every update decodes, recomputes and stores a fresh derived value. Updates
/// run synchronously in call order; the last call wins. Geometry that cannot
/// be computed leaves the previous value in place.
pub struct Dashboard<S: Surface> {
    pub(super) surface: S,
    pub(super) config: DashboardConfig,
    pub(super) buckets: BucketWindow,
    pub(super) live_occupancy: i64,
    pub(super) occupancy_chart: Option<OccupancyChart>,
    pub(super) hover_x: Option<f64>,
    pub(super) footfall: i64,
    pub(super) dwell_time: String,
    pub(super) demographics: DemographicsView,
    pub(super) entries: Vec<EntryRecord>,
    pub(super) pager: Pager,
    pub(super) alerts: AlertFeed,
}

impl<S: Surface> Dashboard<S> {
    pub fn new(surface: S, config: DashboardConfig) -> DashboardResult<Self> {
        config.validate()?;

        let demographics = DemographicsView {
            split: DemographicSplit::from_counts(0.0, 0.0, config.donut_circumference),
            trend: DemographicTrend::fallback(&config.demographic_trend),
        };
        debug!(
            site_id = %config.site_id,
            mode = ?config.occupancy_chart.mode,
            bucket_capacity = config.bucket_capacity,
            "dashboard initialized"
        );

        Ok(Self {
            surface,
            buckets: BucketWindow::new(config.bucket_capacity, config.bucket_retention_ms),
            live_occupancy: 0,
            occupancy_chart: None,
            hover_x: None,
            footfall: 0,
            dwell_time: MISSING_TEXT.to_owned(),
            demographics,
            entries: Vec::new(),
            pager: Pager::new(config.entries_per_page),
            alerts: AlertFeed::new(config.alert_capacity),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn live_occupancy(&self) -> i64 {
        self.live_occupancy
    }

    #[must_use]
    pub fn occupancy_chart(&self) -> Option<&OccupancyChart> {
        self.occupancy_chart.as_ref()
    }

    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn footfall(&self) -> i64 {
        self.footfall
    }

    #[must_use]
    pub fn dwell_time(&self) -> &str {
        &self.dwell_time
    }

    #[must_use]
    pub fn demographics(&self) -> &DemographicsView {
        &self.demographics
    }

    #[must_use]
    pub fn entries(&self) -> &[EntryRecord] {
        &self.entries
    }

    #[must_use]
    pub fn pager(&self) -> Pager {
        self.pager
    }

    #[must_use]
    pub fn alerts(&self) -> &AlertFeed {
        &self.alerts
    }

    /// Point under the last hover position, resolved against the current chart.
    #[must_use]
    pub fn hovered_point(&self) -> Option<&ChartPoint> {
        let x = self.hover_x?;
        self.occupancy_chart.as_ref()?.nearest_point(x)
    }
}
