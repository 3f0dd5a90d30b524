use serde::{Deserialize, Serialize};

use crate::core::{DemographicTrendConfig, OccupancyChartConfig, TimeAxisMode};
use crate::error::{DashboardError, DashboardResult};

pub const DEFAULT_SITE_ID: &str = "8bd0d580-fdac-44a4-a6e4-367253099c4e";
pub const DEFAULT_GRANULARITY: &str = "15m";

/// Dashboard bootstrap configuration.
///
/// Serializable so hosts can keep the setup in a JSON file. Every field falls
/// back to its default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub occupancy_chart: OccupancyChartConfig,
    pub demographic_trend: DemographicTrendConfig,
    /// Circumference of the gender donut in chart units.
    pub donut_circumference: f64,
    pub entries_per_page: u32,
    /// Number of page buttons shown around the current page.
    pub visible_page_count: u32,
    /// Upper bound on retained occupancy buckets.
    pub bucket_capacity: usize,
    /// Drop buckets older than the newest one by this many millis.
    pub bucket_retention_ms: Option<i64>,
    pub alert_capacity: usize,
    pub site_id: String,
    pub granularity: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            occupancy_chart: OccupancyChartConfig::default(),
            demographic_trend: DemographicTrendConfig::default(),
            donut_circumference: 440.0,
            entries_per_page: 10,
            visible_page_count: 5,
            bucket_capacity: 4_096,
            bucket_retention_ms: Some(48 * 3_600_000),
            alert_capacity: 100,
            site_id: DEFAULT_SITE_ID.to_owned(),
            granularity: DEFAULT_GRANULARITY.to_owned(),
        }
    }
}

impl DashboardConfig {
    #[must_use]
    pub fn with_occupancy_mode(mut self, mode: TimeAxisMode) -> Self {
        self.occupancy_chart.mode = mode;
        self
    }

    #[must_use]
    pub fn with_occupancy_chart(mut self, chart: OccupancyChartConfig) -> Self {
        self.occupancy_chart = chart;
        self
    }

    #[must_use]
    pub fn with_bucket_capacity(mut self, capacity: usize) -> Self {
        self.bucket_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_bucket_retention_ms(mut self, retention_ms: Option<i64>) -> Self {
        self.bucket_retention_ms = retention_ms;
        self
    }

    #[must_use]
    pub fn with_entries_per_page(mut self, per_page: u32) -> Self {
        self.entries_per_page = per_page;
        self
    }

    #[must_use]
    pub fn with_alert_capacity(mut self, capacity: usize) -> Self {
        self.alert_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_site_id(mut self, site_id: impl Into<String>) -> Self {
        self.site_id = site_id.into();
        self
    }

    pub fn validate(&self) -> DashboardResult<()> {
        self.occupancy_chart.validate()?;
        self.demographic_trend.validate()?;

        if !self.donut_circumference.is_finite() || self.donut_circumference <= 0.0 {
            return Err(DashboardError::InvalidConfig(
                "donut circumference must be finite and > 0".to_owned(),
            ));
        }
        if self.entries_per_page == 0 || self.visible_page_count == 0 {
            return Err(DashboardError::InvalidConfig(
                "entries per page and visible page count must be > 0".to_owned(),
            ));
        }
        if self.bucket_capacity == 0 || self.alert_capacity == 0 {
            return Err(DashboardError::InvalidConfig(
                "bucket and alert capacities must be > 0".to_owned(),
            ));
        }
        if self.bucket_retention_ms.is_some_and(|ms| ms <= 0) {
            return Err(DashboardError::InvalidConfig(
                "bucket retention must be > 0 when set".to_owned(),
            ));
        }
        if self.site_id.trim().is_empty() {
            return Err(DashboardError::InvalidConfig(
                "site id must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            DashboardError::InvalidConfig(format!("failed to parse dashboard config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> DashboardResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            DashboardError::InvalidConfig(format!("failed to serialize dashboard config: {e}"))
        })
    }
}
