use std::fmt;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::core::DayWindow;

use super::DashboardConfig;

/// Analytics endpoints polled by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalyticsEndpoint {
    Occupancy,
    Footfall,
    Dwell,
    Demographics,
    EntryExit,
}

impl AnalyticsEndpoint {
    pub const ALL: [Self; 5] = [
        Self::Occupancy,
        Self::Footfall,
        Self::Dwell,
        Self::Demographics,
        Self::EntryExit,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Occupancy => "occupancy",
            Self::Footfall => "footfall",
            Self::Dwell => "dwell",
            Self::Demographics => "demographics",
            Self::EntryExit => "entry-exit",
        }
    }

    #[must_use]
    pub fn path(self) -> String {
        format!("/api/analytics/{}", self.as_str())
    }
}

impl fmt::Display for AnalyticsEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body shared by every analytics endpoint: today so far, at the
/// configured granularity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsQuery {
    pub site_id: String,
    pub from_utc: i64,
    pub to_utc: i64,
    pub granularity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl AnalyticsQuery {
    /// From local midnight of `now` up to `now`.
    #[must_use]
    pub fn for_today<Tz: TimeZone>(config: &DashboardConfig, now: &DateTime<Tz>) -> Self {
        Self {
            site_id: config.site_id.clone(),
            from_utc: DayWindow::containing(now).start_ms,
            to_utc: now.timestamp_millis(),
            granularity: config.granularity.clone(),
            page: None,
            limit: None,
        }
    }

    #[must_use]
    pub fn with_page(mut self, page: u32, limit: u32) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }
}
