//! Analytics API payloads, decoded once at the boundary.
//!
//! Each endpoint may answer in several shapes. Every shape is one variant of
//! an untagged enum, so downstream code matches on a closed set instead of
//! probing JSON fields. Missing or malformed fields fall back to defaults.

mod demographics;
mod entries;
mod metrics;
mod occupancy;
mod realtime;

pub use demographics::{DemographicsPayload, GenderCounts};
pub use entries::{EntryExitPayload, EntryRecord, RawEntryRecord};
pub use metrics::{DwellPayload, FootfallPayload, format_dwell_minutes};
pub use occupancy::OccupancyPayload;
pub use realtime::{AlertEvent, LiveOccupancyEvent};

use serde::de::DeserializeOwned;

use crate::error::{DashboardError, DashboardResult};

/// Text shown for values the API did not provide.
pub const MISSING_TEXT: &str = "--";

pub(crate) fn decode<T: DeserializeOwned>(kind: &'static str, input: &str) -> DashboardResult<T> {
    serde_json::from_str(input).map_err(|source| DashboardError::Payload { kind, source })
}
