use serde::{Deserialize, Serialize};

use crate::core::lenient;
use crate::core::types::round_to_i64;
use crate::core::{Bucket, Metric};
use crate::error::DashboardResult;

use super::MISSING_TEXT;

/// Response of the footfall endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FootfallPayload {
    Series {
        buckets: Vec<Bucket>,
    },
    Total {
        #[serde(default, deserialize_with = "lenient::opt_f64")]
        footfall: Option<f64>,
        #[serde(default, deserialize_with = "lenient::opt_f64")]
        count: Option<f64>,
    },
}

impl FootfallPayload {
    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        super::decode("footfall", input)
    }

    /// Entries counted today: the bucket sum, or the first non-zero scalar.
    #[must_use]
    pub fn total(&self) -> i64 {
        match self {
            Self::Series { buckets } => {
                round_to_i64(buckets.iter().map(|b| b.metric(Metric::Count)).sum())
            }
            Self::Total { footfall, count } => round_to_i64(
                [*footfall, *count]
                    .into_iter()
                    .flatten()
                    .find(|value| *value != 0.0)
                    .unwrap_or(0.0),
            ),
        }
    }
}

/// Response of the dwell-time endpoint.
///
/// Either field may be missing, empty or malformed. Server-formatted text wins
/// when present; otherwise the average minutes are formatted locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DwellPayload {
    #[serde(
        rename = "dwellTime",
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub dwell_time: Option<String>,
    #[serde(
        rename = "avgDwellMinutes",
        default,
        deserialize_with = "lenient::opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub avg_dwell_minutes: Option<f64>,
}

impl DwellPayload {
    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        super::decode("dwell", input)
    }

    /// Display text, `"--"` when the payload carries nothing usable.
    #[must_use]
    pub fn display(&self) -> String {
        if let Some(text) = &self.dwell_time {
            return text.clone();
        }
        self.avg_dwell_minutes
            .filter(|minutes| *minutes != 0.0)
            .map_or_else(|| MISSING_TEXT.to_owned(), format_dwell_minutes)
    }
}

/// Formats fractional minutes as `"{m} min {s} sec"`.
///
/// Seconds that round up to a full minute carry into the minute count.
#[must_use]
pub fn format_dwell_minutes(total_minutes: f64) -> String {
    if !total_minutes.is_finite() || total_minutes < 0.0 {
        return MISSING_TEXT.to_owned();
    }
    let mut minutes = round_to_i64(total_minutes.floor());
    let mut seconds = round_to_i64((total_minutes - total_minutes.floor()) * 60.0);
    if seconds >= 60 {
        minutes += 1;
        seconds -= 60;
    }
    format!("{minutes} min {seconds} sec")
}
