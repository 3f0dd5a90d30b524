use serde::{Deserialize, Serialize};

use crate::core::Bucket;
use crate::core::lenient;
use crate::core::types::round_to_i64;
use crate::error::DashboardResult;

/// Response of the occupancy endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OccupancyPayload {
    Series {
        buckets: Vec<Bucket>,
        #[serde(
            default,
            deserialize_with = "lenient::opt_f64",
            skip_serializing_if = "Option::is_none"
        )]
        occupancy: Option<f64>,
    },
    Scalar {
        #[serde(default, deserialize_with = "lenient::opt_f64")]
        occupancy: Option<f64>,
    },
}

impl OccupancyPayload {
    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        super::decode("occupancy", input)
    }

    #[must_use]
    pub fn buckets(&self) -> &[Bucket] {
        match self {
            Self::Series { buckets, .. } => buckets,
            Self::Scalar { .. } => &[],
        }
    }

    /// Headcount at `now_ms`.
    ///
    /// For a series this is the last bucket at or before `now_ms`, scanning in
    /// order and stopping at the first future bucket; the first bucket is used
    /// when every bucket lies in the future. Its value is the first non-zero of
    /// `avg`, `max` and `count`.
    #[must_use]
    pub fn live_occupancy(&self, now_ms: i64) -> i64 {
        let (buckets, scalar) = match self {
            Self::Series { buckets, occupancy } => (buckets.as_slice(), *occupancy),
            Self::Scalar { occupancy } => (&[][..], *occupancy),
        };

        match current_bucket(buckets, now_ms) {
            Some(bucket) => round_to_i64(headcount(bucket)),
            None => round_to_i64(scalar.unwrap_or(0.0)),
        }
    }
}

fn current_bucket(buckets: &[Bucket], now_ms: i64) -> Option<&Bucket> {
    let mut current = buckets.first()?;
    for bucket in buckets {
        match bucket.utc {
            Some(utc) if utc <= now_ms => current = bucket,
            _ => break,
        }
    }
    Some(current)
}

fn headcount(bucket: &Bucket) -> f64 {
    [bucket.avg, bucket.max, bucket.count]
        .into_iter()
        .flatten()
        .find(|value| *value != 0.0)
        .unwrap_or(0.0)
}
