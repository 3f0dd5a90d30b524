use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::lenient;

/// One sampling interval's aggregate as reported by the analytics API.
///
/// Every field is optional on the wire. Malformed values decode to `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    #[serde(
        default,
        deserialize_with = "lenient::opt_millis",
        skip_serializing_if = "Option::is_none"
    )]
    pub utc: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub avg: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub male: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub female: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub count: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub max: Option<f64>,
}

impl Bucket {
    /// Bucket carrying only an average, the shape produced by live pushes.
    #[must_use]
    pub fn with_avg(utc: i64, avg: f64) -> Self {
        Self {
            utc: Some(utc),
            avg: Some(avg),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_gender(utc: i64, male: f64, female: f64) -> Self {
        Self {
            utc: Some(utc),
            male: Some(male),
            female: Some(female),
            ..Self::default()
        }
    }

    /// Timestamp usable for projection. Missing and non-positive values are skipped.
    #[must_use]
    pub fn valid_utc(&self) -> Option<i64> {
        self.utc.filter(|utc| *utc > 0)
    }

    /// Reads one metric, `0.0` when absent.
    #[must_use]
    pub fn metric(&self, metric: Metric) -> f64 {
        let value = match metric {
            Metric::Avg => self.avg,
            Metric::Male => self.male,
            Metric::Female => self.female,
            Metric::Count => self.count,
            Metric::Max => self.max,
        };
        value.unwrap_or(0.0)
    }
}

/// Selects which bucket field feeds a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Avg,
    Male,
    Female,
    Count,
    Max,
}

/// Bounded bucket history.
///
/// Holds at most `capacity` buckets and, when `retention_ms` is set, drops
/// buckets older than `newest_utc - retention_ms` wherever they sit. Buckets
/// without a timestamp are only dropped by the capacity trim, front first.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketWindow {
    buckets: VecDeque<Bucket>,
    capacity: usize,
    retention_ms: Option<i64>,
}

impl BucketWindow {
    #[must_use]
    pub fn new(capacity: usize, retention_ms: Option<i64>) -> Self {
        let capacity = capacity.max(1);
        Self {
            buckets: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            retention_ms: retention_ms.filter(|ms| *ms > 0),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bucket> {
        self.buckets.iter()
    }

    /// Contiguous view in insertion order.
    pub fn as_slice(&mut self) -> &[Bucket] {
        self.buckets.make_contiguous()
    }

    /// Replaces the whole history. Returns the number of evicted buckets.
    pub fn replace(&mut self, buckets: impl IntoIterator<Item = Bucket>) -> usize {
        self.buckets.clear();
        self.buckets.extend(buckets);
        self.evict()
    }

    /// Appends one bucket. Returns the number of evicted buckets.
    pub fn push(&mut self, bucket: Bucket) -> usize {
        self.buckets.push_back(bucket);
        self.evict()
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
    }

    fn evict(&mut self) -> usize {
        let before = self.buckets.len();

        if let Some(retention_ms) = self.retention_ms {
            if let Some(newest) = self.buckets.iter().filter_map(Bucket::valid_utc).max() {
                let oldest_allowed = newest.saturating_sub(retention_ms);
                // Input is not guaranteed sorted; buckets without a timestamp have no age.
                self.buckets
                    .retain(|bucket| bucket.valid_utc().is_none_or(|utc| utc >= oldest_allowed));
            }
        }

        let excess = self.buckets.len().saturating_sub(self.capacity);
        self.buckets.drain(..excess);

        let evicted = before - self.buckets.len();
        if evicted > 0 {
            trace!(evicted, retained = self.buckets.len(), "evicted buckets");
        }
        evicted
    }
}
