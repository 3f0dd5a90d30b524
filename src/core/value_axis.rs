use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::bucket::{Bucket, Metric};
use crate::core::types::round_to_i64;
use crate::error::{DashboardError, DashboardResult};

/// Rounding rules for a count axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueAxisTuning {
    /// Smallest axis maximum, so near-empty days still get a readable scale.
    pub floor: f64,
    /// Axis maximum is rounded up to a multiple of this.
    pub step: f64,
    /// Number of label intervals; the axis gets `steps + 1` labels.
    pub steps: u32,
}

impl Default for ValueAxisTuning {
    fn default() -> Self {
        Self {
            floor: 50.0,
            step: 50.0,
            steps: 5,
        }
    }
}

impl ValueAxisTuning {
    pub fn validate(self) -> DashboardResult<Self> {
        if !self.floor.is_finite() || self.floor <= 0.0 {
            return Err(DashboardError::InvalidConfig(
                "value axis floor must be finite and > 0".to_owned(),
            ));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(DashboardError::InvalidConfig(
                "value axis step must be finite and > 0".to_owned(),
            ));
        }
        if self.steps == 0 {
            return Err(DashboardError::InvalidConfig(
                "value axis needs at least one step".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Vertical axis model: rounded maximum plus descending labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAxis {
    pub max: f64,
    pub labels: SmallVec<[i64; 8]>,
}

impl ValueAxis {
    /// Builds the axis from one metric over `buckets`.
    ///
    /// `max = ceil(max(floor, max(metric, 0)) / step) * step`.
    #[must_use]
    pub fn from_buckets(buckets: &[Bucket], metric: Metric, tuning: ValueAxisTuning) -> Self {
        let data_max = max_metric(buckets, metric);
        Self::from_data_max(data_max, tuning)
    }

    #[must_use]
    pub fn from_data_max(data_max: f64, tuning: ValueAxisTuning) -> Self {
        let data_max = if data_max.is_finite() {
            data_max.max(0.0)
        } else {
            0.0
        };
        let max = (data_max.max(tuning.floor) / tuning.step).ceil() * tuning.step;

        let steps = tuning.steps.max(1);
        let labels = (0..=steps)
            .rev()
            .map(|i| round_to_i64(max / f64::from(steps) * f64::from(i)))
            .collect();

        Self { max, labels }
    }

    /// Maps a value onto `[0, height]`, larger values plotting higher.
    #[must_use]
    pub fn project(&self, value: f64, height: f64, padding: f64) -> f64 {
        let value = if value.is_finite() {
            value.clamp(0.0, self.max)
        } else {
            0.0
        };
        height - (value / self.max) * (height - padding)
    }
}

/// Largest metric value over `buckets`, `0.0` for an empty slice.
#[must_use]
pub fn max_metric(buckets: &[Bucket], metric: Metric) -> f64 {
    buckets
        .iter()
        .map(|bucket| OrderedFloat(bucket.metric(metric)))
        .max()
        .map_or(0.0, |max| max.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_applies_to_quiet_days() {
        let axis = ValueAxis::from_data_max(3.0, ValueAxisTuning::default());
        assert_eq!(axis.max, 50.0);
        assert_eq!(axis.labels.as_slice(), &[50, 40, 30, 20, 10, 0]);
    }

    #[test]
    fn max_rounds_up_to_step() {
        let axis = ValueAxis::from_data_max(101.0, ValueAxisTuning::default());
        assert_eq!(axis.max, 150.0);
        assert_eq!(axis.labels.as_slice(), &[150, 120, 90, 60, 30, 0]);
    }

    #[test]
    fn negative_and_nan_maxima_fall_back_to_floor() {
        assert_eq!(ValueAxis::from_data_max(-5.0, ValueAxisTuning::default()).max, 50.0);
        assert_eq!(ValueAxis::from_data_max(f64::NAN, ValueAxisTuning::default()).max, 50.0);
    }
}
