use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::bucket::{Bucket, Metric};
use crate::core::path::{flat_path, line_path};
use crate::core::types::{Viewport, round_to_i64};
use crate::core::value_axis::max_metric;
use crate::error::{DashboardError, DashboardResult};

/// Layout of the male/female trend sparkline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemographicTrendConfig {
    pub viewport: Viewport,
    /// Kept above and below the plotted band.
    pub padding: f64,
    /// Smallest shared maximum for both series.
    pub floor: f64,
    /// Reference line heights used when there is no series.
    pub fallback_male_y: f64,
    pub fallback_female_y: f64,
}

impl Default for DemographicTrendConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(400, 150),
            padding: 10.0,
            floor: 10.0,
            fallback_male_y: 120.0,
            fallback_female_y: 90.0,
        }
    }
}

impl DemographicTrendConfig {
    pub fn validate(self) -> DashboardResult<Self> {
        self.viewport.validate()?;
        if !self.padding.is_finite()
            || self.padding < 0.0
            || self.padding * 2.0 >= self.viewport.height_f64()
        {
            return Err(DashboardError::InvalidConfig(
                "trend padding must be finite and leave a drawable band".to_owned(),
            ));
        }
        if !self.floor.is_finite() || self.floor <= 0.0 {
            return Err(DashboardError::InvalidConfig(
                "trend floor must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Male and female trend lines on a shared vertical scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicTrend {
    pub max: f64,
    pub male_path: String,
    pub female_path: String,
    /// `true` when the paths are the flat reference lines.
    pub is_fallback: bool,
}

impl DemographicTrend {
    #[must_use]
    pub fn fallback(config: &DemographicTrendConfig) -> Self {
        let width = config.viewport.width_f64();
        Self {
            max: config.floor,
            male_path: flat_path(config.fallback_male_y, width),
            female_path: flat_path(config.fallback_female_y, width),
            is_fallback: true,
        }
    }
}

/// Projects `male`/`female` buckets over ordinal spacing.
///
/// Buckets without a usable timestamp are skipped and do not take an index,
/// so the remaining points spread evenly over the width. With nothing left
/// the fallback reference lines are returned instead of an empty chart.
#[must_use]
pub fn project_demographic_trend(
    buckets: &[Bucket],
    config: &DemographicTrendConfig,
) -> DemographicTrend {
    let valid: Vec<&Bucket> = buckets
        .iter()
        .filter(|bucket| bucket.valid_utc().is_some())
        .collect();
    let Some(last_index) = valid.len().checked_sub(1) else {
        debug!(buckets = buckets.len(), "no usable demographic buckets, using fallback");
        return DemographicTrend::fallback(config);
    };

    let max = max_metric(buckets, Metric::Male)
        .max(max_metric(buckets, Metric::Female))
        .max(config.floor);

    let width = config.viewport.width_f64();
    let height = config.viewport.height_f64();
    let band = height - config.padding * 2.0;
    let project = |value: f64| height - (value.max(0.0) / max) * band - config.padding;

    let (male_path, female_path) = if last_index == 0 {
        let single = valid[0];
        (
            flat_path(project(single.metric(Metric::Male)), width),
            flat_path(project(single.metric(Metric::Female)), width),
        )
    } else {
        let x_at = |index: usize| index as f64 / last_index as f64 * width;
        let male = valid
            .iter()
            .enumerate()
            .map(|(i, bucket)| (x_at(i), project(bucket.metric(Metric::Male))));
        let female = valid
            .iter()
            .enumerate()
            .map(|(i, bucket)| (x_at(i), project(bucket.metric(Metric::Female))));
        (
            line_path(male).unwrap_or_default(),
            line_path(female).unwrap_or_default(),
        )
    };

    DemographicTrend {
        max,
        male_path,
        female_path,
        is_fallback: false,
    }
}

/// Male/female percentage split with its donut stroke dash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicSplit {
    pub male_percentage: i64,
    pub female_percentage: i64,
    pub donut_stroke_dash: String,
}

impl DemographicSplit {
    /// Splits `male`/`female` counts; an empty total reads as 50/50.
    ///
    /// The female share is drawn on a circle of `circumference` units as
    /// `"{share * circumference} {circumference}"`.
    #[must_use]
    pub fn from_counts(male: f64, female: f64, circumference: f64) -> Self {
        let male = if male.is_finite() { male.max(0.0) } else { 0.0 };
        let female = if female.is_finite() { female.max(0.0) } else { 0.0 };
        let total = male + female;

        let male_percentage = if total > 0.0 {
            round_to_i64(male / total * 100.0)
        } else {
            50
        };
        let female_percentage = 100 - male_percentage;

        let stroke = female_percentage as f64 / 100.0 * circumference;
        Self {
            male_percentage,
            female_percentage,
            donut_stroke_dash: format!("{stroke} {circumference}"),
        }
    }
}
