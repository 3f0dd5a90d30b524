use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::bucket::{Bucket, Metric};
use crate::core::path::{fill_path, flat_path, line_path};
use crate::core::time_axis::{
    DayWindow, TimeAxisMode, fixed_day_labels, format_clock_label, ordinal_labels,
};
use crate::core::types::{ChartPoint, Viewport, round_to_i64};
use crate::core::value_axis::{ValueAxis, ValueAxisTuning};
use crate::error::{DashboardError, DashboardResult};

/// Label carried by the synthetic point at the current instant.
pub const LIVE_POINT_LABEL: &str = "Live";

/// Layout of the occupancy trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OccupancyChartConfig {
    pub viewport: Viewport,
    /// Headroom kept above the axis maximum.
    pub padding: f64,
    pub axis: ValueAxisTuning,
    pub mode: TimeAxisMode,
    pub label_hour_step: u32,
    pub metric: Metric,
}

impl Default for OccupancyChartConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(800, 200),
            padding: 20.0,
            axis: ValueAxisTuning::default(),
            mode: TimeAxisMode::FixedDay,
            label_hour_step: 4,
            metric: Metric::Avg,
        }
    }
}

impl OccupancyChartConfig {
    pub fn validate(self) -> DashboardResult<Self> {
        self.viewport.validate()?;
        self.axis.validate()?;
        if !self.padding.is_finite()
            || self.padding < 0.0
            || self.padding >= self.viewport.height_f64()
        {
            return Err(DashboardError::InvalidConfig(
                "occupancy padding must be finite and in [0, height)".to_owned(),
            ));
        }
        if self.label_hour_step == 0 || self.label_hour_step > 24 {
            return Err(DashboardError::InvalidConfig(
                "label hour step must be in 1..=24".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Fully derived occupancy chart. Replaced wholesale on every recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancyChart {
    pub mode: TimeAxisMode,
    pub value_axis: ValueAxis,
    pub time_labels: Vec<String>,
    pub points: Vec<ChartPoint>,
    pub line_path: String,
    pub fill_path: String,
    pub live_x: f64,
}

impl OccupancyChart {
    /// Point with the smallest horizontal distance to `x`, for tooltips.
    #[must_use]
    pub fn nearest_point(&self, x: f64) -> Option<&ChartPoint> {
        if !x.is_finite() {
            return None;
        }
        self.points
            .iter()
            .min_by(|a, b| (a.x - x).abs().total_cmp(&(b.x - x).abs()))
    }
}

/// Projects occupancy buckets into chart geometry.
///
/// Returns `None` when no bucket has a usable timestamp so the caller keeps
/// whatever chart it already shows.
#[must_use]
pub fn project_occupancy<Tz: TimeZone>(
    buckets: &[Bucket],
    live_value: f64,
    now: &DateTime<Tz>,
    config: &OccupancyChartConfig,
) -> Option<OccupancyChart>
where
    Tz::Offset: Display,
{
    if buckets.is_empty() {
        return None;
    }

    let axis = ValueAxis::from_buckets(buckets, config.metric, config.axis);
    let chart = match config.mode {
        TimeAxisMode::FixedDay => project_fixed_day(buckets, live_value, now, config, axis),
        TimeAxisMode::Ordinal => project_ordinal(buckets, now, config, axis),
    };

    match &chart {
        Some(chart) => debug!(
            mode = ?config.mode,
            buckets = buckets.len(),
            points = chart.points.len(),
            axis_max = chart.value_axis.max,
            "projected occupancy chart"
        ),
        None => debug!(
            buckets = buckets.len(),
            "no usable occupancy buckets, keeping previous chart"
        ),
    }
    chart
}

fn project_fixed_day<Tz: TimeZone>(
    buckets: &[Bucket],
    live_value: f64,
    now: &DateTime<Tz>,
    config: &OccupancyChartConfig,
    axis: ValueAxis,
) -> Option<OccupancyChart>
where
    Tz::Offset: Display,
{
    let width = config.viewport.width_f64();
    let height = config.viewport.height_f64();
    let tz = now.timezone();
    let now_ms = now.timestamp_millis();
    let day = DayWindow::containing(now);

    let mut points = Vec::with_capacity(buckets.len() + 1);
    for bucket in buckets {
        let Some(utc) = bucket.valid_utc() else {
            continue;
        };
        // Misaligned responses can carry buckets past the current instant.
        if utc > now_ms {
            continue;
        }
        let value = bucket.metric(config.metric);
        points.push(ChartPoint::new(
            day.x_for(utc, width),
            axis.project(value, height, config.padding),
            round_to_i64(value),
            format_clock_label(utc, &tz),
        ));
    }
    if points.is_empty() {
        return None;
    }

    let live_x = day.x_for(now_ms, width);
    points.push(ChartPoint::new(
        live_x,
        axis.project(live_value, height, config.padding),
        round_to_i64(live_value),
        LIVE_POINT_LABEL,
    ));

    assemble(
        TimeAxisMode::FixedDay,
        axis,
        fixed_day_labels(config.label_hour_step),
        points,
        live_x,
        height,
    )
}

fn project_ordinal<Tz: TimeZone>(
    buckets: &[Bucket],
    now: &DateTime<Tz>,
    config: &OccupancyChartConfig,
    axis: ValueAxis,
) -> Option<OccupancyChart>
where
    Tz::Offset: Display,
{
    let width = config.viewport.width_f64();
    let height = config.viewport.height_f64();
    let tz = now.timezone();

    let valid: Vec<(i64, f64)> = buckets
        .iter()
        .filter_map(|bucket| Some((bucket.valid_utc()?, bucket.metric(config.metric))))
        .collect();

    let last_index = valid.len().checked_sub(1)?;
    let points: Vec<ChartPoint> = valid
        .iter()
        .enumerate()
        .map(|(index, (utc, value))| {
            let x = if last_index == 0 {
                0.0
            } else {
                index as f64 / last_index as f64 * width
            };
            ChartPoint::new(
                x,
                axis.project(*value, height, config.padding),
                round_to_i64(*value),
                format_clock_label(*utc, &tz),
            )
        })
        .collect();

    let labels: Vec<String> = points.iter().map(|point| point.time.clone()).collect();
    let time_labels = ordinal_labels(&labels);

    if let [single] = points.as_slice() {
        // One sample cannot be interpolated; draw it across the whole width.
        let line = flat_path(single.y, width);
        let fill = fill_path(&line, 0.0, width, height);
        return Some(OccupancyChart {
            mode: TimeAxisMode::Ordinal,
            value_axis: axis,
            time_labels,
            points,
            line_path: line,
            fill_path: fill,
            live_x: width,
        });
    }

    assemble(
        TimeAxisMode::Ordinal,
        axis,
        time_labels,
        points,
        width,
        height,
    )
}

fn assemble(
    mode: TimeAxisMode,
    value_axis: ValueAxis,
    time_labels: Vec<String>,
    points: Vec<ChartPoint>,
    live_x: f64,
    height: f64,
) -> Option<OccupancyChart> {
    let (first_x, last_x) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first.x, last.x),
        _ => return None,
    };
    let line = line_path(points.iter().map(|point| (point.x, point.y)))?;
    let fill = fill_path(&line, first_x, last_x, height);

    Some(OccupancyChart {
        mode,
        value_axis,
        time_labels,
        points,
        line_path: line,
        fill_path: fill,
        live_x,
    })
}
