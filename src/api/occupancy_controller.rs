use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use tracing::{debug, trace};

use crate::core::types::round_to_i64;
use crate::core::{Bucket, ChartPoint, project_occupancy};
use crate::payload::{LiveOccupancyEvent, OccupancyPayload};
use crate::render::Surface;

use super::Dashboard;

impl<S: Surface> Dashboard<S> {
    /// Applies an occupancy endpoint response.
    ///
    /// A non-empty series replaces the bucket history and recomputes the chart.
    /// Scalar responses only update the live headcount.
    pub fn apply_occupancy<Tz: TimeZone>(&mut self, payload: &OccupancyPayload, now: &DateTime<Tz>)
    where
        Tz::Offset: Display,
    {
        self.live_occupancy = payload.live_occupancy(now.timestamp_millis());

        let buckets = payload.buckets();
        if buckets.is_empty() {
            debug!(
                live_occupancy = self.live_occupancy,
                "occupancy payload without series"
            );
            return;
        }

        let evicted = self.buckets.replace(buckets.iter().copied());
        debug!(
            received = buckets.len(),
            retained = self.buckets.len(),
            evicted,
            live_occupancy = self.live_occupancy,
            "replaced occupancy buckets"
        );
        self.recompute_occupancy(now);
    }

    /// Applies a real-time occupancy tick: appends `{utc: now, avg}` and
    /// recomputes the chart. Ticks without a value are ignored.
    pub fn apply_live_occupancy<Tz: TimeZone>(
        &mut self,
        event: &LiveOccupancyEvent,
        now: &DateTime<Tz>,
    ) where
        Tz::Offset: Display,
    {
        let Some(occupancy) = event.occupancy else {
            trace!("live occupancy tick without value");
            return;
        };

        self.live_occupancy = round_to_i64(occupancy);
        self.buckets
            .push(Bucket::with_avg(now.timestamp_millis(), occupancy));
        trace!(
            occupancy,
            buckets = self.buckets.len(),
            "appended live occupancy bucket"
        );
        self.recompute_occupancy(now);
    }

    /// Rebuilds the occupancy chart from the retained buckets.
    ///
    /// Returns `false` when nothing could be projected; the previous chart is
    /// kept in that case.
    pub fn recompute_occupancy<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> bool
    where
        Tz::Offset: Display,
    {
        let live_value = self.live_occupancy as f64;
        let chart = project_occupancy(
            self.buckets.as_slice(),
            live_value,
            now,
            &self.config.occupancy_chart,
        );
        match chart {
            Some(chart) => {
                self.occupancy_chart = Some(chart);
                true
            }
            None => false,
        }
    }

    /// Records the pointer position and returns the nearest chart point.
    pub fn hover(&mut self, x: f64) -> Option<&ChartPoint> {
        self.hover_x = x.is_finite().then_some(x);
        self.hovered_point()
    }

    pub fn clear_hover(&mut self) {
        self.hover_x = None;
    }
}
