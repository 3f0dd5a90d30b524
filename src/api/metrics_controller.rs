use tracing::debug;

use crate::core::{DemographicSplit, DemographicTrend, project_demographic_trend};
use crate::payload::{DemographicsPayload, DwellPayload, FootfallPayload};
use crate::render::Surface;

use super::{Dashboard, DemographicsView};

impl<S: Surface> Dashboard<S> {
    pub fn apply_footfall(&mut self, payload: &FootfallPayload) {
        self.footfall = payload.total();
        debug!(footfall = self.footfall, "updated footfall");
    }

    pub fn apply_dwell(&mut self, payload: &DwellPayload) {
        self.dwell_time = payload.display();
        debug!(dwell_time = %self.dwell_time, "updated dwell time");
    }

    /// Recomputes the donut split and trend lines.
    ///
    /// Aggregate-only payloads get the flat reference lines.
    pub fn apply_demographics(&mut self, payload: &DemographicsPayload) {
        let (male, female) = payload.counts();
        let split = DemographicSplit::from_counts(male, female, self.config.donut_circumference);

        let series = payload.series();
        let trend = if series.is_empty() {
            DemographicTrend::fallback(&self.config.demographic_trend)
        } else {
            project_demographic_trend(series, &self.config.demographic_trend)
        };

        debug!(
            male_percentage = split.male_percentage,
            female_percentage = split.female_percentage,
            series = series.len(),
            fallback_trend = trend.is_fallback,
            "updated demographics"
        );
        self.demographics = DemographicsView { split, trend };
    }
}
