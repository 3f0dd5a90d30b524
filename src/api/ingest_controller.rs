use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::DashboardResult;
use crate::payload::{
    AlertEvent, DemographicsPayload, DwellPayload, EntryExitPayload, FootfallPayload,
    LiveOccupancyEvent, OccupancyPayload,
};
use crate::render::Surface;

use super::{AnalyticsEndpoint, AnalyticsQuery, Dashboard};

/// Push channels of the real-time feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RealtimeChannel {
    LiveOccupancy,
    Alert,
}

impl<S: Surface> Dashboard<S> {
    /// Request body for a polled endpoint.
    #[must_use]
    pub fn query<Tz: TimeZone>(
        &self,
        endpoint: AnalyticsEndpoint,
        now: &DateTime<Tz>,
    ) -> AnalyticsQuery {
        match endpoint {
            AnalyticsEndpoint::EntryExit => AnalyticsQuery::for_today(&self.config, now)
                .with_page(self.pager.current_page, self.pager.per_page),
            _ => AnalyticsQuery::for_today(&self.config, now),
        }
    }

    /// Decodes an endpoint response body and applies it.
    ///
    /// A body that does not decode is logged and returned as an error; the
    /// dashboard keeps its previous values.
    pub fn ingest_json<Tz: TimeZone>(
        &mut self,
        endpoint: AnalyticsEndpoint,
        body: &str,
        now: &DateTime<Tz>,
    ) -> DashboardResult<()>
    where
        Tz::Offset: Display,
    {
        let result = self.apply_endpoint_body(endpoint, body, now);
        if let Err(err) = &result {
            warn!(%endpoint, error = %err, "discarding undecodable payload, keeping previous values");
        }
        result
    }

    /// Decodes and applies one real-time push.
    pub fn ingest_realtime_json<Tz: TimeZone>(
        &mut self,
        channel: RealtimeChannel,
        body: &str,
        now: &DateTime<Tz>,
    ) -> DashboardResult<()>
    where
        Tz::Offset: Display,
    {
        let result = match channel {
            RealtimeChannel::LiveOccupancy => LiveOccupancyEvent::from_json_str(body)
                .map(|event| self.apply_live_occupancy(&event, now)),
            RealtimeChannel::Alert => AlertEvent::from_json_str(body).map(|alert| {
                self.push_alert(alert);
            }),
        };

        if let Err(err) = &result {
            warn!(?channel, error = %err, "discarding undecodable push");
        }
        result
    }

    fn apply_endpoint_body<Tz: TimeZone>(
        &mut self,
        endpoint: AnalyticsEndpoint,
        body: &str,
        now: &DateTime<Tz>,
    ) -> DashboardResult<()>
    where
        Tz::Offset: Display,
    {
        match endpoint {
            AnalyticsEndpoint::Occupancy => {
                let payload = OccupancyPayload::from_json_str(body)?;
                self.apply_occupancy(&payload, now);
            }
            AnalyticsEndpoint::Footfall => {
                let payload = FootfallPayload::from_json_str(body)?;
                self.apply_footfall(&payload);
            }
            AnalyticsEndpoint::Dwell => {
                let payload = DwellPayload::from_json_str(body)?;
                self.apply_dwell(&payload);
            }
            AnalyticsEndpoint::Demographics => {
                let payload = DemographicsPayload::from_json_str(body)?;
                self.apply_demographics(&payload);
            }
            AnalyticsEndpoint::EntryExit => {
                let payload = EntryExitPayload::from_json_str(body)?;
                self.apply_entries(&payload, &now.timezone());
            }
        }
        Ok(())
    }

    /// Logs a transport failure. Displayed values stay as they are.
    pub fn record_fetch_failure(&self, endpoint: AnalyticsEndpoint, error: &dyn Display) {
        warn!(%endpoint, error = %error, "analytics request failed, keeping previous values");
    }

    /// Prepends an alert and marks the feed unread.
    pub fn push_alert(&mut self, alert: AlertEvent) {
        debug!(title = alert.title().unwrap_or_default(), "received alert");
        self.alerts.push(alert);
    }

    pub fn select_alert(&mut self, index: usize) -> Option<&AlertEvent> {
        self.alerts.select(index)
    }

    pub fn mark_alerts_read(&mut self) {
        self.alerts.mark_read();
    }
}
