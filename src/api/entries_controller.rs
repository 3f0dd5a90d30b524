use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use tracing::debug;

use crate::payload::EntryExitPayload;
use crate::render::Surface;

use super::{AnalyticsEndpoint, AnalyticsQuery, Dashboard};

impl<S: Surface> Dashboard<S> {
    /// Moves the cursor to `page` and returns the request for it.
    pub fn request_entries_page<Tz: TimeZone>(
        &mut self,
        page: u32,
        now: &DateTime<Tz>,
    ) -> AnalyticsQuery {
        self.pager.go_to(page);
        debug!(
            endpoint = %AnalyticsEndpoint::EntryExit,
            page = self.pager.current_page,
            "requesting entries page"
        );
        AnalyticsQuery::for_today(&self.config, now)
            .with_page(self.pager.current_page, self.pager.per_page)
    }

    pub fn request_next_entries_page<Tz: TimeZone>(
        &mut self,
        now: &DateTime<Tz>,
    ) -> Option<AnalyticsQuery> {
        let page = self.pager.next_page()?;
        Some(self.request_entries_page(page, now))
    }

    pub fn request_prev_entries_page<Tz: TimeZone>(
        &mut self,
        now: &DateTime<Tz>,
    ) -> Option<AnalyticsQuery> {
        let page = self.pager.prev_page()?;
        Some(self.request_entries_page(page, now))
    }

    /// Replaces the visible entry rows, newest first.
    ///
    /// Times are rendered in the zone of `tz`. A missing total resets paging
    /// to zero pages.
    pub fn apply_entries<Tz: TimeZone>(&mut self, payload: &EntryExitPayload, tz: &Tz)
    where
        Tz::Offset: Display,
    {
        self.entries = payload.normalize(tz);
        self.pager.total_items = payload.total_records().unwrap_or(0);
        debug!(
            rows = self.entries.len(),
            total = self.pager.total_items,
            page = self.pager.current_page,
            "updated entries"
        );
    }

    #[must_use]
    pub fn visible_pages(&self) -> Vec<u32> {
        self.pager.visible_pages(self.config.visible_page_count)
    }
}
