use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::payload::AlertEvent;

/// Newest-first alert list with a bounded length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertFeed {
    alerts: VecDeque<AlertEvent>,
    capacity: usize,
    selected: Option<usize>,
    unread: bool,
}

impl AlertFeed {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            alerts: VecDeque::new(),
            capacity: capacity.max(1),
            selected: None,
            unread: false,
        }
    }

    /// Prepends `alert`, dropping the oldest ones past capacity.
    ///
    /// An explicit selection keeps pointing at the same alert; it is cleared
    /// when that alert is dropped.
    pub fn push(&mut self, alert: AlertEvent) {
        self.alerts.push_front(alert);
        self.alerts.truncate(self.capacity);
        self.selected = self
            .selected
            .map(|index| index + 1)
            .filter(|index| *index < self.alerts.len());
        self.unread = true;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlertEvent> {
        self.alerts.iter()
    }

    #[must_use]
    pub fn has_unread(&self) -> bool {
        self.unread
    }

    pub fn mark_read(&mut self) {
        self.unread = false;
    }

    /// Selects the alert at `index` (0 = newest).
    pub fn select(&mut self, index: usize) -> Option<&AlertEvent> {
        let alert = self.alerts.get(index)?;
        self.selected = Some(index);
        Some(alert)
    }

    /// The explicit selection, or the newest alert when nothing was selected.
    #[must_use]
    pub fn selected(&self) -> Option<&AlertEvent> {
        match self.selected {
            Some(index) => self.alerts.get(index),
            None => self.alerts.front(),
        }
    }
}
