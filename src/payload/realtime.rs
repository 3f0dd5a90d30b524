use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::lenient;
use crate::error::DashboardResult;

/// Live occupancy tick pushed over the socket feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LiveOccupancyEvent {
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub occupancy: Option<f64>,
}

impl LiveOccupancyEvent {
    #[must_use]
    pub fn new(occupancy: f64) -> Self {
        Self {
            occupancy: Some(occupancy),
        }
    }

    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        super::decode("live-occupancy", input)
    }
}

/// Alert pushed over the socket feed. The record is kept as sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertEvent {
    pub fields: IndexMap<String, Value>,
}

impl AlertEvent {
    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        super::decode("alert", input)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// First string among the usual title keys.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        ["title", "message", "type"]
            .iter()
            .find_map(|key| self.fields.get(*key).and_then(Value::as_str))
    }
}
