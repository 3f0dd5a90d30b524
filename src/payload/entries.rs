use std::fmt::Display;

use chrono::TimeZone;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::format_wall_clock;
use crate::core::lenient::{self, millis_from_value, number_from_value};
use crate::core::types::round_to_i64;
use crate::error::DashboardResult;

use super::MISSING_TEXT;

const NAME_KEYS: &[&str] = &["visitor_name", "visitorName", "personName", "name"];
const SEX_KEYS: &[&str] = &["gender", "sex"];
const ENTRY_KEYS: &[&str] = &["entry_time", "entryTime", "entryUtc", "entry"];
const EXIT_KEYS: &[&str] = &["exit_time", "exitTime", "exitUtc", "exit"];
const DWELL_TEXT_KEYS: &[&str] = &["dwell_time", "dwellTime"];
const DWELL_MINUTES_KEY: &str = "dwellMinutes";
const ID_KEYS: &[&str] = &["personId", "id"];

/// Response of the entry/exit endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryExitPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<RawEntryRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<RawEntryRecord>>,
    #[serde(
        rename = "totalRecords",
        default,
        deserialize_with = "lenient::opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_records: Option<f64>,
}

impl EntryExitPayload {
    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        super::decode("entry-exit", input)
    }

    /// Raw records, `entries` taking precedence over `records`.
    #[must_use]
    pub fn raw_records(&self) -> &[RawEntryRecord] {
        self.entries
            .as_deref()
            .or(self.records.as_deref())
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn total_records(&self) -> Option<u64> {
        self.total_records
            .filter(|total| *total >= 0.0)
            .map(|total| round_to_i64(total).unsigned_abs())
    }

    /// Normalized records, newest entry first. Records without an entry time sort last.
    #[must_use]
    pub fn normalize<Tz: TimeZone>(&self, tz: &Tz) -> Vec<EntryRecord>
    where
        Tz::Offset: Display,
    {
        let mut records: Vec<EntryRecord> = self
            .raw_records()
            .iter()
            .enumerate()
            .map(|(index, raw)| EntryRecord::from_raw(raw, index, tz))
            .collect();
        records.sort_by(|a, b| b.entry_utc.unwrap_or(0).cmp(&a.entry_utc.unwrap_or(0)));
        records
    }
}

/// One visitor record exactly as the API sent it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawEntryRecord {
    pub fields: IndexMap<String, Value>,
}

impl RawEntryRecord {
    /// First present, non-null, non-empty value among `keys`.
    fn first(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .filter_map(|key| self.fields.get(*key))
            .find(|value| match value {
                Value::Null | Value::Bool(false) => false,
                Value::String(text) => !text.is_empty(),
                _ => true,
            })
    }

    fn text(&self, keys: &[&str]) -> Option<String> {
        self.first(keys).map(|value| match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    }
}

/// Display-ready visitor row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub id: String,
    pub name: String,
    pub sex: String,
    pub entry: String,
    pub exit: String,
    pub dwell_time: String,
    pub entry_utc: Option<i64>,
    /// Every field of the source record, in wire order.
    pub fields: IndexMap<String, Value>,
}

impl EntryRecord {
    #[must_use]
    pub fn from_raw<Tz: TimeZone>(raw: &RawEntryRecord, index: usize, tz: &Tz) -> Self
    where
        Tz::Offset: Display,
    {
        let entry_value = raw.first(ENTRY_KEYS);
        Self {
            id: raw.text(ID_KEYS).unwrap_or_else(|| index.to_string()),
            name: raw.text(NAME_KEYS).unwrap_or_else(|| "Unknown".to_owned()),
            sex: raw.text(SEX_KEYS).unwrap_or_else(|| "-".to_owned()),
            entry: format_time_value(entry_value, tz),
            exit: format_time_value(raw.first(EXIT_KEYS), tz),
            dwell_time: dwell_text(raw),
            entry_utc: entry_value.and_then(millis_from_value),
            fields: raw.fields.clone(),
        }
    }
}

/// Timestamps become wall-clock text; other strings pass through.
fn format_time_value<Tz: TimeZone>(value: Option<&Value>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    let Some(value) = value else {
        return MISSING_TEXT.to_owned();
    };
    match millis_from_value(value) {
        Some(millis) => format_wall_clock(millis, tz),
        None => match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        },
    }
}

fn dwell_text(raw: &RawEntryRecord) -> String {
    if let Some(value) = raw.first(DWELL_TEXT_KEYS) {
        return match value {
            Value::String(text) => text.clone(),
            other => number_from_value(other)
                .map_or_else(|| other.to_string(), minutes_text),
        };
    }
    raw.fields
        .get(DWELL_MINUTES_KEY)
        .and_then(number_from_value)
        .filter(|minutes| *minutes != 0.0)
        .map_or_else(|| MISSING_TEXT.to_owned(), minutes_text)
}

fn minutes_text(minutes: f64) -> String {
    format!("{} min", round_to_i64(minutes))
}
