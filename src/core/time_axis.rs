use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: i64 = 86_400_000;
const ORDINAL_LABEL_TARGET: usize = 6;

/// Horizontal layout policy for time-bucketed charts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeAxisMode {
    /// X domain is the current local calendar day, whatever the bucket range.
    #[default]
    FixedDay,
    /// X domain is the index range of the valid buckets.
    Ordinal,
}

/// `[local midnight, next local midnight)` in epoch millis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl DayWindow {
    /// Calendar day of `now` in its own time zone.
    #[must_use]
    pub fn containing<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let tz = now.timezone();
        let date = now.date_naive();
        let now_ms = now.timestamp_millis();

        let start_ms = local_midnight_ms(&tz, date).unwrap_or_else(|| {
            now_ms - i64::from(now.time().num_seconds_from_midnight()) * 1_000
                - i64::from(now.time().nanosecond() / 1_000_000)
        });
        let end_ms = date
            .succ_opt()
            .and_then(|next| local_midnight_ms(&tz, next))
            .filter(|end| *end > start_ms)
            .unwrap_or(start_ms + MILLIS_PER_DAY);

        Self { start_ms, end_ms }
    }

    #[must_use]
    pub fn length_ms(self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// Horizontal position of `utc`, clamped to `[0, width]`.
    #[must_use]
    pub fn x_for(self, utc: i64, width: f64) -> f64 {
        let offset = (utc - self.start_ms) as f64;
        let x = offset / self.length_ms() as f64 * width;
        x.clamp(0.0, width)
    }
}

fn local_midnight_ms<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Option<i64> {
    tz.from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .map(|midnight| midnight.timestamp_millis())
}

/// Fixed marks `00:00, 04:00, …, 24:00` for a day-wide axis.
#[must_use]
pub fn fixed_day_labels(hour_step: u32) -> Vec<String> {
    let step = usize::try_from(hour_step.clamp(1, 24)).unwrap_or(4);
    (0..=24_u32)
        .step_by(step)
        .map(|hour| format!("{hour:02}:00"))
        .collect()
}

/// Samples about six labels from `labels`, always ending on the final one.
#[must_use]
pub fn ordinal_labels(labels: &[String]) -> Vec<String> {
    let Some(last) = labels.last() else {
        return Vec::new();
    };

    let step = labels.len().div_ceil(ORDINAL_LABEL_TARGET).max(1);
    let mut sampled: Vec<String> = labels.iter().step_by(step).cloned().collect();
    if sampled.last() != Some(last) {
        sampled.push(last.clone());
    }
    sampled
}

/// 24-hour `HH:MM` used for chart points and tooltips.
#[must_use]
pub fn format_clock_label<Tz: TimeZone>(utc: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format_in_zone(utc, tz, "%H:%M")
}

/// 12-hour `hh:MM AM` used for visitor entry and exit times.
#[must_use]
pub fn format_wall_clock<Tz: TimeZone>(utc: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format_in_zone(utc, tz, "%I:%M %p")
}

fn format_in_zone<Tz: TimeZone>(utc: i64, tz: &Tz, pattern: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    DateTime::<Utc>::from_timestamp_millis(utc).map_or_else(
        || "--".to_owned(),
        |time| time.with_timezone(tz).format(pattern).to_string(),
    )
}
