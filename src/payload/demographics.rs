use serde::{Deserialize, Serialize};

use crate::core::lenient;
use crate::core::{Bucket, Metric};
use crate::error::DashboardResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GenderCounts {
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub male: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub female: Option<f64>,
}

/// Response of the demographics endpoint.
///
/// Shapes are resolved in priority order: a nested `demographics` object, then
/// top-level `male`/`female` when either is non-zero, then a bucket series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemographicsPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demographics: Option<GenderCounts>,
    #[serde(flatten)]
    pub flat: GenderCounts,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buckets: Option<Vec<Bucket>>,
}

impl DemographicsPayload {
    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        super::decode("demographics", input)
    }

    /// `(male, female)` from the aggregate, or from the latest bucket of a series.
    #[must_use]
    pub fn counts(&self) -> (f64, f64) {
        if let Some(counts) = self.aggregate() {
            return (counts.male.unwrap_or(0.0), counts.female.unwrap_or(0.0));
        }
        self.series().last().map_or((0.0, 0.0), |latest| {
            (latest.metric(Metric::Male), latest.metric(Metric::Female))
        })
    }

    /// Time series backing the trend lines; empty when an aggregate shape wins.
    #[must_use]
    pub fn series(&self) -> &[Bucket] {
        if self.aggregate().is_some() {
            return &[];
        }
        self.buckets.as_deref().unwrap_or(&[])
    }

    fn aggregate(&self) -> Option<&GenderCounts> {
        self.demographics
            .as_ref()
            .or_else(|| self.flat.has_counts().then_some(&self.flat))
    }
}

impl GenderCounts {
    fn has_counts(&self) -> bool {
        [self.male, self.female]
            .into_iter()
            .flatten()
            .any(|count| count != 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_and_flat_shapes_read_the_same() {
        let nested = DemographicsPayload::from_json_str(r#"{"demographics":{"male":3,"female":1}}"#)
            .expect("decode");
        let flat = DemographicsPayload::from_json_str(r#"{"male":3,"female":1}"#).expect("decode");
        assert_eq!(nested.counts(), (3.0, 1.0));
        assert_eq!(flat.counts(), (3.0, 1.0));
        assert!(flat.series().is_empty());
    }

    #[test]
    fn series_uses_latest_bucket() {
        let payload = DemographicsPayload::from_json_str(
            r#"{"buckets":[{"utc":1,"male":1,"female":1},{"utc":2,"male":6,"female":4}]}"#,
        )
        .expect("decode");
        assert_eq!(payload.counts(), (6.0, 4.0));
        assert_eq!(payload.series().len(), 2);
    }

    #[test]
    fn flat_counts_win_over_buckets() {
        let payload = DemographicsPayload::from_json_str(
            r#"{"male":3,"female":1,"buckets":[{"utc":1,"male":0,"female":9}]}"#,
        )
        .expect("decode");
        assert_eq!(payload.counts(), (3.0, 1.0));
        assert!(payload.series().is_empty());

        let zeros = DemographicsPayload::from_json_str(
            r#"{"male":0,"female":0,"buckets":[{"utc":1,"male":2,"female":9}]}"#,
        )
        .expect("decode");
        assert_eq!(zeros.counts(), (2.0, 9.0));
        assert_eq!(zeros.series().len(), 1);
    }
}
