use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// Drawing surface size in chart units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> DashboardResult<Self> {
        if !self.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }
}

/// One projected, hoverable chart point.
///
/// Points are recomputed wholesale on every update and carry no identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub value: i64,
    pub time: String,
}

impl ChartPoint {
    #[must_use]
    pub fn new(x: f64, y: f64, value: i64, time: impl Into<String>) -> Self {
        Self {
            x,
            y,
            value,
            time: time.into(),
        }
    }
}

/// Rounds half away from zero and saturates into `i64`.
#[must_use]
pub(crate) fn round_to_i64(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let rounded = value.round();
    if rounded >= i64::MAX as f64 {
        i64::MAX
    } else if rounded <= i64::MIN as f64 {
        i64::MIN
    } else {
        rounded as i64
    }
}
