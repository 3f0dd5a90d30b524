//! SVG path strings for polylines and their area fills.
//!
//! Coordinates are written with Rust's shortest round-trip float formatting,
//! so whole numbers print without a fractional part (`M0,200 L400,20`).

use std::fmt::Write as _;

/// Polyline through `points` in order: `M{x0},{y0} L{x1},{y1} ...`.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn line_path(points: impl IntoIterator<Item = (f64, f64)>) -> Option<String> {
    let mut out = String::new();
    for (x, y) in points {
        if out.is_empty() {
            let _ = write!(out, "M{x},{y}");
        } else {
            let _ = write!(out, " L{x},{y}");
        }
    }
    (!out.is_empty()).then_some(out)
}

/// Closes `line` against the `baseline` under its first and last x.
#[must_use]
pub fn fill_path(line: &str, first_x: f64, last_x: f64, baseline: f64) -> String {
    format!("{line} L{last_x},{baseline} L{first_x},{baseline} Z")
}

/// Horizontal reference line spanning `[0, width]` at `y`.
#[must_use]
pub fn flat_path(y: f64, width: f64) -> String {
    format!("M0,{y} L{width},{y}")
}
