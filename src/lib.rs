//! site-analytics: chart geometry and payload normalization for a site
//! occupancy dashboard.
//!
//! Analytics responses are decoded once into closed payload types, turned
//! into immutable chart values (axis labels, SVG path strings, hover points)
//! and collected into a snapshot that a rendering surface draws.

pub mod api;
pub mod core;
pub mod error;
pub mod payload;
pub mod render;
pub mod telemetry;

pub use api::{Dashboard, DashboardConfig, DashboardSnapshot};
pub use error::{DashboardError, DashboardResult};
