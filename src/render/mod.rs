mod null_surface;

pub use null_surface::NullSurface;

use crate::api::DashboardSnapshot;
use crate::error::DashboardResult;

/// Contract implemented by whatever draws the dashboard.
///
/// Surfaces receive a fully derived, immutable snapshot so drawing code never
/// touches payload decoding or geometry.
pub trait Surface {
    fn present(&mut self, snapshot: &DashboardSnapshot) -> DashboardResult<()>;
}
