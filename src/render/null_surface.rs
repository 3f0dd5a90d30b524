use crate::api::DashboardSnapshot;
use crate::error::DashboardResult;
use crate::render::Surface;

/// Headless surface for tests and tooling.
///
/// It still validates each snapshot so broken geometry fails before a real
/// surface sees it.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub presented: usize,
    pub last_point_count: usize,
}

impl Surface for NullSurface {
    fn present(&mut self, snapshot: &DashboardSnapshot) -> DashboardResult<()> {
        snapshot.validate()?;
        self.presented += 1;
        self.last_point_count = snapshot
            .occupancy_chart
            .as_ref()
            .map_or(0, |chart| chart.points.len());
        Ok(())
    }
}
