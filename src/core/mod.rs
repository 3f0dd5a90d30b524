pub mod bucket;
pub mod demographics;
pub(crate) mod lenient;
pub mod occupancy;
pub mod path;
pub mod time_axis;
pub mod types;
pub mod value_axis;

pub use bucket::{Bucket, BucketWindow, Metric};
pub use demographics::{
    DemographicSplit, DemographicTrend, DemographicTrendConfig, project_demographic_trend,
};
pub use occupancy::{LIVE_POINT_LABEL, OccupancyChart, OccupancyChartConfig, project_occupancy};
pub use path::{fill_path, flat_path, line_path};
pub use time_axis::{
    DayWindow, TimeAxisMode, fixed_day_labels, format_clock_label, format_wall_clock,
    ordinal_labels,
};
pub use types::{ChartPoint, Viewport};
pub use value_axis::{ValueAxis, ValueAxisTuning, max_metric};
