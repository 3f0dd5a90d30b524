mod alert_feed;
mod dashboard;
mod dashboard_config;
mod entries_controller;
mod ingest_controller;
mod metrics_controller;
mod occupancy_controller;
mod pager;
mod query;
mod snapshot;

pub use alert_feed::AlertFeed;
pub use dashboard::{Dashboard, DemographicsView};
pub use dashboard_config::{DEFAULT_GRANULARITY, DEFAULT_SITE_ID, DashboardConfig};
pub use ingest_controller::RealtimeChannel;
pub use pager::Pager;
pub use query::{AnalyticsEndpoint, AnalyticsQuery};
pub use snapshot::{
    DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1, DashboardSnapshot, DashboardSnapshotJsonContractV1,
};
