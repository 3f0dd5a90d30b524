use site_analytics::api::{DEFAULT_GRANULARITY, DEFAULT_SITE_ID};
use site_analytics::core::{Bucket, BucketWindow, TimeAxisMode};
use site_analytics::render::NullSurface;
use site_analytics::{Dashboard, DashboardConfig, DashboardError};

#[test]
fn defaults_match_the_dashboard_layout() {
    let config = DashboardConfig::default();
    assert_eq!(config.occupancy_chart.mode, TimeAxisMode::FixedDay);
    assert_eq!(config.occupancy_chart.viewport.width, 800);
    assert_eq!(config.occupancy_chart.viewport.height, 200);
    assert_eq!(config.demographic_trend.viewport.width, 400);
    assert_eq!(config.donut_circumference, 440.0);
    assert_eq!(config.entries_per_page, 10);
    assert_eq!(config.site_id, DEFAULT_SITE_ID);
    assert_eq!(config.granularity, DEFAULT_GRANULARITY);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let config = DashboardConfig::from_json_str(
        r#"{"occupancy_chart":{"mode":"ordinal"},"entries_per_page":25}"#,
    )
    .expect("parse config");
    assert_eq!(config.occupancy_chart.mode, TimeAxisMode::Ordinal);
    assert_eq!(config.occupancy_chart.padding, 20.0);
    assert_eq!(config.entries_per_page, 25);
    assert_eq!(config.alert_capacity, 100);
}

#[test]
fn config_json_round_trips() {
    let config = DashboardConfig::default()
        .with_bucket_capacity(64)
        .with_bucket_retention_ms(None)
        .with_alert_capacity(5);
    let json = config.to_json_pretty().expect("serialize");
    let restored = DashboardConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn invalid_configs_are_rejected_at_init() {
    let config = DashboardConfig::default().with_entries_per_page(0);
    assert!(matches!(
        Dashboard::new(NullSurface::default(), config),
        Err(DashboardError::InvalidConfig(_))
    ));

    let config = DashboardConfig::default().with_site_id("  ");
    assert!(Dashboard::new(NullSurface::default(), config).is_err());

    let mut config = DashboardConfig::default();
    config.occupancy_chart.viewport.width = 0;
    assert!(matches!(
        Dashboard::new(NullSurface::default(), config),
        Err(DashboardError::InvalidViewport { width: 0, .. })
    ));

    assert!(DashboardConfig::from_json_str(r#"{"bucket_retention_ms":-1}"#).is_err());
    assert!(DashboardConfig::from_json_str("{not json").is_err());
}

#[test]
fn bucket_window_drops_stale_and_excess_buckets() {
    let hour = 3_600_000;
    let mut window = BucketWindow::new(3, Some(2 * hour));
    window.replace((1..=4).map(|h| Bucket::with_avg(h * hour, 1.0)));
    assert_eq!(window.len(), 3);

    let evicted = window.push(Bucket::with_avg(6 * hour, 1.0));
    assert_eq!(evicted, 2);
    let kept: Vec<i64> = window.iter().filter_map(|b| b.utc).collect();
    assert_eq!(kept, vec![4 * hour, 6 * hour]);

    window.clear();
    assert!(window.is_empty());
}
