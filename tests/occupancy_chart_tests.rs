use approx::assert_relative_eq;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use site_analytics::core::{
    Bucket, LIVE_POINT_LABEL, OccupancyChartConfig, TimeAxisMode, project_occupancy,
};

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, hour, minute, 0)
        .single()
        .expect("valid time")
}

fn ms(hour: u32, minute: u32) -> i64 {
    at(hour, minute).timestamp_millis()
}

fn sample_buckets() -> Vec<Bucket> {
    vec![
        Bucket::with_avg(ms(6, 0), 100.0),
        Bucket::with_avg(ms(12, 0), 50.0),
        Bucket::with_avg(ms(18, 0), 10.0),
    ]
}

#[test]
fn fixed_day_places_buckets_on_the_local_day() {
    let config = OccupancyChartConfig::default();
    let chart =
        project_occupancy(&sample_buckets(), 25.0, &at(15, 0), &config).expect("chart");

    assert_eq!(chart.mode, TimeAxisMode::FixedDay);
    assert_eq!(chart.value_axis.max, 100.0);
    assert_eq!(chart.points.len(), 3);

    let noon = &chart.points[1];
    assert!((noon.x - 400.0).abs() <= 1e-9);
    assert!((noon.y - 110.0).abs() <= 1e-9);
    assert_eq!(noon.value, 50);
    assert_eq!(noon.time, "12:00");

    let peak = &chart.points[0];
    assert!((peak.x - 200.0).abs() <= 1e-9);
    assert!((peak.y - 20.0).abs() <= 1e-9);
}

#[test]
fn noon_bucket_at_axis_max_sits_at_the_middle_top() {
    let buckets = [
        Bucket::with_avg(ms(0, 0), 0.0),
        Bucket::with_avg(ms(12, 0), 100.0),
    ];
    let config = OccupancyChartConfig::default();
    let chart = project_occupancy(&buckets, 0.0, &at(18, 0), &config).expect("chart");

    let noon = &chart.points[1];
    assert_relative_eq!(noon.x, 400.0);
    assert_relative_eq!(noon.y, 20.0);
    assert_relative_eq!(chart.points[0].x, 0.0);
    assert_relative_eq!(chart.points[0].y, 200.0);
}

#[test]
fn live_point_closes_the_series_at_now() {
    let config = OccupancyChartConfig::default();
    let chart =
        project_occupancy(&sample_buckets(), 25.0, &at(15, 0), &config).expect("chart");

    let live = chart.points.last().expect("live point");
    assert_eq!(live.time, LIVE_POINT_LABEL);
    assert_eq!(live.value, 25);
    assert!((live.x - 500.0).abs() <= 1e-9);
    assert!((live.y - 155.0).abs() <= 1e-9);
    assert!((chart.live_x - 500.0).abs() <= 1e-9);
}

#[test]
fn future_buckets_are_not_plotted() {
    let config = OccupancyChartConfig::default();
    let chart =
        project_occupancy(&sample_buckets(), 25.0, &at(15, 0), &config).expect("chart");

    assert!(chart.points.iter().all(|point| point.time != "18:00"));
    assert!(chart.points.iter().all(|point| point.x <= chart.live_x));
}

#[test]
fn paths_follow_the_points() {
    let config = OccupancyChartConfig::default();
    let chart =
        project_occupancy(&sample_buckets(), 25.0, &at(15, 0), &config).expect("chart");

    assert_eq!(chart.line_path, "M200,20 L400,110 L500,155");
    assert_eq!(
        chart.fill_path,
        "M200,20 L400,110 L500,155 L500,200 L200,200 Z"
    );
}

#[test]
fn fixed_day_labels_cover_the_whole_day() {
    let chart = project_occupancy(
        &sample_buckets(),
        0.0,
        &at(15, 0),
        &OccupancyChartConfig::default(),
    )
    .expect("chart");
    assert_eq!(
        chart.time_labels,
        vec!["00:00", "04:00", "08:00", "12:00", "16:00", "20:00", "24:00"]
    );
}

#[test]
fn point_labels_use_the_zone_of_now() {
    let zone = FixedOffset::east_opt(2 * 3_600).expect("offset");
    let now = at(15, 0).with_timezone(&zone);
    let chart = project_occupancy(
        &sample_buckets(),
        0.0,
        &now,
        &OccupancyChartConfig::default(),
    )
    .expect("chart");

    assert_eq!(chart.points[0].time, "08:00");
    // 17:00 local is 17/24 of the local day.
    assert!((chart.live_x - 800.0 * 17.0 / 24.0).abs() <= 1e-9);
}

#[test]
fn live_value_above_the_axis_is_clamped() {
    let chart = project_occupancy(
        &sample_buckets(),
        1_000.0,
        &at(15, 0),
        &OccupancyChartConfig::default(),
    )
    .expect("chart");
    let live = chart.points.last().expect("live point");
    assert!((live.y - 20.0).abs() <= 1e-9);
    assert_eq!(live.value, 1_000);
}

#[test]
fn no_usable_buckets_yields_no_chart() {
    let config = OccupancyChartConfig::default();
    assert!(project_occupancy(&[], 10.0, &at(15, 0), &config).is_none());
    assert!(project_occupancy(&[Bucket::default()], 10.0, &at(15, 0), &config).is_none());
    assert!(
        project_occupancy(&[Bucket::with_avg(0, 5.0)], 10.0, &at(15, 0), &config).is_none()
    );

    let only_future = [Bucket::with_avg(ms(20, 0), 5.0)];
    assert!(project_occupancy(&only_future, 10.0, &at(15, 0), &config).is_none());
}

#[test]
fn buckets_without_timestamp_are_skipped() {
    let mut buckets = sample_buckets();
    buckets.insert(1, Bucket::default());
    let chart = project_occupancy(
        &buckets,
        0.0,
        &at(15, 0),
        &OccupancyChartConfig::default(),
    )
    .expect("chart");
    assert_eq!(chart.points.len(), 3);
}

#[test]
fn nearest_point_resolves_hover_positions() {
    let chart = project_occupancy(
        &sample_buckets(),
        25.0,
        &at(15, 0),
        &OccupancyChartConfig::default(),
    )
    .expect("chart");

    assert_eq!(chart.nearest_point(0.0).map(|p| p.time.as_str()), Some("06:00"));
    assert_eq!(chart.nearest_point(390.0).map(|p| p.time.as_str()), Some("12:00"));
    assert_eq!(
        chart.nearest_point(790.0).map(|p| p.time.as_str()),
        Some(LIVE_POINT_LABEL)
    );
    assert!(chart.nearest_point(f64::NAN).is_none());
}

#[test]
fn chart_config_rejects_degenerate_layouts() {
    let config = OccupancyChartConfig {
        padding: 200.0,
        ..OccupancyChartConfig::default()
    };
    assert!(config.validate().is_err());

    let config = OccupancyChartConfig {
        label_hour_step: 0,
        ..OccupancyChartConfig::default()
    };
    assert!(config.validate().is_err());

    assert!(OccupancyChartConfig::default().validate().is_ok());
}
