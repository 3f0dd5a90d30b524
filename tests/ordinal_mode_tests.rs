use chrono::{DateTime, TimeZone, Utc};
use site_analytics::core::{
    Bucket, OccupancyChartConfig, TimeAxisMode, ordinal_labels, project_occupancy,
};

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, hour, minute, 0)
        .single()
        .expect("valid time")
}

fn ordinal_config() -> OccupancyChartConfig {
    OccupancyChartConfig {
        mode: TimeAxisMode::Ordinal,
        ..OccupancyChartConfig::default()
    }
}

#[test]
fn ordinal_mode_spreads_buckets_evenly() {
    let buckets = [
        Bucket::with_avg(at(6, 0).timestamp_millis(), 0.0),
        Bucket::with_avg(at(7, 0).timestamp_millis(), 50.0),
        Bucket::with_avg(at(8, 0).timestamp_millis(), 100.0),
    ];
    let chart = project_occupancy(&buckets, 0.0, &at(9, 0), &ordinal_config()).expect("chart");

    assert_eq!(chart.mode, TimeAxisMode::Ordinal);
    assert_eq!(chart.points.len(), 3);
    let xs: Vec<f64> = chart.points.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 400.0, 800.0]);
    assert_eq!(chart.line_path, "M0,200 L400,110 L800,20");
    assert_eq!(chart.fill_path, "M0,200 L400,110 L800,20 L800,200 L0,200 Z");
    assert_eq!(chart.time_labels, vec!["06:00", "07:00", "08:00"]);
    assert!((chart.live_x - 800.0).abs() <= 1e-9);
}

#[test]
fn single_ordinal_point_draws_a_flat_line() {
    let buckets = [Bucket::with_avg(at(6, 0).timestamp_millis(), 25.0)];
    let chart = project_occupancy(&buckets, 0.0, &at(9, 0), &ordinal_config()).expect("chart");

    assert_eq!(chart.points.len(), 1);
    assert!((chart.points[0].x - 0.0).abs() <= 1e-9);
    assert!((chart.points[0].y - 110.0).abs() <= 1e-9);
    assert_eq!(chart.line_path, "M0,110 L800,110");
    assert_eq!(chart.fill_path, "M0,110 L800,110 L800,200 L0,200 Z");
    assert!((chart.live_x - 800.0).abs() <= 1e-9);
}

#[test]
fn ordinal_mode_has_no_live_point() {
    let buckets = [
        Bucket::with_avg(at(6, 0).timestamp_millis(), 10.0),
        Bucket::with_avg(at(7, 0).timestamp_millis(), 20.0),
    ];
    let chart = project_occupancy(&buckets, 45.0, &at(9, 0), &ordinal_config()).expect("chart");
    assert_eq!(chart.points.len(), 2);
    assert_eq!(chart.points[1].time, "07:00");
}

#[test]
fn label_sampling_keeps_about_six_and_ends_on_last() {
    let labels: Vec<String> = (0..13).map(|i| format!("{i:02}:00")).collect();
    assert_eq!(
        ordinal_labels(&labels),
        vec!["00:00", "03:00", "06:00", "09:00", "12:00"]
    );

    let labels: Vec<String> = (0..14).map(|i| format!("{i:02}:00")).collect();
    assert_eq!(
        ordinal_labels(&labels),
        vec!["00:00", "03:00", "06:00", "09:00", "12:00", "13:00"]
    );

    assert!(ordinal_labels(&[]).is_empty());
}

#[test]
fn ordinal_mode_without_valid_buckets_yields_no_chart() {
    let buckets = [Bucket::default(), Bucket::with_avg(-5, 10.0)];
    assert!(project_occupancy(&buckets, 0.0, &at(9, 0), &ordinal_config()).is_none());
}
