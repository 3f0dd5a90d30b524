use site_analytics::core::{Bucket, Metric, ValueAxis, ValueAxisTuning, max_metric};

#[test]
fn axis_max_follows_the_selected_metric() {
    let buckets = [
        Bucket {
            utc: Some(1),
            avg: Some(40.0),
            count: Some(260.0),
            ..Bucket::default()
        },
        Bucket::with_avg(2, 120.0),
    ];

    let by_avg = ValueAxis::from_buckets(&buckets, Metric::Avg, ValueAxisTuning::default());
    assert_eq!(by_avg.max, 150.0);

    let by_count = ValueAxis::from_buckets(&buckets, Metric::Count, ValueAxisTuning::default());
    assert_eq!(by_count.max, 300.0);
    assert_eq!(by_count.labels.as_slice(), &[300, 240, 180, 120, 60, 0]);
}

#[test]
fn exact_multiples_are_not_bumped() {
    let axis = ValueAxis::from_data_max(200.0, ValueAxisTuning::default());
    assert_eq!(axis.max, 200.0);
}

#[test]
fn labels_are_rounded_to_whole_counts() {
    let tuning = ValueAxisTuning {
        floor: 10.0,
        step: 10.0,
        steps: 3,
    };
    let axis = ValueAxis::from_data_max(10.0, tuning);
    assert_eq!(axis.labels.as_slice(), &[10, 7, 3, 0]);
}

#[test]
fn projection_maps_zero_to_bottom_and_max_to_padding() {
    let axis = ValueAxis::from_data_max(100.0, ValueAxisTuning::default());
    assert!((axis.project(0.0, 200.0, 20.0) - 200.0).abs() <= 1e-9);
    assert!((axis.project(100.0, 200.0, 20.0) - 20.0).abs() <= 1e-9);
    assert!((axis.project(-30.0, 200.0, 20.0) - 200.0).abs() <= 1e-9);
    assert!((axis.project(f64::NAN, 200.0, 20.0) - 200.0).abs() <= 1e-9);
}

#[test]
fn missing_metric_values_count_as_zero() {
    let buckets = [Bucket::default(), Bucket::with_avg(1, 7.0)];
    assert_eq!(max_metric(&buckets, Metric::Avg), 7.0);
    assert_eq!(max_metric(&buckets, Metric::Female), 0.0);
    assert_eq!(max_metric(&[], Metric::Avg), 0.0);
}

#[test]
fn tuning_validation_rejects_zero_step() {
    let tuning = ValueAxisTuning {
        step: 0.0,
        ..ValueAxisTuning::default()
    };
    assert!(tuning.validate().is_err());
    assert!(ValueAxisTuning::default().validate().is_ok());
}
