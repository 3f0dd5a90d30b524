use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use site_analytics::core::{
    Bucket, OccupancyChartConfig, TimeAxisMode, ValueAxis, ValueAxisTuning, project_occupancy,
};

proptest! {
    #[test]
    fn axis_max_is_a_rounded_upper_bound(data_max in -1_000.0f64..100_000.0) {
        let axis = ValueAxis::from_data_max(data_max, ValueAxisTuning::default());
        prop_assert!(axis.max >= 50.0);
        prop_assert!(axis.max >= data_max);
        prop_assert_eq!(axis.max % 50.0, 0.0);
        prop_assert_eq!(axis.labels.len(), 6);
        prop_assert_eq!(axis.labels[5], 0);
    }

    #[test]
    fn fixed_day_geometry_stays_inside_the_viewport(
        minutes in proptest::collection::vec(1u32..1_440, 1..96),
        values in proptest::collection::vec(0.0f64..5_000.0, 1..96),
        live in 0.0f64..6_000.0,
    ) {
        let day_start = Utc
            .with_ymd_and_hms(2024, 5, 10, 0, 0, 0)
            .single()
            .expect("valid time");
        let now = day_start + chrono::Duration::hours(23) + chrono::Duration::minutes(59);
        let base = day_start.timestamp_millis();

        let len = minutes.len().min(values.len());
        let buckets: Vec<Bucket> = (0..len)
            .map(|i| Bucket::with_avg(base + i64::from(minutes[i]) * 60_000, values[i]))
            .collect();

        let config = OccupancyChartConfig::default();
        let chart = project_occupancy(&buckets, live, &now, &config).expect("chart");

        prop_assert_eq!(chart.points.len(), len + 1);
        for point in &chart.points {
            prop_assert!(point.x >= 0.0 && point.x <= 800.0);
            prop_assert!(point.y >= 0.0 && point.y <= 200.0);
        }
        prop_assert_eq!(chart.line_path.matches('M').count(), 1);
        prop_assert_eq!(chart.line_path.matches(" L").count(), chart.points.len() - 1);
        prop_assert!(chart.fill_path.starts_with(&chart.line_path));
        prop_assert!(chart.fill_path.ends_with(" Z"));
        prop_assert_eq!(
            chart.fill_path.matches(" L").count(),
            chart.points.len() + 1
        );
    }

    #[test]
    fn larger_values_plot_higher(
        values in proptest::collection::vec(0.0f64..1_000.0, 2..64),
    ) {
        let buckets: Vec<Bucket> = values
            .iter()
            .enumerate()
            .map(|(i, value)| Bucket::with_avg(1_000 + i as i64, *value))
            .collect();
        let config = OccupancyChartConfig {
            mode: TimeAxisMode::Ordinal,
            ..OccupancyChartConfig::default()
        };
        let now = Utc.timestamp_millis_opt(1_000_000).single().expect("valid time");
        let chart = project_occupancy(&buckets, 0.0, &now, &config).expect("chart");

        prop_assert_eq!(chart.points.len(), values.len());
        for (a, b) in chart.points.iter().zip(chart.points.iter().skip(1)) {
            prop_assert!(a.x < b.x);
        }
        let highest = chart
            .points
            .iter()
            .map(|point| point.y)
            .fold(f64::INFINITY, f64::min);
        let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let index = values.iter().position(|v| *v == max_value).expect("max present");
        prop_assert!((chart.points[index].y - highest).abs() <= 1e-9);
    }
}
