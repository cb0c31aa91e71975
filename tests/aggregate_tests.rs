use rand::Rng;
use tidemark::{AggregateError, Point, SeriesStore};

#[test]
fn test_aggregate_scenario_with_data() {
    let store = SeriesStore::new();
    store.insert("x", 0, 10.0);
    store.insert("x", 500, 20.0);
    store.insert("x", 1_000, 30.0);

    // to = 999 excludes the point at t = 1000.
    let windows = store.aggregate("x", 0, 999, 500).unwrap();
    assert_eq!(windows.len(), 2);
    assert_eq!(windows[0].start, 0);
    assert_eq!(windows[0].average, Some(10.0));
    assert_eq!(windows[0].count, 1);
    assert_eq!(windows[1].start, 500);
    assert_eq!(windows[1].average, Some(20.0));
    assert_eq!(windows[1].count, 1);
}

#[test]
fn test_aggregate_scenario_empty_series() {
    let store = SeriesStore::new();

    let windows = store.aggregate("y", 0, 999, 500).unwrap();
    assert_eq!(windows.len(), 2);
    assert_eq!(windows[0].start, 0);
    assert_eq!(windows[0].average, None);
    assert_eq!(windows[0].count, 0);
    assert_eq!(windows[1].start, 500);
    assert_eq!(windows[1].average, None);
    assert_eq!(windows[1].count, 0);

    let points = store.downsample("y", 0, 999, 500).unwrap();
    assert_eq!(points, vec![Point::new(0, 0.0), Point::new(500, 0.0)]);
}

#[test]
fn test_window_count_formula() {
    let store = SeriesStore::new();

    // ceil((to - from + 1) / step) windows for from <= to, step > 0.
    for (from, to, step) in [
        (0i64, 999i64, 500i64),
        (0, 1_000, 500),
        (0, 0, 1),
        (0, 0, 1_000),
        (-1_000, 999, 250),
        (7, 2_006, 333),
    ] {
        let windows = store.aggregate("any", from, to, step).unwrap();
        let span = to - from + 1;
        let expected = usize::try_from(span / step + i64::from(span % step != 0)).unwrap();
        assert_eq!(windows.len(), expected, "from={from} to={to} step={step}");

        // Windows tile the range contiguously starting at `from`.
        for (i, window) in windows.iter().enumerate() {
            assert_eq!(window.start, from + i64::try_from(i).unwrap() * step);
        }
    }
}

#[test]
fn test_window_counts_partition_the_queried_points() {
    let store = SeriesStore::new();
    let mut rng = rand::rng();

    for _ in 0..500 {
        store.insert("load", rng.random_range(-2_000..2_000), rng.random_range(0.0..100.0));
    }

    let from = -1_500;
    let to = 1_499;
    let step = 97;
    let queried = store.query_range("load", from, to);
    let windows = store.aggregate("load", from, to, step).unwrap();

    // Every queried point lands in exactly one window.
    let total: usize = windows.iter().map(|w| w.count).sum();
    assert_eq!(total, queried.len());

    for window in &windows {
        let end = window.start + step - 1;
        let in_window = queried
            .iter()
            .filter(|p| p.timestamp_ms >= window.start && p.timestamp_ms <= end)
            .count();
        assert_eq!(window.count, in_window);
    }
}

#[test]
fn test_aggregate_is_idempotent() {
    let store = SeriesStore::new();
    store.insert("x", 10, 1.0);
    store.insert("x", 20, 2.0);
    store.insert("x", 1_500, 9.0);

    let first = store.aggregate("x", 0, 2_000, 300).unwrap();
    let second = store.aggregate("x", 0, 2_000, 300).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_aggregate_inverted_range_yields_no_windows() {
    let store = SeriesStore::new();
    store.insert("x", 0, 1.0);

    let windows = store.aggregate("x", 1, 0, 100).unwrap();
    assert!(windows.is_empty());
}

#[test]
fn test_aggregate_rejects_invalid_step() {
    let store = SeriesStore::new();

    let err = store.aggregate("x", 0, 999, 0).unwrap_err();
    assert!(matches!(err, AggregateError::InvalidStep(0)));
    assert!(err.to_string().contains("positive"));

    assert!(store.aggregate("x", 0, 999, -1).is_err());
    assert!(store.downsample("x", 0, 999, 0).is_err());
}

#[test]
fn test_downsample_matches_aggregate() {
    let store = SeriesStore::new();
    store.insert("x", 0, 4.0);
    store.insert("x", 100, 6.0);
    store.insert("x", 700, -3.0);

    let windows = store.aggregate("x", 0, 999, 250).unwrap();
    let points = store.downsample("x", 0, 999, 250).unwrap();
    assert_eq!(points.len(), windows.len());

    for (window, point) in windows.iter().zip(&points) {
        assert_eq!(point.timestamp_ms, window.start);
        match window.average {
            Some(average) => assert_eq!(point.value, average),
            None => assert_eq!(point.value, 0.0),
        }
    }
}

#[test]
fn test_aggregate_with_negative_range() {
    let store = SeriesStore::new();
    store.insert("x", -900, 3.0);
    store.insert("x", -850, 5.0);

    let windows = store.aggregate("x", -1_000, -501, 250).unwrap();
    assert_eq!(windows.len(), 2);
    assert_eq!(windows[0].start, -1_000);
    assert_eq!(windows[0].average, Some(4.0));
    assert_eq!(windows[0].count, 2);
    assert_eq!(windows[1].start, -750);
    assert_eq!(windows[1].count, 0);
}

#[test]
fn test_aggregate_single_window_spans_whole_range() {
    let store = SeriesStore::new();
    store.insert("x", 0, 1.0);
    store.insert("x", 999, 3.0);

    let windows = store.aggregate("x", 0, 999, 10_000).unwrap();
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].average, Some(2.0));
    assert_eq!(windows[0].count, 2);
}

#[test]
fn test_aggregate_ignores_points_outside_range() {
    let store = SeriesStore::new();
    store.insert("x", -1, 100.0);
    store.insert("x", 50, 7.0);
    store.insert("x", 1_000, 100.0);

    let windows = store.aggregate("x", 0, 999, 500).unwrap();
    assert_eq!(windows[0].count, 1);
    assert_eq!(windows[0].average, Some(7.0));
    assert_eq!(windows[1].count, 0);
}
