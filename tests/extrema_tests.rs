use price_chart::core::{
    DEFAULT_MIN_EXTREMA_DISTANCE, ExtremumKind, extrema_indices, find_extrema,
};

#[test]
fn degenerate_lengths_return_endpoints() {
    assert!(extrema_indices(&[], 3).is_empty());
    assert_eq!(extrema_indices(&[1.0], 3), vec![0]);
    assert_eq!(extrema_indices(&[1.0, 2.0], 3), vec![0, 1]);
}

#[test]
fn candidates_are_thinned_by_min_distance() {
    let values = [1.0, 3.0, 2.0, 4.0, 1.0, 5.0, 2.0, 6.0, 1.0];
    assert_eq!(extrema_indices(&values, 3), vec![0, 3, 6, 8]);
    assert_eq!(extrema_indices(&values, 1), (0..9).collect::<Vec<_>>());
}

#[test]
fn last_index_is_kept_even_when_close_to_previous() {
    let values = [1.0, 1.0, 1.0, 2.0, 1.0];
    assert_eq!(extrema_indices(&values, 3), vec![0, 3, 4]);
}

#[test]
fn monotonic_series_has_only_endpoints() {
    let values: Vec<f64> = (1..=20).map(f64::from).collect();
    assert_eq!(extrema_indices(&values, DEFAULT_MIN_EXTREMA_DISTANCE), vec![0, 19]);
}

#[test]
fn extrema_are_classified() {
    let values = [1.5, 1.4, 1.45, 1.6, 1.7, 1.65, 1.62, 1.5];
    let extrema = find_extrema(&values, 3);

    let kinds: Vec<(usize, ExtremumKind)> = extrema.iter().map(|e| (e.index, e.kind)).collect();
    assert_eq!(
        kinds,
        vec![
            (0, ExtremumKind::Endpoint),
            (4, ExtremumKind::Peak),
            (7, ExtremumKind::Endpoint),
        ]
    );
}

#[test]
fn zero_min_distance_keeps_every_candidate() {
    let values = [1.0, 2.0, 1.0, 2.0, 1.0];
    assert_eq!(extrema_indices(&values, 0), vec![0, 1, 2, 3, 4]);
}
