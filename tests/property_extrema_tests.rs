use price_chart::core::extrema_indices;
use proptest::prelude::*;

proptest! {
    #[test]
    fn extrema_include_endpoints_in_ascending_order(
        values in proptest::collection::vec(0.01f64..10.0, 1..128),
        min_distance in 1usize..8
    ) {
        let indices = extrema_indices(&values, min_distance);

        prop_assert_eq!(indices.first().copied(), Some(0));
        prop_assert_eq!(indices.last().copied(), Some(values.len() - 1));
        for pair in indices.windows(2) {
            prop_assert!(pair[1] > pair[0]);
        }
        // Interior points respect spacing against their predecessor.
        if indices.len() > 2 {
            for pair in indices[..indices.len() - 1].windows(2) {
                prop_assert!(pair[1] - pair[0] >= min_distance);
            }
        }
    }
}
