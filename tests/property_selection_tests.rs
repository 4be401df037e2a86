use price_chart::interaction::{SelectionController, resolve_series_index};
use proptest::prelude::*;

proptest! {
    #[test]
    fn selection_is_always_a_valid_index(
        pointer_x in -10_000.0f64..10_000.0,
        padding in 0.0f64..50.0,
        usable_width in 1.0f64..2_000.0,
        len in 1usize..200
    ) {
        let mut controller = SelectionController::new();
        let index = controller
            .select_at(pointer_x, padding, usable_width, len)
            .expect("non-empty series selects");
        prop_assert!(index < len);
        prop_assert_eq!(controller.selected_index(), Some(index));
    }

    #[test]
    fn proportional_index_stays_in_target_series(
        reference_len in 1usize..100,
        series_len in 1usize..100,
        selected_seed in 0usize..100
    ) {
        let selected = selected_seed % reference_len;
        let index = resolve_series_index(selected, reference_len, series_len)
            .expect("non-empty series resolves");
        prop_assert!(index < series_len);
    }
}
