use price_chart::core::{ChartLayout, Padding, ScaleRange, ValueScale, Viewport};
use proptest::prelude::*;

proptest! {
    #[test]
    fn larger_values_never_map_lower_on_screen(
        min in 0.01f64..500.0,
        span in 0.0f64..500.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0
    ) {
        let layout = ChartLayout::new(Viewport::new(330.0, 250.0), Padding::new(15.0, 20.0))
            .expect("valid layout");
        let scale = ValueScale::new(ScaleRange { min, max: min + span }, layout);

        let v1 = min + a.max(b) * span;
        let v2 = min + a.min(b) * span;
        prop_assert!(scale.value_to_y(v1) <= scale.value_to_y(v2));
    }

    #[test]
    fn shared_range_covers_every_series(
        first in proptest::collection::vec(0.01f64..100.0, 1..32),
        second in proptest::collection::vec(0.01f64..100.0, 0..32)
    ) {
        let range = ScaleRange::from_series([first.as_slice(), second.as_slice()])
            .expect("range");
        prop_assert!(range.max >= range.min);
        for value in first.iter().chain(&second) {
            prop_assert!(*value >= range.min && *value <= range.max);
        }
    }
}
