use price_chart::core::{
    ChartLayout, Padding, ScaleRange, ValueScale, Viewport, build_line_path,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn path_has_one_point_per_sample_with_increasing_x(
        values in proptest::collection::vec(0.01f64..1_000.0, 2..96),
        width in 50.0f64..2_000.0,
        height in 50.0f64..1_000.0,
        padding_ratio in 0.0f64..0.45
    ) {
        let layout = ChartLayout::new(
            Viewport::new(width, height),
            Padding::new(width * padding_ratio, height * padding_ratio),
        )
        .expect("valid layout");
        let range = ScaleRange::from_series([values.as_slice()]).expect("range");
        let path = build_line_path(&values, layout, ValueScale::new(range, layout));

        prop_assert_eq!(path.len(), values.len());
        for pair in path.points.windows(2) {
            prop_assert!(pair[1].x > pair[0].x);
        }
        for point in &path.points {
            prop_assert!(point.x.is_finite() && point.y.is_finite());
            prop_assert!(point.y >= layout.padding().vertical - 1e-9);
            prop_assert!(point.y <= height - layout.padding().vertical + 1e-9);
        }
    }
}
