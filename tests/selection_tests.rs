use price_chart::core::{ChartLayout, Padding, Viewport};
use price_chart::interaction::{SelectionController, pointer_to_index, resolve_series_index};

#[test]
fn selection_starts_empty() {
    let controller = SelectionController::new();
    assert_eq!(controller.selected_index(), None);
}

#[test]
fn select_at_rounds_to_nearest_index() {
    let mut controller = SelectionController::new();

    assert_eq!(controller.select_at(15.0, 15.0, 300.0, 31), Some(0));
    assert_eq!(controller.select_at(165.0, 15.0, 300.0, 31), Some(15));
    assert_eq!(controller.select_at(172.0, 15.0, 300.0, 31), Some(16));
    assert_eq!(controller.select_at(315.0, 15.0, 300.0, 31), Some(30));
    assert_eq!(controller.selected_index(), Some(30));
}

#[test]
fn out_of_bounds_pointer_clamps() {
    let mut controller = SelectionController::new();

    assert_eq!(controller.select_at(-100.0, 15.0, 300.0, 30), Some(0));
    assert_eq!(controller.select_at(5.0, 15.0, 300.0, 30), Some(0));
    assert_eq!(controller.select_at(1_000.0, 15.0, 300.0, 30), Some(29));
    assert_eq!(controller.select_at(f64::INFINITY, 15.0, 300.0, 30), Some(29));
}

#[test]
fn clear_resets_selection() {
    let mut controller = SelectionController::new();
    controller.select_at(100.0, 0.0, 200.0, 10);
    assert!(controller.selected_index().is_some());

    controller.clear();
    assert_eq!(controller.selected_index(), None);
}

#[test]
fn empty_reference_series_leaves_no_selection() {
    let mut controller = SelectionController::new();
    controller.select_at(100.0, 0.0, 200.0, 10);

    assert_eq!(controller.select_at(100.0, 0.0, 200.0, 0), None);
    assert_eq!(controller.selected_index(), None);
}

#[test]
fn single_sample_always_selects_zero() {
    assert_eq!(pointer_to_index(0.0, 15.0, 300.0, 1), Some(0));
    assert_eq!(pointer_to_index(500.0, 15.0, 300.0, 1), Some(0));
}

#[test]
fn pointer_down_uses_layout_padding() {
    let layout = ChartLayout::new(Viewport::new(330.0, 250.0), Padding::new(15.0, 20.0))
        .expect("valid layout");
    let mut controller = SelectionController::new();

    assert_eq!(controller.on_pointer_down(315.0, layout, 24), Some(23));
    assert_eq!(controller.on_pointer_down(15.0, layout, 24), Some(0));
}

#[test]
fn clamp_to_shrinks_selection_with_reference() {
    let mut controller = SelectionController::new();
    controller.select_at(300.0, 0.0, 300.0, 30);
    assert_eq!(controller.selected_index(), Some(29));

    controller.clamp_to(10);
    assert_eq!(controller.selected_index(), Some(9));

    controller.clamp_to(0);
    assert_eq!(controller.selected_index(), None);
}

#[test]
fn differing_lengths_resolve_proportionally() {
    assert_eq!(resolve_series_index(0, 30, 24), Some(0));
    assert_eq!(resolve_series_index(6, 30, 24), Some(4));
    assert_eq!(resolve_series_index(15, 30, 24), Some(12));
    assert_eq!(resolve_series_index(29, 30, 24), Some(23));
    assert_eq!(resolve_series_index(23, 24, 30), Some(28));
    assert_eq!(resolve_series_index(12, 24, 24), Some(12));
}
