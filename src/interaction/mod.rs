use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::ChartLayout;

/// Selected data index, or nothing inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected_index: Option<usize>,
}

/// Maps pointer positions to data indices and holds the current selection.
///
/// The selection is always `None` or a valid index into the reference series
/// it was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(self) -> SelectionState {
        self.state
    }

    #[must_use]
    pub fn selected_index(self) -> Option<usize> {
        self.state.selected_index
    }

    /// Selects the index nearest to `pointer_x` and returns it.
    ///
    /// Positions before or after the plot clamp to the first or last index.
    /// An empty reference series has no valid index, so the selection clears.
    pub fn select_at(
        &mut self,
        pointer_x: f64,
        horizontal_padding: f64,
        usable_width: f64,
        series_len: usize,
    ) -> Option<usize> {
        let index = pointer_to_index(pointer_x, horizontal_padding, usable_width, series_len);
        trace!(pointer_x, series_len, ?index, "select at pointer");
        self.state.selected_index = index;
        index
    }

    /// Pointer-down callback wired through a chart layout.
    pub fn on_pointer_down(
        &mut self,
        pointer_x: f64,
        layout: ChartLayout,
        series_len: usize,
    ) -> Option<usize> {
        self.select_at(
            pointer_x,
            layout.padding().horizontal,
            layout.usable_width(),
            series_len,
        )
    }

    /// Re-clamps the held index after the reference series changed length.
    pub fn clamp_to(&mut self, series_len: usize) {
        self.state.selected_index = match (self.state.selected_index, series_len) {
            (_, 0) => None,
            (Some(index), len) => Some(index.min(len - 1)),
            (None, _) => None,
        };
    }

    pub fn clear(&mut self) {
        trace!("clear selection");
        self.state.selected_index = None;
    }
}

/// Nearest-index lookup used by [`SelectionController::select_at`].
///
/// Non-finite pointers and a collapsed drawable width resolve to index `0`.
#[must_use]
pub fn pointer_to_index(
    pointer_x: f64,
    horizontal_padding: f64,
    usable_width: f64,
    series_len: usize,
) -> Option<usize> {
    let last = series_len.checked_sub(1)?;
    if last == 0 || usable_width <= 0.0 || !usable_width.is_finite() {
        return Some(0);
    }

    let relative_x = pointer_x - horizontal_padding;
    let raw = (relative_x / usable_width * last as f64).round();
    if raw.is_nan() || raw <= 0.0 {
        return Some(0);
    }
    if raw >= last as f64 {
        return Some(last);
    }
    Some(raw as usize)
}

/// Resolves a reference-space selection into another series' index space.
///
/// Equal lengths share the absolute index. Otherwise the index is taken at the
/// same proportional position, `floor(selected / reference_len * series_len)`,
/// and clamped. Series of 24 hourly buckets and 30 daily samples therefore do
/// not line up exactly; that matches how the price client reads them.
#[must_use]
pub fn resolve_series_index(
    selected: usize,
    reference_len: usize,
    series_len: usize,
) -> Option<usize> {
    let last = series_len.checked_sub(1)?;
    if reference_len == 0 {
        return None;
    }
    if reference_len == series_len {
        return Some(selected.min(last));
    }

    let position = selected as f64 / reference_len as f64;
    let index = (position * series_len as f64).floor() as usize;
    Some(index.min(last))
}

#[cfg(test)]
mod tests {
    use super::{pointer_to_index, resolve_series_index};

    #[test]
    fn nan_pointer_resolves_to_first_index() {
        assert_eq!(pointer_to_index(f64::NAN, 15.0, 100.0, 10), Some(0));
    }

    #[test]
    fn collapsed_width_resolves_to_first_index() {
        assert_eq!(pointer_to_index(50.0, 15.0, 0.0, 10), Some(0));
    }

    #[test]
    fn proportional_lookup_clamps_into_target_series() {
        assert_eq!(resolve_series_index(29, 30, 24), Some(23));
        assert_eq!(resolve_series_index(15, 30, 24), Some(12));
        assert_eq!(resolve_series_index(5, 10, 10), Some(5));
        assert_eq!(resolve_series_index(5, 10, 0), None);
    }
}
