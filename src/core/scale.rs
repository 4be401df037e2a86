use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::types::ChartLayout;

/// Value domain shared by every series drawn on one chart.
///
/// Invariant: `max >= min`. A flat domain keeps `min == max` and maps through
/// an effective span of `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleRange {
    pub min: f64,
    pub max: f64,
}

impl ScaleRange {
    /// Computes the union range over all samples of all sequences.
    ///
    /// Returns `None` when no sequence contributes a finite sample.
    pub fn from_series<'a, I>(series: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a [f64]>,
    {
        let mut samples = series
            .into_iter()
            .flat_map(|values| values.iter().copied())
            .filter(|value| value.is_finite())
            .peekable();
        samples.peek()?;

        let (min, max) = samples.fold(
            (OrderedFloat(f64::INFINITY), OrderedFloat(f64::NEG_INFINITY)),
            |(min, max), value| (min.min(OrderedFloat(value)), max.max(OrderedFloat(value))),
        );

        Some(Self {
            min: min.into_inner(),
            max: max.into_inner(),
        })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Span used as divisor; a flat range is clamped to `1.0`.
    #[must_use]
    pub fn effective_span(self) -> f64 {
        let span = self.span();
        if span != 0.0 { span } else { 1.0 }
    }

    #[must_use]
    pub fn is_flat(self) -> bool {
        self.span() == 0.0
    }
}

/// Maps values onto the inverted vertical pixel axis of a chart.
///
/// Larger values land higher on screen, i.e. at smaller `y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    range: ScaleRange,
    layout: ChartLayout,
}

impl ValueScale {
    #[must_use]
    pub fn new(range: ScaleRange, layout: ChartLayout) -> Self {
        Self { range, layout }
    }

    #[must_use]
    pub fn range(self) -> ScaleRange {
        self.range
    }

    #[must_use]
    pub fn layout(self) -> ChartLayout {
        self.layout
    }

    #[must_use]
    pub fn value_to_y(self, value: f64) -> f64 {
        let height = self.layout.height();
        let vertical = self.layout.padding().vertical;
        let normalized = (value - self.range.min) / self.range.effective_span();
        height - vertical - normalized * self.layout.usable_height()
    }

    /// Inverse of [`ValueScale::value_to_y`] for a non-degenerate drawable height.
    #[must_use]
    pub fn y_to_value(self, y: f64) -> Option<f64> {
        let usable_height = self.layout.usable_height();
        if usable_height <= 0.0 || !y.is_finite() {
            return None;
        }
        let bottom = self.layout.height() - self.layout.padding().vertical;
        let normalized = (bottom - y) / usable_height;
        Some(self.range.min + normalized * self.range.effective_span())
    }
}

#[cfg(test)]
mod tests {
    use super::ScaleRange;

    #[test]
    fn range_ignores_empty_sequences() {
        let empty: [f64; 0] = [];
        let range = ScaleRange::from_series([&empty[..], &[2.0, 1.0][..]]).expect("range");
        assert_eq!(range, ScaleRange { min: 1.0, max: 2.0 });
        assert!(ScaleRange::from_series([&empty[..]]).is_none());
    }
}
