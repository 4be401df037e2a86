use serde::{Deserialize, Serialize};

use crate::core::scale::ValueScale;
use crate::core::types::ChartLayout;

/// One vertex of a series polyline in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

/// Ordered polyline: the first point is a move, every following point a line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinePath {
    pub points: Vec<PathPoint>,
}

impl LinePath {
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<PathPoint> {
        self.points.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<PathPoint> {
        self.points.last().copied()
    }

    /// Renders an SVG-style path description, e.g. `M 0 10 L 50 5`.
    ///
    /// An empty path yields an empty string so hosts draw nothing.
    #[must_use]
    pub fn to_path_data(&self) -> String {
        self.points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let command = if index == 0 { 'M' } else { 'L' };
                format!("{command} {} {}", point.x, point.y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Horizontal distance between consecutive samples of a `len`-long series.
///
/// A single sample divides by one so the point stays at the left padding.
#[must_use]
pub fn index_step(len: usize, layout: ChartLayout) -> f64 {
    let intervals = len.saturating_sub(1).max(1);
    layout.usable_width() / intervals as f64
}

#[must_use]
pub fn index_to_x(index: usize, len: usize, layout: ChartLayout) -> f64 {
    layout.padding().horizontal + index as f64 * index_step(len, layout)
}

/// Projects a normalized series onto the chart as an ordered polyline.
///
/// Samples are spread evenly across the usable width regardless of the other
/// series lengths; `y` comes from the chart-wide `scale`.
#[must_use]
pub fn build_line_path(values: &[f64], layout: ChartLayout, scale: ValueScale) -> LinePath {
    if values.is_empty() {
        return LinePath::default();
    }

    let step = index_step(values.len(), layout);
    let left = layout.padding().horizontal;
    let points = values
        .iter()
        .enumerate()
        .map(|(index, value)| PathPoint {
            x: left + index as f64 * step,
            y: scale.value_to_y(*value),
        })
        .collect();

    LinePath { points }
}
