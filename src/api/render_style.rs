use serde::{Deserialize, Serialize};

use crate::extensions::MarkerPlacementConfig;
use crate::render::Color;

/// Style contract used when turning a render model into draw commands.
///
/// Series colors come from the series themselves; everything else lives here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub series_line_width: f64,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub selection_line_color: Color,
    pub selection_line_width: f64,
    pub selection_dash_px: f64,
    pub selection_gap_px: f64,
    /// Extrema are part of every render model; drawing them is opt-in.
    pub show_extrema_markers: bool,
    pub marker_placement: MarkerPlacementConfig,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            series_line_width: 2.5,
            grid_line_color: Color::rgb(240.0 / 255.0, 240.0 / 255.0, 240.0 / 255.0),
            grid_line_width: 1.0,
            selection_line_color: Color::rgb(102.0 / 255.0, 102.0 / 255.0, 102.0 / 255.0),
            selection_line_width: 2.0,
            selection_dash_px: 5.0,
            selection_gap_px: 5.0,
            show_extrema_markers: false,
            marker_placement: MarkerPlacementConfig::default(),
        }
    }
}

impl RenderStyle {
    #[must_use]
    pub fn with_extrema_markers(mut self, show: bool) -> Self {
        self.show_extrema_markers = show;
        self
    }
}
