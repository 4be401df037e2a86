use serde::{Deserialize, Serialize};

use crate::core::{ChartLayout, Extremum, ExtremumKind, ValueScale, format_price, index_to_x};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerSide {
    Above,
    Below,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPlacementConfig {
    pub marker_size_px: f64,
    pub label_char_width_px: f64,
    pub label_height_px: f64,
    pub label_horizontal_padding_px: f64,
    pub marker_label_gap_px: f64,
    pub vertical_offset_px: f64,
}

impl Default for MarkerPlacementConfig {
    fn default() -> Self {
        Self {
            marker_size_px: 6.0,
            label_char_width_px: 7.0,
            label_height_px: 14.0,
            label_horizontal_padding_px: 4.0,
            marker_label_gap_px: 3.0,
            vertical_offset_px: 4.0,
        }
    }
}

impl MarkerPlacementConfig {
    fn validate(self) -> ChartResult<Self> {
        for (value, name) in [
            (self.marker_size_px, "marker_size_px"),
            (self.label_char_width_px, "label_char_width_px"),
            (self.label_height_px, "label_height_px"),
            (
                self.label_horizontal_padding_px,
                "label_horizontal_padding_px",
            ),
            (self.marker_label_gap_px, "marker_label_gap_px"),
            (self.vertical_offset_px, "vertical_offset_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "marker config `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerLabelGeometry {
    pub text: String,
    pub left_px: f64,
    pub top_px: f64,
    pub width_px: f64,
    pub height_px: f64,
}

/// Extremum annotation positioned next to its sample on the series path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedMarker {
    pub index: usize,
    pub kind: ExtremumKind,
    pub value: f64,
    pub side: MarkerSide,
    pub x: f64,
    pub y: f64,
    pub label: Option<MarkerLabelGeometry>,
}

/// Places one marker per extremum of `values`.
///
/// Peaks sit above the line, valleys below, endpoints on it. Indices that do
/// not exist in `values` are skipped. Labels carry the two-decimal price and
/// are kept inside the viewport horizontally.
pub fn place_extrema_markers(
    values: &[f64],
    extrema: &[Extremum],
    layout: ChartLayout,
    scale: ValueScale,
    config: MarkerPlacementConfig,
) -> ChartResult<Vec<PlacedMarker>> {
    let config = config.validate()?;
    let len = values.len();
    let mut placed = Vec::with_capacity(extrema.len());

    for extremum in extrema {
        let Some(value) = values.get(extremum.index).copied() else {
            continue;
        };

        let side = side_for_kind(extremum.kind);
        let x = index_to_x(extremum.index, len, layout);
        let base_y = scale.value_to_y(value);
        let y = match side {
            MarkerSide::Above => base_y - config.vertical_offset_px,
            MarkerSide::Below => base_y + config.vertical_offset_px,
            MarkerSide::Center => base_y,
        };

        let label = build_label_geometry(&format_price(value), x, y, side, layout, config);
        placed.push(PlacedMarker {
            index: extremum.index,
            kind: extremum.kind,
            value,
            side,
            x,
            y,
            label,
        });
    }

    Ok(placed)
}

fn side_for_kind(kind: ExtremumKind) -> MarkerSide {
    match kind {
        ExtremumKind::Peak => MarkerSide::Above,
        ExtremumKind::Valley => MarkerSide::Below,
        ExtremumKind::Endpoint => MarkerSide::Center,
    }
}

fn marker_label_width(text: &str, config: MarkerPlacementConfig) -> f64 {
    text.chars().count() as f64 * config.label_char_width_px
        + 2.0 * config.label_horizontal_padding_px
}

fn clamp_label_left(center_x: f64, width: f64, viewport_width: f64) -> f64 {
    if viewport_width <= width {
        0.0
    } else {
        (center_x - 0.5 * width).clamp(0.0, viewport_width - width)
    }
}

fn build_label_geometry(
    text: &str,
    x: f64,
    y: f64,
    side: MarkerSide,
    layout: ChartLayout,
    config: MarkerPlacementConfig,
) -> Option<MarkerLabelGeometry> {
    if text.is_empty() {
        return None;
    }

    let width = marker_label_width(text, config);
    let top = match side {
        MarkerSide::Above => {
            y - 0.5 * config.marker_size_px - config.marker_label_gap_px - config.label_height_px
        }
        MarkerSide::Below | MarkerSide::Center => {
            y + 0.5 * config.marker_size_px + config.marker_label_gap_px
        }
    };

    Some(MarkerLabelGeometry {
        text: text.to_owned(),
        left_px: clamp_label_left(x, width, layout.width()),
        top_px: top,
        width_px: width,
        height_px: config.label_height_px,
    })
}
