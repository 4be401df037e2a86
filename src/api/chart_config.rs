use serde::{Deserialize, Serialize};

use crate::core::{ChartLayout, DEFAULT_MIN_EXTREMA_DISTANCE, Padding, PriceUnit, Viewport};
use crate::error::{ChartError, ChartResult};

use super::RenderStyle;

pub const DEFAULT_CHART_HEIGHT: f64 = 250.0;
pub const DEFAULT_VERTICAL_PADDING: f64 = 20.0;
pub const DEFAULT_HORIZONTAL_PADDING: f64 = 15.0;
pub const DEFAULT_GRID_LINE_COUNT: usize = 5;
pub const DEFAULT_HOURS_PER_DAY: u32 = 24;

/// Knobs of the presentation pipeline that do not affect geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub extrema_min_distance: usize,
    pub grid_line_count: usize,
    /// Buckets per day used for electricity hour-range labels.
    pub hours_per_day: u32,
    pub fuel_unit_suffix: String,
    pub electricity_unit_suffix: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            extrema_min_distance: DEFAULT_MIN_EXTREMA_DISTANCE,
            grid_line_count: DEFAULT_GRID_LINE_COUNT,
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            fuel_unit_suffix: PriceUnit::EuroPerLitre.default_suffix().to_owned(),
            electricity_unit_suffix: PriceUnit::CentPerKilowattHour.default_suffix().to_owned(),
        }
    }
}

impl ChartOptions {
    #[must_use]
    pub fn unit_suffix(&self, unit: PriceUnit) -> &str {
        match unit {
            PriceUnit::EuroPerLitre => &self.fuel_unit_suffix,
            PriceUnit::CentPerKilowattHour => &self.electricity_unit_suffix,
        }
    }
}

/// Public chart bootstrap configuration.
///
/// Serializable so hosts can ship chart setup as JSON next to their other
/// settings; only `width` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_horizontal_padding")]
    pub horizontal_padding: f64,
    #[serde(default = "default_vertical_padding")]
    pub vertical_padding: f64,
    #[serde(default)]
    pub options: ChartOptions,
    #[serde(default)]
    pub render_style: RenderStyle,
}

impl ChartConfig {
    /// Creates a config with the default height and paddings.
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self {
            width,
            height: default_height(),
            horizontal_padding: default_horizontal_padding(),
            vertical_padding: default_vertical_padding(),
            options: ChartOptions::default(),
            render_style: RenderStyle::default(),
        }
    }

    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, horizontal: f64, vertical: f64) -> Self {
        self.horizontal_padding = horizontal;
        self.vertical_padding = vertical;
        self
    }

    #[must_use]
    pub fn with_extrema_min_distance(mut self, distance: usize) -> Self {
        self.options.extrema_min_distance = distance;
        self
    }

    #[must_use]
    pub fn with_grid_line_count(mut self, count: usize) -> Self {
        self.options.grid_line_count = count;
        self
    }

    #[must_use]
    pub fn with_render_style(mut self, style: RenderStyle) -> Self {
        self.render_style = style;
        self
    }

    /// Validates dimensions into a layout.
    pub fn layout(&self) -> ChartResult<ChartLayout> {
        ChartLayout::new(
            Viewport::new(self.width, self.height),
            Padding::new(self.horizontal_padding, self.vertical_padding),
        )
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.layout()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}

fn default_height() -> f64 {
    DEFAULT_CHART_HEIGHT
}

fn default_horizontal_padding() -> f64 {
    DEFAULT_HORIZONTAL_PADDING
}

fn default_vertical_padding() -> f64 {
    DEFAULT_VERTICAL_PADDING
}
