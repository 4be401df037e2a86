//! Presentation-facing API: configuration, feed extraction, the `recompute`
//! pipeline and its outputs.

mod chart_config;
mod chart_presentation;
pub mod feeds;
mod json_contract;
mod render_frame_builder;
mod render_model;
mod render_style;
mod selection_readout;

pub use chart_config::{
    ChartConfig, ChartOptions, DEFAULT_CHART_HEIGHT, DEFAULT_GRID_LINE_COUNT,
    DEFAULT_HORIZONTAL_PADDING, DEFAULT_HOURS_PER_DAY, DEFAULT_VERTICAL_PADDING,
};
pub use chart_presentation::{
    ChartInput, ChartPresenter, grid_line_positions, recompute, reference_len,
};
pub use feeds::{FuelKind, TodayElectricityFeed};
pub use json_contract::{RENDER_MODEL_JSON_SCHEMA_V1, RenderModelJsonContractV1};
pub use render_frame_builder::build_render_frame;
pub use render_model::{ChartRenderModel, RenderModel, SelectionRenderModel, SeriesRenderModel};
pub use render_style::RenderStyle;
pub use selection_readout::{IndexLabel, SeriesReadout, build_readouts};
