//! price-chart: time-series charting core for fuel and electricity prices.
//!
//! The crate turns raw price sequences into pixel-space geometry on a shared
//! scale, detects salient points and maps pointer input back to data
//! indices. It never fetches, persists or rasterizes anything: the output is
//! plain geometry and draw commands for a presentation layer.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartInput, ChartPresenter, RenderModel, recompute};
pub use error::{ChartError, ChartResult};
