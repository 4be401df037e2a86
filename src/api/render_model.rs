use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ChartLayout, Extremum, LinePath, PriceUnit, ScaleRange, SeriesSummary};

use super::SeriesReadout;

/// Geometry of one series after normalization and projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRenderModel {
    pub id: String,
    pub label: String,
    pub color: String,
    pub unit: PriceUnit,
    /// Normalized samples the path and readouts refer to.
    pub values: Vec<f64>,
    pub path: LinePath,
    pub extrema: Vec<Extremum>,
    pub summary: SeriesSummary,
}

/// Vertical guide and readouts for the selected index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionRenderModel {
    /// Index in reference-series space.
    pub index: usize,
    pub x: f64,
    pub y_top: f64,
    pub y_bottom: f64,
    pub readouts: Vec<SeriesReadout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRenderModel {
    pub layout: ChartLayout,
    pub range: ScaleRange,
    pub series: Vec<SeriesRenderModel>,
    /// Length of the series that defines selection index space.
    pub reference_len: usize,
    /// `y` of horizontal grid lines, top to bottom.
    pub grid_lines: SmallVec<[f64; 8]>,
    pub selection: Option<SelectionRenderModel>,
}

impl ChartRenderModel {
    #[must_use]
    pub fn series_by_id(&self, id: &str) -> Option<&SeriesRenderModel> {
        self.series.iter().find(|series| series.id == id)
    }
}

/// Everything a presentation layer needs for one draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RenderModel {
    /// No series had a valid sample.
    NoData { layout: ChartLayout },
    Chart(ChartRenderModel),
}

impl RenderModel {
    #[must_use]
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData { .. })
    }

    #[must_use]
    pub fn chart(&self) -> Option<&ChartRenderModel> {
        match self {
            Self::Chart(chart) => Some(chart),
            Self::NoData { .. } => None,
        }
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        match self {
            Self::NoData { layout } => *layout,
            Self::Chart(chart) => chart.layout,
        }
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.chart()
            .and_then(|chart| chart.selection.as_ref())
            .map(|selection| selection.index)
    }
}
