use indexmap::IndexSet;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::core::{
    ChartLayout, Dataset, ScaleRange, Series, SeriesSummary, ValueScale, build_line_path,
    find_extrema, index_to_x,
};
use crate::error::ChartResult;
use crate::interaction::SelectionController;
use crate::render::{RenderFrame, Renderer};

use super::{
    ChartConfig, ChartOptions, ChartRenderModel, RenderModel, RenderStyle, SelectionRenderModel,
    SeriesRenderModel, build_readouts, build_render_frame,
};

/// Everything [`recompute`] depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInput {
    pub dataset: Dataset,
    pub layout: ChartLayout,
    pub options: ChartOptions,
    /// Selected index in reference-series space.
    pub selection: Option<usize>,
}

impl ChartInput {
    pub fn from_config(dataset: Dataset, config: &ChartConfig) -> ChartResult<Self> {
        Ok(Self {
            dataset,
            layout: config.layout()?,
            options: config.options.clone(),
            selection: None,
        })
    }

    #[must_use]
    pub fn with_selection(mut self, selection: Option<usize>) -> Self {
        self.selection = selection;
        self
    }
}

/// Length of the first series that keeps at least one valid sample.
#[must_use]
pub fn reference_len(dataset: &[Series]) -> usize {
    dataset
        .iter()
        .map(|series| series.normalized().len())
        .find(|len| *len > 0)
        .unwrap_or(0)
}

/// Projects a dataset into a render model.
///
/// Pure in its input: invalid samples are dropped, empty series are left out
/// of both drawing and the shared scale, and a dataset without any valid
/// sample yields [`RenderModel::NoData`]. The selection is clamped to the
/// reference series, the first surviving one.
#[must_use]
pub fn recompute(input: &ChartInput) -> RenderModel {
    let layout = input.layout;
    let normalized: Vec<Series> = input
        .dataset
        .iter()
        .map(Series::normalized)
        .filter(|series| {
            if series.is_empty() {
                debug!(series_id = %series.id, "omit series without valid samples");
            }
            !series.is_empty()
        })
        .collect();

    let mut ids = IndexSet::with_capacity(normalized.len());
    for series in &normalized {
        if !ids.insert(series.id.as_str()) {
            warn!(series_id = %series.id, "duplicate series id in dataset");
        }
    }

    let Some(range) = ScaleRange::from_series(normalized.iter().map(|s| s.values.as_slice()))
    else {
        debug!(
            input_series = input.dataset.len(),
            "no valid samples, no data"
        );
        return RenderModel::NoData { layout };
    };

    let scale = ValueScale::new(range, layout);
    let series = project_all(&normalized, layout, scale, input.options.extrema_min_distance);
    let reference_len = series.first().map_or(0, |first| first.values.len());

    let selection = input.selection.map(|selected| {
        let index = selected.min(reference_len.saturating_sub(1));
        trace!(selected, index, reference_len, "resolve selection");
        SelectionRenderModel {
            index,
            x: index_to_x(index, reference_len, layout),
            y_top: layout.padding().vertical,
            y_bottom: layout.height() - layout.padding().vertical,
            readouts: build_readouts(&series, index, reference_len, &input.options),
        }
    });

    debug!(
        series_count = series.len(),
        min = range.min,
        max = range.max,
        "recomputed chart"
    );

    RenderModel::Chart(ChartRenderModel {
        layout,
        range,
        series,
        reference_len,
        grid_lines: grid_line_positions(layout.height(), input.options.grid_line_count),
        selection,
    })
}

/// Evenly spaced horizontal grid lines spanning the full height.
#[must_use]
pub fn grid_line_positions(height: f64, count: usize) -> SmallVec<[f64; 8]> {
    match count {
        0 => SmallVec::new(),
        1 => smallvec::smallvec![0.0],
        _ => {
            let spacing = height / (count - 1) as f64;
            (0..count).map(|i| spacing * i as f64).collect()
        }
    }
}

fn project_series(
    series: &Series,
    layout: ChartLayout,
    scale: ValueScale,
    min_distance: usize,
) -> Option<SeriesRenderModel> {
    Some(SeriesRenderModel {
        id: series.id.clone(),
        label: series.label.clone(),
        color: series.color.clone(),
        unit: series.unit,
        path: build_line_path(&series.values, layout, scale),
        extrema: find_extrema(&series.values, min_distance),
        summary: SeriesSummary::from_values(&series.values)?,
        values: series.values.clone(),
    })
}

#[cfg(not(feature = "parallel-projection"))]
fn project_all(
    series: &[Series],
    layout: ChartLayout,
    scale: ValueScale,
    min_distance: usize,
) -> Vec<SeriesRenderModel> {
    series
        .iter()
        .filter_map(|s| project_series(s, layout, scale, min_distance))
        .collect()
}

#[cfg(feature = "parallel-projection")]
fn project_all(
    series: &[Series],
    layout: ChartLayout,
    scale: ValueScale,
    min_distance: usize,
) -> Vec<SeriesRenderModel> {
    use rayon::prelude::*;

    series
        .par_iter()
        .filter_map(|s| project_series(s, layout, scale, min_distance))
        .collect()
}

/// Owns the chart input and the selection for one composed chart.
///
/// Every mutation is followed by an explicit [`ChartPresenter::render_model`]
/// call from the host; nothing is recomputed behind its back.
#[derive(Debug, Clone)]
pub struct ChartPresenter {
    input: ChartInput,
    style: RenderStyle,
    selection: SelectionController,
}

impl ChartPresenter {
    pub fn new(dataset: Dataset, config: &ChartConfig) -> ChartResult<Self> {
        Ok(Self {
            input: ChartInput::from_config(dataset, config)?,
            style: config.render_style,
            selection: SelectionController::new(),
        })
    }

    #[must_use]
    pub fn input(&self) -> &ChartInput {
        &self.input
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected_index()
    }

    /// Replaces the dataset, keeping the selection inside the new reference series.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        debug!(series_count = dataset.len(), "set dataset");
        self.input.dataset = dataset;
        self.selection.clamp_to(reference_len(&self.input.dataset));
        self.input.selection = self.selection.selected_index();
    }

    /// Pointer-down on the chart surface; selects the nearest reference index.
    pub fn on_pointer_down(&mut self, pointer_x: f64) -> Option<usize> {
        let len = reference_len(&self.input.dataset);
        let index = self.selection.on_pointer_down(pointer_x, self.input.layout, len);
        self.input.selection = index;
        index
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.input.selection = None;
    }

    #[must_use]
    pub fn render_model(&self) -> RenderModel {
        recompute(&self.input)
    }

    /// Recomputes, builds draw commands and hands them to `renderer`.
    pub fn render_with<R: Renderer>(&self, renderer: &mut R) -> ChartResult<RenderFrame> {
        let frame = build_render_frame(&self.render_model(), &self.style)?;
        renderer.render(&frame)?;
        Ok(frame)
    }
}
