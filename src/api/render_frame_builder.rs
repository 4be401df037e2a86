use crate::core::ValueScale;
use crate::error::ChartResult;
use crate::extensions::place_extrema_markers;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, PolylinePrimitive, RenderFrame,
};

use super::{ChartRenderModel, RenderModel, RenderStyle};

/// Materializes draw commands for a render model.
///
/// A no-data model produces an empty frame; the host shows its own message.
/// Fails only on malformed series colors or marker configuration.
pub fn build_render_frame(model: &RenderModel, style: &RenderStyle) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(model.layout().viewport());
    let RenderModel::Chart(chart) = model else {
        return Ok(frame);
    };

    let width = chart.layout.width();
    for y in &chart.grid_lines {
        frame.grid_lines.push(LinePrimitive::new(
            0.0,
            *y,
            width,
            *y,
            style.grid_line_width,
            style.grid_line_color,
        ));
    }

    for series in &chart.series {
        if series.path.is_empty() {
            continue;
        }
        frame.polylines.push(PolylinePrimitive {
            points: series.path.points.iter().map(|p| (p.x, p.y)).collect(),
            stroke_width: style.series_line_width,
            color: Color::from_hex(&series.color)?,
        });
    }

    if style.show_extrema_markers {
        push_extrema_markers(&mut frame, chart, style)?;
    }

    if let Some(selection) = &chart.selection {
        frame.overlay_lines.push(
            LinePrimitive::new(
                selection.x,
                selection.y_top,
                selection.x,
                selection.y_bottom,
                style.selection_line_width,
                style.selection_line_color,
            )
            .with_stroke_style(LineStrokeStyle::Dashed {
                dash_px: style.selection_dash_px,
                gap_px: style.selection_gap_px,
            }),
        );
    }

    Ok(frame)
}

fn push_extrema_markers(
    frame: &mut RenderFrame,
    chart: &ChartRenderModel,
    style: &RenderStyle,
) -> ChartResult<()> {
    let scale = ValueScale::new(chart.range, chart.layout);
    let radius = 0.5 * style.marker_placement.marker_size_px;
    for series in &chart.series {
        let fill_color = Color::from_hex(&series.color)?;
        let markers = place_extrema_markers(
            &series.values,
            &series.extrema,
            chart.layout,
            scale,
            style.marker_placement,
        )?;
        frame
            .circles
            .extend(markers.into_iter().map(|marker| CirclePrimitive {
                x: marker.x,
                y: marker.y,
                radius,
                fill_color,
            }));
    }
    Ok(())
}
