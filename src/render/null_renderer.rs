use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so invalid geometry surfaces before a
/// real backend sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_polyline_count: usize,
    pub last_line_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_polyline_count = frame.polylines.len();
        self.last_line_count = frame.grid_lines.len() + frame.overlay_lines.len();
        self.frames_rendered += 1;
        Ok(())
    }
}
