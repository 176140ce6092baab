mod frame;
mod null_renderer;
mod path_builder;
mod path_selector;
mod primitives;

pub use frame::{RenderFrame, SeriesFrame};
pub use null_renderer::NullRenderer;
pub use path_builder::PathInput;
pub use path_selector::{
    BAR_MAX_WIDTH_PX, BAR_WIDTH_FRACTION, BarAlign, BarsLayout, MARKER_STROKE_WIDTH_HIDDEN,
    MARKER_STROKE_WIDTH_SHOWN, PathRoutine, StepAlign, select_path_routine,
    select_path_routine_from_codes, series_stroke_width, show_markers, show_markers_from_codes,
};
pub use primitives::{
    Color, MarkerPrimitive, PathCommand, SeriesPath, TextHAlign, TextPrimitive,
};

use crate::error::PlotResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code
/// stays isolated from scale and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
