#[cfg(feature = "parallel-paths")]
use rayon::prelude::*;
use tracing::trace;

use crate::core::{Axis, LinearScale, PlotData, visible_index_window};
use crate::error::PlotResult;
use crate::extensions::PlotEvent;
use crate::render::{
    Color, MarkerPrimitive, PathInput, RenderFrame, Renderer, SeriesFrame, TextHAlign,
    TextPrimitive, select_path_routine, series_stroke_width, show_markers,
};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::{PlotEngine, PlotEngineConfig};

const TITLE_FONT_SIZE_PX: f64 = 14.0;
const TITLE_TOP_PX: f64 = 4.0;
const TITLE_COLOR: Color = Color::rgb(0.2, 0.2, 0.2);

/// Inputs shared by every per-series job of one frame.
#[derive(Clone, Copy)]
struct FrameProjection<'a> {
    data: &'a PlotData,
    config: &'a PlotEngineConfig,
    x_scale: LinearScale,
    y_scale: LinearScale,
    width: f64,
    height: f64,
    window: Option<(usize, usize)>,
    focused_series: Option<usize>,
}

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    fn build_frame<R: Renderer>(engine: &PlotEngine<R>) -> PlotResult<RenderFrame> {
        let viewport = engine.scales.viewport();
        let mut frame = RenderFrame::new(viewport);

        if let (Some(x_range), Some(x_scale), Some(y_scale)) = (
            engine.scales.x(),
            engine.scales.axis_scale(Axis::X),
            engine.scales.axis_scale(Axis::Y),
        ) {
            let projection = FrameProjection {
                data: &engine.data,
                config: &engine.config,
                x_scale,
                y_scale,
                width: viewport.width_px(),
                height: viewport.height_px(),
                window: visible_index_window(&engine.data.x, x_range),
                focused_series: engine.cursor.focused_series,
            };
            frame.series = build_series_frames(projection)?;
        }

        if let Some(title) = engine.config.title.as_deref().filter(|t| !t.is_empty()) {
            frame.texts.push(TextPrimitive::new(
                title,
                viewport.width_px() / 2.0,
                TITLE_TOP_PX,
                TITLE_FONT_SIZE_PX,
                TITLE_COLOR,
                TextHAlign::Center,
            ));
        }

        trace!(
            series = frame.series.len(),
            markers = frame.marker_count(),
            "built render frame"
        );
        Ok(frame)
    }

    fn render<R: Renderer>(engine: &mut PlotEngine<R>) -> PlotResult<()> {
        let frame = Self::build_frame(engine)?;
        engine.renderer.render(&frame)?;
        engine.emit_plugin_event(PlotEvent::Rendered);
        Ok(())
    }

    #[cfg(feature = "cairo-backend")]
    fn render_on_cairo_context<R: Renderer + CairoContextRenderer>(
        engine: &mut PlotEngine<R>,
        context: &cairo::Context,
    ) -> PlotResult<()> {
        let frame = Self::build_frame(engine)?;
        engine.renderer.render_on_cairo_context(context, &frame)?;
        engine.emit_plugin_event(PlotEvent::Rendered);
        Ok(())
    }
}

fn build_series_frames(projection: FrameProjection<'_>) -> PlotResult<Vec<SeriesFrame>> {
    let series_count = projection.data.series_count();

    #[cfg(feature = "parallel-paths")]
    {
        (0..series_count)
            .into_par_iter()
            .map(|series| build_series_frame(projection, series))
            .collect()
    }

    #[cfg(not(feature = "parallel-paths"))]
    {
        (0..series_count)
            .map(|series| build_series_frame(projection, series))
            .collect()
    }
}

fn build_series_frame(projection: FrameProjection<'_>, series: usize) -> PlotResult<SeriesFrame> {
    let options = projection.config.series_options(series);
    let routine = select_path_routine(options.render);
    let stroke_width = series_stroke_width(options.render);

    let mut frame = SeriesFrame {
        label: options.label,
        routine,
        path: None,
        markers: Vec::new(),
        stroke_color: options.stroke,
        fill_color: options.fill,
        stroke_width,
        focused: projection.focused_series == Some(series),
    };

    let (Some((start, end)), Some(column)) =
        (projection.window, projection.data.y.get(series))
    else {
        return Ok(frame);
    };

    let mut xs = Vec::with_capacity(end - start + 1);
    let mut ys = Vec::with_capacity(end - start + 1);
    for index in start..=end {
        xs.push(
            projection
                .x_scale
                .domain_to_pixel(projection.data.x[index], projection.width)?,
        );
        ys.push(
            column[index]
                .map(|value| projection.y_scale.domain_to_pixel(value, projection.height))
                .transpose()?,
        );
    }

    let baseline_y = projection
        .y_scale
        .domain_to_pixel(0.0, projection.height)?
        .clamp(0.0, projection.height);
    let input = PathInput {
        xs: &xs,
        ys: &ys,
        baseline_y,
        plot_width: projection.width,
    };

    frame.path = routine.map(|routine| routine.build(&input));

    if show_markers(options.render) || routine.is_none() {
        frame.markers = xs
            .iter()
            .zip(&ys)
            .filter_map(|(&x, y)| {
                y.map(|y| MarkerPrimitive {
                    x,
                    y,
                    radius: options.marker_radius_px,
                    stroke_width,
                    color: options.stroke,
                })
            })
            .collect();
    }

    Ok(frame)
}

impl<R: Renderer> PlotEngine<R> {
    /// Materializes the current scene without drawing it.
    pub fn build_frame(&self) -> PlotResult<RenderFrame> {
        RenderCoordinator::build_frame(self)
    }

    pub fn render(&mut self) -> PlotResult<()> {
        RenderCoordinator::render(self)
    }

    /// Draws into an externally owned Cairo context, e.g. a GTK draw callback.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> PlotResult<()>
    where
        R: CairoContextRenderer,
    {
        RenderCoordinator::render_on_cairo_context(self, context)
    }
}
