use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::core::Viewport;
use crate::error::{PlotError, PlotResult};
use crate::render::{
    Color, PathCommand, RenderFrame, Renderer, SeriesFrame, TextHAlign, TextPrimitive,
};

const TEXT_FONT_FAMILY: &str = "Sans";
/// Opacity multiplier for the other series while one series has focus.
const UNFOCUSED_SERIES_ALPHA: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub series_drawn: usize,
    pub markers_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can draw into an externally owned Cairo context, such as a
/// GTK `DrawingArea` draw callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, frame: &RenderFrame)
    -> PlotResult<()>;
}

/// Cairo + Pango renderer backend.
///
/// Renders either offscreen into its own image surface (`Renderer::render`)
/// or in place on a caller's context (`CairoContextRenderer`).
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    /// Creates an offscreen renderer sized to `viewport`.
    pub fn new(viewport: Viewport) -> PlotResult<Self> {
        let viewport = viewport.ensure_valid()?;
        let (Ok(width), Ok(height)) = (i32::try_from(viewport.width), i32::try_from(viewport.height))
        else {
            return Err(PlotError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        };

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> PlotResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let any_focused = frame.series.iter().any(|series| series.focused);
        let mut stats = CairoRenderStats::default();
        for series in &frame.series {
            let alpha_scale = if any_focused && !series.focused {
                UNFOCUSED_SERIES_ALPHA
            } else {
                1.0
            };
            draw_series(context, series, alpha_scale)?;
            stats.series_drawn += 1;
            stats.markers_drawn += series.markers.len();
        }

        for text in &frame.texts {
            draw_text(context, text);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> PlotResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_series(context: &Context, series: &SeriesFrame, alpha_scale: f64) -> PlotResult<()> {
    let stroke = dimmed(series.stroke_color, alpha_scale);
    if let Some(path) = &series.path {
        if let Some(fill) = series.fill_color {
            append_commands(context, &path.fill);
            apply_color(context, dimmed(fill, alpha_scale));
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill series", err))?;
        }

        append_commands(context, &path.stroke);
        apply_color(context, stroke);
        context.set_line_width(series.stroke_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke series", err))?;
    }

    for marker in &series.markers {
        context.new_sub_path();
        context.arc(marker.x, marker.y, marker.radius, 0.0, TAU);
        apply_color(context, dimmed(marker.color, alpha_scale));
        context.set_line_width(marker.stroke_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke marker", err))?;
    }
    Ok(())
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let mut font = FontDescription::new();
    font.set_family(TEXT_FONT_FAMILY);
    font.set_absolute_size(text.font_size_px * f64::from(pango::SCALE));

    let layout = pangocairo::functions::create_layout(context);
    layout.set_font_description(Some(&font));
    layout.set_text(&text.text);

    let (width_px, _) = layout.pixel_size();
    let anchor_shift = match text.h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => 0.5,
        TextHAlign::Right => 1.0,
    };
    apply_color(context, text.color);
    context.move_to(text.x - anchor_shift * f64::from(width_px), text.y);
    pangocairo::functions::show_layout(context, &layout);
}

fn append_commands(context: &Context, commands: &[PathCommand]) {
    context.new_path();
    for command in commands {
        match *command {
            PathCommand::MoveTo { x, y } => context.move_to(x, y),
            PathCommand::LineTo { x, y } => context.line_to(x, y),
            PathCommand::CubicTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => context.curve_to(x1, y1, x2, y2, x, y),
            PathCommand::Rect {
                x,
                y,
                width,
                height,
            } => context.rectangle(x, y, width, height),
            PathCommand::Close => context.close_path(),
        }
    }
}

fn dimmed(color: Color, alpha_scale: f64) -> Color {
    Color::rgba(color.red, color.green, color.blue, color.alpha * alpha_scale)
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PlotError {
    PlotError::InvalidData(format!("{prefix}: {err}"))
}
