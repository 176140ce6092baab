//! Maps a series' draw style and interpolation to the routine that builds
//! its path for each frame.

use serde::{Deserialize, Serialize};

use crate::core::{DrawStyle, LineInterpolation, SeriesRenderConfig};

/// Which side of a sample a step's flat run extends to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepAlign {
    /// Value holds from its sample until the next sample (flat run to the right).
    After,
    /// Value is reached at its sample, flat run coming from the left.
    Before,
}

/// Horizontal placement of a bar relative to its sample x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarAlign {
    Center,
    /// Bar ends at the sample x.
    Left,
    /// Bar starts at the sample x.
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarsLayout {
    /// Share of the column width a bar occupies.
    pub width_fraction: f64,
    /// Upper bound for the bar width in pixels.
    pub max_width_px: Option<f64>,
    pub align: BarAlign,
}

/// A concrete path-construction routine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathRoutine {
    Linear,
    Stepped(StepAlign),
    Spline,
    Bars(BarsLayout),
}

pub const BAR_WIDTH_FRACTION: f64 = 0.6;
pub const BAR_MAX_WIDTH_PX: f64 = 100.0;

pub const MARKER_STROKE_WIDTH_SHOWN: f64 = 2.0;
pub const MARKER_STROKE_WIDTH_HIDDEN: f64 = 1.0;

/// Resolves the routine for `config`.
///
/// `None` means "no custom routine": the series is drawn as markers by the
/// default point renderer.
#[must_use]
pub fn select_path_routine(config: SeriesRenderConfig) -> Option<PathRoutine> {
    match config.draw_style {
        DrawStyle::Bars => Some(PathRoutine::Bars(BarsLayout {
            width_fraction: BAR_WIDTH_FRACTION,
            max_width_px: Some(BAR_MAX_WIDTH_PX),
            align: BarAlign::Center,
        })),
        DrawStyle::BarsLeft => Some(PathRoutine::Bars(BarsLayout {
            width_fraction: 1.0,
            max_width_px: None,
            align: BarAlign::Left,
        })),
        DrawStyle::BarsRight => Some(PathRoutine::Bars(BarsLayout {
            width_fraction: 1.0,
            max_width_px: None,
            align: BarAlign::Right,
        })),
        DrawStyle::Line => Some(match config.line_interpolation {
            None | Some(LineInterpolation::Linear) => PathRoutine::Linear,
            Some(LineInterpolation::StepAfter) => PathRoutine::Stepped(StepAlign::After),
            Some(LineInterpolation::StepBefore) => PathRoutine::Stepped(StepAlign::Before),
            Some(LineInterpolation::Spline) => PathRoutine::Spline,
        }),
        DrawStyle::Points => None,
    }
}

/// Same as [`select_path_routine`] for raw numeric codes.
///
/// Unknown style codes resolve to no routine. An unknown interpolation code
/// on a line falls back to straight segments.
#[must_use]
pub fn select_path_routine_from_codes(
    style_code: i64,
    interpolation_code: Option<i64>,
) -> Option<PathRoutine> {
    let draw_style = DrawStyle::from_code(style_code)?;
    let line_interpolation = interpolation_code.and_then(LineInterpolation::from_code);
    select_path_routine(SeriesRenderConfig {
        draw_style,
        line_interpolation,
    })
}

/// Markers are shown for a plain line without an explicit interpolation.
#[must_use]
pub fn show_markers(config: SeriesRenderConfig) -> bool {
    config.draw_style == DrawStyle::Line && config.line_interpolation.is_none()
}

/// Code-level marker rule: any present interpolation code counts as explicit.
#[must_use]
pub fn show_markers_from_codes(style_code: i64, interpolation_code: Option<i64>) -> bool {
    DrawStyle::from_code(style_code) == Some(DrawStyle::Line) && interpolation_code.is_none()
}

#[must_use]
pub fn series_stroke_width(config: SeriesRenderConfig) -> f64 {
    if show_markers(config) {
        MARKER_STROKE_WIDTH_SHOWN
    } else {
        MARKER_STROKE_WIDTH_HIDDEN
    }
}
