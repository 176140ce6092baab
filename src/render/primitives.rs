use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{PlotError, PlotResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(input: &str) -> PlotResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        let all_hex = digits.bytes().all(|byte| byte.is_ascii_hexdigit());
        if !matches!(digits.len(), 6 | 8) || !all_hex {
            return Err(PlotError::InvalidData(format!(
                "color `{input}` must be #RRGGBB or #RRGGBBAA"
            )));
        }

        let channels: SmallVec<[f64; 4]> = (0..digits.len())
            .step_by(2)
            .map(|start| {
                u8::from_str_radix(&digits[start..start + 2], 16)
                    .map(|byte| f64::from(byte) / 255.0)
                    .map_err(|_| PlotError::InvalidData(format!("color `{input}` is not hex")))
            })
            .collect::<PlotResult<_>>()?;

        Ok(Self::rgba(
            channels[0],
            channels[1],
            channels[2],
            channels.get(3).copied().unwrap_or(1.0),
        ))
    }

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// One drawing instruction in plot-surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    CubicTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Close,
}

impl PathCommand {
    fn coordinates(self) -> SmallVec<[f64; 6]> {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => SmallVec::from_slice(&[x, y]),
            Self::CubicTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => SmallVec::from_slice(&[x1, y1, x2, y2, x, y]),
            Self::Rect {
                x,
                y,
                width,
                height,
            } => SmallVec::from_slice(&[x, y, width, height]),
            Self::Close => SmallVec::new(),
        }
    }
}

/// Geometry produced by a path routine for one series.
///
/// `stroke` is the outline; `fill` repeats every connected run closed down
/// to the zero baseline (bars use the same rectangles for both).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesPath {
    pub stroke: Vec<PathCommand>,
    pub fill: Vec<PathCommand>,
}

impl SeriesPath {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stroke.is_empty() && self.fill.is_empty()
    }

    pub fn validate(&self) -> PlotResult<()> {
        let all = self.stroke.iter().chain(self.fill.iter());
        for command in all {
            if command.coordinates().iter().any(|v| !v.is_finite()) {
                return Err(PlotError::InvalidData(
                    "path coordinates must be finite".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// A point marker centred on a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPrimitive {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl MarkerPrimitive {
    pub fn validate(self) -> PlotResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(PlotError::InvalidData(
                "marker center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(PlotError::InvalidData(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(PlotError::InvalidData(
                "marker stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one text label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(PlotError::InvalidData(
                "text position must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
