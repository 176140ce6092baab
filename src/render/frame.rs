use crate::core::Viewport;
use crate::error::{PlotError, PlotResult};
use crate::render::{Color, MarkerPrimitive, PathRoutine, SeriesPath, TextPrimitive};

/// Everything needed to draw one series in the current frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesFrame {
    pub label: String,
    pub routine: Option<PathRoutine>,
    pub path: Option<SeriesPath>,
    pub markers: Vec<MarkerPrimitive>,
    pub stroke_color: Color,
    pub fill_color: Option<Color>,
    pub stroke_width: f64,
    pub focused: bool,
}

impl SeriesFrame {
    pub fn validate(&self) -> PlotResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(PlotError::InvalidData(format!(
                "series `{}` stroke width must be finite and > 0",
                self.label
            )));
        }
        self.stroke_color.validate()?;
        if let Some(fill) = self.fill_color {
            fill.validate()?;
        }
        if let Some(path) = &self.path {
            path.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one plot draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub series: Vec<SeriesFrame>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            series: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: SeriesFrame) -> Self {
        self.series.push(series);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        self.viewport.ensure_valid()?;
        for series in &self.series {
            series.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty() && self.texts.is_empty()
    }

    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.series.iter().map(|series| series.markers.len()).sum()
    }
}
