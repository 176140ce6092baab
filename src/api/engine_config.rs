use serde::{Deserialize, Serialize};

use crate::core::{SeriesRenderConfig, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::interaction::{CursorConfig, NavigationConfig, PointerButton, SyncKey};
use crate::render::Color;

/// Default series stroke, `#2185D0`.
pub const DEFAULT_SERIES_STROKE: Color = Color::rgb(33.0 / 255.0, 133.0 / 255.0, 208.0 / 255.0);
/// Default series fill, `#2185D01F`.
pub const DEFAULT_SERIES_FILL: Color =
    Color::rgba(33.0 / 255.0, 133.0 / 255.0, 208.0 / 255.0, 31.0 / 255.0);

pub const DEFAULT_MARKER_RADIUS_PX: f64 = 2.5;

/// Presentation options for one y series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesOptions {
    #[serde(default)]
    pub label: String,
    #[serde(default = "default_series_stroke")]
    pub stroke: Color,
    #[serde(default = "default_series_fill")]
    pub fill: Option<Color>,
    #[serde(default)]
    pub render: SeriesRenderConfig,
    #[serde(default = "default_marker_radius_px")]
    pub marker_radius_px: f64,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            label: String::new(),
            stroke: DEFAULT_SERIES_STROKE,
            fill: Some(DEFAULT_SERIES_FILL),
            render: SeriesRenderConfig::default(),
            marker_radius_px: DEFAULT_MARKER_RADIUS_PX,
        }
    }
}

impl SeriesOptions {
    #[must_use]
    pub fn new(label: impl Into<String>, render: SeriesRenderConfig) -> Self {
        Self {
            label: label.into(),
            render,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = stroke;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: Option<Color>) -> Self {
        self.fill = fill;
        self
    }

    fn validate(&self) -> PlotResult<()> {
        self.stroke.validate()?;
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if !self.marker_radius_px.is_finite() || self.marker_radius_px <= 0.0 {
            return Err(PlotError::InvalidConfig(format!(
                "series `{}` marker radius must be finite and > 0",
                self.label
            )));
        }
        Ok(())
    }
}

/// Public plot bootstrap configuration.
///
/// Serializable so host applications can persist and reload a plot setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub cursor: CursorConfig,
    #[serde(default = "default_y_padding_ratio")]
    pub y_padding_ratio: f64,
    #[serde(default)]
    pub series: Vec<SeriesOptions>,
    #[serde(default)]
    pub sync_key: Option<SyncKey>,
}

impl PlotEngineConfig {
    /// Creates a config with default navigation, cursor and series styling.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            title: None,
            navigation: NavigationConfig::default(),
            cursor: CursorConfig::default(),
            y_padding_ratio: default_y_padding_ratio(),
            series: Vec::new(),
            sync_key: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_zoom_factor(mut self, zoom_factor: f64) -> Self {
        self.navigation.zoom_factor = zoom_factor;
        self
    }

    #[must_use]
    pub fn with_pan_button(mut self, button: PointerButton) -> Self {
        self.navigation.pan_button = button;
        self
    }

    #[must_use]
    pub fn with_cursor(mut self, cursor: CursorConfig) -> Self {
        self.cursor = cursor;
        self
    }

    #[must_use]
    pub fn with_y_padding_ratio(mut self, ratio: f64) -> Self {
        self.y_padding_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: SeriesOptions) -> Self {
        self.series.push(series);
        self
    }

    #[must_use]
    pub fn with_sync_key(mut self, key: impl Into<String>) -> Self {
        self.sync_key = Some(SyncKey::new(key));
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        self.viewport.ensure_valid()?;
        self.navigation.validate()?;
        if !self.cursor.focus_proximity_px.is_finite() || self.cursor.focus_proximity_px < 0.0 {
            return Err(PlotError::InvalidConfig(
                "cursor focus proximity must be finite and >= 0".to_owned(),
            ));
        }
        if !self.y_padding_ratio.is_finite() || self.y_padding_ratio < 0.0 {
            return Err(PlotError::InvalidConfig(
                "y padding ratio must be finite and >= 0".to_owned(),
            ));
        }
        for series in &self.series {
            series.validate()?;
        }
        Ok(())
    }

    /// Parses and validates a JSON config. Omitted fields take defaults.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidConfig(format!("failed to parse plot config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize plot config: {e}")))
    }

    /// Options for series `index`, falling back to defaults with a numbered label.
    #[must_use]
    pub fn series_options(&self, index: usize) -> SeriesOptions {
        self.series.get(index).cloned().unwrap_or_else(|| SeriesOptions {
            label: format!("Series {}", index + 1),
            ..SeriesOptions::default()
        })
    }
}

fn default_y_padding_ratio() -> f64 {
    0.1
}

fn default_series_stroke() -> Color {
    DEFAULT_SERIES_STROKE
}

fn default_series_fill() -> Option<Color> {
    Some(DEFAULT_SERIES_FILL)
}

fn default_marker_radius_px() -> f64 {
    DEFAULT_MARKER_RADIUS_PX
}
