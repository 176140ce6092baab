use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::axis_range::AxisRange;
use crate::core::types::DataPoint;
use crate::error::{PlotError, PlotResult};

/// Overall shape of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrawStyle {
    Line,
    Bars,
    Points,
    BarsLeft,
    BarsRight,
}

impl DrawStyle {
    /// Decodes the numeric style code used by serialized dashboards
    /// (`line = 0` .. `barsRight = 4`).
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Line),
            1 => Some(Self::Bars),
            2 => Some(Self::Points),
            3 => Some(Self::BarsLeft),
            4 => Some(Self::BarsRight),
            _ => None,
        }
    }
}

/// How consecutive samples of a line are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineInterpolation {
    Linear,
    StepAfter,
    StepBefore,
    Spline,
}

impl LineInterpolation {
    /// Decodes `linear = 0` .. `spline = 3`.
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Linear),
            1 => Some(Self::StepAfter),
            2 => Some(Self::StepBefore),
            3 => Some(Self::Spline),
            _ => None,
        }
    }
}

/// Per-series rendering choice.
///
/// `line_interpolation` only matters for [`DrawStyle::Line`]; leaving it
/// unset on a line is the plain default render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesRenderConfig {
    pub draw_style: DrawStyle,
    #[serde(default)]
    pub line_interpolation: Option<LineInterpolation>,
}

impl SeriesRenderConfig {
    #[must_use]
    pub const fn new(draw_style: DrawStyle) -> Self {
        Self {
            draw_style,
            line_interpolation: None,
        }
    }

    #[must_use]
    pub const fn line(interpolation: Option<LineInterpolation>) -> Self {
        Self {
            draw_style: DrawStyle::Line,
            line_interpolation: interpolation,
        }
    }

    #[must_use]
    pub const fn with_interpolation(mut self, interpolation: LineInterpolation) -> Self {
        self.line_interpolation = Some(interpolation);
        self
    }
}

impl Default for SeriesRenderConfig {
    /// Step-after line, the widget's out-of-the-box look.
    fn default() -> Self {
        Self::line(Some(LineInterpolation::StepAfter))
    }
}

/// Column-aligned samples: one shared x column and one y column per series.
///
/// `None` entries are gaps. `dimension` is the unit suffix shown in legends.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotData {
    pub x: Vec<f64>,
    pub y: Vec<Vec<Option<f64>>>,
    #[serde(default)]
    pub dimension: String,
}

impl PlotData {
    /// Builds single-series data from raw x/y columns.
    #[must_use]
    pub fn from_columns(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            x,
            y: vec![y.into_iter().map(Some).collect()],
            dimension: String::new(),
        }
    }

    /// Builds single-series data from individual samples, sorted by x.
    #[must_use]
    pub fn from_points(points: &[DataPoint]) -> Self {
        let mut sorted = points.to_vec();
        sorted.sort_by_key(|point| OrderedFloat(point.x));
        Self {
            x: sorted.iter().map(|point| point.x).collect(),
            y: vec![sorted.iter().map(|point| Some(point.y)).collect()],
            dimension: String::new(),
        }
    }

    #[must_use]
    pub fn with_dimension(mut self, dimension: impl Into<String>) -> Self {
        self.dimension = dimension.into();
        self
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.y.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Checks column alignment, finiteness and ascending x order.
    pub fn validate(&self) -> PlotResult<()> {
        if let Some(index) = self.x.iter().position(|x| !x.is_finite()) {
            return Err(PlotError::InvalidData(format!(
                "x value at index {index} must be finite"
            )));
        }
        if self.x.windows(2).any(|pair| pair[1] < pair[0]) {
            return Err(PlotError::InvalidData(
                "x values must be sorted ascending".to_owned(),
            ));
        }
        for (series, column) in self.y.iter().enumerate() {
            if column.len() != self.x.len() {
                return Err(PlotError::InvalidData(format!(
                    "series {series} has {} samples, expected {}",
                    column.len(),
                    self.x.len()
                )));
            }
            if column.iter().flatten().any(|y| !y.is_finite()) {
                return Err(PlotError::InvalidData(format!(
                    "series {series} contains a non-finite value"
                )));
            }
        }
        Ok(())
    }

    /// Full x extent, or `None` when there are no samples.
    #[must_use]
    pub fn x_extent(&self) -> Option<AxisRange> {
        let first = *self.x.first()?;
        let last = *self.x.last()?;
        AxisRange::new(first, last).ok()
    }

    /// Min/max over every present y sample of every series.
    #[must_use]
    pub fn y_extent(&self) -> Option<AxisRange> {
        let mut values = self.y.iter().flatten().flatten().copied();
        let first = values.next()?;
        let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        AxisRange::new(min, max).ok()
    }

    /// Sample of `series` at `index`, if present.
    #[must_use]
    pub fn value(&self, series: usize, index: usize) -> Option<f64> {
        self.y.get(series)?.get(index).copied().flatten()
    }
}
