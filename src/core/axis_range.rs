use serde::{Deserialize, Serialize};

use crate::core::types::Axis;
use crate::error::{PlotError, PlotResult};

/// Visible (or full-data) bounds of one axis. Always `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Builds a range from two finite bounds given in any order.
    pub fn new(a: f64, b: f64) -> PlotResult<Self> {
        if !a.is_finite() || !b.is_finite() {
            return Err(PlotError::InvalidData(
                "axis range bounds must be finite".to_owned(),
            ));
        }
        Ok(Self {
            min: a.min(b),
            max: a.max(b),
        })
    }

    /// Reads a range from possibly-unset scale bounds.
    ///
    /// Returns `None` when either bound is missing, non-finite or inverted.
    #[must_use]
    pub fn from_bounds(min: Option<f64>, max: Option<f64>) -> Option<Self> {
        let (min, max) = (defined(min)?, defined(max)?);
        (min <= max).then_some(Self { min, max })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn shifted(self, delta: f64) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Full-data axis ranges captured once when a chart becomes ready.
///
/// They bound every later zoom: the visible window can shrink and slide
/// inside them but never grow past them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineExtents {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub x_range: f64,
    pub y_range: f64,
}

impl BaselineExtents {
    #[must_use]
    pub fn capture(x: AxisRange, y: AxisRange) -> Self {
        Self {
            x_min: x.min,
            x_max: x.max,
            y_min: y.min,
            y_max: y.max,
            x_range: x.span(),
            y_range: y.span(),
        }
    }

    #[must_use]
    pub fn axis(self, axis: Axis) -> AxisRange {
        match axis {
            Axis::X => AxisRange {
                min: self.x_min,
                max: self.x_max,
            },
            Axis::Y => AxisRange {
                min: self.y_min,
                max: self.y_max,
            },
        }
    }

    /// Clamps a proposed window for `axis` against these extents.
    #[must_use]
    pub fn clamp(self, axis: Axis, new_range: f64, new_min: f64, new_max: f64) -> Option<AxisRange> {
        let (base_range, base_min, base_max) = match axis {
            Axis::X => (self.x_range, self.x_min, self.x_max),
            Axis::Y => (self.y_range, self.y_min, self.y_max),
        };
        clamp_range(
            Some(new_range),
            Some(new_min),
            Some(new_max),
            Some(base_range),
            Some(base_min),
            Some(base_max),
        )
    }
}

/// Fits a proposed `[new_min, new_max]` window of width `new_range` inside
/// the baseline `[base_min, base_max]` of width `base_range`.
///
/// - wider than the baseline: snaps to the baseline
/// - starts before the baseline: slides right, keeping its width
/// - ends after the baseline: slides left, keeping its width
///
/// Any unset or non-finite input yields `None`. Zero is a valid bound.
#[must_use]
pub fn clamp_range(
    new_range: Option<f64>,
    new_min: Option<f64>,
    new_max: Option<f64>,
    base_range: Option<f64>,
    base_min: Option<f64>,
    base_max: Option<f64>,
) -> Option<AxisRange> {
    let new_range = defined(new_range)?;
    let mut new_min = defined(new_min)?;
    let mut new_max = defined(new_max)?;
    let base_range = defined(base_range)?;
    let base_min = defined(base_min)?;
    let base_max = defined(base_max)?;

    if new_range > base_range {
        new_min = base_min;
        new_max = base_max;
    } else if new_min < base_min {
        new_min = base_min;
        new_max = base_min + new_range;
    } else if new_max > base_max {
        new_max = base_max;
        new_min = base_max - new_range;
    }

    Some(AxisRange {
        min: new_min,
        max: new_max,
    })
}

fn defined(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::{AxisRange, BaselineExtents, clamp_range};
    use crate::core::Axis;

    #[test]
    fn zero_valued_bounds_are_legitimate_clamp_inputs() {
        let clamped = clamp_range(
            Some(10.0),
            Some(-5.0),
            Some(5.0),
            Some(100.0),
            Some(0.0),
            Some(100.0),
        );
        assert_eq!(clamped, Some(AxisRange { min: 0.0, max: 10.0 }));
    }

    #[test]
    fn missing_input_aborts_clamp() {
        assert_eq!(
            clamp_range(None, Some(1.0), Some(2.0), Some(10.0), Some(0.0), Some(10.0)),
            None
        );
        assert_eq!(
            clamp_range(Some(1.0), Some(f64::NAN), Some(2.0), Some(10.0), Some(0.0), Some(10.0)),
            None
        );
    }

    #[test]
    fn window_past_max_slides_left() {
        let baseline = BaselineExtents::capture(
            AxisRange::new(0.0, 100.0).expect("x"),
            AxisRange::new(-1.0, 1.0).expect("y"),
        );
        let clamped = baseline.clamp(Axis::X, 20.0, 90.0, 110.0).expect("clamped");
        assert_eq!(clamped, AxisRange { min: 80.0, max: 100.0 });
    }

    #[test]
    fn from_bounds_rejects_unset_and_inverted() {
        assert_eq!(AxisRange::from_bounds(None, Some(1.0)), None);
        assert_eq!(AxisRange::from_bounds(Some(2.0), Some(1.0)), None);
        assert_eq!(
            AxisRange::from_bounds(Some(0.0), Some(0.0)),
            Some(AxisRange { min: 0.0, max: 0.0 })
        );
    }
}
