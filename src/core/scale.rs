use crate::core::axis_range::AxisRange;
use crate::error::{PlotError, PlotResult};

/// Affine mapping between a value domain and a pixel span `[0, length_px]`.
///
/// The domain may be descending: a value axis drawn top-down is expressed as
/// `LinearScale::new(max, min)` so pixel `0` lands on `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> PlotResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(PlotError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Ascending scale for a horizontal axis.
    pub fn horizontal(range: AxisRange) -> PlotResult<Self> {
        Self::new(range.min, range.max)
    }

    /// Descending scale for a vertical axis whose pixel origin is the top edge.
    pub fn vertical(range: AxisRange) -> PlotResult<Self> {
        Self::new(range.max, range.min)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, length_px: f64) -> PlotResult<f64> {
        validate_length(length_px)?;
        if !value.is_finite() {
            return Err(PlotError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(normalized * length_px)
    }

    pub fn pixel_to_domain(self, pixel: f64, length_px: f64) -> PlotResult<f64> {
        validate_length(length_px)?;
        if !pixel.is_finite() {
            return Err(PlotError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = pixel / length_px;
        Ok(self.domain_start + normalized * span)
    }

    /// Domain units covered by one pixel (negative for descending scales).
    pub fn units_per_pixel(self, length_px: f64) -> PlotResult<f64> {
        Ok(self.pixel_to_domain(1.0, length_px)? - self.pixel_to_domain(0.0, length_px)?)
    }
}

fn validate_length(length_px: f64) -> PlotResult<()> {
    if !length_px.is_finite() || length_px <= 0.0 {
        return Err(PlotError::InvalidData(
            "pixel length must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
