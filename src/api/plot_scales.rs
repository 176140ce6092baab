use tracing::trace;

use crate::core::{Axis, AxisRange, LinearScale, PlotData, Viewport};
use crate::interaction::{ScaleHost, ScaleUpdate};

/// The x/y scales of one plot surface.
///
/// Both ranges are unset until the plot is fitted to data. `revision` bumps
/// once per applied [`ScaleUpdate`], never once per axis.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlotScales {
    viewport: Viewport,
    x: Option<AxisRange>,
    y: Option<AxisRange>,
    revision: u64,
}

impl PlotScales {
    pub(crate) fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            x: None,
            y: None,
            revision: 0,
        }
    }

    pub(crate) fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub(crate) fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.revision += 1;
    }

    pub(crate) fn x(&self) -> Option<AxisRange> {
        self.x
    }

    pub(crate) fn y(&self) -> Option<AxisRange> {
        self.y
    }

    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn is_fitted(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }

    pub(crate) fn clear(&mut self) {
        self.x = None;
        self.y = None;
        self.revision += 1;
    }

    /// Fits x to the data extent and y to the padded value extent.
    ///
    /// Returns `false` when the data has no x samples or no y values.
    pub(crate) fn fit_to_data(&mut self, data: &PlotData, y_padding_ratio: f64) -> bool {
        let (Some(x), Some(y)) = (data.x_extent(), data.y_extent()) else {
            return false;
        };
        let x = widen_degenerate(x, 0.5);
        let padding = y.span() * y_padding_ratio;
        let y = widen_degenerate(
            AxisRange {
                min: y.min - padding,
                max: y.max + padding,
            },
            1.0,
        );
        self.apply_scales(ScaleUpdate {
            x: Some(x),
            y: Some(y),
        });
        true
    }

    pub(crate) fn axis_scale(&self, axis: Axis) -> Option<LinearScale> {
        match axis {
            Axis::X => LinearScale::horizontal(self.x?).ok(),
            Axis::Y => LinearScale::vertical(self.y?).ok(),
        }
    }

    pub(crate) fn axis_length(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.viewport.width_px(),
            Axis::Y => self.viewport.height_px(),
        }
    }

    /// Converts a value to a surface pixel offset (left for x, top for y).
    pub(crate) fn val_to_pos(&self, value: f64, axis: Axis) -> Option<f64> {
        self.axis_scale(axis)?
            .domain_to_pixel(value, self.axis_length(axis))
            .ok()
    }
}

impl ScaleHost for PlotScales {
    fn scale_range(&self, axis: Axis) -> Option<AxisRange> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    fn plot_size(&self) -> Option<(f64, f64)> {
        self.viewport
            .is_valid()
            .then(|| (self.viewport.width_px(), self.viewport.height_px()))
    }

    fn pos_to_val(&self, pos: f64, axis: Axis) -> Option<f64> {
        self.axis_scale(axis)?
            .pixel_to_domain(pos, self.axis_length(axis))
            .ok()
    }

    fn apply_scales(&mut self, update: ScaleUpdate) {
        if update.is_empty() {
            return;
        }
        if let Some(x) = update.x {
            self.x = Some(x);
        }
        if let Some(y) = update.y {
            self.y = Some(y);
        }
        self.revision += 1;
        trace!(revision = self.revision, ?update, "scales applied");
    }
}

fn widen_degenerate(range: AxisRange, half_span: f64) -> AxisRange {
    if range.span() > 0.0 {
        return range;
    }
    AxisRange {
        min: range.min - half_span,
        max: range.max + half_span,
    }
}
