use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Axis, AxisRange, BaselineExtents};
use crate::error::{PlotError, PlotResult};
use crate::interaction::{InteractionMode, PointerButton, PointerEvent, WheelEvent};

pub const DEFAULT_ZOOM_FACTOR: f64 = 0.75;

/// Smallest zoomed-in span, relative to the magnitude of the axis bounds.
pub const MIN_RELATIVE_SPAN: f64 = 1e-9;

/// Scale access the navigation controller needs from the chart that owns
/// the scales.
///
/// Readers return `None` while the chart is not ready; the controller then
/// degrades to a no-op instead of failing.
pub trait ScaleHost {
    fn scale_range(&self, axis: Axis) -> Option<AxisRange>;

    /// Width and height of the interactive plot surface in pixels.
    fn plot_size(&self) -> Option<(f64, f64)>;

    /// Converts a surface pixel offset (left for x, top for y) to a value.
    fn pos_to_val(&self, pos: f64, axis: Axis) -> Option<f64>;

    /// Applies every axis present in `update` as one batched change.
    fn apply_scales(&mut self, update: ScaleUpdate);
}

/// Batched scale change. Axes left as `None` keep their current range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScaleUpdate {
    pub x: Option<AxisRange>,
    pub y: Option<AxisRange>,
}

impl ScaleUpdate {
    #[must_use]
    pub fn x_only(range: AxisRange) -> Self {
        Self {
            x: Some(range),
            y: None,
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}

/// Snapshot taken when a pan gesture starts. Every move is measured
/// against it, never against the previous move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavigationSession {
    pub origin_pointer_x: f64,
    pub origin_range_x: AxisRange,
    pub units_per_px: f64,
}

impl NavigationSession {
    /// X range for a pointer at `pointer_x`.
    #[must_use]
    pub fn range_at(self, pointer_x: f64) -> AxisRange {
        let delta_units = self.units_per_px * (pointer_x - self.origin_pointer_x);
        self.origin_range_x.shifted(-delta_units)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Range multiplier per zoom-in notch; zoom-out divides by it.
    pub zoom_factor: f64,
    pub pan_button: PointerButton,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            pan_button: PointerButton::Middle,
        }
    }
}

impl NavigationConfig {
    pub fn validate(self) -> PlotResult<Self> {
        if !self.zoom_factor.is_finite() || self.zoom_factor <= 0.0 || self.zoom_factor >= 1.0 {
            return Err(PlotError::InvalidConfig(format!(
                "zoom factor must be finite and in (0, 1), got {}",
                self.zoom_factor
            )));
        }
        Ok(self)
    }
}

/// Drag-to-pan and scroll-to-zoom for one chart.
///
/// Baseline extents are captured by [`Self::on_ready`]; until then every
/// handler is a no-op. Handlers return whether scales were changed.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportNavigationController {
    config: NavigationConfig,
    baseline: Option<BaselineExtents>,
    session: Option<NavigationSession>,
}

impl Default for ViewportNavigationController {
    fn default() -> Self {
        Self {
            config: NavigationConfig::default(),
            baseline: None,
            session: None,
        }
    }
}

impl ViewportNavigationController {
    pub fn new(config: NavigationConfig) -> PlotResult<Self> {
        Ok(Self {
            config: config.validate()?,
            baseline: None,
            session: None,
        })
    }

    pub fn with_zoom_factor(zoom_factor: f64) -> PlotResult<Self> {
        Self::new(NavigationConfig {
            zoom_factor,
            ..NavigationConfig::default()
        })
    }

    #[must_use]
    pub fn config(&self) -> NavigationConfig {
        self.config
    }

    #[must_use]
    pub fn baseline(&self) -> Option<BaselineExtents> {
        self.baseline
    }

    #[must_use]
    pub fn session(&self) -> Option<NavigationSession> {
        self.session
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        if self.session.is_some() {
            InteractionMode::Panning
        } else {
            InteractionMode::Idle
        }
    }

    /// Move/release handlers are only live while a pan session exists.
    #[must_use]
    pub fn is_tracking_pointer(&self) -> bool {
        self.session.is_some()
    }

    /// Captures baseline extents from the host's current scales.
    ///
    /// Runs once per chart lifetime; returns `false` when the extents were
    /// already captured or the scales are not readable yet.
    pub fn on_ready<H: ScaleHost + ?Sized>(&mut self, host: &H) -> bool {
        if self.baseline.is_some() {
            return false;
        }
        let (Some(x), Some(y)) = (host.scale_range(Axis::X), host.scale_range(Axis::Y)) else {
            return false;
        };
        let baseline = BaselineExtents::capture(x, y);
        debug!(?baseline, "captured navigation baseline extents");
        self.baseline = Some(baseline);
        true
    }

    /// Drops baseline and any active gesture; the next `on_ready` recaptures.
    pub fn teardown(&mut self) {
        self.baseline = None;
        self.session = None;
    }

    /// Starts a pan session when the configured button is pressed.
    pub fn on_pointer_down<H: ScaleHost + ?Sized>(&mut self, host: &H, event: PointerEvent) -> bool {
        if event.button != self.config.pan_button || self.session.is_some() {
            return false;
        }
        if self.baseline.is_none() || !event.x.is_finite() {
            return false;
        }
        let Some(origin_range_x) = host.scale_range(Axis::X) else {
            return false;
        };
        let Some(units_per_px) = units_per_px(host) else {
            return false;
        };

        debug!(origin_pointer_x = event.x, ?origin_range_x, "pan started");
        self.session = Some(NavigationSession {
            origin_pointer_x: event.x,
            origin_range_x,
            units_per_px,
        });
        true
    }

    /// Shifts the x range with the pointer while panning. Y is untouched.
    pub fn on_pointer_move<H: ScaleHost + ?Sized>(&mut self, host: &mut H, pointer_x: f64) -> bool {
        let Some(session) = self.session else {
            return false;
        };
        if !pointer_x.is_finite() {
            return false;
        }
        let range = session.range_at(pointer_x);
        trace!(pointer_x, min = range.min, max = range.max, "pan move");
        host.apply_scales(ScaleUpdate::x_only(range));
        true
    }

    /// Ends the pan session on any button release.
    pub fn on_pointer_up(&mut self) -> bool {
        self.end_session("pan ended")
    }

    /// Ends the pan session when the surface loses pointer capture.
    pub fn on_capture_lost(&mut self) -> bool {
        self.end_session("pan cancelled")
    }

    fn end_session(&mut self, reason: &'static str) -> bool {
        if self.session.take().is_some() {
            debug!(reason, "pan session closed");
            return true;
        }
        false
    }

    /// Zooms both axes around the cursor, clamped to the baseline extents.
    ///
    /// Axes whose new window cannot be computed keep their range. Both axes
    /// reach the host in one [`ScaleUpdate`].
    pub fn on_wheel<H: ScaleHost + ?Sized>(&mut self, host: &mut H, event: WheelEvent) -> bool {
        let update = self.wheel_update(&*host, event);
        if update.is_empty() {
            return false;
        }
        trace!(?update, delta_y = event.delta_y, "wheel zoom");
        host.apply_scales(update);
        true
    }

    /// Computes the scale change a wheel event would cause without applying it.
    #[must_use]
    pub fn wheel_update<H: ScaleHost + ?Sized>(&self, host: &H, event: WheelEvent) -> ScaleUpdate {
        let Some(baseline) = self.baseline else {
            return ScaleUpdate::default();
        };
        let Some((width, height)) = host.plot_size() else {
            return ScaleUpdate::default();
        };
        if !(width > 0.0 && height > 0.0) || !event.delta_y.is_finite() {
            return ScaleUpdate::default();
        }

        let left_pct = event.x / width;
        let bottom_pct = 1.0 - event.y / height;
        let zoom_in = event.zooms_in();

        ScaleUpdate {
            x: self.zoom_axis(host, baseline, Axis::X, event.x, left_pct, zoom_in),
            y: self.zoom_axis(host, baseline, Axis::Y, event.y, bottom_pct, zoom_in),
        }
    }

    fn zoom_axis<H: ScaleHost + ?Sized>(
        &self,
        host: &H,
        baseline: BaselineExtents,
        axis: Axis,
        cursor_px: f64,
        fraction: f64,
        zoom_in: bool,
    ) -> Option<AxisRange> {
        let anchor = host.pos_to_val(cursor_px, axis)?;
        let current = host.scale_range(axis)?;
        let old_range = current.span();
        let new_range = if zoom_in {
            old_range * self.config.zoom_factor
        } else {
            old_range / self.config.zoom_factor
        };
        // Past this span f64 rounding pins both bounds and zoom-out stalls.
        let floor = current.min.abs().max(current.max.abs()) * MIN_RELATIVE_SPAN;
        if zoom_in && new_range <= floor {
            trace!(?axis, new_range, floor, "zoom-in refused at precision floor");
            return None;
        }
        let new_min = anchor - fraction * new_range;
        let new_max = new_min + new_range;
        baseline.clamp(axis, new_range, new_min, new_max)
    }
}

fn units_per_px<H: ScaleHost + ?Sized>(host: &H) -> Option<f64> {
    let units = host.pos_to_val(1.0, Axis::X)? - host.pos_to_val(0.0, Axis::X)?;
    units.is_finite().then_some(units)
}
