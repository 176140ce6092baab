mod data_controller;
mod engine_config;
mod interaction_coordinator;
mod legend;
mod plot_scales;
mod plugin_registry;
mod render_coordinator;
mod sync_coordinator;

pub use engine_config::{
    DEFAULT_MARKER_RADIUS_PX, DEFAULT_SERIES_FILL, DEFAULT_SERIES_STROKE, PlotEngineConfig,
    SeriesOptions,
};
pub use legend::{LEGEND_EMPTY_VALUE, LegendRow, format_series_value, format_time_value};

use tracing::debug;

use crate::core::{AxisRange, BaselineExtents, PlotData, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::extensions::{PlotEvent, PlotPlugin};
use crate::interaction::{
    CursorState, InteractionMode, NavigationSession, ScaleHost, ScaleUpdate,
    ViewportNavigationController,
};
use crate::render::Renderer;

use plot_scales::PlotScales;
use sync_coordinator::SyncAttachment;

/// One embeddable time-series plot.
///
/// The engine owns the scales that the navigation controller moves, the
/// aligned series data, cursor state, plugins and an optional cursor-sync
/// registration. Drawing is delegated to `R`.
pub struct PlotEngine<R: Renderer> {
    renderer: R,
    config: PlotEngineConfig,
    scales: PlotScales,
    navigation: ViewportNavigationController,
    cursor: CursorState,
    data: PlotData,
    plugins: Vec<Box<dyn PlotPlugin>>,
    sync: Option<SyncAttachment>,
    primary_press: Option<(f64, f64)>,
}

impl<R: Renderer> PlotEngine<R> {
    pub fn new(renderer: R, config: PlotEngineConfig) -> PlotResult<Self> {
        config.validate()?;
        let navigation = ViewportNavigationController::new(config.navigation)?;

        Ok(Self {
            renderer,
            scales: PlotScales::new(config.viewport),
            navigation,
            cursor: CursorState::default(),
            data: PlotData::default(),
            plugins: Vec::new(),
            sync: None,
            primary_press: None,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &PlotEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.scales.viewport()
    }

    /// Resizes the plot surface. Ranges and baseline stay in data units.
    pub fn set_viewport(&mut self, viewport: Viewport) -> PlotResult<()> {
        let viewport = viewport.ensure_valid()?;
        if viewport == self.scales.viewport() {
            return Ok(());
        }
        debug!(width = viewport.width, height = viewport.height, "plot resized");
        self.scales.set_viewport(viewport);
        self.config.viewport = viewport;
        self.refresh_cursor_targets();
        Ok(())
    }

    #[must_use]
    pub fn data(&self) -> &PlotData {
        &self.data
    }

    #[must_use]
    pub fn x_range(&self) -> Option<AxisRange> {
        self.scales.x()
    }

    #[must_use]
    pub fn y_range(&self) -> Option<AxisRange> {
        self.scales.y()
    }

    #[must_use]
    pub fn baseline(&self) -> Option<BaselineExtents> {
        self.navigation.baseline()
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.navigation.baseline().is_some()
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.navigation.mode()
    }

    #[must_use]
    pub fn navigation_session(&self) -> Option<NavigationSession> {
        self.navigation.session()
    }

    #[must_use]
    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    /// Converts a surface pixel offset to a value on `axis`.
    #[must_use]
    pub fn pos_to_val(&self, pos: f64, axis: crate::core::Axis) -> Option<f64> {
        self.scales.pos_to_val(pos, axis)
    }

    /// Converts a value on `axis` to a surface pixel offset.
    #[must_use]
    pub fn val_to_pos(&self, value: f64, axis: crate::core::Axis) -> Option<f64> {
        self.scales.val_to_pos(value, axis)
    }

    /// Fits scales to the loaded data and captures the baseline extents.
    ///
    /// Returns `true` only on the call that captured the baseline. Without
    /// data the plot stays not-ready and navigation keeps no-oping.
    pub fn ready(&mut self) -> bool {
        if self.is_ready() {
            return false;
        }
        if !self.scales.is_fitted() && !self.scales.fit_to_data(&self.data, self.config.y_padding_ratio)
        {
            debug!("ready deferred: no data to fit scales");
            return false;
        }
        if !self.navigation.on_ready(&self.scales) {
            return false;
        }
        if let Some(baseline) = self.navigation.baseline() {
            self.emit_plugin_event(PlotEvent::Ready { baseline });
        }
        true
    }

    /// Forgets scales, baseline, gesture and cursor. `ready` starts over.
    pub fn teardown(&mut self) {
        self.navigation.teardown();
        self.scales.clear();
        self.cursor = CursorState::default();
        self.primary_press = None;
        debug!("plot torn down");
        self.emit_plugin_event(PlotEvent::TornDown);
    }

    pub fn set_x_range(&mut self, range: AxisRange) -> PlotResult<()> {
        self.set_scales(ScaleUpdate {
            x: Some(range),
            y: None,
        })
    }

    pub fn set_y_range(&mut self, range: AxisRange) -> PlotResult<()> {
        self.set_scales(ScaleUpdate {
            x: None,
            y: Some(range),
        })
    }

    /// Programmatic scale change. Rejected while a pan gesture owns the axes.
    pub fn set_scales(&mut self, update: ScaleUpdate) -> PlotResult<()> {
        if self.navigation.mode() == InteractionMode::Panning {
            return Err(PlotError::GestureInProgress);
        }
        let update = ScaleUpdate {
            x: update.x.map(|r| AxisRange::new(r.min, r.max)).transpose()?,
            y: update.y.map(|r| AxisRange::new(r.min, r.max)).transpose()?,
        };
        let revision = self.scales.revision();
        self.scales.apply_scales(update);
        self.emit_scales_changed_since(revision);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(crate) fn emit_scales_changed_since(&mut self, revision: u64) {
        if self.scales.revision() != revision {
            self.emit_plugin_event(PlotEvent::ScalesChanged {
                x: self.scales.x(),
                y: self.scales.y(),
            });
        }
    }
}
