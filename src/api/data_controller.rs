use tracing::{debug, warn};

use crate::core::PlotData;
use crate::error::PlotResult;
use crate::extensions::PlotEvent;
use crate::render::Renderer;

use super::PlotEngine;

impl<R: Renderer> PlotEngine<R> {
    /// Replaces the aligned series data.
    ///
    /// Scales and baseline extents of a ready plot are kept; call
    /// `teardown` + `ready` to refit them to the new data.
    pub fn set_data(&mut self, data: PlotData) -> PlotResult<()> {
        if let Err(err) = data.validate() {
            warn!(error = %err, "rejecting plot data");
            return Err(err);
        }
        debug!(
            samples = data.len(),
            series = data.series_count(),
            "set plot data"
        );
        self.data = data;
        self.refresh_cursor_targets();
        self.emit_plugin_event(PlotEvent::DataUpdated {
            samples_len: self.data.len(),
            series_len: self.data.series_count(),
        });
        Ok(())
    }

    /// Convenience loader for a single series of raw x/y columns.
    pub fn set_columns(&mut self, x: Vec<f64>, y: Vec<f64>) -> PlotResult<()> {
        self.set_data(PlotData::from_columns(x, y))
    }
}
