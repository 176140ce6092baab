use crate::error::{PlotError, PlotResult};
use crate::extensions::{PlotContext, PlotEvent, PlotPlugin};
use crate::render::Renderer;

use super::PlotEngine;

impl<R: Renderer> PlotEngine<R> {
    /// Registers a plugin with a unique, non-empty id.
    pub fn register_plugin(&mut self, plugin: Box<dyn PlotPlugin>) -> PlotResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(PlotError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(&plugin_id) {
            return Err(PlotError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        self.plugins.push(plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        match self.plugins.iter().position(|entry| entry.id() == plugin_id) {
            Some(position) => {
                self.plugins.remove(position);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }

    #[must_use]
    pub fn plot_context(&self) -> PlotContext {
        PlotContext {
            viewport: self.scales.viewport(),
            x_range: self.scales.x(),
            y_range: self.scales.y(),
            baseline: self.navigation.baseline(),
            samples_len: self.data.len(),
            series_len: self.data.series_count(),
            interaction_mode: self.navigation.mode(),
            cursor: self.cursor,
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PlotEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plot_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
