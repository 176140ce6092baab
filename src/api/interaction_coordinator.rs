use ordered_float::OrderedFloat;
use tracing::trace;

use crate::core::{Axis, nearest_index};
use crate::extensions::PlotEvent;
use crate::interaction::{PointerButton, PointerEvent, ScaleHost, SyncEvent, WheelEvent};
use crate::render::Renderer;

use super::PlotEngine;

/// Movement tolerance (pixels) for a press/release pair to count as a click.
const CLICK_SLOP_PX: f64 = 1.0;

pub(super) struct InteractionCoordinator;

impl InteractionCoordinator {
    fn pointer_down<R: Renderer>(engine: &mut PlotEngine<R>, event: PointerEvent) {
        engine.publish_sync(SyncEvent::ButtonPressed);

        if event.button == PointerButton::Primary && engine.config.cursor.lock {
            engine.primary_press = Some((event.x, event.y));
        }

        if engine.navigation.on_pointer_down(&engine.scales, event) {
            engine.emit_plugin_event(PlotEvent::PanStarted);
        }
    }

    fn pointer_move<R: Renderer>(engine: &mut PlotEngine<R>, x: f64, y: f64) {
        let revision = engine.scales.revision();
        engine.navigation.on_pointer_move(&mut engine.scales, x);
        engine.emit_scales_changed_since(revision);

        if !engine.cursor.on_pointer_move(x, y) {
            trace!("cursor locked; ignoring pointer move");
            return;
        }
        let focus_before = engine.cursor.focused_series;
        engine.refresh_cursor_targets();
        engine.emit_plugin_event(PlotEvent::CursorMoved { left: x, top: y });

        if let (Some(x_value), Some(y_value)) = (
            engine.scales.pos_to_val(x, Axis::X),
            engine.scales.pos_to_val(y, Axis::Y),
        ) {
            engine.publish_sync(SyncEvent::CursorMoved { x_value, y_value });
        }
        if engine.cursor.focused_series != focus_before {
            let series = engine.cursor.focused_series;
            engine.emit_plugin_event(PlotEvent::SeriesFocused { series });
            engine.publish_sync(SyncEvent::SeriesFocused { series });
        }
    }

    fn pointer_up<R: Renderer>(engine: &mut PlotEngine<R>, event: PointerEvent) {
        engine.publish_sync(SyncEvent::ButtonReleased);

        if engine.navigation.on_pointer_up() {
            engine.emit_plugin_event(PlotEvent::PanEnded);
        }

        let press = engine.primary_press.take();
        if event.button != PointerButton::Primary {
            return;
        }
        if let Some((press_x, press_y)) = press {
            let moved = (event.x - press_x).hypot(event.y - press_y);
            if moved <= CLICK_SLOP_PX {
                let locked = engine.cursor.toggle_lock();
                engine.emit_plugin_event(PlotEvent::CursorLockChanged { locked });
            }
        }
    }

    fn pointer_leave<R: Renderer>(engine: &mut PlotEngine<R>) {
        if engine.cursor.locked {
            return;
        }
        engine.cursor.on_pointer_leave();
        engine.emit_plugin_event(PlotEvent::CursorLeft);
        engine.publish_sync(SyncEvent::CursorLeft);
    }

    fn capture_lost<R: Renderer>(engine: &mut PlotEngine<R>) {
        engine.primary_press = None;
        if engine.navigation.on_capture_lost() {
            engine.emit_plugin_event(PlotEvent::PanEnded);
        }
    }

    fn wheel<R: Renderer>(engine: &mut PlotEngine<R>, event: WheelEvent) {
        let revision = engine.scales.revision();
        if engine.navigation.on_wheel(&mut engine.scales, event) {
            engine.refresh_cursor_targets();
        }
        engine.emit_scales_changed_since(revision);
    }
}

impl<R: Renderer> PlotEngine<R> {
    /// Button press over the plot surface.
    pub fn pointer_down(&mut self, event: PointerEvent) {
        InteractionCoordinator::pointer_down(self, event);
    }

    /// Pointer motion; pans while a pan gesture is active and moves the cursor.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        InteractionCoordinator::pointer_move(self, x, y);
    }

    /// Button release anywhere; ends an active pan gesture.
    pub fn pointer_up(&mut self, event: PointerEvent) {
        InteractionCoordinator::pointer_up(self, event);
    }

    pub fn pointer_leave(&mut self) {
        InteractionCoordinator::pointer_leave(self);
    }

    /// The surface lost pointer capture; cancels an active pan gesture.
    pub fn pointer_capture_lost(&mut self) {
        InteractionCoordinator::capture_lost(self);
    }

    /// Wheel notch; zooms both axes around the cursor.
    pub fn wheel(&mut self, event: WheelEvent) {
        InteractionCoordinator::wheel(self, event);
    }

    /// Recomputes the cursor's nearest sample index and focused series.
    pub(super) fn refresh_cursor_targets(&mut self) {
        if !self.cursor.visible {
            return;
        }
        self.cursor.index = self
            .scales
            .pos_to_val(self.cursor.left, Axis::X)
            .and_then(|x| nearest_index(&self.data.x, x));
        self.cursor.focused_series = self.nearest_series_at_cursor();
    }

    fn nearest_series_at_cursor(&self) -> Option<usize> {
        let index = self.cursor.index?;
        let proximity = self.config.cursor.focus_proximity_px;
        let top = self.cursor.top;

        (0..self.data.series_count())
            .filter_map(|series| {
                let value = self.data.value(series, index)?;
                let y = self.scales.val_to_pos(value, Axis::Y)?;
                Some((series, (y - top).abs()))
            })
            .filter(|(_, distance)| *distance <= proximity)
            .min_by_key(|(_, distance)| OrderedFloat(*distance))
            .map(|(series, _)| series)
    }
}
