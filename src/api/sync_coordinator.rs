use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::core::Axis;
use crate::error::{PlotError, PlotResult};
use crate::extensions::PlotEvent;
use crate::interaction::{SharedSyncBroker, SyncEvent, SyncKey, SyncSubscription};
use crate::render::Renderer;

use super::PlotEngine;

/// Live registration with a cursor sync broker; unregisters on drop.
pub(super) struct SyncAttachment {
    broker: SharedSyncBroker,
    subscription: SyncSubscription,
    key: SyncKey,
}

impl Drop for SyncAttachment {
    fn drop(&mut self) {
        match self.broker.try_borrow_mut() {
            Ok(mut broker) => {
                broker.unregister(self.subscription);
            }
            Err(_) => warn!(
                key = self.key.as_str(),
                subscription = ?self.subscription,
                "sync broker busy during detach; registration left in place"
            ),
        }
    }
}

impl<R: Renderer> PlotEngine<R> {
    /// Joins `broker` under the configured `sync_key`.
    pub fn attach_cursor_sync(&mut self, broker: &SharedSyncBroker) -> PlotResult<SyncSubscription> {
        let key = self.config.sync_key.clone().ok_or_else(|| {
            PlotError::InvalidConfig("cursor sync requires a sync_key".to_owned())
        })?;
        Ok(self.attach_cursor_sync_with_key(broker, key))
    }

    /// Joins `broker` under `key`, replacing any previous registration.
    pub fn attach_cursor_sync_with_key(
        &mut self,
        broker: &SharedSyncBroker,
        key: SyncKey,
    ) -> SyncSubscription {
        self.detach_cursor_sync();
        let subscription = broker.borrow_mut().register(key.clone());
        debug!(key = key.as_str(), ?subscription, "attached cursor sync");
        self.sync = Some(SyncAttachment {
            broker: Rc::clone(broker),
            subscription,
            key,
        });
        subscription
    }

    /// Leaves the broker; returns `false` when not attached.
    pub fn detach_cursor_sync(&mut self) -> bool {
        self.sync.take().is_some()
    }

    #[must_use]
    pub fn sync_key(&self) -> Option<&SyncKey> {
        self.sync.as_ref().map(|attachment| &attachment.key)
    }

    /// Applies cursor activity published by peer plots.
    ///
    /// Mirrored events update this plot's cursor and focus but are never
    /// published again. Returns how many events were applied.
    pub fn sync_cursor_from_peers(&mut self) -> usize {
        let Some(attachment) = &self.sync else {
            return 0;
        };
        let events = attachment
            .broker
            .borrow_mut()
            .drain(attachment.subscription);

        let mut applied = 0;
        for event in events {
            if self.apply_peer_event(event) {
                applied += 1;
            }
        }
        applied
    }

    fn apply_peer_event(&mut self, event: SyncEvent) -> bool {
        trace!(?event, "applying peer cursor event");
        match event {
            SyncEvent::CursorMoved { x_value, y_value } => {
                let (Some(left), Some(top)) = (
                    self.scales.val_to_pos(x_value, Axis::X),
                    self.scales.val_to_pos(y_value, Axis::Y),
                ) else {
                    return false;
                };
                if !self.cursor.on_pointer_move(left, top) {
                    return false;
                }
                let focused = self.cursor.focused_series;
                self.refresh_cursor_targets();
                self.cursor.focused_series = focused;
                self.emit_plugin_event(PlotEvent::CursorMoved { left, top });
                true
            }
            SyncEvent::CursorLeft => {
                if self.cursor.locked {
                    return false;
                }
                self.cursor.on_pointer_leave();
                self.emit_plugin_event(PlotEvent::CursorLeft);
                true
            }
            SyncEvent::SeriesFocused { series } => {
                if series.is_some_and(|index| index >= self.data.series_count()) {
                    return false;
                }
                self.cursor.focused_series = series;
                self.emit_plugin_event(PlotEvent::SeriesFocused { series });
                true
            }
            SyncEvent::ButtonPressed | SyncEvent::ButtonReleased => false,
        }
    }

    pub(super) fn publish_sync(&mut self, event: SyncEvent) {
        if let Some(attachment) = &self.sync {
            attachment
                .broker
                .borrow_mut()
                .publish(attachment.subscription, event);
        }
    }
}
