use std::cell::RefCell;
use std::mem;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

/// Shared identifier grouping charts that mirror each other's cursor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyncKey(String);

impl SyncKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Charts match for cursor and series sync only on identical keys.
    #[must_use]
    pub fn matches(&self, other: &SyncKey) -> bool {
        self == other
    }
}

impl From<&str> for SyncKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Cursor activity one chart publishes to its peers.
///
/// Positions travel in data space so each receiver maps them through its
/// own scales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SyncEvent {
    CursorMoved { x_value: f64, y_value: f64 },
    CursorLeft,
    SeriesFocused { series: Option<usize> },
    ButtonPressed,
    ButtonReleased,
}

impl SyncEvent {
    /// Button press/release stay local to the chart that saw them.
    #[must_use]
    pub fn is_forwarded(self) -> bool {
        !matches!(self, Self::ButtonPressed | Self::ButtonReleased)
    }
}

/// Handle returned by [`CursorSyncBroker::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyncSubscription(u64);

#[derive(Debug)]
struct Subscriber {
    id: SyncSubscription,
    inbox: Vec<SyncEvent>,
}

/// Fans cursor events out to every chart registered under the same key.
///
/// Delivery is mailbox based: `publish` queues events for peers, each peer
/// drains its own queue on its next event-loop turn.
#[derive(Debug, Default)]
pub struct CursorSyncBroker {
    groups: IndexMap<SyncKey, Vec<Subscriber>>,
    next_id: u64,
}

pub type SharedSyncBroker = Rc<RefCell<CursorSyncBroker>>;

impl CursorSyncBroker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn shared() -> SharedSyncBroker {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn register(&mut self, key: SyncKey) -> SyncSubscription {
        let id = SyncSubscription(self.next_id);
        self.next_id += 1;
        self.groups.entry(key).or_default().push(Subscriber {
            id,
            inbox: Vec::new(),
        });
        id
    }

    /// Removes a registration; returns `false` for an unknown handle.
    pub fn unregister(&mut self, subscription: SyncSubscription) -> bool {
        let Some((key, position)) = self.locate(subscription) else {
            return false;
        };
        let now_empty = match self.groups.get_mut(&key) {
            Some(group) => {
                group.remove(position);
                group.is_empty()
            }
            None => false,
        };
        if now_empty {
            self.groups.shift_remove(&key);
        }
        true
    }

    #[must_use]
    pub fn key_of(&self, subscription: SyncSubscription) -> Option<&SyncKey> {
        self.groups
            .iter()
            .find(|(_, group)| group.iter().any(|entry| entry.id == subscription))
            .map(|(key, _)| key)
    }

    #[must_use]
    pub fn subscriber_count(&self, key: &SyncKey) -> usize {
        self.groups.get(key).map_or(0, Vec::len)
    }

    /// Queues `event` for every other registrant sharing the sender's key.
    ///
    /// A queued event of the same kind is replaced, so an undrained inbox
    /// holds at most one event per kind. Returns the number of peers that received it; filtered events and
    /// unknown senders reach nobody.
    pub fn publish(&mut self, sender: SyncSubscription, event: SyncEvent) -> usize {
        if !event.is_forwarded() {
            trace!(?event, "sync event filtered at broker");
            return 0;
        }
        let Some((key, _)) = self.locate(sender) else {
            return 0;
        };
        let Some(group) = self.groups.get_mut(&key) else {
            return 0;
        };

        let mut delivered = 0;
        for peer in group.iter_mut().filter(|peer| peer.id != sender) {
            let kind = mem::discriminant(&event);
            peer.inbox.retain(|queued| mem::discriminant(queued) != kind);
            peer.inbox.push(event);
            delivered += 1;
        }
        trace!(key = key.as_str(), ?event, delivered, "sync event published");
        delivered
    }

    /// Takes every event queued for `subscription`, oldest first.
    pub fn drain(&mut self, subscription: SyncSubscription) -> SmallVec<[SyncEvent; 4]> {
        self.groups
            .values_mut()
            .flat_map(|group| group.iter_mut())
            .find(|entry| entry.id == subscription)
            .map(|entry| entry.inbox.drain(..).collect())
            .unwrap_or_default()
    }

    /// Number of events waiting in the inbox of `subscription`.
    #[must_use]
    pub fn pending(&self, subscription: SyncSubscription) -> usize {
        self.groups
            .values()
            .flat_map(|group| group.iter())
            .find(|entry| entry.id == subscription)
            .map_or(0, |entry| entry.inbox.len())
    }

    fn locate(&self, subscription: SyncSubscription) -> Option<(SyncKey, usize)> {
        self.groups.iter().find_map(|(key, group)| {
            group
                .iter()
                .position(|entry| entry.id == subscription)
                .map(|position| (key.clone(), position))
        })
    }
}
