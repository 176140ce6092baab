//! Pointer-driven state: cursor tracking, pan/zoom navigation and
//! cross-chart cursor synchronization.

mod navigation;
mod sync;

pub use navigation::{
    DEFAULT_ZOOM_FACTOR, MIN_RELATIVE_SPAN, NavigationConfig, NavigationSession, ScaleHost,
    ScaleUpdate, ViewportNavigationController,
};
pub use sync::{CursorSyncBroker, SharedSyncBroker, SyncEvent, SyncKey, SyncSubscription};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    Other(u16),
}

impl PointerButton {
    /// Maps DOM `MouseEvent.button` numbering (0 = primary, 1 = middle).
    #[must_use]
    pub fn from_dom_code(code: u16) -> Self {
        match code {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }

    /// Maps X11/GDK button numbering (1 = primary, 2 = middle).
    #[must_use]
    pub fn from_gdk_button(button: u32) -> Self {
        match button {
            1 => Self::Primary,
            2 => Self::Middle,
            3 => Self::Secondary,
            other => Self::Other(u16::try_from(other).unwrap_or(u16::MAX)),
        }
    }

    /// X11/GDK button number, the inverse of [`Self::from_gdk_button`].
    #[must_use]
    pub fn gdk_button(self) -> u32 {
        match self {
            Self::Primary => 1,
            Self::Middle => 2,
            Self::Secondary => 3,
            Self::Other(button) => u32::from(button),
        }
    }
}

/// Button press or release over the plot surface.
///
/// Coordinates are plot-surface pixels with the origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub button: PointerButton,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    #[must_use]
    pub fn new(button: PointerButton, x: f64, y: f64) -> Self {
        Self { button, x, y }
    }
}

/// Wheel notch at a cursor position. `delta_y < 0` means "zoom in".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelEvent {
    pub delta_y: f64,
    pub x: f64,
    pub y: f64,
}

impl WheelEvent {
    #[must_use]
    pub fn new(delta_y: f64, x: f64, y: f64) -> Self {
        Self { delta_y, x, y }
    }

    #[must_use]
    pub fn zooms_in(self) -> bool {
        self.delta_y < 0.0
    }
}

pub const DEFAULT_FOCUS_PROXIMITY_PX: f64 = 16.0;

/// Cursor behavior tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// A primary-button click toggles a locked cursor.
    pub lock: bool,
    /// A series gains focus when one of its samples is this close (pixels).
    pub focus_proximity_px: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            lock: true,
            focus_proximity_px: DEFAULT_FOCUS_PROXIMITY_PX,
        }
    }
}

/// Public cursor state exposed to host applications.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CursorState {
    pub visible: bool,
    pub left: f64,
    pub top: f64,
    pub locked: bool,
    /// Sample index closest to the cursor x.
    pub index: Option<usize>,
    pub focused_series: Option<usize>,
}

impl CursorState {
    /// Moves the cursor; returns `false` when locked.
    pub fn on_pointer_move(&mut self, left: f64, top: f64) -> bool {
        if self.locked {
            return false;
        }
        self.visible = true;
        self.left = left;
        self.top = top;
        true
    }

    pub fn on_pointer_leave(&mut self) {
        if self.locked {
            return;
        }
        self.visible = false;
        self.index = None;
        self.focused_series = None;
    }

    pub fn toggle_lock(&mut self) -> bool {
        self.locked = !self.locked;
        self.locked
    }
}
