use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, BaselineExtents, Viewport};
use crate::interaction::{CursorState, InteractionMode};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotContext {
    pub viewport: Viewport,
    pub x_range: Option<AxisRange>,
    pub y_range: Option<AxisRange>,
    pub baseline: Option<BaselineExtents>,
    pub samples_len: usize,
    pub series_len: usize,
    pub interaction_mode: InteractionMode,
    pub cursor: CursorState,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlotEvent {
    DataUpdated { samples_len: usize, series_len: usize },
    Ready { baseline: BaselineExtents },
    ScalesChanged { x: Option<AxisRange>, y: Option<AxisRange> },
    CursorMoved { left: f64, top: f64 },
    CursorLeft,
    CursorLockChanged { locked: bool },
    SeriesFocused { series: Option<usize> },
    PanStarted,
    PanEnded,
    Rendered,
    TornDown,
}

/// Extension hook interface.
///
/// Plugins observe events and read a context snapshot; they never mutate
/// the plot directly.
pub trait PlotPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PlotEvent, context: PlotContext);
}
