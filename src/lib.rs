//! trend-plot: embeddable time-series line/bar plot.
//!
//! A [`PlotEngine`] owns the scales, series data and cursor of one plot.
//! Pointer and wheel input pan and zoom the view within the extents captured
//! when the plot becomes ready; plots sharing a sync key mirror each other's
//! cursor through a [`interaction::CursorSyncBroker`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{PlotEngine, PlotEngineConfig};
pub use error::{PlotError, PlotResult};
