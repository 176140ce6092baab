//! Observer hooks for host applications.

pub mod plugins;

pub use plugins::{PlotContext, PlotEvent, PlotPlugin};
