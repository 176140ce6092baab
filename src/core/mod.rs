pub mod axis_range;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod types;
pub mod windowing;

pub use axis_range::{AxisRange, BaselineExtents, clamp_range};
pub use scale::LinearScale;
pub use series::{DrawStyle, LineInterpolation, PlotData, SeriesRenderConfig};
pub use types::{Axis, DataPoint, Viewport};
pub use windowing::{nearest_index, visible_index_window};
