pub mod chart_size;
pub mod pagination;
pub mod types;

pub use chart_size::{ChartSizePreset, ChartSizeSpec, MIN_CHART_SIZE, resolve_chart_size};
pub use types::Dimensions;
