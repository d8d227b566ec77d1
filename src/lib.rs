//! ui-hooks: headless behavioral primitives for assessment UI components.
//!
//! The crate derives state for a presentation layer it knows nothing about:
//! page windows over collections, live container sizes, square chart edge
//! lengths, collapsible open/closed flags and touch-capability detection.
//! Nothing here renders; hosts read the derived values and call the mutators.

pub mod api;
pub mod core;
pub mod error;
pub mod host;
pub mod telemetry;

pub use api::{
    ChartSizeResolver, CollapsibleController, ContainerSizeObserver, PaginationEngine,
    TouchCapabilityDetector,
};
pub use error::{HookError, HookResult};
