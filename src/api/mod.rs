mod chart_size_resolver;
mod collapsible_controller;
mod config;
mod container_size_observer;
mod pagination_engine;
mod touch_capability_detector;

pub use chart_size_resolver::ChartSizeResolver;
pub use collapsible_controller::{CollapsibleController, OpenChangeCallback};
pub use config::{
    CollapsibleConfig, PaginationConfig, UI_HOOKS_CONFIG_JSON_SCHEMA_V1, UiHooksConfig,
    UiHooksConfigJsonContractV1,
};
pub use container_size_observer::ContainerSizeObserver;
pub use pagination_engine::{PageWindow, PaginationEngine};
pub use touch_capability_detector::TouchCapabilityDetector;
