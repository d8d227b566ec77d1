use serde::{Deserialize, Serialize};

use crate::core::ChartSizeSpec;
use crate::core::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::error::{HookError, HookResult};

pub const UI_HOOKS_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Initial state of a [`super::PaginationEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_initial_page")]
    pub initial_page: usize,
    #[serde(default = "default_initial_page_size")]
    pub initial_page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            initial_page: default_initial_page(),
            initial_page_size: default_initial_page_size(),
        }
    }
}

impl PaginationConfig {
    #[must_use]
    pub fn with_initial_page(mut self, page: usize) -> Self {
        self.initial_page = page;
        self
    }

    #[must_use]
    pub fn with_initial_page_size(mut self, page_size: usize) -> Self {
        self.initial_page_size = page_size;
        self
    }
}

/// Initial state of a [`super::CollapsibleController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollapsibleConfig {
    #[serde(default)]
    pub default_open: bool,
}

impl CollapsibleConfig {
    #[must_use]
    pub fn with_default_open(mut self, default_open: bool) -> Self {
        self.default_open = default_open;
        self
    }
}

/// Bundled configuration for hosts that persist component setup as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiHooksConfig {
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub collapsible: CollapsibleConfig,
    #[serde(default)]
    pub chart_size: ChartSizeSpec,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiHooksConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: UiHooksConfig,
}

impl UiHooksConfig {
    #[must_use]
    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }

    #[must_use]
    pub fn with_collapsible(mut self, collapsible: CollapsibleConfig) -> Self {
        self.collapsible = collapsible;
        self
    }

    #[must_use]
    pub fn with_chart_size(mut self, chart_size: ChartSizeSpec) -> Self {
        self.chart_size = chart_size;
        self
    }

    pub fn to_json_contract_v1_pretty(self) -> HookResult<String> {
        let payload = UiHooksConfigJsonContractV1 {
            schema_version: UI_HOOKS_CONFIG_JSON_SCHEMA_V1,
            config: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            HookError::InvalidConfig(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Parses either a bare config object or a versioned contract payload.
    pub fn from_json_str(input: &str) -> HookResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| HookError::InvalidConfig(format!("failed to parse config json: {e}")))?;

        if value.get("schema_version").is_some() {
            let payload: UiHooksConfigJsonContractV1 = serde_json::from_value(value)
                .map_err(|e| {
                    HookError::InvalidConfig(format!("failed to parse config contract: {e}"))
                })?;
            if payload.schema_version != UI_HOOKS_CONFIG_JSON_SCHEMA_V1 {
                return Err(HookError::InvalidConfig(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.config);
        }

        serde_json::from_value(value)
            .map_err(|e| HookError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_initial_page() -> usize {
    DEFAULT_PAGE
}

fn default_initial_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
