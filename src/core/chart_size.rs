use serde::{Deserialize, Serialize};

use crate::core::Dimensions;

/// Smallest edge length a chart is ever resolved to.
pub const MIN_CHART_SIZE: u32 = 200;

/// Named chart edge lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartSizePreset {
    Sm,
    Md,
    Lg,
}

impl ChartSizePreset {
    #[must_use]
    pub const fn pixels(self) -> u32 {
        match self {
            Self::Sm => 200,
            Self::Md => 280,
            Self::Lg => 360,
        }
    }
}

/// How a square chart picks its edge length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartSizeSpec {
    Preset(ChartSizePreset),
    Fixed(u32),
    /// Follows the observed container, bounded by `MIN_CHART_SIZE` and the `Lg` preset.
    Responsive,
}

impl Default for ChartSizeSpec {
    fn default() -> Self {
        Self::Preset(ChartSizePreset::Md)
    }
}

impl From<ChartSizePreset> for ChartSizeSpec {
    fn from(preset: ChartSizePreset) -> Self {
        Self::Preset(preset)
    }
}

impl From<u32> for ChartSizeSpec {
    fn from(pixels: u32) -> Self {
        Self::Fixed(pixels)
    }
}

/// Resolves a chart edge length in pixels.
///
/// `container` is `None` when no surface is attached. In responsive mode an
/// absent container or a zero width yields the `Md` preset so the chart never
/// flashes at zero size before the first measurement.
#[must_use]
pub fn resolve_chart_size(spec: ChartSizeSpec, container: Option<Dimensions>) -> u32 {
    match spec {
        ChartSizeSpec::Fixed(pixels) => pixels.max(MIN_CHART_SIZE),
        ChartSizeSpec::Preset(preset) => preset.pixels(),
        ChartSizeSpec::Responsive => {
            let Some(container) = container.map(Dimensions::sanitized) else {
                return ChartSizePreset::Md.pixels();
            };
            if container.width == 0.0 {
                return ChartSizePreset::Md.pixels();
            }

            let edge = container.min_edge().floor().min(f64::from(u32::MAX)) as u32;
            edge.clamp(MIN_CHART_SIZE, ChartSizePreset::Lg.pixels())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartSizePreset, ChartSizeSpec, MIN_CHART_SIZE, resolve_chart_size};
    use crate::core::Dimensions;

    fn responsive(width: f64, height: f64) -> u32 {
        resolve_chart_size(
            ChartSizeSpec::Responsive,
            Some(Dimensions::new(width, height)),
        )
    }

    #[test]
    fn fixed_values_respect_minimum() {
        assert_eq!(resolve_chart_size(ChartSizeSpec::Fixed(150), None), 200);
        assert_eq!(resolve_chart_size(ChartSizeSpec::Fixed(500), None), 500);
        assert_eq!(
            resolve_chart_size(ChartSizeSpec::Fixed(0), None),
            MIN_CHART_SIZE
        );
    }

    #[test]
    fn presets_map_to_table() {
        assert_eq!(resolve_chart_size(ChartSizePreset::Sm.into(), None), 200);
        assert_eq!(resolve_chart_size(ChartSizePreset::Md.into(), None), 280);
        assert_eq!(resolve_chart_size(ChartSizePreset::Lg.into(), None), 360);
    }

    #[test]
    fn responsive_falls_back_to_md_before_first_measurement() {
        assert_eq!(resolve_chart_size(ChartSizeSpec::Responsive, None), 280);
        assert_eq!(responsive(0.0, 0.0), 280);
        assert_eq!(responsive(0.0, 500.0), 280);
    }

    #[test]
    fn responsive_uses_smaller_edge_clamped_to_bounds() {
        assert_eq!(responsive(250.0, 400.0), 250);
        assert_eq!(responsive(1000.0, 800.0), 360);
        assert_eq!(responsive(150.0, 100.0), 200);
        assert_eq!(responsive(300.0, 0.0), 300);
        assert_eq!(responsive(301.9, 640.0), 301);
    }
}
