use proptest::prelude::*;
use ui_hooks::core::{
    ChartSizePreset, ChartSizeSpec, Dimensions, MIN_CHART_SIZE, resolve_chart_size,
};

proptest! {
    #[test]
    fn fixed_size_never_drops_below_minimum(pixels in 0u32..5_000) {
        let size = resolve_chart_size(ChartSizeSpec::Fixed(pixels), None);
        prop_assert_eq!(size, pixels.max(MIN_CHART_SIZE));
    }

    #[test]
    fn responsive_size_stays_within_bounds(
        width in 0.0f64..10_000.0,
        height in 0.0f64..10_000.0
    ) {
        let size = resolve_chart_size(
            ChartSizeSpec::Responsive,
            Some(Dimensions::new(width, height)),
        );
        prop_assert!(size >= MIN_CHART_SIZE);
        prop_assert!(size <= ChartSizePreset::Lg.pixels());
    }

    #[test]
    fn responsive_size_never_exceeds_smaller_measured_edge_above_minimum(
        width in 200.0f64..360.0,
        height in 200.0f64..360.0
    ) {
        let size = resolve_chart_size(
            ChartSizeSpec::Responsive,
            Some(Dimensions::new(width, height)),
        );
        prop_assert!(f64::from(size) <= width.min(height));
        prop_assert!(width.min(height) - f64::from(size) < 1.0);
    }
}
