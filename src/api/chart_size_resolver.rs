use tracing::debug;

use crate::core::{ChartSizeSpec, resolve_chart_size};
use crate::host::MeasurableSurface;

use super::ContainerSizeObserver;

/// Chart edge length derived from a [`ChartSizeSpec`] and, in responsive mode,
/// from the container it observes.
///
/// The size is recomputed on every read from the size spec and the latest
/// container measurement.
#[derive(Debug, Default)]
pub struct ChartSizeResolver {
    spec: ChartSizeSpec,
    container: ContainerSizeObserver,
}

impl ChartSizeResolver {
    #[must_use]
    pub fn new(spec: impl Into<ChartSizeSpec>) -> Self {
        Self {
            spec: spec.into(),
            container: ContainerSizeObserver::new(),
        }
    }

    #[must_use]
    pub fn spec(&self) -> ChartSizeSpec {
        self.spec
    }

    pub fn set_spec(&mut self, spec: impl Into<ChartSizeSpec>) {
        self.spec = spec.into();
        debug!(spec = ?self.spec, "set chart size spec");
    }

    /// Observes `surface` as the chart container, replacing any previous one.
    pub fn attach<S>(&mut self, surface: &S)
    where
        S: MeasurableSurface + ?Sized,
    {
        self.container.attach(surface);
    }

    pub fn detach(&mut self) {
        self.container.detach();
    }

    #[must_use]
    pub fn container(&self) -> &ContainerSizeObserver {
        &self.container
    }

    /// Resolved edge length in pixels.
    #[must_use]
    pub fn size(&self) -> u32 {
        let container = self
            .container
            .is_attached()
            .then(|| self.container.dimensions());
        resolve_chart_size(self.spec, container)
    }
}
