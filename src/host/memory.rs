use std::cell::Cell;

use tracing::trace;

use crate::core::Dimensions;

use super::{CapabilitySource, Handler, MeasurableSurface, NotificationChannel, Subscription};

/// Headless measurable surface driven explicitly by its owner.
#[derive(Debug, Default)]
pub struct InMemorySurface {
    dimensions: Cell<Dimensions>,
    resize: NotificationChannel<Dimensions>,
}

impl InMemorySurface {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            dimensions: Cell::new(Dimensions::new(width, height)),
            resize: NotificationChannel::new(),
        }
    }

    /// Updates the rectangle and notifies resize subscribers.
    pub fn resize_to(&self, width: f64, height: f64) {
        let dimensions = Dimensions::new(width, height);
        self.dimensions.set(dimensions);
        trace!(
            width = dimensions.width,
            height = dimensions.height,
            "surface resized"
        );
        self.resize.emit(dimensions);
    }

    /// Updates the rectangle without notifying, like a layout change the host
    /// has not reported yet.
    pub fn set_silently(&self, width: f64, height: f64) {
        self.dimensions.set(Dimensions::new(width, height));
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.resize.subscriber_count()
    }
}

impl MeasurableSurface for InMemorySurface {
    fn measure(&self) -> Dimensions {
        self.dimensions.get()
    }

    fn subscribe_resize(&self, handler: Handler<Dimensions>) -> Subscription {
        self.resize.subscribe(handler)
    }
}

/// Headless capability flag driven explicitly by its owner.
#[derive(Debug, Default)]
pub struct InMemoryCapability {
    matches: Cell<bool>,
    changes: NotificationChannel<bool>,
}

impl InMemoryCapability {
    #[must_use]
    pub fn new(matches: bool) -> Self {
        Self {
            matches: Cell::new(matches),
            changes: NotificationChannel::new(),
        }
    }

    /// Sets the flag and notifies subscribers when it actually changes.
    pub fn set_matches(&self, matches: bool) {
        if self.matches.replace(matches) == matches {
            return;
        }
        trace!(matches, "capability changed");
        self.changes.emit(matches);
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.changes.subscriber_count()
    }
}

impl CapabilitySource for InMemoryCapability {
    fn matches(&self) -> bool {
        self.matches.get()
    }

    fn subscribe_change(&self, handler: Handler<bool>) -> Subscription {
        self.changes.subscribe(handler)
    }
}
