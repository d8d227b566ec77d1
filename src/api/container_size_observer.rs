use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::core::Dimensions;
use crate::host::{MeasurableSurface, Subscription};

/// Mirrors the live size of at most one attached [`MeasurableSurface`].
///
/// Each attachment gets a fresh dimension slot. The resize handler only holds
/// a weak reference to that slot, so once [`ContainerSizeObserver::detach`]
/// returns (or the observer is dropped) a late notification has nothing left
/// to write to, even from a surface that ignores the released subscription.
#[derive(Debug)]
pub struct ContainerSizeObserver {
    dimensions: Rc<Cell<Dimensions>>,
    subscription: Option<Subscription>,
}

impl Default for ContainerSizeObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerSizeObserver {
    /// Creates a detached observer reporting `(0, 0)`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dimensions: Rc::new(Cell::new(Dimensions::ZERO)),
            subscription: None,
        }
    }

    #[must_use]
    pub fn attached<S>(surface: &S) -> Self
    where
        S: MeasurableSurface + ?Sized,
    {
        let mut observer = Self::new();
        observer.attach(surface);
        observer
    }

    /// Starts observing `surface`, replacing any previous attachment.
    ///
    /// The current rectangle is read immediately; later resize notifications
    /// replace it.
    pub fn attach<S>(&mut self, surface: &S)
    where
        S: MeasurableSurface + ?Sized,
    {
        self.detach();

        let dimensions = Rc::new(Cell::new(surface.measure().sanitized()));
        let slot = Rc::downgrade(&dimensions);
        let subscription = surface.subscribe_resize(Box::new(move |next: Dimensions| {
            let Some(slot) = slot.upgrade() else {
                return;
            };
            let next = next.sanitized();
            trace!(width = next.width, height = next.height, "container resized");
            slot.set(next);
        }));

        let initial = dimensions.get();
        self.dimensions = dimensions;
        self.subscription = Some(subscription);
        debug!(
            width = initial.width,
            height = initial.height,
            "container observer attached"
        );
    }

    /// Stops observing and resets the dimensions to `(0, 0)`. Idempotent.
    pub fn detach(&mut self) {
        let Some(mut subscription) = self.subscription.take() else {
            return;
        };
        subscription.unsubscribe();
        self.dimensions = Rc::new(Cell::new(Dimensions::ZERO));
        debug!("container observer detached");
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions.get()
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.dimensions.get().width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.dimensions.get().height
    }
}
