use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::host::{CapabilitySource, Subscription};

/// Tracks whether the environment is touch-primary.
///
/// Seeded from a synchronous [`CapabilitySource::matches`] query and updated
/// only by the source's change notifications.
#[derive(Debug)]
pub struct TouchCapabilityDetector {
    is_touch: Rc<Cell<bool>>,
    subscription: Option<Subscription>,
}

impl TouchCapabilityDetector {
    #[must_use]
    pub fn new<C>(source: &C) -> Self
    where
        C: CapabilitySource + ?Sized,
    {
        let is_touch = Rc::new(Cell::new(source.matches()));
        let slot = Rc::downgrade(&is_touch);
        let subscription = source.subscribe_change(Box::new(move |matches: bool| {
            if let Some(slot) = slot.upgrade() {
                trace!(is_touch = matches, "touch capability changed");
                slot.set(matches);
            }
        }));

        debug!(is_touch = is_touch.get(), "touch detector attached");
        Self {
            is_touch,
            subscription: Some(subscription),
        }
    }

    #[must_use]
    pub fn is_touch(&self) -> bool {
        self.is_touch.get()
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Stops listening for changes; the last known value is kept. Idempotent.
    pub fn detach(&mut self) {
        let Some(mut subscription) = self.subscription.take() else {
            return;
        };
        subscription.unsubscribe();
        // Fresh slot so a stale handler cannot reach the kept value.
        self.is_touch = Rc::new(Cell::new(self.is_touch.get()));
        debug!("touch detector detached");
    }
}
