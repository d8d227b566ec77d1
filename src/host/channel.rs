use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;
use smallvec::SmallVec;

use super::Subscription;

pub type Handler<T> = Box<dyn FnMut(T)>;

struct Registry<T> {
    next_id: u64,
    handlers: IndexMap<u64, Handler<T>>,
    emitting: bool,
    // Values emitted from inside a handler, delivered after the current pass.
    queued: VecDeque<T>,
    // Handlers detached while their emission is in flight.
    detached_in_flight: SmallVec<[u64; 4]>,
}

impl<T> Registry<T> {
    fn remove(&mut self, id: u64) {
        if self.handlers.shift_remove(&id).is_none() && self.emitting {
            self.detached_in_flight.push(id);
        }
    }
}

/// Single-threaded ordered broadcast of notifications to subscribed handlers.
///
/// Handlers run one at a time in subscription order. A handler may subscribe or
/// unsubscribe (itself or others) while an emission is in flight: a handler
/// that is unsubscribed is never invoked again, including later in the same
/// emission, and a handler subscribed mid-emission first hears the next one.
///
/// Emitting from inside a handler does not nest: the value is queued and
/// delivered to every handler once the current pass finishes, so all handlers
/// see values in emission order and end on the latest one.
pub struct NotificationChannel<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T: Clone + 'static> NotificationChannel<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                handlers: IndexMap::new(),
                emitting: false,
                queued: VecDeque::new(),
                detached_in_flight: SmallVec::new(),
            })),
        }
    }

    pub fn subscribe(&self, handler: Handler<T>) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.handlers.insert(id, handler);
            id
        };

        let registry: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().remove(id);
            }
        })
    }

    /// Delivers `value` to every subscribed handler.
    pub fn emit(&self, value: T) {
        {
            let mut registry = self.registry.borrow_mut();
            if registry.emitting {
                registry.queued.push_back(value);
                return;
            }
            registry.emitting = true;
        }

        let mut next = Some(value);
        while let Some(value) = next {
            self.deliver(value);
            next = self.registry.borrow_mut().queued.pop_front();
        }
        self.registry.borrow_mut().emitting = false;
    }

    fn deliver(&self, value: T) {
        let mut in_flight = std::mem::take(&mut self.registry.borrow_mut().handlers);

        for (id, handler) in &mut in_flight {
            if self.registry.borrow().detached_in_flight.contains(id) {
                continue;
            }
            handler(value.clone());
        }

        let mut registry = self.registry.borrow_mut();
        let detached = std::mem::take(&mut registry.detached_in_flight);
        in_flight.retain(|id, _| !detached.contains(id));

        let subscribed_mid_emit = std::mem::replace(&mut registry.handlers, in_flight);
        registry.handlers.extend(subscribed_mid_emit);
    }

    /// Number of live handlers. Only meaningful outside an emission.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().handlers.len()
    }
}

impl<T: Clone + 'static> Default for NotificationChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for NotificationChannel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.borrow();
        f.debug_struct("NotificationChannel")
            .field("subscribers", &registry.handlers.len())
            .field("emitting", &registry.emitting)
            .field("queued", &registry.queued.len())
            .finish()
    }
}
