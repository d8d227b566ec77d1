//! Contracts with the host runtime's measurement and notification primitives.
//!
//! The units in [`crate::api`] never own a surface or an environment. They
//! query them synchronously and register handlers that the host invokes later,
//! one notification at a time. Every registration is returned as a
//! [`Subscription`] guard.

mod channel;
mod memory;
mod subscription;

pub use channel::{Handler, NotificationChannel};
pub use memory::{InMemoryCapability, InMemorySurface};
pub use subscription::Subscription;

use crate::core::Dimensions;

/// Media query conventionally used to detect touch-primary devices.
pub const TOUCH_PRIMARY_QUERY: &str = "(hover: none) and (pointer: coarse)";

/// An externally owned rectangle that reports its size and resize events.
pub trait MeasurableSurface {
    /// Current rectangle, read synchronously.
    fn measure(&self) -> Dimensions;

    /// Registers `handler` for future size changes.
    ///
    /// The handler must not be invoked once the returned guard has been released.
    fn subscribe_resize(&self, handler: Handler<Dimensions>) -> Subscription;
}

/// An environment capability flag with change notifications (e.g. a media query).
pub trait CapabilitySource {
    fn matches(&self) -> bool;

    /// Registers `handler` for capability changes; it receives the new flag.
    fn subscribe_change(&self, handler: Handler<bool>) -> Subscription;
}

impl<S: MeasurableSurface + ?Sized> MeasurableSurface for &S {
    fn measure(&self) -> Dimensions {
        (**self).measure()
    }

    fn subscribe_resize(&self, handler: Handler<Dimensions>) -> Subscription {
        (**self).subscribe_resize(handler)
    }
}

impl<C: CapabilitySource + ?Sized> CapabilitySource for &C {
    fn matches(&self) -> bool {
        (**self).matches()
    }

    fn subscribe_change(&self, handler: Handler<bool>) -> Subscription {
        (**self).subscribe_change(handler)
    }
}
