use std::fmt;

/// Scoped registration with a notification source.
///
/// The release closure runs exactly once: on the first call to
/// [`Subscription::unsubscribe`] or when the guard is dropped, whichever comes
/// first. Later calls are no-ops.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release, for sources that never notify.
    pub fn inert() -> Self {
        Self { release: None }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn unsubscribe(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
