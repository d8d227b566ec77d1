use std::fmt;

use tracing::trace;

use super::CollapsibleConfig;

pub type OpenChangeCallback = Box<dyn FnMut(bool)>;

/// Open/closed flag with a change notification.
///
/// The callback fires exactly once per effective change and never for calls
/// that leave the flag as it was.
pub struct CollapsibleController {
    is_open: bool,
    on_open_change: Option<OpenChangeCallback>,
}

impl Default for CollapsibleController {
    fn default() -> Self {
        Self::new(CollapsibleConfig::default())
    }
}

impl CollapsibleController {
    #[must_use]
    pub fn new(config: CollapsibleConfig) -> Self {
        Self {
            is_open: config.default_open,
            on_open_change: None,
        }
    }

    #[must_use]
    pub fn with_on_open_change(mut self, callback: impl FnMut(bool) + 'static) -> Self {
        self.on_open_change = Some(Box::new(callback));
        self
    }

    pub fn set_on_open_change(&mut self, callback: Option<OpenChangeCallback>) {
        self.on_open_change = callback;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Flips the flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.set_open(!self.is_open);
        self.is_open
    }

    pub fn open(&mut self) {
        self.set_open(true);
    }

    pub fn close(&mut self) {
        self.set_open(false);
    }

    /// Sets the flag. Returns `true` when the value changed.
    pub fn set_open(&mut self, is_open: bool) -> bool {
        if self.is_open == is_open {
            return false;
        }
        self.is_open = is_open;
        trace!(is_open, "collapsible changed");
        if let Some(callback) = self.on_open_change.as_mut() {
            callback(is_open);
        }
        true
    }
}

impl fmt::Debug for CollapsibleController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollapsibleController")
            .field("is_open", &self.is_open)
            .field("has_on_open_change", &self.on_open_change.is_some())
            .finish()
    }
}
