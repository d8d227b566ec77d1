use serde::{Deserialize, Serialize};

/// Pixel dimensions of a measurable surface.
///
/// Values are always finite and non-negative; [`Dimensions::new`] normalizes
/// anything else to `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sanitize_extent(width),
            height: sanitize_extent(height),
        }
    }

    /// Re-applies the finite/non-negative normalization to values that may have
    /// been built through the public fields.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self::new(self.width, self.height)
    }

    /// Smaller usable edge. A zero height counts as unmeasured and yields the width.
    #[must_use]
    pub fn min_edge(self) -> f64 {
        if self.height > 0.0 {
            self.width.min(self.height)
        } else {
            self.width
        }
    }
}

fn sanitize_extent(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
