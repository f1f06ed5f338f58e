//! Extent - Observed coordinate range along one axis.

use serde::{Deserialize, Serialize};

/// Minimum and maximum signed values seen on an axis.
///
/// An extent only exists once a first value has been recorded, so callers
/// hold it as `Option<Extent>` and create it with [`Extent::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Create an extent from its first value.
    pub fn new(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Widen the extent to include `value`.
    pub fn include(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Record `value` into an optional extent, creating it on first use.
    pub fn record(slot: &mut Option<Extent>, value: f64) {
        match slot {
            Some(extent) => extent.include(value),
            None => *slot = Some(Extent::new(value)),
        }
    }

    /// Distance between the extremes (never negative).
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}
