//! Item attributes.

use crate::SimRng;

/// The immutable attribute triple of a warehouse item.
///
/// Each attribute is a real value in `[0, 1]`.  The triple is created once by
/// a generator and copied onto the accepting agent; the agent's copy is the
/// canonical reference for the rest of the item's lifecycle.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemAttrs {
    pub size:      f64,
    pub fragility: f64,
    pub priority:  f64,
}

impl ItemAttrs {
    /// Construct with explicit attributes.
    ///
    /// Debug builds assert all three values are in `[0, 1]`.
    pub fn new(size: f64, fragility: f64, priority: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&size));
        debug_assert!((0.0..=1.0).contains(&fragility));
        debug_assert!((0.0..=1.0).contains(&priority));
        Self { size, fragility, priority }
    }

    /// Draw uniformly random attributes, rounded to two decimals.
    pub fn random(rng: &mut SimRng) -> Self {
        Self {
            size:      round2(rng.random::<f64>()),
            fragility: round2(rng.random::<f64>()),
            priority:  round2(rng.random::<f64>()),
        }
    }
}

#[inline]
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

impl std::fmt::Display for ItemAttrs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[size={:.2}, fragility={:.2}, priority={:.2}]",
            self.size, self.fragility, self.priority
        )
    }
}
