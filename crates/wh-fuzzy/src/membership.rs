//! Piecewise-linear membership functions for the three linguistic sets.
//!
//! The breakpoints and slopes are part of the routing contract — changing
//! them silently re-routes the whole item stream, so they are fixed here and
//! pinned by tests:
//!
//! ```text
//! low:    1 until 0.2, falls to 0 at 0.5
//! medium: triangle — feet at 0.2 and 0.8, peak 1 at 0.5
//! high:   0 until 0.5, rises to 1 at 0.8
//! ```

/// Degree to which `x` is "low": 1 below 0.2, falling linearly to 0 at 0.5.
#[inline]
pub fn low(x: f64) -> f64 {
    if x <= 0.5 {
        ((0.5 - x) / 0.3).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Degree to which `x` is "medium": a triangle peaking at 0.5 with feet at
/// 0.2 and 0.8.
#[inline]
pub fn medium(x: f64) -> f64 {
    if x > 0.2 && x < 0.5 {
        (x - 0.2) / 0.3
    } else if (0.5..0.8).contains(&x) {
        (0.8 - x) / 0.3
    } else {
        0.0
    }
}

/// Degree to which `x` is "high": 0 below 0.5, rising linearly to 1 at 0.8.
#[inline]
pub fn high(x: f64) -> f64 {
    if x >= 0.5 {
        ((x - 0.5) / 0.3).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
