//! Slater exchange functional
//!
//! The Slater exchange is the simplest local exchange approximation,
//! derived from the uniform electron gas model.

use dwconsts::{ONE_THIRD, PI};

/// Computes the Slater exchange potential and energy density (unpolarized)
///
/// # Arguments
/// * `rho` - Electron density at a point
///
/// # Returns
/// * `(vx, ex)` - Exchange potential and energy density per particle
///
/// - vx = cx * rho^(1/3), where cx = -(3/π)^(1/3)
/// - ex = (3/4) * vx
#[inline]
pub fn slater_unpolarized(rho: f64) -> (f64, f64) {
    let cx: f64 = -(3.0 / PI).powf(ONE_THIRD);

    let vx = cx * rho.powf(ONE_THIRD);

    let ex = 0.75 * vx;

    (vx, ex)
}
