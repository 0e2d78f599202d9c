//! Perdew-Zunger correlation functional
//!
//! Different parameterizations are used for high-density (rs < 1) and
//! low-density (rs >= 1) regimes, where rs = (3/(4π*rho))^(1/3) is the
//! Wigner-Seitz radius.

use dwconsts::{FOURPI, FOUR_THIRDS, ONE_THIRD, SEVEN_SIXTHS, TWO_THIRDS};

/// Perdew-Zunger correlation parameters
#[derive(Debug, Clone, Copy)]
pub struct PZParams {
    /// Low-density regime parameters (rs >= 1)
    pub gamma: f64,
    pub beta1: f64,
    pub beta2: f64,
    /// High-density regime parameters (rs < 1)
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

/// Unpolarized (paramagnetic) PZ correlation parameters
pub const PZ_UNPOLARIZED: PZParams = PZParams {
    gamma: -0.1423,
    beta1: 1.0529,
    beta2: 0.3334,
    a: 0.0311,
    b: -0.048,
    c: 0.0020,
    d: -0.0116,
};

/// Computes the Perdew-Zunger correlation potential and energy density
///
/// # Returns
/// * `(vc, ec)` - Correlation potential and energy density per particle
#[inline]
pub fn pz_correlation(rho: f64, params: PZParams) -> (f64, f64) {
    let rs = (3.0 / FOURPI / rho).powf(ONE_THIRD);

    if rs > 1.0 {
        let rroot = rs.sqrt();

        // ec = γ / (1 + β1*√rs + β2*rs)
        let dt = 1.0 + params.beta1 * rroot + params.beta2 * rs;

        let ec = params.gamma / dt;

        let nt = 1.0 + SEVEN_SIXTHS * params.beta1 * rroot + FOUR_THIRDS * params.beta2 * rs;

        let vc = ec * nt / dt;

        (vc, ec)
    } else {
        let rln = rs.ln();

        let vc = params.a * rln
            + (params.b - params.a / 3.0)
            + TWO_THIRDS * params.c * rs * rln
            + ONE_THIRD * (2.0 * params.d - params.c) * rs;

        let ec = params.a * rln + params.b + params.c * rs * rln + params.d * rs;

        (vc, ec)
    }
}

#[inline]
pub fn pz_unpolarized(rho: f64) -> (f64, f64) {
    pz_correlation(rho, PZ_UNPOLARIZED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pz_high_density_branch() {
        let (vc, _) = pz_unpolarized(1.0);

        assert_relative_eq!(vc, -0.07882188029638934, epsilon = 1e-12);
    }

    #[test]
    fn test_pz_branches_meet_at_rs_one() {
        let rho_at_rs1 = 3.0 / FOURPI;

        let (_, ec_hi) = pz_unpolarized(rho_at_rs1 * 1.000001);
        let (_, ec_lo) = pz_unpolarized(rho_at_rs1 * 0.999999);

        assert_relative_eq!(ec_hi, ec_lo, epsilon = 1e-4);
    }
}
