//! Vosko-Wilk-Nusair correlation functional
//!
//! Fit V of the VWN paper (Can. J. Phys. 58, 1200 (1980)) to the Ceperley-Alder
//! correlation energy of the paramagnetic electron gas, in Hartree units.
//! The interpolation variable is x = sqrt(rs).

use dwconsts::{FOURPI, ONE_THIRD};

/// VWN fit parameters for one spin state
#[derive(Debug, Clone, Copy)]
pub struct VWNParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub x0: f64,
}

/// Paramagnetic parameters
pub const VWN_PARAMAGNETIC: VWNParams = VWNParams {
    a: 0.0310907,
    b: 3.72744,
    c: 12.9352,
    x0: -0.10498,
};

impl VWNParams {
    #[inline]
    fn big_x(&self, x: f64) -> f64 {
        x * x + self.b * x + self.c
    }

    #[inline]
    fn q(&self) -> f64 {
        (4.0 * self.c - self.b * self.b).sqrt()
    }
}

/// Computes the VWN correlation potential and energy density per particle
///
/// # Returns
/// * `(vc, ec)` with vc = d(rho*ec)/drho = ec - (x/6) dec/dx
#[inline]
pub fn vwn_correlation(rho: f64, params: VWNParams) -> (f64, f64) {
    let VWNParams { a, b, x0, .. } = params;

    let rs = (3.0 / FOURPI / rho).powf(ONE_THIRD);
    let x = rs.sqrt();

    let q = params.q();
    let xx = params.big_x(x);
    let xx0 = params.big_x(x0);

    let tx = 2.0 * x + b;
    let atn = (q / tx).atan();
    let bx0 = b * x0 / xx0;

    let ec = a
        * ((x * x / xx).ln() + 2.0 * b / q * atn
            - bx0 * (((x - x0) * (x - x0) / xx).ln() + 2.0 * (b + 2.0 * x0) / q * atn));

    let den = tx * tx + q * q;

    let dec_dx = a
        * (2.0 / x - tx / xx - 4.0 * b / den
            - bx0 * (2.0 / (x - x0) - tx / xx - 4.0 * (b + 2.0 * x0) / den));

    let vc = ec - x / 6.0 * dec_dx;

    (vc, ec)
}

#[inline]
pub fn vwn_unpolarized(rho: f64) -> (f64, f64) {
    vwn_correlation(rho, VWN_PARAMAGNETIC)
}
