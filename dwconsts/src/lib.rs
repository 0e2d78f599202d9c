use std::f64;

// pi

pub const PI: f64 = f64::consts::PI;
pub const FOURPI: f64 = 4.0 * f64::consts::PI;

// fractional exponents of LDA formulas

pub const ONE_THIRD: f64 = 1.0 / 3.0;
pub const TWO_THIRDS: f64 = 2.0 / 3.0;
pub const FOUR_THIRDS: f64 = 4.0 / 3.0;
pub const SEVEN_SIXTHS: f64 = 7.0 / 6.0;

// density below which LDA functionals return zero (external library default)

pub const RHO_THRESHOLD: f64 = 1E-15;
