//! Correlation functionals

pub mod pz;
pub mod vwn;
