//! LDA exchange-correlation potential on a real-space grid.
//!
//! `Vxc = Vx + Vc` is obtained from two LDA functionals (Slater exchange and
//! VWN correlation for the default SVWN scheme), each evaluated through a
//! [`FunctionalProvider`].

pub mod correlation;
pub mod driver;
pub mod error;
pub mod exchange;
pub mod functional;
pub mod kernels;
pub mod traits;

pub use driver::{xc_energy, RhoPolicy, VxcEvaluator, XCOptions};
pub use error::XCError;
pub use functional::{FunctionalId, Polarization, XCFunctional};
pub use kernels::BuiltinProvider;
pub use traits::{FunctionalProvider, LdaFunctional};

/// Builds an evaluator for the named scheme with the builtin kernels.
pub fn new(xc_scheme: &str) -> Result<VxcEvaluator, XCError> {
    let options = XCOptions {
        functional: XCFunctional::from_str(xc_scheme)?,
        ..XCOptions::default()
    };

    Ok(VxcEvaluator::with_provider(BuiltinProvider, options))
}

/// SVWN potential of an unpolarized density.
///
/// ```
/// let vxc = xc::evaluate_vxc(&[1.0]).unwrap();
/// assert!((vxc[0] + 1.0646834050186822).abs() < 1e-10);
/// ```
pub fn evaluate_vxc(rho: &[f64]) -> Result<Vec<f64>, XCError> {
    VxcEvaluator::new().evaluate_vxc(rho)
}
