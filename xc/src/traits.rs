//! Interface to the functional evaluator.
//!
//! The evaluator hands out one handle per initialised functional. Releasing a
//! functional is dropping its handle.

use crate::error::XCError;
use crate::functional::{FunctionalId, Polarization};

/// An initialised LDA functional.
/// Implementations should be stateless and thread-safe.
pub trait LdaFunctional: Send + Sync {
    fn id(&self) -> FunctionalId;

    fn polarization(&self) -> Polarization;

    /// Compute the potential for a batch of points.
    ///
    /// # Arguments
    /// * `rho` - Input density batch [N]
    /// * `vxc` - Output potential batch [N] (overwrites existing values)
    fn eval_vxc(&self, rho: &[f64], vxc: &mut [f64]) -> Result<(), XCError>;

    /// Compute energy density per particle and potential for a batch of points.
    fn eval_exc_vxc(&self, rho: &[f64], exc: &mut [f64], vxc: &mut [f64]) -> Result<(), XCError>;
}

/// Source of LDA functionals, e.g. a density-functional library.
pub trait FunctionalProvider: Send + Sync {
    fn init(
        &self,
        id: FunctionalId,
        polarization: Polarization,
    ) -> Result<Box<dyn LdaFunctional>, XCError>;
}
