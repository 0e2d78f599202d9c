//! Scalar implementation of the LDA functionals.
//! Serves as the functional evaluator when no external library is linked.

use crate::correlation::pz::pz_unpolarized;
use crate::correlation::vwn::vwn_unpolarized;
use crate::error::XCError;
use crate::exchange::slater::slater_unpolarized;
use crate::functional::{FunctionalId, Polarization};
use crate::traits::{FunctionalProvider, LdaFunctional};

use dwconsts::RHO_THRESHOLD;
use itertools::izip;

type PointFn = fn(f64) -> (f64, f64);

/// Functional evaluator backed by the kernels of this crate
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProvider;

impl FunctionalProvider for BuiltinProvider {
    fn init(
        &self,
        id: FunctionalId,
        polarization: Polarization,
    ) -> Result<Box<dyn LdaFunctional>, XCError> {
        if polarization != Polarization::Unpolarized {
            return Err(XCError::UnsupportedPolarization {
                functional: id.name(),
            });
        }

        // VWN and VWN_1 differ only in the spin interpolation
        let point: PointFn = match id {
            FunctionalId::LdaExchange => slater_unpolarized,
            FunctionalId::LdaCorrelationVwn | FunctionalId::LdaCorrelationVwn1 => vwn_unpolarized,
            FunctionalId::LdaCorrelationPz => pz_unpolarized,
        };

        Ok(Box::new(LdaKernel { id, point }))
    }
}

/// Unpolarized LDA kernel evaluated point by point
pub struct LdaKernel {
    id: FunctionalId,
    point: PointFn,
}

impl LdaKernel {
    /// Points below the density threshold contribute nothing, as in the external library.
    #[inline]
    fn eval_point(&self, index: usize, rho: f64) -> Result<(f64, f64), XCError> {
        if rho < RHO_THRESHOLD {
            return Ok((0.0, 0.0));
        }

        let (v, e) = (self.point)(rho);

        if !(v.is_finite() && e.is_finite()) {
            return Err(XCError::Evaluator {
                functional: self.id.name(),
                reason: format!("non-finite result at batch point {} (rho = {:e})", index, rho),
            });
        }

        Ok((v, e))
    }

    fn check_len(&self, rho: &[f64], out: &[f64]) -> Result<(), XCError> {
        if rho.len() != out.len() {
            return Err(XCError::LengthMismatch {
                density: rho.len(),
                potential: out.len(),
            });
        }

        Ok(())
    }
}

impl LdaFunctional for LdaKernel {
    fn id(&self) -> FunctionalId {
        self.id
    }

    fn polarization(&self) -> Polarization {
        Polarization::Unpolarized
    }

    fn eval_vxc(&self, rho: &[f64], vxc: &mut [f64]) -> Result<(), XCError> {
        self.check_len(rho, vxc)?;

        for (i, (&r, v)) in rho.iter().zip(vxc.iter_mut()).enumerate() {
            *v = self.eval_point(i, r)?.0;
        }

        Ok(())
    }

    fn eval_exc_vxc(&self, rho: &[f64], exc: &mut [f64], vxc: &mut [f64]) -> Result<(), XCError> {
        self.check_len(rho, vxc)?;
        self.check_len(rho, exc)?;

        for (i, (&r, e, v)) in izip!(rho.iter(), exc.iter_mut(), vxc.iter_mut()).enumerate() {
            let (pv, pe) = self.eval_point(i, r)?;
            *v = pv;
            *e = pe;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_init_unpolarized() {
        let provider = BuiltinProvider;

        for id in FunctionalId::ALL.iter() {
            let func = provider.init(*id, Polarization::Unpolarized).unwrap();
            assert_eq!(func.id(), *id);
            assert_eq!(func.polarization(), Polarization::Unpolarized);
        }
    }

    #[test]
    fn test_init_polarized_fails() {
        let provider = BuiltinProvider;

        let err = provider
            .init(FunctionalId::LdaCorrelationVwn, Polarization::Polarized)
            .err()
            .unwrap();

        assert_eq!(
            err,
            XCError::UnsupportedPolarization {
                functional: "lda_c_vwn"
            }
        );
    }

    #[test]
    fn test_below_threshold_is_zero() {
        let provider = BuiltinProvider;
        let func = provider
            .init(FunctionalId::LdaCorrelationVwn, Polarization::Unpolarized)
            .unwrap();

        let rho = [0.0, 1.0e-16, -1.0e-3, 1.0];
        let mut vxc = [f64::NAN; 4];
        let mut exc = [f64::NAN; 4];

        func.eval_exc_vxc(&rho, &mut exc, &mut vxc).unwrap();

        assert_eq!(&vxc[..3], &[0.0, 0.0, 0.0]);
        assert_eq!(&exc[..3], &[0.0, 0.0, 0.0]);
        assert_relative_eq!(vxc[3], -0.07993838317598562, epsilon = 1e-12);
        assert_relative_eq!(exc[3], -0.07159261230679066, epsilon = 1e-12);
    }

    #[test]
    fn test_vwn1_matches_vwn_unpolarized() {
        let provider = BuiltinProvider;
        let vwn = provider
            .init(FunctionalId::LdaCorrelationVwn, Polarization::Unpolarized)
            .unwrap();
        let vwn1 = provider
            .init(FunctionalId::LdaCorrelationVwn1, Polarization::Unpolarized)
            .unwrap();

        let rho = [0.01, 0.3, 4.0];
        let mut v_a = [0.0; 3];
        let mut v_b = [0.0; 3];

        vwn.eval_vxc(&rho, &mut v_a).unwrap();
        vwn1.eval_vxc(&rho, &mut v_b).unwrap();

        assert_eq!(v_a, v_b);
    }

    #[test]
    fn test_length_mismatch() {
        let func = BuiltinProvider
            .init(FunctionalId::LdaExchange, Polarization::Unpolarized)
            .unwrap();

        let mut vxc = [0.0; 2];

        assert_eq!(
            func.eval_vxc(&[1.0, 2.0, 3.0], &mut vxc),
            Err(XCError::LengthMismatch {
                density: 3,
                potential: 2
            })
        );
    }

    #[test]
    fn test_infinite_density_is_reported() {
        let func = BuiltinProvider
            .init(FunctionalId::LdaExchange, Polarization::Unpolarized)
            .unwrap();

        let mut vxc = [0.0; 2];

        let err = func.eval_vxc(&[1.0, f64::INFINITY], &mut vxc).unwrap_err();

        assert!(matches!(err, XCError::Evaluator { functional: "lda_x", .. }));
    }
}
