//! Driver for XC potential evaluation on a grid.
//! Handles validation, scratch buffers, chunking and parallelization.

use std::borrow::Cow;

use control::Control;
use itertools::izip;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::XCError;
use crate::functional::{Polarization, XCFunctional};
use crate::kernels::BuiltinProvider;
use crate::traits::{FunctionalProvider, LdaFunctional};

/// What to do with densities that are not physical
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RhoPolicy {
    /// Negative or non-finite density is an error
    Reject,
    /// Negative density is set to zero; non-finite density is still an error
    Clamp,
}

impl Default for RhoPolicy {
    fn default() -> Self {
        RhoPolicy::Reject
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XCOptions {
    pub functional: XCFunctional,
    pub polarization: Polarization,
    pub rho_policy: RhoPolicy,
    pub chunk_size: usize,
    pub parallel: bool,
}

impl Default for XCOptions {
    fn default() -> Self {
        XCOptions {
            functional: XCFunctional::Svwn,
            polarization: Polarization::Unpolarized,
            rho_policy: RhoPolicy::Reject,
            chunk_size: 1024,
            parallel: false,
        }
    }
}

impl XCOptions {
    pub fn from_control(control: &Control) -> Result<Self, XCError> {
        let functional = XCFunctional::from_str(control.get_xc_scheme())?;

        let polarization = if control.is_spin() {
            Polarization::Polarized
        } else {
            Polarization::Unpolarized
        };

        let rho_policy = match control.get_rho_policy() {
            "clamp" => RhoPolicy::Clamp,
            _ => RhoPolicy::Reject,
        };

        Ok(XCOptions {
            functional,
            polarization,
            rho_policy,
            chunk_size: control.get_xc_chunk_size(),
            parallel: control.get_xc_parallel(),
        })
    }
}

/// Evaluates the exchange-correlation potential as the sum of an exchange
/// and a correlation potential, each from the functional provider.
pub struct VxcEvaluator<P: FunctionalProvider = BuiltinProvider> {
    provider: P,
    options: XCOptions,
}

impl VxcEvaluator<BuiltinProvider> {
    /// SVWN on the unpolarized channel with the builtin kernels
    pub fn new() -> Self {
        Self::with_provider(BuiltinProvider, XCOptions::default())
    }

    pub fn from_control(control: &Control) -> Result<Self, XCError> {
        if control.get_verbosity() == "high" {
            control.display();
        }

        Ok(Self::with_provider(
            BuiltinProvider,
            XCOptions::from_control(control)?,
        ))
    }
}

impl Default for VxcEvaluator<BuiltinProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: FunctionalProvider> VxcEvaluator<P> {
    pub fn with_provider(provider: P, options: XCOptions) -> Self {
        Self { provider, options }
    }

    pub fn options(&self) -> &XCOptions {
        &self.options
    }

    /// Returns the potential at every point of `rho`.
    pub fn evaluate_vxc(&self, rho: &[f64]) -> Result<Vec<f64>, XCError> {
        let mut vxc = zeroed_buffer(rho.len())?;

        self.evaluate_vxc_into(rho, &mut vxc)?;

        Ok(vxc)
    }

    /// Overwrites `vxc` with the potential at every point of `rho`.
    pub fn evaluate_vxc_into(&self, rho: &[f64], vxc: &mut [f64]) -> Result<(), XCError> {
        check_lengths(rho, vxc)?;

        let rho = self.prepare_density(rho)?;

        let n = rho.len();

        if n == 0 {
            return Ok(());
        }

        debug!(
            npoints = n,
            scheme = self.options.functional.as_str(),
            parallel = self.options.parallel,
            "evaluate vxc"
        );

        let mut vrho_x = zeroed_buffer(n)?;
        let mut vrho_c = zeroed_buffer(n)?;

        let fx = self
            .provider
            .init(self.options.functional.exchange(), self.options.polarization)?;
        let fc = self
            .provider
            .init(self.options.functional.correlation(), self.options.polarization)?;

        if self.options.parallel {
            let (rx, rc) = rayon::join(
                || self.eval_vxc_chunked(&*fx, &rho, &mut vrho_x),
                || self.eval_vxc_chunked(&*fc, &rho, &mut vrho_c),
            );
            rx?;
            rc?;

            vxc.par_iter_mut()
                .zip(vrho_x.par_iter())
                .zip(vrho_c.par_iter())
                .for_each(|((v, x), c)| *v = x + c);
        } else {
            self.eval_vxc_chunked(&*fx, &rho, &mut vrho_x)?;
            self.eval_vxc_chunked(&*fc, &rho, &mut vrho_c)?;

            for (v, x, c) in izip!(vxc.iter_mut(), vrho_x.iter(), vrho_c.iter()) {
                *v = x + c;
            }
        }

        Ok(())
    }

    /// Returns `(exc, vxc)`: energy density per particle and potential.
    pub fn evaluate_exc_vxc(&self, rho: &[f64]) -> Result<(Vec<f64>, Vec<f64>), XCError> {
        let rho = self.prepare_density(rho)?;

        let n = rho.len();

        let mut exc = zeroed_buffer(n)?;
        let mut vxc = zeroed_buffer(n)?;

        if n == 0 {
            return Ok((exc, vxc));
        }

        debug!(
            npoints = n,
            scheme = self.options.functional.as_str(),
            "evaluate exc and vxc"
        );

        let mut erho_x = zeroed_buffer(n)?;
        let mut vrho_x = zeroed_buffer(n)?;
        let mut erho_c = zeroed_buffer(n)?;
        let mut vrho_c = zeroed_buffer(n)?;

        let fx = self
            .provider
            .init(self.options.functional.exchange(), self.options.polarization)?;
        let fc = self
            .provider
            .init(self.options.functional.correlation(), self.options.polarization)?;

        if self.options.parallel {
            let (rx, rc) = rayon::join(
                || self.eval_exc_vxc_chunked(&*fx, &rho, &mut erho_x, &mut vrho_x),
                || self.eval_exc_vxc_chunked(&*fc, &rho, &mut erho_c, &mut vrho_c),
            );
            rx?;
            rc?;
        } else {
            self.eval_exc_vxc_chunked(&*fx, &rho, &mut erho_x, &mut vrho_x)?;
            self.eval_exc_vxc_chunked(&*fc, &rho, &mut erho_c, &mut vrho_c)?;
        }

        for (e, v, ex, vx, ec, vc) in izip!(
            exc.iter_mut(),
            vxc.iter_mut(),
            erho_x.iter(),
            vrho_x.iter(),
            erho_c.iter(),
            vrho_c.iter()
        ) {
            *e = ex + ec;
            *v = vx + vc;
        }

        Ok((exc, vxc))
    }

    fn eval_vxc_chunked(
        &self,
        func: &dyn LdaFunctional,
        rho: &[f64],
        out: &mut [f64],
    ) -> Result<(), XCError> {
        let chunk_size = self.chunk_size()?;

        if self.options.parallel {
            rho.par_chunks(chunk_size)
                .zip(out.par_chunks_mut(chunk_size))
                .try_for_each(|(r, v)| func.eval_vxc(r, v))
        } else {
            for (r, v) in rho.chunks(chunk_size).zip(out.chunks_mut(chunk_size)) {
                func.eval_vxc(r, v)?;
            }
            Ok(())
        }
    }

    fn eval_exc_vxc_chunked(
        &self,
        func: &dyn LdaFunctional,
        rho: &[f64],
        exc: &mut [f64],
        vxc: &mut [f64],
    ) -> Result<(), XCError> {
        let chunk_size = self.chunk_size()?;

        if self.options.parallel {
            rho.par_chunks(chunk_size)
                .zip(exc.par_chunks_mut(chunk_size))
                .zip(vxc.par_chunks_mut(chunk_size))
                .try_for_each(|((r, e), v)| func.eval_exc_vxc(r, e, v))
        } else {
            for (r, e, v) in izip!(
                rho.chunks(chunk_size),
                exc.chunks_mut(chunk_size),
                vxc.chunks_mut(chunk_size)
            ) {
                func.eval_exc_vxc(r, e, v)?;
            }
            Ok(())
        }
    }

    fn chunk_size(&self) -> Result<usize, XCError> {
        match self.options.chunk_size {
            0 => Err(XCError::InvalidChunkSize),
            n => Ok(n),
        }
    }

    fn prepare_density<'a>(&self, rho: &'a [f64]) -> Result<Cow<'a, [f64]>, XCError> {
        if let Some((index, &value)) = rho.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(XCError::InvalidDensity { index, value });
        }

        let (index, &value) = match rho.iter().enumerate().find(|(_, v)| **v < 0.0) {
            Some(first_negative) => first_negative,
            None => return Ok(Cow::Borrowed(rho)),
        };

        match self.options.rho_policy {
            RhoPolicy::Reject => Err(XCError::InvalidDensity { index, value }),

            RhoPolicy::Clamp => {
                let nneg = rho.iter().filter(|&&v| v < 0.0).count();
                warn!(count = nneg, first = index, "clamping negative density to zero");

                let mut clamped = zeroed_buffer(rho.len())?;
                for (c, &r) in clamped.iter_mut().zip(rho.iter()) {
                    *c = r.max(0.0);
                }

                Ok(Cow::Owned(clamped))
            }
        }
    }
}

/// Integrates the XC energy: sum of rho * exc * dv over the grid.
pub fn xc_energy(rho: &[f64], exc: &[f64], dv: f64) -> Result<f64, XCError> {
    check_lengths(rho, exc)?;

    Ok(rho.iter().zip(exc.iter()).map(|(r, e)| r * e).sum::<f64>() * dv)
}

fn check_lengths(rho: &[f64], out: &[f64]) -> Result<(), XCError> {
    if rho.len() != out.len() {
        return Err(XCError::LengthMismatch {
            density: rho.len(),
            potential: out.len(),
        });
    }

    Ok(())
}

/// Zero-filled scratch buffer; allocation failure is reported instead of aborting.
fn zeroed_buffer(n: usize) -> Result<Vec<f64>, XCError> {
    let mut buf = Vec::new();

    buf.try_reserve_exact(n)
        .map_err(|_| XCError::ResourceExhaustion { len: n })?;

    buf.resize(n, 0.0);

    Ok(buf)
}
