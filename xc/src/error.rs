//! Error types for the XC module

use thiserror::Error;

/// Errors that can occur in XC potential evaluation.
///
/// None of these are recovered locally: the functional identifiers are fixed,
/// so a failed evaluation cannot succeed on retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum XCError {
    /// Scratch buffers for the exchange and correlation potentials could not be allocated
    #[error("failed to allocate XC scratch buffers for {len} grid points")]
    ResourceExhaustion { len: usize },

    /// The functional evaluator failed while computing a potential
    #[error("functional '{functional}' failed: {reason}")]
    Evaluator {
        functional: &'static str,
        reason: String,
    },

    /// The functional evaluator does not provide the requested functional code
    #[error("functional code {0} is not available from the functional evaluator")]
    UnsupportedFunctional(i32),

    /// The functional evaluator cannot serve the requested spin channel
    #[error("functional '{functional}' is not available for the requested spin channel")]
    UnsupportedPolarization { functional: &'static str },

    /// Density and potential arrays do not have the same length
    #[error("density has {density} points but potential has {potential}")]
    LengthMismatch { density: usize, potential: usize },

    /// Density is negative or not finite at a grid point
    #[error("invalid density {value:e} at grid point {index}")]
    InvalidDensity { index: usize, value: f64 },

    /// Chunk size for batched evaluation must be positive
    #[error("XC chunk size must be at least 1")]
    InvalidChunkSize,

    /// Unknown or unsupported XC scheme
    #[error("unknown XC scheme: '{0}'. Supported schemes: svwn, lda-pz")]
    UnknownScheme(String),
}
