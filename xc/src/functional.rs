//! Functional identifiers and XC schemes

use crate::error::XCError;

/// Functionals known to the functional evaluator, keyed by the evaluator's integer codes.
///
/// `LdaCorrelationVwn` and `LdaCorrelationVwn1` are distinct entries of the
/// evaluator. SVWN uses `LdaCorrelationVwn` (code 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionalId {
    /// Slater exchange
    LdaExchange,
    /// Vosko-Wilk-Nusair correlation, fit V
    LdaCorrelationVwn,
    /// Perdew-Zunger correlation
    LdaCorrelationPz,
    /// Vosko-Wilk-Nusair correlation with the alternative spin interpolation
    LdaCorrelationVwn1,
}

impl FunctionalId {
    pub const ALL: [FunctionalId; 4] = [
        FunctionalId::LdaExchange,
        FunctionalId::LdaCorrelationVwn,
        FunctionalId::LdaCorrelationPz,
        FunctionalId::LdaCorrelationVwn1,
    ];

    /// Integer code understood by the functional evaluator
    pub fn code(&self) -> i32 {
        match self {
            FunctionalId::LdaExchange => 1,
            FunctionalId::LdaCorrelationVwn => 7,
            FunctionalId::LdaCorrelationPz => 9,
            FunctionalId::LdaCorrelationVwn1 => 28,
        }
    }

    pub fn from_code(code: i32) -> Result<Self, XCError> {
        FunctionalId::ALL
            .iter()
            .copied()
            .find(|id| id.code() == code)
            .ok_or(XCError::UnsupportedFunctional(code))
    }

    pub fn name(&self) -> &'static str {
        match self {
            FunctionalId::LdaExchange => "lda_x",
            FunctionalId::LdaCorrelationVwn => "lda_c_vwn",
            FunctionalId::LdaCorrelationPz => "lda_c_pz",
            FunctionalId::LdaCorrelationVwn1 => "lda_c_vwn_1",
        }
    }

    pub fn is_exchange(&self) -> bool {
        matches!(self, FunctionalId::LdaExchange)
    }
}

/// Spin channel a functional is initialised for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarization {
    Unpolarized,
    Polarized,
}

/// Type-safe enumeration of the available exchange-correlation schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XCFunctional {
    /// Slater exchange with VWN correlation
    Svwn,
    /// Slater exchange with Perdew-Zunger correlation
    LdaPz,
}

impl Default for XCFunctional {
    fn default() -> Self {
        XCFunctional::Svwn
    }
}

impl XCFunctional {
    /// Creates an XCFunctional from a string identifier
    ///
    /// # Example
    /// ```
    /// use xc::XCFunctional;
    /// let func = XCFunctional::from_str("svwn").unwrap();
    /// assert_eq!(func, XCFunctional::Svwn);
    /// ```
    pub fn from_str(scheme: &str) -> Result<Self, XCError> {
        match scheme.trim().to_lowercase().as_str() {
            "svwn" | "lda-vwn" => Ok(XCFunctional::Svwn),
            "lda-pz" => Ok(XCFunctional::LdaPz),
            _ => Err(XCError::UnknownScheme(scheme.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            XCFunctional::Svwn => "svwn",
            XCFunctional::LdaPz => "lda-pz",
        }
    }

    pub fn exchange(&self) -> FunctionalId {
        FunctionalId::LdaExchange
    }

    pub fn correlation(&self) -> FunctionalId {
        match self {
            XCFunctional::Svwn => FunctionalId::LdaCorrelationVwn,
            XCFunctional::LdaPz => FunctionalId::LdaCorrelationPz,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(FunctionalId::LdaExchange.code(), 1);
        assert_eq!(FunctionalId::LdaCorrelationVwn.code(), 7);
        assert_eq!(FunctionalId::LdaCorrelationVwn1.code(), 28);

        for id in FunctionalId::ALL.iter() {
            assert_eq!(FunctionalId::from_code(id.code()).unwrap(), *id);
        }

        assert_eq!(
            FunctionalId::from_code(101),
            Err(XCError::UnsupportedFunctional(101))
        );
    }

    #[test]
    fn test_svwn_uses_vwn_not_vwn1() {
        let svwn = XCFunctional::Svwn;

        assert_eq!(svwn.exchange().code(), 1);
        assert_eq!(svwn.correlation().code(), 7);
        assert_ne!(svwn.correlation(), FunctionalId::LdaCorrelationVwn1);
    }

    #[test]
    fn test_scheme_names() {
        assert_eq!(XCFunctional::from_str(" SVWN ").unwrap(), XCFunctional::Svwn);
        assert_eq!(XCFunctional::from_str("lda-pz").unwrap().as_str(), "lda-pz");
        assert_eq!(
            XCFunctional::from_str("pbe"),
            Err(XCError::UnknownScheme("pbe".to_string()))
        );
    }
}
