//! Error types for bsm-surface.
//!
//! Pricing and grid evaluation fail fast: invalid inputs are rejected when a
//! model or grid request is constructed, never carried into outputs as `NaN`
//! or `Inf`.

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, PricingError>;

/// Errors raised by the pricing model, the grid evaluator and config validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PricingError {
    /// A contract parameter is outside its domain (e.g. zero maturity, negative spot).
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name as it appears on `ContractParams`.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// An intermediate quantity evaluated to `NaN` or `Inf` despite valid inputs.
    #[error("undefined {quantity}: {detail}")]
    DomainArithmetic {
        /// Name of the quantity that went non-finite, such as `"d1"` or `"vega"`.
        quantity: &'static str,
        /// Offending value with the parameters or grid cell that produced it.
        detail: String,
    },

    /// Grid request is malformed (empty axis, both axes varying the same parameter).
    #[error("invalid grid: {message}")]
    InvalidGrid { message: String },

    /// Option side string was neither "call" nor "put".
    #[error("unknown option type: {0}")]
    UnknownOptionType(String),

    /// Configuration parsed but holds unusable values.
    #[error("invalid config: {message}")]
    Config { message: String },
}

impl PricingError {
    pub(crate) fn invalid(name: &'static str, value: f64) -> Self {
        PricingError::InvalidParameter { name, value }
    }

    pub(crate) fn non_finite(quantity: &'static str, detail: impl Into<String>) -> Self {
        PricingError::DomainArithmetic {
            quantity,
            detail: detail.into(),
        }
    }
}
