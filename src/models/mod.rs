pub mod bs;

/// Common traits used by the pricing models
pub mod traits {
    use crate::models::bs::PricingSummary;

    /// Closed-form European option model queried through zero-argument accessors.
    ///
    /// Implementors store their inputs and recompute every output on demand.
    pub trait OptionPricer {
        fn call_price(&self) -> f64;
        fn put_price(&self) -> f64;
        fn summary(&self) -> PricingSummary;
    }
}

/// Numerical helpers shared by the scalar model and the grid evaluator.
///
/// Both pricing paths call these so that a grid cell and the scalar model
/// evaluate the same floating-point expression.
pub mod utils {
    use crate::error::{PricingError, Result};
    use statrs::consts::SQRT_2PI;
    use statrs::function::erf::erfc;

    /// Standard normal cumulative distribution function Φ(x).
    #[inline]
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * erfc(-x / std::f64::consts::SQRT_2)
    }

    /// Standard normal probability density function φ(x).
    #[inline]
    pub fn norm_pdf(x: f64) -> f64 {
        (-0.5 * x * x).exp() / SQRT_2PI
    }

    /// Continuously compounded discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(rate: f64, t: f64) -> f64 {
        (-rate * t).exp()
    }

    /// Half the variance rate, σ²/2.
    #[inline]
    pub fn half_variance(sigma: f64) -> f64 {
        0.5 * sigma * sigma
    }

    /// Rejects zero, negative and non-finite values.
    pub fn require_positive(name: &'static str, value: f64) -> Result<f64> {
        if !value.is_finite() || value <= 0.0 {
            return Err(PricingError::invalid(name, value));
        }
        Ok(value)
    }

    /// Rejects `NaN` and infinities; zero and negatives pass.
    pub fn require_finite(name: &'static str, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(PricingError::invalid(name, value));
        }
        Ok(value)
    }

}
