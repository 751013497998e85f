//! # bsm-surface: Black-Scholes-Merton Pricing and Price Surfaces
//!
//! `bsm-surface` prices European options under the Black-Scholes-Merton closed
//! form, exposes the standard Greeks and P&L against a purchase price, and
//! evaluates call/put prices over two-dimensional parameter grids for heatmap
//! rendering.
//!
//! ## Core Features
//!
//! - **Pricing model**: [`BlackScholes`] with d1/d2, prices, Delta, Gamma, Vega,
//!   Theta, Rho and P&L as pure queries over immutable inputs
//! - **Price surfaces**: [`GridEvaluator`] and [`compute_grid`] evaluate whole
//!   grids with matrix-broadcast arithmetic instead of one model per cell
//! - **Fail fast**: invalid or numerically undefined inputs return
//!   [`PricingError`] instead of leaking `NaN`/`Inf`
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_surface::{compute_grid, linspace, BlackScholes};
//!
//! let bs = BlackScholes::new(1.0, 100.0, 100.0, 0.20, 0.05)?;
//! assert!((bs.call_price() - 10.45).abs() < 0.01);
//! assert!((bs.put_price() - 5.57).abs() < 0.01);
//!
//! let spots = linspace(80.0, 120.0, 10);
//! let vols = linspace(0.10, 0.30, 10);
//! let (calls, puts) = compute_grid(&spots, &vols, 1.0, 100.0, 0.05)?;
//! assert_eq!(calls.shape(), (10, 10));
//! # let _ = puts;
//! # Ok::<(), bsm_surface::PricingError>(())
//! ```
//!
//! ## Units
//!
//! Inputs are decimal fractions (`0.20` for 20% volatility). Vega is per unit
//! of σ, Theta is per year and Rho per unit of rate; no per-day or per-point
//! rescaling is applied.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod error;
pub mod grid;
pub mod models;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use config::{AxisConfig, GridConfig, SurfaceConfig};
pub use error::{PricingError, Result};
pub use grid::{
    compute_grid, linspace, value_range, AxisRange, GridEvaluator, GridRequest, PriceSurface,
    SurfaceAxis,
};
pub use models::bs::{BlackScholes, ContractParams, Greeks, OptionType, PricingSummary};
pub use models::traits::OptionPricer;

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured surfaces for common use cases.
///
/// - [`dashboard()`]: ATM contract with a 10 x 10 spot/volatility heatmap
/// - [`strike_spot_pnl()`]: 100 x 100 P&L heatmap over strike and spot
/// - [`minimal()`]: 3 x 3 grid for quick checks
pub mod default_configs {
    use crate::config::SurfaceConfig;

    /// Interactive dashboard defaults.
    ///
    /// **Characteristics:**
    /// - S = K = 100, T = 1 year, σ = 20%, r = 5%
    /// - Purchase price 5.00 for both call and put
    /// - Spot 80..120 by volatility 10%..30%, 10 steps each
    ///
    /// # Example
    ///
    /// ```rust
    /// use bsm_surface::default_configs;
    ///
    /// let config = default_configs::dashboard();
    /// let surface = config.grid_evaluator()?.evaluate()?;
    /// assert_eq!(surface.shape(), (10, 10));
    /// # Ok::<(), bsm_surface::PricingError>(())
    /// ```
    pub fn dashboard() -> SurfaceConfig {
        SurfaceConfig::dashboard()
    }

    /// Strike x spot P&L heatmap.
    ///
    /// **Characteristics:**
    /// - Strike along columns, underlying price along rows
    /// - Both axes 50..150 with 100 steps
    /// - Purchase price 5.00 for both sides
    pub fn strike_spot_pnl() -> SurfaceConfig {
        SurfaceConfig::strike_spot_pnl()
    }

    /// Minimal 3 x 3 configuration for quick validation and unit tests.
    pub fn minimal() -> SurfaceConfig {
        SurfaceConfig::minimal()
    }
}

/// Price both sides of a contract and collect prices, P&L and Greeks.
///
/// # Errors
///
/// * [`PricingError::InvalidParameter`] if T, K, S or σ is not strictly
///   positive, or any field is non-finite
/// * [`PricingError::DomainArithmetic`] if the inputs overflow an
///   intermediate quantity
///
/// # Example
///
/// ```rust
/// use bsm_surface::{price_contract, ContractParams};
///
/// let params = ContractParams::new(1.0, 100.0, 100.0, 0.20, 0.05)
///     .with_purchase_prices(5.0, 0.0);
/// let summary = price_contract(params)?;
/// assert!((summary.call_pnl - 5.45).abs() < 0.01);
/// # Ok::<(), bsm_surface::PricingError>(())
/// ```
pub fn price_contract(params: ContractParams) -> Result<PricingSummary> {
    Ok(BlackScholes::from_params(params)?.summary())
}

/// Evaluate the price surface described by a configuration.
///
/// Validates the whole configuration first, so a bad contract or axis is
/// reported before any matrix is built.
pub fn evaluate_surface(config: &SurfaceConfig) -> Result<PriceSurface> {
    config.validate()?;
    config.grid_evaluator()?.evaluate()
}
