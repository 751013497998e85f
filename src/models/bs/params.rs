use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::utils::{require_finite, require_positive};

/// Market and contract inputs for one European option pair.
///
/// Rates and volatilities are decimal fractions (`0.20` for 20%). Converting
/// percentages typed into a UI is the caller's job.
///
/// Missing fields deserialize to the [`Default`] contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractParams {
    /// Years remaining until expiry (T > 0)
    pub time_to_maturity: f64,
    /// Strike price (K > 0)
    pub strike: f64,
    /// Current underlying price (S > 0)
    pub spot: f64,
    /// Annualized volatility (σ > 0)
    pub volatility: f64,
    /// Annualized risk-free rate, continuously compounded; may be negative
    pub interest_rate: f64,
    /// Cost basis of the call, used only for P&L
    pub purchase_price_call: f64,
    /// Cost basis of the put, used only for P&L
    pub purchase_price_put: f64,
}

impl Default for ContractParams {
    fn default() -> Self {
        Self {
            time_to_maturity: 1.0,
            strike: 100.0,
            spot: 100.0,
            volatility: 0.20,
            interest_rate: 0.05,
            purchase_price_call: 0.0,
            purchase_price_put: 0.0,
        }
    }
}

impl ContractParams {
    /// Unvalidated constructor with zero purchase prices. Validation happens
    /// when the parameters are handed to a model or grid request.
    pub fn new(
        time_to_maturity: f64,
        strike: f64,
        spot: f64,
        volatility: f64,
        interest_rate: f64,
    ) -> Self {
        Self {
            time_to_maturity,
            strike,
            spot,
            volatility,
            interest_rate,
            purchase_price_call: 0.0,
            purchase_price_put: 0.0,
        }
    }

    /// Returns a copy with the given cost basis for each side.
    pub fn with_purchase_prices(mut self, call: f64, put: f64) -> Self {
        self.purchase_price_call = call;
        self.purchase_price_put = put;
        self
    }

    /// Checks every field against its domain.
    ///
    /// T, K, S and σ must be strictly positive; every field must be finite.
    pub fn validate(&self) -> Result<()> {
        require_positive("time_to_maturity", self.time_to_maturity)?;
        require_positive("strike", self.strike)?;
        require_positive("spot", self.spot)?;
        require_positive("volatility", self.volatility)?;
        require_finite("interest_rate", self.interest_rate)?;
        require_finite("purchase_price_call", self.purchase_price_call)?;
        require_finite("purchase_price_put", self.purchase_price_put)?;
        Ok(())
    }
}
