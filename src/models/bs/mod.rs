//! Black-Scholes-Merton closed-form pricing for European options.
//!
//! ```text
//! d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
//! d2 = d1 - σ·√T
//! C  = S·Φ(d1) - K·e^(-rT)·Φ(d2)
//! P  = K·e^(-rT)·Φ(-d2) - S·Φ(-d1)
//! ```
//!
//! [`BlackScholes`] validates its inputs once and then answers every query by
//! recomputing from the stored parameters. No derived value is cached.

mod greeks;
mod params;

pub use greeks::{Greeks, OptionType, PricingSummary};
pub use params::ContractParams;

use crate::error::{PricingError, Result};
use crate::models::traits::OptionPricer;
use crate::models::utils::{discount_factor, half_variance, norm_cdf, norm_pdf};

/// Black-Scholes-Merton model for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    params: ContractParams,
}

impl BlackScholes {
    /// Builds a model with zero purchase prices.
    ///
    /// Fails with [`PricingError::InvalidParameter`] when T, K, S or σ is not
    /// strictly positive, or any input is non-finite.
    pub fn new(
        time_to_maturity: f64,
        strike: f64,
        spot: f64,
        volatility: f64,
        interest_rate: f64,
    ) -> Result<Self> {
        Self::from_params(ContractParams::new(
            time_to_maturity,
            strike,
            spot,
            volatility,
            interest_rate,
        ))
    }

    /// Builds a model from a full parameter set, purchase prices included.
    pub fn from_params(params: ContractParams) -> Result<Self> {
        params.validate()?;
        let model = Self { params };
        model.check_outputs_finite()?;
        Ok(model)
    }

    /// Returns a model with the given cost basis for each side.
    pub fn with_purchase_prices(self, call: f64, put: f64) -> Result<Self> {
        Self::from_params(self.params.with_purchase_prices(call, put))
    }

    pub fn params(&self) -> &ContractParams {
        &self.params
    }

    /// Rejects parameter sets whose individual values are valid but whose
    /// outputs overflow or underflow into `NaN`/`Inf` (e.g. `exp(-rT)` with a
    /// huge negative rate, or σ·√T rounding to zero).
    ///
    /// The grid evaluator applies the same checks per cell, purchase prices
    /// aside, so a cell exists exactly when the scalar model would build.
    fn check_outputs_finite(&self) -> Result<()> {
        let sigma_sqrt_t = self.sigma_sqrt_t();
        if sigma_sqrt_t <= 0.0 {
            return Err(PricingError::non_finite(
                "sigma_sqrt_t",
                format!("σ·√T underflowed to {} for {:?}", sigma_sqrt_t, self.params),
            ));
        }

        let checks = [
            ("d1", self.d1()),
            ("d2", self.d2()),
            ("discount factor", self.discount()),
            ("call_price", self.call_price()),
            ("put_price", self.put_price()),
            ("gamma", self.gamma()),
            ("vega", self.vega()),
            ("call_theta", self.call_theta()),
            ("put_theta", self.put_theta()),
            ("call_rho", self.call_rho()),
            ("put_rho", self.put_rho()),
            ("call_pnl", self.call_pnl()),
            ("put_pnl", self.put_pnl()),
        ];
        for (quantity, value) in checks {
            if !value.is_finite() {
                return Err(PricingError::non_finite(
                    quantity,
                    format!("evaluated to {} for {:?}", value, self.params),
                ));
            }
        }
        Ok(())
    }

    fn sigma_sqrt_t(&self) -> f64 {
        self.params.volatility * self.params.time_to_maturity.sqrt()
    }

    fn discount(&self) -> f64 {
        discount_factor(self.params.interest_rate, self.params.time_to_maturity)
    }

    /// `(ln(S/K) + (r + σ²/2)·T) / (σ·√T)`
    pub fn d1(&self) -> f64 {
        let p = &self.params;
        ((p.spot / p.strike).ln()
            + (p.interest_rate + half_variance(p.volatility)) * p.time_to_maturity)
            / self.sigma_sqrt_t()
    }

    /// `d1 - σ·√T`
    pub fn d2(&self) -> f64 {
        self.d1() - self.sigma_sqrt_t()
    }

    /// European call price.
    pub fn call_price(&self) -> f64 {
        let p = &self.params;
        p.spot * norm_cdf(self.d1()) - p.strike * self.discount() * norm_cdf(self.d2())
    }

    /// European put price.
    pub fn put_price(&self) -> f64 {
        let p = &self.params;
        p.strike * self.discount() * norm_cdf(-self.d2()) - p.spot * norm_cdf(-self.d1())
    }

    /// Φ(d1). In (0, 1) analytically; rounds to exactly 0 or 1 deep out of or
    /// in the money.
    pub fn call_delta(&self) -> f64 {
        norm_cdf(self.d1())
    }

    /// Φ(d1) - 1. In (-1, 0) analytically; reaches -1 or 0 once Φ(d1) rounds.
    pub fn put_delta(&self) -> f64 {
        norm_cdf(self.d1()) - 1.0
    }

    /// φ(d1) / (S·σ·√T); identical for calls and puts.
    pub fn gamma(&self) -> f64 {
        norm_pdf(self.d1()) / (self.params.spot * self.sigma_sqrt_t())
    }

    /// S·φ(d1)·√T, per unit change in σ (not per volatility point).
    pub fn vega(&self) -> f64 {
        let p = &self.params;
        p.spot * norm_pdf(self.d1()) * p.time_to_maturity.sqrt()
    }

    // Both thetas are per year. No day-count rescaling is applied.
    fn theta_decay_term(&self) -> f64 {
        let p = &self.params;
        -(p.spot * norm_pdf(self.d1()) * p.volatility) / (2.0 * p.time_to_maturity.sqrt())
    }

    /// Call theta per year: `-S·φ(d1)·σ/(2√T) - r·K·e^(-rT)·Φ(d2)`.
    pub fn call_theta(&self) -> f64 {
        let p = &self.params;
        self.theta_decay_term()
            - p.interest_rate * p.strike * self.discount() * norm_cdf(self.d2())
    }

    /// Put theta per year: `-S·φ(d1)·σ/(2√T) + r·K·e^(-rT)·Φ(-d2)`.
    pub fn put_theta(&self) -> f64 {
        let p = &self.params;
        self.theta_decay_term()
            + p.interest_rate * p.strike * self.discount() * norm_cdf(-self.d2())
    }

    /// K·T·e^(-rT)·Φ(d2), per unit change in r.
    pub fn call_rho(&self) -> f64 {
        let p = &self.params;
        p.strike * p.time_to_maturity * self.discount() * norm_cdf(self.d2())
    }

    /// -K·T·e^(-rT)·Φ(-d2), per unit change in r.
    pub fn put_rho(&self) -> f64 {
        let p = &self.params;
        -p.strike * p.time_to_maturity * self.discount() * norm_cdf(-self.d2())
    }

    pub fn call_pnl(&self) -> f64 {
        self.call_price() - self.params.purchase_price_call
    }

    pub fn put_pnl(&self) -> f64 {
        self.put_price() - self.params.purchase_price_put
    }

    pub fn price(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.call_price(),
            OptionType::Put => self.put_price(),
        }
    }

    pub fn delta(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.call_delta(),
            OptionType::Put => self.put_delta(),
        }
    }

    pub fn theta(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.call_theta(),
            OptionType::Put => self.put_theta(),
        }
    }

    pub fn rho(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.call_rho(),
            OptionType::Put => self.put_rho(),
        }
    }

    pub fn pnl(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.call_pnl(),
            OptionType::Put => self.put_pnl(),
        }
    }

    /// Snapshot of the Greeks for one side.
    pub fn greeks(&self, option_type: OptionType) -> Greeks {
        Greeks {
            delta: self.delta(option_type),
            gamma: self.gamma(),
            vega: self.vega(),
            theta: self.theta(option_type),
            rho: self.rho(option_type),
        }
    }
}

impl OptionPricer for BlackScholes {
    fn call_price(&self) -> f64 {
        BlackScholes::call_price(self)
    }

    fn put_price(&self) -> f64 {
        BlackScholes::put_price(self)
    }

    fn summary(&self) -> PricingSummary {
        PricingSummary {
            call_price: self.call_price(),
            put_price: self.put_price(),
            call_pnl: self.call_pnl(),
            put_pnl: self.put_pnl(),
            call_greeks: self.greeks(OptionType::Call),
            put_greeks: self.greeks(OptionType::Put),
        }
    }
}
