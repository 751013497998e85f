use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// Side of a European option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(PricingError::UnknownOptionType(s.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        })
    }
}

/// First-order sensitivities plus Gamma for one option side.
///
/// Units follow the raw partial derivatives: Vega per unit of σ, Theta per
/// year, Rho per unit of rate. Rescaling (per 1%, per day) is left to callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
    pub rho: f64,
}

/// Everything displayed for one parameter set: prices, P&L and Greeks per side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingSummary {
    pub call_price: f64,
    pub put_price: f64,
    pub call_pnl: f64,
    pub put_pnl: f64,
    pub call_greeks: Greeks,
    pub put_greeks: Greeks,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_type_parse() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(" PUT ".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("c".parse::<OptionType>().unwrap(), OptionType::Call);
        assert!(matches!(
            "straddle".parse::<OptionType>(),
            Err(PricingError::UnknownOptionType(_))
        ));
    }

    #[test]
    fn test_option_type_display_round_trips() {
        for side in [OptionType::Call, OptionType::Put] {
            assert_eq!(side.to_string().parse::<OptionType>().unwrap(), side);
        }
    }
}
