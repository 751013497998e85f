use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, Result};
use crate::models::bs::ContractParams;
use crate::models::utils::{require_finite, require_positive};

/// Contract parameter varied along one axis of a price surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceAxis {
    Spot,
    Volatility,
    Strike,
    TimeToMaturity,
    InterestRate,
}

impl SurfaceAxis {
    /// Field name on [`ContractParams`], used in error reports.
    pub fn name(&self) -> &'static str {
        match self {
            SurfaceAxis::Spot => "spot",
            SurfaceAxis::Volatility => "volatility",
            SurfaceAxis::Strike => "strike",
            SurfaceAxis::TimeToMaturity => "time_to_maturity",
            SurfaceAxis::InterestRate => "interest_rate",
        }
    }

    /// Applies the parameter's domain rule to one axis value.
    pub fn check(&self, value: f64) -> Result<f64> {
        match self {
            SurfaceAxis::InterestRate => require_finite(self.name(), value),
            _ => require_positive(self.name(), value),
        }
    }
}

impl fmt::Display for SurfaceAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl ContractParams {
    /// Reads the field an axis varies.
    pub fn get(&self, axis: SurfaceAxis) -> f64 {
        match axis {
            SurfaceAxis::Spot => self.spot,
            SurfaceAxis::Volatility => self.volatility,
            SurfaceAxis::Strike => self.strike,
            SurfaceAxis::TimeToMaturity => self.time_to_maturity,
            SurfaceAxis::InterestRate => self.interest_rate,
        }
    }

    /// Returns a copy with the field an axis varies replaced.
    pub fn with_axis(mut self, axis: SurfaceAxis, value: f64) -> Self {
        match axis {
            SurfaceAxis::Spot => self.spot = value,
            SurfaceAxis::Volatility => self.volatility = value,
            SurfaceAxis::Strike => self.strike = value,
            SurfaceAxis::TimeToMaturity => self.time_to_maturity = value,
            SurfaceAxis::InterestRate => self.interest_rate = value,
        }
        self
    }
}

/// `steps` evenly spaced values from `min` to `max` inclusive.
///
/// One step yields `[min]`; zero steps yield an empty vector.
pub fn linspace(min: f64, max: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let width = (max - min) / (steps - 1) as f64;
            (0..steps)
                .map(|i| {
                    if i == steps - 1 {
                        max
                    } else {
                        min + width * i as f64
                    }
                })
                .collect()
        }
    }
}

/// Ordered values for one varying parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub axis: SurfaceAxis,
    pub values: Vec<f64>,
}

impl AxisRange {
    pub fn new(axis: SurfaceAxis, values: Vec<f64>) -> Self {
        Self { axis, values }
    }

    /// Evenly spaced axis, see [`linspace`].
    pub fn linspace(axis: SurfaceAxis, min: f64, max: f64, steps: usize) -> Self {
        Self::new(axis, linspace(min, max, steps))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Rejects empty axes and any value outside the parameter's domain.
    pub fn validate(&self) -> Result<()> {
        if self.values.is_empty() {
            return Err(PricingError::InvalidGrid {
                message: format!("{} axis has no values", self.axis),
            });
        }
        for &value in &self.values {
            self.axis.check(value)?;
        }
        Ok(())
    }
}
