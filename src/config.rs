//! Serde-backed configuration: contract inputs plus the grid to evaluate.
//!
//! ```toml
//! [contract]
//! time_to_maturity = 1.0
//! strike = 100.0
//! spot = 100.0
//! volatility = 0.2
//! interest_rate = 0.05
//!
//! [grid.axis_a]
//! axis = "spot"
//! min = 80.0
//! max = 120.0
//! steps = 10
//!
//! [grid.axis_b]
//! axis = "volatility"
//! min = 0.1
//! max = 0.3
//! steps = 10
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{PricingError, Result};
use crate::grid::{AxisRange, GridEvaluator, GridRequest, SurfaceAxis};
use crate::models::bs::{BlackScholes, ContractParams};

/// One evenly spaced axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub axis: SurfaceAxis,
    pub min: f64,
    pub max: f64,
    #[serde(default = "default_steps")]
    pub steps: usize,
}

impl AxisConfig {
    pub fn new(axis: SurfaceAxis, min: f64, max: f64, steps: usize) -> Self {
        Self {
            axis,
            min,
            max,
            steps,
        }
    }

    pub fn to_range(&self) -> AxisRange {
        AxisRange::linspace(self.axis, self.min, self.max, self.steps)
    }

    fn validate(&self) -> Result<()> {
        if self.steps == 0 {
            return Err(PricingError::Config {
                message: format!("{} axis needs at least one step", self.axis),
            });
        }
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(PricingError::Config {
                message: format!(
                    "{} axis bounds [{}, {}] must be finite and ordered",
                    self.axis, self.min, self.max
                ),
            });
        }
        self.to_range().validate()
    }
}

/// Axis pair for the price surface. `axis_a` runs along columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_axis_a")]
    pub axis_a: AxisConfig,
    #[serde(default = "default_axis_b")]
    pub axis_b: AxisConfig,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            axis_a: default_axis_a(),
            axis_b: default_axis_b(),
        }
    }
}

impl GridConfig {
    /// Spot x volatility grid spanning `±spread` (fractional) around the
    /// contract's spot and volatility.
    pub fn centered(params: &ContractParams, spread: f64, steps: usize) -> Self {
        Self {
            axis_a: AxisConfig::new(
                SurfaceAxis::Spot,
                params.spot * (1.0 - spread),
                params.spot * (1.0 + spread),
                steps,
            ),
            axis_b: AxisConfig::new(
                SurfaceAxis::Volatility,
                params.volatility * (1.0 - spread),
                params.volatility * (1.0 + spread),
                steps,
            ),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceConfig {
    #[serde(default)]
    pub contract: ContractParams,
    #[serde(default)]
    pub grid: GridConfig,
}

impl SurfaceConfig {
    /// Dashboard defaults: ATM one-year contract, 5.00 paid per side,
    /// 10 x 10 spot/volatility heatmap.
    pub fn dashboard() -> Self {
        Self {
            contract: ContractParams::default().with_purchase_prices(5.0, 5.0),
            grid: GridConfig::default(),
        }
    }

    /// P&L heatmap over strike (columns) and underlying price (rows), both
    /// 50 to 150 in 100 steps.
    pub fn strike_spot_pnl() -> Self {
        Self {
            contract: ContractParams::default().with_purchase_prices(5.0, 5.0),
            grid: GridConfig {
                axis_a: AxisConfig::new(SurfaceAxis::Strike, 50.0, 150.0, 100),
                axis_b: AxisConfig::new(SurfaceAxis::Spot, 50.0, 150.0, 100),
            },
        }
    }

    /// 3 x 3 grid for quick checks.
    pub fn minimal() -> Self {
        Self {
            contract: ContractParams::default(),
            grid: GridConfig {
                axis_a: AxisConfig::new(SurfaceAxis::Spot, 90.0, 110.0, 3),
                axis_b: AxisConfig::new(SurfaceAxis::Volatility, 0.1, 0.3, 3),
            },
        }
    }

    /// Parses TOML and validates the result.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(s).context("failed to parse surface config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml_str(&raw)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded surface config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.contract.validate()?;
        self.grid.axis_a.validate()?;
        self.grid.axis_b.validate()?;
        self.grid_request().validate()
    }

    /// Scalar model for the configured contract.
    pub fn model(&self) -> Result<BlackScholes> {
        BlackScholes::from_params(self.contract)
    }

    pub fn grid_request(&self) -> GridRequest {
        GridRequest::new(
            self.grid.axis_a.to_range(),
            self.grid.axis_b.to_range(),
            self.contract,
        )
    }

    pub fn grid_evaluator(&self) -> Result<GridEvaluator> {
        GridEvaluator::new(self.grid_request())
    }
}

fn default_steps() -> usize {
    10
}

fn default_axis_a() -> AxisConfig {
    AxisConfig::new(SurfaceAxis::Spot, 80.0, 120.0, default_steps())
}

fn default_axis_b() -> AxisConfig {
    AxisConfig::new(SurfaceAxis::Volatility, 0.10, 0.30, default_steps())
}
