//! Broadcast evaluation of call/put prices over two parameter axes.
//!
//! Every contract parameter is laid out as an `n x m` matrix (a meshgrid of
//! the two varying axes, constant fill for the rest) and the Black-Scholes
//! formulas run as whole-matrix expressions. The expressions follow the same
//! operation order as [`BlackScholes`](crate::models::bs::BlackScholes), so a
//! grid cell equals the scalar model's output for the same parameters.

mod axis;
mod surface;

pub use axis::{linspace, AxisRange, SurfaceAxis};
pub use surface::{value_range, PriceSurface};

use nalgebra::DMatrix;

use crate::error::{PricingError, Result};
use crate::models::bs::ContractParams;
use crate::models::utils::{discount_factor, half_variance, norm_cdf, norm_pdf};

/// Axis pair plus the parameters held fixed across the surface.
///
/// The fields of `base` named by `axis_a` and `axis_b` are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRequest {
    /// Varies along columns
    pub axis_a: AxisRange,
    /// Varies along rows
    pub axis_b: AxisRange,
    pub base: ContractParams,
}

impl GridRequest {
    pub fn new(axis_a: AxisRange, axis_b: AxisRange, base: ContractParams) -> Self {
        Self {
            axis_a,
            axis_b,
            base,
        }
    }

    /// Spot along columns, volatility along rows.
    pub fn spot_vol(
        spot_range: Vec<f64>,
        vol_range: Vec<f64>,
        time_to_maturity: f64,
        strike: f64,
        interest_rate: f64,
    ) -> Self {
        let base = ContractParams {
            time_to_maturity,
            strike,
            interest_rate,
            ..ContractParams::default()
        };
        Self::new(
            AxisRange::new(SurfaceAxis::Spot, spot_range),
            AxisRange::new(SurfaceAxis::Volatility, vol_range),
            base,
        )
    }

    /// `(rows, cols)` of the resulting matrices.
    pub fn shape(&self) -> (usize, usize) {
        (self.axis_b.len(), self.axis_a.len())
    }

    pub fn validate(&self) -> Result<()> {
        if self.axis_a.axis == self.axis_b.axis {
            return Err(PricingError::InvalidGrid {
                message: format!("both axes vary {}", self.axis_a.axis),
            });
        }
        self.axis_a.validate()?;
        self.axis_b.validate()?;
        // Fixed fields must be valid on their own; substitute the varying ones.
        self.base
            .with_axis(self.axis_a.axis, self.axis_a.values[0])
            .with_axis(self.axis_b.axis, self.axis_b.values[0])
            .validate()
    }

    /// Meshgrid matrix for one contract parameter.
    fn layout(&self, axis: SurfaceAxis) -> DMatrix<f64> {
        let (rows, cols) = self.shape();
        if axis == self.axis_a.axis {
            DMatrix::from_fn(rows, cols, |_, j| self.axis_a.values[j])
        } else if axis == self.axis_b.axis {
            DMatrix::from_fn(rows, cols, |i, _| self.axis_b.values[i])
        } else {
            DMatrix::from_element(rows, cols, self.base.get(axis))
        }
    }
}

/// Validated grid request ready for evaluation.
#[derive(Debug, Clone)]
pub struct GridEvaluator {
    request: GridRequest,
}

impl GridEvaluator {
    pub fn new(request: GridRequest) -> Result<Self> {
        request.validate()?;
        Ok(Self { request })
    }

    pub fn request(&self) -> &GridRequest {
        &self.request
    }

    /// Evaluates call and put prices for every axis combination.
    pub fn evaluate(&self) -> Result<PriceSurface> {
        let req = &self.request;
        let (rows, cols) = req.shape();
        tracing::debug!(
            axis_a = %req.axis_a.axis,
            axis_b = %req.axis_b.axis,
            rows,
            cols,
            "evaluating price surface"
        );

        let t = req.layout(SurfaceAxis::TimeToMaturity);
        let k = req.layout(SurfaceAxis::Strike);
        let s = req.layout(SurfaceAxis::Spot);
        let sigma = req.layout(SurfaceAxis::Volatility);
        let r = req.layout(SurfaceAxis::InterestRate);

        let sigma_sqrt_t = sigma.component_mul(&t.map(f64::sqrt));
        ensure_all(&sigma_sqrt_t, "sigma_sqrt_t", |v| v > 0.0)?;

        let log_moneyness = s.component_div(&k).map(f64::ln);
        let drift = (&r + sigma.map(half_variance)).component_mul(&t);
        let d1 = (log_moneyness + drift).component_div(&sigma_sqrt_t);
        let d2 = &d1 - &sigma_sqrt_t;
        ensure_all(&d1, "d1", f64::is_finite)?;

        let discount = r.zip_map(&t, discount_factor);
        ensure_all(&discount, "discount factor", f64::is_finite)?;
        let discounted_strike = k.component_mul(&discount);

        let cdf_d1 = d1.map(norm_cdf);
        let cdf_d2 = d2.map(norm_cdf);
        let cdf_neg_d1 = d1.map(|x| norm_cdf(-x));
        let cdf_neg_d2 = d2.map(|x| norm_cdf(-x));

        let call_prices = s.component_mul(&cdf_d1) - discounted_strike.component_mul(&cdf_d2);
        let put_prices =
            discounted_strike.component_mul(&cdf_neg_d2) - s.component_mul(&cdf_neg_d1);
        ensure_all(&call_prices, "call_price", f64::is_finite)?;
        ensure_all(&put_prices, "put_price", f64::is_finite)?;

        // Greeks are not returned, but a cell is only kept when the scalar
        // model for the same contract would build.
        let pdf_d1 = d1.map(norm_pdf);
        let sqrt_t = t.map(f64::sqrt);
        let gamma = pdf_d1.component_div(&s.component_mul(&sigma_sqrt_t));
        ensure_all(&gamma, "gamma", f64::is_finite)?;
        let vega = s.component_mul(&pdf_d1).component_mul(&sqrt_t);
        ensure_all(&vega, "vega", f64::is_finite)?;

        let decay = -s
            .component_mul(&pdf_d1)
            .component_mul(&sigma)
            .component_div(&(sqrt_t * 2.0));
        let carry = r.component_mul(&k).component_mul(&discount);
        let call_theta = &decay - carry.component_mul(&cdf_d2);
        ensure_all(&call_theta, "call_theta", f64::is_finite)?;
        let put_theta = &decay + carry.component_mul(&cdf_neg_d2);
        ensure_all(&put_theta, "put_theta", f64::is_finite)?;

        let strike_time = k.component_mul(&t).component_mul(&discount);
        ensure_all(&strike_time.component_mul(&cdf_d2), "call_rho", f64::is_finite)?;
        ensure_all(&strike_time.component_mul(&cdf_neg_d2), "put_rho", f64::is_finite)?;

        Ok(PriceSurface {
            axis_a: req.axis_a.clone(),
            axis_b: req.axis_b.clone(),
            call_prices,
            put_prices,
        })
    }
}

/// Fails with [`PricingError::DomainArithmetic`] naming the first cell that
/// breaks `ok`.
fn ensure_all(matrix: &DMatrix<f64>, quantity: &'static str, ok: fn(f64) -> bool) -> Result<()> {
    let rows = matrix.nrows();
    match matrix.iter().position(|&v| !ok(v)) {
        None => Ok(()),
        Some(idx) => {
            // Column-major storage
            let (row, col) = (idx % rows, idx / rows);
            Err(PricingError::non_finite(
                quantity,
                format!("{} at row {}, col {}", matrix[(row, col)], row, col),
            ))
        }
    }
}

/// Call and put prices over spot (columns) x volatility (rows).
///
/// Entry `[(i, j)]` of each matrix prices `spot = spot_range[j]`,
/// `volatility = vol_range[i]` with the given maturity, strike and rate.
pub fn compute_grid(
    spot_range: &[f64],
    vol_range: &[f64],
    time_to_maturity: f64,
    strike: f64,
    interest_rate: f64,
) -> Result<(DMatrix<f64>, DMatrix<f64>)> {
    let request = GridRequest::spot_vol(
        spot_range.to_vec(),
        vol_range.to_vec(),
        time_to_maturity,
        strike,
        interest_rate,
    );
    let surface = GridEvaluator::new(request)?.evaluate()?;
    Ok((surface.call_prices, surface.put_prices))
}
