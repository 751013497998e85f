use nalgebra::DMatrix;

use super::axis::AxisRange;
use crate::models::bs::OptionType;

/// Call and put prices over the cross product of two axes.
///
/// Both matrices are `axis_b.len() x axis_a.len()`: rows follow `axis_b`,
/// columns follow `axis_a` (meshgrid convention).
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSurface {
    pub axis_a: AxisRange,
    pub axis_b: AxisRange,
    pub call_prices: DMatrix<f64>,
    pub put_prices: DMatrix<f64>,
}

impl PriceSurface {
    /// `(rows, cols)` of both price matrices.
    pub fn shape(&self) -> (usize, usize) {
        self.call_prices.shape()
    }

    pub fn prices(&self, option_type: OptionType) -> &DMatrix<f64> {
        match option_type {
            OptionType::Call => &self.call_prices,
            OptionType::Put => &self.put_prices,
        }
    }

    /// Price at `(axis_b[row], axis_a[col])`, `None` out of bounds.
    pub fn get(&self, option_type: OptionType, row: usize, col: usize) -> Option<f64> {
        self.prices(option_type).get((row, col)).copied()
    }

    /// Call P&L for every cell against one cost basis.
    pub fn call_pnl(&self, purchase_price: f64) -> DMatrix<f64> {
        self.call_prices.add_scalar(-purchase_price)
    }

    /// Put P&L for every cell against one cost basis.
    pub fn put_pnl(&self, purchase_price: f64) -> DMatrix<f64> {
        self.put_prices.add_scalar(-purchase_price)
    }
}

/// Smallest and largest entry, for colour scaling. `None` for an empty matrix.
pub fn value_range(matrix: &DMatrix<f64>) -> Option<(f64, f64)> {
    if matrix.is_empty() {
        return None;
    }
    let lo = matrix.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = matrix.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some((lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::axis::SurfaceAxis;

    fn sample_surface() -> PriceSurface {
        PriceSurface {
            axis_a: AxisRange::new(SurfaceAxis::Spot, vec![90.0, 100.0, 110.0]),
            axis_b: AxisRange::new(SurfaceAxis::Volatility, vec![0.1, 0.2]),
            call_prices: DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
            put_prices: DMatrix::from_row_slice(2, 3, &[6.0, 5.0, 4.0, 3.0, 2.0, 1.0]),
        }
    }

    #[test]
    fn test_shape_and_lookup() {
        let surface = sample_surface();
        assert_eq!(surface.shape(), (2, 3));
        assert_eq!(surface.get(OptionType::Call, 1, 0), Some(4.0));
        assert_eq!(surface.get(OptionType::Put, 0, 2), Some(4.0));
        assert_eq!(surface.get(OptionType::Call, 2, 0), None);
    }

    #[test]
    fn test_pnl_subtracts_cost_basis() {
        let surface = sample_surface();
        let pnl = surface.call_pnl(2.5);
        assert_eq!(pnl[(0, 0)], -1.5);
        assert_eq!(pnl[(1, 2)], 3.5);
        assert_eq!(surface.put_pnl(0.0), surface.put_prices);
    }

    #[test]
    fn test_value_range() {
        let surface = sample_surface();
        assert_eq!(value_range(&surface.call_prices), Some((1.0, 6.0)));
        assert_eq!(value_range(&DMatrix::<f64>::zeros(0, 0)), None);
    }
}
