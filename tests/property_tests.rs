//! Property-based tests using proptest.
//!
//! These check the no-arbitrage and sign invariants of the closed form over
//! random valid inputs, and that the grid evaluator agrees with the scalar
//! model cell by cell.

use bsm_surface::{compute_grid, BlackScholes};
use proptest::prelude::*;

// --- Property 1: put-call parity ---

proptest! {
    /// C - P = S - K·e^(-rT) for every valid parameter set.
    #[test]
    fn put_call_parity_holds(
        t in 0.01_f64..5.0,
        k in 10.0_f64..500.0,
        s in 10.0_f64..500.0,
        sigma in 0.01_f64..1.5,
        r in -0.05_f64..0.15,
    ) {
        let bs = BlackScholes::new(t, k, s, sigma, r).unwrap();
        let lhs = bs.call_price() - bs.put_price();
        let rhs = s - k * (-r * t).exp();
        let scale = s.max(k).max(1.0);
        prop_assert!(
            (lhs - rhs).abs() <= 1e-9 * scale,
            "parity violated: C-P={} vs S-Ke^-rT={}", lhs, rhs
        );
    }
}

// --- Property 2: delta bounds, gamma and vega signs ---

proptest! {
    /// Call delta in [0, 1], put delta in [-1, 0], gamma and vega non-negative.
    ///
    /// Bounds are closed because Φ(d1) rounds to exactly 0 or 1 far from the
    /// money in double precision.
    #[test]
    fn greeks_respect_sign_bounds(
        t in 0.01_f64..5.0,
        k in 10.0_f64..500.0,
        s in 10.0_f64..500.0,
        sigma in 0.01_f64..1.5,
        r in -0.05_f64..0.15,
    ) {
        let bs = BlackScholes::new(t, k, s, sigma, r).unwrap();
        prop_assert!((0.0..=1.0).contains(&bs.call_delta()));
        prop_assert!((-1.0..=0.0).contains(&bs.put_delta()));
        prop_assert!(bs.gamma() >= 0.0);
        prop_assert!(bs.vega() >= 0.0);
    }
}

proptest! {
    /// Strict delta bounds hold for contracts near the money.
    #[test]
    fn delta_strictly_inside_bounds_near_money(
        t in 0.05_f64..2.0,
        s in 80.0_f64..120.0,
        sigma in 0.1_f64..0.8,
        r in 0.0_f64..0.1,
    ) {
        let bs = BlackScholes::new(t, 100.0, s, sigma, r).unwrap();
        prop_assert!(bs.call_delta() > 0.0 && bs.call_delta() < 1.0);
        prop_assert!(bs.put_delta() > -1.0 && bs.put_delta() < 0.0);
    }
}

// --- Property 3: grid/scalar equivalence ---

proptest! {
    /// Every cell of a random spot x vol grid equals the scalar model.
    #[test]
    fn grid_cells_equal_scalar_prices(
        spots in prop::collection::vec(20.0_f64..300.0, 1..6),
        vols in prop::collection::vec(0.02_f64..1.2, 1..6),
        t in 0.05_f64..3.0,
        k in 50.0_f64..200.0,
        r in -0.02_f64..0.1,
    ) {
        let (calls, puts) = compute_grid(&spots, &vols, t, k, r).unwrap();
        prop_assert_eq!(calls.shape(), (vols.len(), spots.len()));
        for (i, &vol) in vols.iter().enumerate() {
            for (j, &spot) in spots.iter().enumerate() {
                let bs = BlackScholes::new(t, k, spot, vol, r).unwrap();
                prop_assert!((calls[(i, j)] - bs.call_price()).abs() <= 1e-9);
                prop_assert!((puts[(i, j)] - bs.put_price()).abs() <= 1e-9);
            }
        }
    }
}

// --- Property 4: zero-rate symmetry ---

proptest! {
    /// With r = 0 parity collapses to C - P = S - K.
    #[test]
    fn zero_rate_parity(
        t in 0.01_f64..5.0,
        k in 10.0_f64..500.0,
        s in 10.0_f64..500.0,
        sigma in 0.01_f64..1.5,
    ) {
        let bs = BlackScholes::new(t, k, s, sigma, 0.0).unwrap();
        let scale = s.max(k);
        prop_assert!(((bs.call_price() - bs.put_price()) - (s - k)).abs() <= 1e-9 * scale);
    }
}
