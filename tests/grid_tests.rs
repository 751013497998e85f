
use bsm_surface::{
    compute_grid, default_configs, evaluate_surface, linspace, value_range, AxisRange,
    BlackScholes, ContractParams, GridEvaluator, GridRequest, OptionType, PricingError,
    SurfaceAxis,
};
use test_utils::{assert_close, sample_cells, seeded_rng};

/// Random cells of a dense spot x vol grid must match the scalar model.
#[test]
fn test_grid_matches_scalar_model_on_sampled_cells() {
    let spots = linspace(60.0, 140.0, 41);
    let vols = linspace(0.05, 0.95, 31);
    let (t, k, r) = (0.8, 105.0, 0.035);

    let (calls, puts) = compute_grid(&spots, &vols, t, k, r).unwrap();
    assert_eq!(calls.shape(), (31, 41));

    let mut rng = seeded_rng();
    for (i, j) in sample_cells(&mut rng, vols.len(), spots.len(), 200) {
        let bs = BlackScholes::new(t, k, spots[j], vols[i], r).unwrap();
        assert_close(calls[(i, j)], bs.call_price(), 1e-9, "call cell");
        assert_close(puts[(i, j)], bs.put_price(), 1e-9, "put cell");
    }
}

#[test]
fn test_rows_vary_second_axis() {
    let spots = [90.0, 110.0];
    let vols = [0.1, 0.2, 0.4];
    let (calls, _) = compute_grid(&spots, &vols, 1.0, 100.0, 0.05).unwrap();

    // Vega is positive: moving down a column (higher vol) raises the price
    for j in 0..spots.len() {
        assert!(calls[(0, j)] < calls[(1, j)]);
        assert!(calls[(1, j)] < calls[(2, j)]);
    }
    let corner = BlackScholes::new(1.0, 100.0, 110.0, 0.1, 0.05).unwrap();
    assert_eq!(calls[(0, 1)], corner.call_price());
}

#[test]
fn test_parity_holds_across_surface() {
    let request = GridRequest::spot_vol(
        linspace(50.0, 150.0, 11),
        linspace(0.1, 0.6, 6),
        2.0,
        100.0,
        0.04,
    );
    let surface = GridEvaluator::new(request).unwrap().evaluate().unwrap();
    let discounted_strike = 100.0 * (-0.04_f64 * 2.0).exp();

    for (j, &spot) in surface.axis_a.values.iter().enumerate() {
        for i in 0..surface.axis_b.len() {
            let diff = surface.call_prices[(i, j)] - surface.put_prices[(i, j)];
            assert_close(diff, spot - discounted_strike, 1e-9 * spot.max(1.0), "parity");
        }
    }
}

/// Strike along columns and spot along rows, as in the P&L heatmap.
#[test]
fn test_strike_by_spot_surface() {
    let base = ContractParams::new(0.5, 100.0, 100.0, 0.25, 0.01);
    let strikes = vec![80.0, 100.0, 120.0, 140.0];
    let spots = vec![90.0, 100.0, 110.0];
    let request = GridRequest::new(
        AxisRange::new(SurfaceAxis::Strike, strikes.clone()),
        AxisRange::new(SurfaceAxis::Spot, spots.clone()),
        base,
    );
    let surface = GridEvaluator::new(request).unwrap().evaluate().unwrap();
    assert_eq!(surface.shape(), (3, 4));

    for (i, &spot) in spots.iter().enumerate() {
        for (j, &strike) in strikes.iter().enumerate() {
            let bs = BlackScholes::from_params(
                base.with_axis(SurfaceAxis::Strike, strike)
                    .with_axis(SurfaceAxis::Spot, spot),
            )
            .unwrap();
            assert_close(surface.get(OptionType::Call, i, j).unwrap(), bs.call_price(), 1e-9, "call");
            assert_close(surface.get(OptionType::Put, i, j).unwrap(), bs.put_price(), 1e-9, "put");
        }
    }

    // Calls lose value as strike rises
    for i in 0..3 {
        for j in 1..4 {
            assert!(surface.call_prices[(i, j)] < surface.call_prices[(i, j - 1)]);
        }
    }
}

#[test]
fn test_maturity_and_rate_axes() {
    let request = GridRequest::new(
        AxisRange::linspace(SurfaceAxis::TimeToMaturity, 0.25, 3.0, 6),
        AxisRange::new(SurfaceAxis::InterestRate, vec![-0.01, 0.0, 0.02, 0.08]),
        ContractParams::default(),
    );
    let surface = GridEvaluator::new(request).unwrap().evaluate().unwrap();
    assert_eq!(surface.shape(), (4, 6));

    let t = surface.axis_a.values[3];
    let bs = BlackScholes::new(t, 100.0, 100.0, 0.2, 0.08).unwrap();
    assert_close(surface.put_prices[(3, 3)], bs.put_price(), 1e-9, "put cell");
}

#[test]
fn test_pnl_surface_from_preset() {
    let config = default_configs::strike_spot_pnl();
    let surface = evaluate_surface(&config).unwrap();
    assert_eq!(surface.shape(), (100, 100));

    let call_pnl = surface.call_pnl(config.contract.purchase_price_call);
    let put_pnl = surface.put_pnl(config.contract.purchase_price_put);
    assert_close(call_pnl[(40, 70)], surface.call_prices[(40, 70)] - 5.0, 0.0, "call pnl");

    // Deep in-the-money calls (low strike, high spot) are profitable; far
    // out-of-the-money ones lose at most the cost basis
    let (lo, hi) = value_range(&call_pnl).unwrap();
    assert!(hi > 90.0);
    assert!(lo >= -5.0);
    let (put_lo, _) = value_range(&put_pnl).unwrap();
    assert!(put_lo >= -5.0);
}

#[test]
fn test_rejects_bad_axes() {
    assert!(matches!(
        compute_grid(&[], &[0.2], 1.0, 100.0, 0.05),
        Err(PricingError::InvalidGrid { .. })
    ));
    assert!(matches!(
        compute_grid(&[100.0, -5.0], &[0.2], 1.0, 100.0, 0.05),
        Err(PricingError::InvalidParameter { name: "spot", .. })
    ));
    assert!(matches!(
        compute_grid(&[100.0], &[0.2, 0.0], 1.0, 100.0, 0.05),
        Err(PricingError::InvalidParameter { name: "volatility", .. })
    ));
    assert!(matches!(
        compute_grid(&[100.0], &[0.2], 1.0, f64::NAN, 0.05),
        Err(PricingError::InvalidParameter { name: "strike", .. })
    ));
}

/// Typed lookups on a surface agree with the model's typed price accessor.
#[test]
fn test_surface_lookup_matches_typed_price() {
    let request = GridRequest::spot_vol(vec![95.0, 105.0], vec![0.15, 0.3], 0.5, 100.0, 0.01);
    let surface = GridEvaluator::new(request).unwrap().evaluate().unwrap();
    for side in [OptionType::Call, OptionType::Put] {
        let bs = BlackScholes::new(0.5, 100.0, 105.0, 0.3, 0.01).unwrap();
        assert_close(surface.get(side, 1, 1).unwrap(), bs.price(side), 1e-9, "typed price");
    }
}
