// demos/pricing_demo.rs

//! Console rendition of the pricing dashboard
//!
//! This example shows how to:
//! 1. Load contract inputs from a TOML config (or use the dashboard preset)
//! 2. Price both sides and read P&L against the purchase prices
//! 3. Print the Greeks for each side
//! 4. Evaluate a small spot x volatility price grid
//!
//! Usage:
//!     cargo run --example pricing_demo -- [config.toml]

use anyhow::Result;
use bsm_surface::{default_configs, evaluate_surface, OptionPricer, OptionType, SurfaceConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SurfaceConfig::from_file(&path)?,
        None => default_configs::dashboard(),
    };
    let contract = config.contract;

    println!("Black-Scholes Option Pricing");
    println!("============================");
    println!("Current price of asset: ${:.2}", contract.spot);
    println!("Strike price:           ${:.2}", contract.strike);
    println!("Time to maturity:       {} years", contract.time_to_maturity);
    // Percent display is a presentation concern; the model works in decimals
    println!("Volatility:             {:.2}%", contract.volatility * 100.0);
    println!("Interest rate:          {:.2}%", contract.interest_rate * 100.0);

    let bs = config.model()?;
    let summary = bs.summary();

    println!("\nOption Prices");
    println!("  Call: ${:.2}", summary.call_price);
    println!("  Put:  ${:.2}", summary.put_price);

    println!("\nProfit and Loss");
    println!(
        "  Call: ${:.2} (paid ${:.2})",
        summary.call_pnl, contract.purchase_price_call
    );
    println!(
        "  Put:  ${:.2} (paid ${:.2})",
        summary.put_pnl, contract.purchase_price_put
    );

    println!("\nGreeks (Vega per unit σ, Theta per year, Rho per unit r)");
    println!(
        "{:<6} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Side", "Delta", "Gamma", "Vega", "Theta", "Rho"
    );
    println!("{}", "-".repeat(62));
    for side in [OptionType::Call, OptionType::Put] {
        let g = bs.greeks(side);
        println!(
            "{:<6} {:>10.4} {:>10.5} {:>10.4} {:>10.4} {:>10.4}",
            side, g.delta, g.gamma, g.vega, g.theta, g.rho
        );
    }

    let surface = evaluate_surface(&config)?;
    let (rows, cols) = surface.shape();
    tracing::info!(rows, cols, "price surface evaluated");

    println!(
        "\nCall prices: {} (rows) x {} (columns)",
        surface.axis_b.axis, surface.axis_a.axis
    );
    print!("{:>10}", "");
    for a in &surface.axis_a.values {
        print!(" {:>8.2}", a);
    }
    println!();
    for (i, b) in surface.axis_b.values.iter().enumerate() {
        print!("{:>10.4}", b);
        for j in 0..cols {
            print!(" {:>8.2}", surface.call_prices[(i, j)]);
        }
        println!();
    }

    Ok(())
}
