// Example: price_heatmap.rs
// Evaluates a price surface and renders call/put price and P&L heatmaps as
// SVG, plus a CSV dump of both price matrices.
//
// Usage:
//     cargo run --example price_heatmap -- [config.toml | pnl]
//
// Without arguments the dashboard preset (spot x volatility) is used; `pnl`
// selects the strike x spot P&L preset. Output files are written to the
// working directory.

use std::error::Error;

use bsm_surface::{default_configs, evaluate_surface, value_range, PriceSurface, SurfaceConfig};
use nalgebra::DMatrix;
use plotters::prelude::*;

// Diverging red -> yellow -> green palette, low values red
const LOW: (f64, f64, f64) = (215.0, 48.0, 39.0);
const MID: (f64, f64, f64) = (255.0, 255.0, 191.0);
const HIGH: (f64, f64, f64) = (26.0, 152.0, 80.0);

fn heat_color(value: f64, lo: f64, hi: f64) -> RGBColor {
    let t = if hi > lo { (value - lo) / (hi - lo) } else { 0.5 };
    let (from, to, u) = if t < 0.5 {
        (LOW, MID, t * 2.0)
    } else {
        (MID, HIGH, (t - 0.5) * 2.0)
    };
    let lerp = |a: f64, b: f64| (a + (b - a) * u).round().clamp(0.0, 255.0) as u8;
    RGBColor(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}

fn axis_label(values: &[f64], coord: f64) -> String {
    let idx = (coord.floor().max(0.0) as usize).min(values.len().saturating_sub(1));
    values.get(idx).map(|v| format!("{:.2}", v)).unwrap_or_default()
}

fn draw_heatmap(
    path: &str,
    title: &str,
    surface: &PriceSurface,
    values: &DMatrix<f64>,
) -> Result<(), Box<dyn Error>> {
    let (rows, cols) = values.shape();
    let (lo, hi) = value_range(values).ok_or("empty surface")?;

    let root = SVGBackend::new(path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!("{} | range [{:.2}, {:.2}]", title, lo, hi),
            ("sans-serif", 26),
        )
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..cols as f64, 0f64..rows as f64)?;

    let a_values = &surface.axis_a.values;
    let b_values = &surface.axis_b.values;
    let x_fmt = |x: &f64| axis_label(a_values, *x);
    let y_fmt = |y: &f64| axis_label(b_values, *y);
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(surface.axis_a.axis.name())
        .y_desc(surface.axis_b.axis.name())
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .draw()?;

    chart.draw_series(
        (0..rows)
            .flat_map(|i| (0..cols).map(move |j| (i, j)))
            .map(|(i, j)| {
                let (x, y) = (j as f64, i as f64);
                Rectangle::new(
                    [(x, y), (x + 1.0, y + 1.0)],
                    heat_color(values[(i, j)], lo, hi).filled(),
                )
            }),
    )?;

    root.present()?;
    println!("Heatmap saved to {}", path);
    Ok(())
}

fn write_csv(path: &str, surface: &PriceSurface) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "option_type",
        surface.axis_b.axis.name(),
        surface.axis_a.axis.name(),
        "price",
    ])?;
    for (label, matrix) in [("call", &surface.call_prices), ("put", &surface.put_prices)] {
        for (i, b) in surface.axis_b.values.iter().enumerate() {
            for (j, a) in surface.axis_a.values.iter().enumerate() {
                writer.write_record(&[
                    label.to_string(),
                    b.to_string(),
                    a.to_string(),
                    matrix[(i, j)].to_string(),
                ])?;
            }
        }
    }
    writer.flush()?;
    println!("Surface written to {}", path);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = match std::env::args().nth(1).as_deref() {
        None => default_configs::dashboard(),
        Some("pnl") => default_configs::strike_spot_pnl(),
        Some(path) => SurfaceConfig::from_file(path)?,
    };

    let surface = evaluate_surface(&config)?;
    let (rows, cols) = surface.shape();
    tracing::info!(
        rows,
        cols,
        axis_a = %surface.axis_a.axis,
        axis_b = %surface.axis_b.axis,
        "surface evaluated"
    );

    draw_heatmap("call_prices.svg", "Call Price", &surface, &surface.call_prices)?;
    draw_heatmap("put_prices.svg", "Put Price", &surface, &surface.put_prices)?;

    let contract = config.contract;
    draw_heatmap(
        "call_pnl.svg",
        &format!("Call P&L (paid {:.2})", contract.purchase_price_call),
        &surface,
        &surface.call_pnl(contract.purchase_price_call),
    )?;
    draw_heatmap(
        "put_pnl.svg",
        &format!("Put P&L (paid {:.2})", contract.purchase_price_put),
        &surface,
        &surface.put_pnl(contract.purchase_price_put),
    )?;

    write_csv("price_surface.csv", &surface)?;
    Ok(())
}
