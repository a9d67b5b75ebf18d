//! Sensitivity Chart Example
//!
//! Sweeps each parameter across its range while holding the others fixed and
//! prints the curve as a text bar chart, the way the calculator renders one
//! chart per slider.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_sensitivity_chart
//! cargo run --example 02_sensitivity_chart -- calcium
//! ```

use lsi_core::{format_value, sample_all, sample_range, ChartSeries, Parameter, WaterParameters};

/// Bars span LSI -1.0 to 1.0, like the calculator's chart axis
const BAR_HALF_WIDTH: f64 = 20.0;

fn print_series(parameter: Parameter, series: &ChartSeries) {
    let config = parameter.config();
    println!("{} ({} points)", config.title, series.len());

    for sample in series {
        let clamped = sample.lsi.clamp(-1.0, 1.0);
        let cells = (clamped.abs() * BAR_HALF_WIDTH).round() as usize;
        let pad = BAR_HALF_WIDTH as usize;
        let bar = if clamped < 0.0 {
            format!("{:>pad$}|", "#".repeat(cells))
        } else {
            format!("{:>pad$}|{}", "", "#".repeat(cells))
        };
        println!("  {:>10} {:>6.2} {}", format_value(parameter, sample.value).to_string(), sample.lsi, bar);
    }
    println!();
}

fn main() {
    let params = WaterParameters::default();

    match std::env::args().nth(1) {
        Some(name) => {
            let series = sample_range(&name, &params);
            match name.parse::<Parameter>() {
                Ok(parameter) => print_series(parameter, &series),
                Err(e) => println!("Nothing to chart for '{name}': {e}"),
            }
        }
        None => {
            for (parameter, series) in sample_all(&params) {
                print_series(parameter, &series);
            }
        }
    }
}
