//! Basic LSI Calculation Example
//!
//! Computes the saturation index of a single water sample and shows every
//! intermediate term of the saturation pH.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_lsi
//! ```

use lsi_core::{format_value, BalanceStatus, LsiBreakdown, Parameter, WaterParameters};

fn main() {
    println!("LSI Calculator Basic Example");
    println!("============================\n");

    let params = WaterParameters::new(7.5, 80.0, 250.0, 120.0, 30.0, 300.0);

    println!("Water sample:");
    for parameter in Parameter::ALL {
        let config = parameter.config();
        println!("  {:<24} {}", config.title, format_value(parameter, params.get(parameter)));
    }
    println!();

    let b = LsiBreakdown::compute(&params);
    println!("Saturation pH terms:");
    println!("  Temperature factor:     {:>8.4}", b.temperature_factor);
    println!("  Calcium factor:         {:>8.4}", b.calcium_factor);
    println!("  Carbonate alkalinity:   {:>8.2} ppm", b.carbonate_alkalinity);
    println!("  Alkalinity factor:      {:>8.4}", b.alkalinity_factor);
    println!("  TDS factor:             {:>8.4}", b.tds_factor);
    println!("  Saturation pH (pHs):    {:>8.4}", b.saturation_ph);
    println!();

    println!("Langelier Saturation Index: {:.2}", b.lsi);
    match BalanceStatus::classify(b.lsi) {
        Some(status) => println!("{status}"),
        None => println!("Invalid input"),
    }
}
