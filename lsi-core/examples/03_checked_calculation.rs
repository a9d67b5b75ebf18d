//! Checked Calculation Example
//!
//! Shows the two ways of handling invalid chemistry: the default NaN
//! propagation, and the tagged-result form with range validation in front.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_checked_calculation
//! ```

use lsi_core::{
    calculate_lsi, calculate_lsi_checked, LsiError, Parameter, ParameterValidator, Validator,
    WaterParameters,
};

fn main() {
    let validator = ParameterValidator::pool();

    let samples = [
        ("balanced pool", WaterParameters::new(7.5, 84.0, 300.0, 100.0, 40.0, 1000.0)),
        ("no calcium", WaterParameters::default().with(Parameter::Calcium, 0.0)),
        ("stabilizer overload", WaterParameters::default().with(Parameter::Alkalinity, 20.0)),
        ("sensor glitch", WaterParameters::default().with(Parameter::Ph, f64::NAN)),
        ("spa water in pool", WaterParameters::default()),
    ];

    for (name, params) in samples {
        println!("{name}:");
        println!("  raw LSI:     {}", calculate_lsi(&params));

        match calculate_lsi_checked(&params) {
            Ok(lsi) => println!("  checked:     {lsi:.2}"),
            Err(LsiError::InvalidDomain { reason }) => println!("  checked:     invalid input ({reason})"),
            Err(e) => println!("  checked:     {e}"),
        }

        match validator.validate(&params) {
            Ok(()) => println!("  pool ranges: ok"),
            Err(e) => println!("  pool ranges: {e}"),
        }
        println!();
    }
}
