//! Slab Saturation: Profile Series
//!
//! Evaluates the drug concentration profile of a 200 µm tissue slab at
//! several simulated times, then writes a comparison plot and a CSV table.
//!
//! ```bash
//! cargo run --example saturation
//! ```

use std::error::Error;

use fick_rs::output::export::{export_profiles_csv, CsvConfig, CsvMetadata};
use fick_rs::output::visualization::{plot_profile_comparison, PlotConfig};
use fick_rs::physics::{evaluate_profile, EvaluatorConfig, SlabParameters};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== Fickian Diffusion: Slab Saturation ===\n");

    // Physical parameters
    let params = SlabParameters::new(
        1e-10,  // D  : diffusivity, m²/s
        200e-6, // L  : slab thickness, m
        1.0,    // C0 : surface concentration
    );

    // Evaluation parameters
    let config = EvaluatorConfig::default();
    let times = [60.0, 300.0, 900.0, 1800.0, 3600.0];

    println!("Physical Parameters:");
    println!("  Diffusivity D: {} m²/s", params.diffusivity);
    println!("  Thickness L: {} m", params.thickness);
    println!("  Surface concentration C0: {}", params.surface_concentration);
    println!("  Characteristic time L²/D: {} s", params.characteristic_time());
    println!("\nEvaluation:");
    println!("  Samples: {}", config.sample_count);
    println!("  Series terms: {}", config.series_terms);
    println!("  Times: {:?} s\n", times);

    // Evaluate the series
    let mut profiles = Vec::with_capacity(times.len());
    for &t in &times {
        let profile = evaluate_profile(&params, t, &config)?;
        println!(
            "  t = {:>6.0} s : surface {:.4}, mid-slab {:.4}, sealed face {:.4}",
            t,
            profile.surface().unwrap().concentration,
            profile.samples()[profile.len() / 2].concentration,
            profile.deepest().unwrap().concentration,
        );
        profiles.push(profile);
    }

    // Plot the overlay
    let plot_config = PlotConfig::profile("Slab Saturation");
    plot_profile_comparison(&profiles, &params, "saturation.png", Some(&plot_config))?;
    println!("\nPlot written to saturation.png");

    // Export the table
    let csv_config =
        CsvConfig::default().with_metadata(CsvMetadata::from_parameters(&params, &config));
    export_profiles_csv(&profiles, "saturation.csv", Some(&csv_config))?;
    println!("Data written to saturation.csv");

    Ok(())
}
