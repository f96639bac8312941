//! Spatial concentration profile plotting
//!
//! This module renders [`ConcentrationProfile`] values as depth/
//! concentration charts: a single snapshot, or several simulated times
//! overlaid to show the slab saturating toward C0.
//!
//! Depths are drawn in micrometres — slabs of biological interest are a
//! few hundred µm thick, and metre-valued tick labels would be unreadable.
//! The y-range is anchored to the surface concentration C0, which is the
//! uniform limit of every profile, so the saturation animation keeps a
//! stable frame.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fick_rs::output::visualization::{plot_profile, plot_profile_comparison};
//!
//! let profile = evaluate_profile(&params, 600.0, &config)?;
//! plot_profile(&profile, &params, "profile.png", None)?;
//!
//! // Saturation series
//! plot_profile_comparison(&profiles, &params, "saturation.svg", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use crate::physics::{ConcentrationProfile, SlabParameters};

use super::config::{PlotConfig, NO_TITLE};

/// Metres to micrometres for axis display
const METERS_TO_MICROMETERS: f64 = 1e6;

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Y-axis upper bound: C0 with headroom, falling back to the data maximum
/// when C0 = 0 (degenerate all-zero profile)
fn vertical_range(params: &SlabParameters, profiles: &[&ConcentrationProfile]) -> f64 {
    let c0 = params.surface_concentration;
    if c0 > 0.0 {
        return c0 * 1.1;
    }

    profiles
        .iter()
        .flat_map(|p| p.samples().iter())
        .map(|s| s.concentration)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1e-10)
}

// =================================================================================================
// Public API
// =================================================================================================

/// Plot a single concentration profile (concentration vs depth)
///
/// # Arguments
///
/// * `profile`     — Profile to draw
/// * `params`      — Slab parameters (for the depth span and the C0 y-range)
/// * `output_path` — Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      — Optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` for an empty profile or when the backend cannot write to
/// `output_path`.
///
/// # Example
///
/// ```rust,ignore
/// use fick_rs::output::visualization::plot_profile;
///
/// let profile = evaluate_profile(&params, 600.0, &eval_config)?;
/// plot_profile(&profile, &params, "t600.png", None)?;
/// ```
pub fn plot_profile(
    profile: &ConcentrationProfile,
    params: &SlabParameters,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if profile.is_empty() {
        return Err("Empty profile: nothing to plot".into());
    }

    let default_config = PlotConfig::profile(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let max_depth = params.thickness * METERS_TO_MICROMETERS;
    let max_conc = vertical_range(params, &[profile]);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_profile_impl(backend, profile, config, max_depth, max_conc)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_profile_impl(backend, profile, config, max_depth, max_conc)
        }
    }
}

/// Implementation for single-profile plotting with a concrete backend
fn plot_profile_impl<DB: DrawingBackend>(
    backend: DB,
    profile: &ConcentrationProfile,
    config: &PlotConfig,
    max_depth: f64,
    max_conc: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_depth, 0.0..max_conc)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;
    }

    chart
        .draw_series(LineSeries::new(
            profile
                .samples()
                .iter()
                .map(|s| (s.depth * METERS_TO_MICROMETERS, s.concentration)),
            ShapeStyle::from(&config.line_color).stroke_width(config.line_width),
        ))?
        .label(format!("t = {} s", profile.time()))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &config.line_color));

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

/// Plot several profiles on the same axes (saturation series)
///
/// Overlays the profiles with one color per simulated time, legend entries
/// labelled `t = … s`. All profiles should come from the same slab so the
/// shared depth axis is meaningful.
///
/// # Arguments
///
/// * `profiles`    — Profiles to overlay, typically in increasing-time order
/// * `params`      — Slab parameters (depth span and C0 y-range)
/// * `output_path` — Output file path (`.png` or `.svg`)
/// * `config`      — Optional plot configuration;
///                   use `config.series_colors` to override the palette
///
/// # Errors
///
/// Returns `Err` when `profiles` is empty or the backend fails.
///
/// # Example
///
/// ```rust,ignore
/// use fick_rs::output::visualization::plot_profile_comparison;
///
/// let times = [60.0, 600.0, 1800.0, 3600.0];
/// let profiles: Vec<_> = times
///     .iter()
///     .map(|&t| evaluate_profile(&params, t, &eval_config).unwrap())
///     .collect();
///
/// plot_profile_comparison(&profiles, &params, "saturation.png", None)?;
/// ```
pub fn plot_profile_comparison(
    profiles: &[ConcentrationProfile],
    params: &SlabParameters,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if profiles.is_empty() {
        return Err("No profiles provided".into());
    }

    let default_config = PlotConfig::profile(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let max_depth = params.thickness * METERS_TO_MICROMETERS;
    let refs: Vec<&ConcentrationProfile> = profiles.iter().collect();
    let max_conc = vertical_range(params, &refs);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, profiles, config, max_depth, max_conc)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, profiles, config, max_depth, max_conc)
        }
    }
}

/// Implementation for comparison plotting with a concrete backend
fn plot_comparison_impl<DB: DrawingBackend>(
    backend: DB,
    profiles: &[ConcentrationProfile],
    config: &PlotConfig,
    max_depth: f64,
    max_conc: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_depth, 0.0..max_conc)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;
    }

    for (i, profile) in profiles.iter().enumerate() {
        let color = config.get_series_color(i);

        chart
            .draw_series(LineSeries::new(
                profile
                    .samples()
                    .iter()
                    .map(|s| (s.depth * METERS_TO_MICROMETERS, s.concentration)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(format!("t = {} s", profile.time()))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
