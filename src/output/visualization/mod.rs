//! Visualization module for concentration profiles
//!
//! This module renders profiles using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **profile**: Spatial plots (concentration vs depth, single or
//!   multi-time)
//!
//! # Quick Start
//!
//! ## Single Profile
//!
//! ```rust,ignore
//! use fick_rs::output::visualization::{plot_profile, PlotConfig};
//!
//! let profile = evaluate_profile(&params, 600.0, &eval_config)?;
//!
//! // Plot with default config
//! plot_profile(&profile, &params, "profile.png", None)?;
//!
//! // Or with a custom config
//! let mut config = PlotConfig::profile("Skin Penetration");
//! config.line_color = plotters::prelude::BLUE;
//! plot_profile(&profile, &params, "skin.png", Some(&config))?;
//! ```
//!
//! ## Saturation Series (Several Times Overlaid)
//!
//! ```rust,ignore
//! use fick_rs::output::visualization::plot_profile_comparison;
//!
//! plot_profile_comparison(&profiles, &params, "saturation.png", None)?;
//! ```
//!
//! # When to Use Which Function
//!
//! | Use Case | Function |
//! |----------|----------|
//! | One profile at one time | `plot_profile` |
//! | Saturation over several times | `plot_profile_comparison` |

pub mod config;
pub mod profile;

pub use config::{IntoOptionalTitle, PlotConfig, NO_TITLE};

pub use profile::{plot_profile, plot_profile_comparison};
