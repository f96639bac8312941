//! Output module for computed profiles
//!
//! This module provides tools to output profiles in various formats:
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots and graphics
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── profile.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ## Visualization
//!
//! ```rust,ignore
//! use fick_rs::output::visualization::{plot_profile, PlotConfig};
//!
//! // Generate PNG plot
//! plot_profile(&profile, &params, "output.png", None)?;
//! ```
//!
//! ## CSV Export
//!
//! ```rust,ignore
//! use fick_rs::output::export::{export_profile_csv, CsvConfig};
//!
//! // Export to CSV
//! export_profile_csv(&profile, "data.csv", None)?;
//! ```
//!
//! # Design Philosophy
//!
//! The output module separates concerns:
//! - **Visualization**: For human interpretation (plots, graphs)
//! - **Export**: For programmatic analysis (CSV, JSON)
//!
//! Both sub-modules consume [`ConcentrationProfile`](crate::physics::ConcentrationProfile)
//! values directly and never feed back into the evaluator — output is a
//! one-way sink.
//!
//! # Version History
//!
//! - **v0.1.0**: Static plots (PNG/SVG) and CSV export
//! - **v0.2.0+**: Animated GIF output, JSON export (planned)
//!
//! # Examples
//!
//! See the demo binaries for complete workflows:
//! - `demos/saturation.rs` — profile series, plot + CSV
//! - `demos/animation.rs` — scheduler-driven live recomputation

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use visualization::{plot_profile, plot_profile_comparison, PlotConfig};

pub use export::{export_profile_csv, export_profiles_csv, CsvConfig, CsvExporter, Exporter};
