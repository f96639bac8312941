//! fick-rs: 1D Fickian Diffusion Simulation
//!
//! Computes time-evolving drug-concentration profiles inside a finite slab
//! of tissue, governed by one-dimensional Fickian diffusion with a fixed
//! surface concentration. Built with Rust for performance and safety.
//!
//! # Architecture
//!
//! fick-rs is built on two core principles:
//!
//! 1. **A pure computational core**
//!    - The profile evaluator is a closed-form truncated-series solution
//!    - No internal state, no I/O, deterministic, thread-safe
//!    - Validated inputs, typed errors, never NaN/Inf in-domain
//!
//! 2. **Everything else orbits the core**
//!    - The animation driver advances simulated time and re-invokes the
//!      evaluator; it never reaches inside it
//!    - Output (CSV, plots) consumes finished profiles
//!
//! # Quick Start
//!
//! ```rust
//! use fick_rs::physics::{evaluate_profile, EvaluatorConfig, SlabParameters};
//!
//! # fn main() -> Result<(), fick_rs::error::FickError> {
//! // 1. Describe the slab: D, L, C0
//! let params = SlabParameters::new(1e-10, 200e-6, 1.0);
//!
//! // 2. Pick resolution and truncation
//! let config = EvaluatorConfig::default();   // 81 samples, 20 terms
//!
//! // 3. Evaluate at a simulated time
//! let profile = evaluate_profile(&params, 600.0, &config)?;
//!
//! // 4. Access results
//! println!("Profile at t = {} s", profile.time());
//! for sample in profile.samples().iter().take(3) {
//!     println!("  {:>6.1} µm : {:.4}", sample.depth * 1e6, sample.concentration);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Animated Recomputation
//!
//! ```rust,no_run
//! use fick_rs::driver::{AnimationDriver, DriverConfig, TickScheduler};
//! use fick_rs::physics::{EvaluatorConfig, SlabParameters};
//!
//! let driver = AnimationDriver::new(
//!     SlabParameters::default(),
//!     EvaluatorConfig::default(),
//!     DriverConfig::default(),   // 5 simulated s per 100 ms tick, 3600 s loop
//! ).unwrap();
//!
//! let scheduler = TickScheduler::spawn(driver, |profile| {
//!     // redraw a chart, push to a websocket, ...
//!     println!("t = {:>6.0} s  deepest = {:.4}",
//!         profile.time(),
//!         profile.deepest().unwrap().concentration);
//! });
//!
//! // ... later
//! scheduler.stop();
//! ```
//!
//! # Modules
//!
//! - [`physics`]: The profile evaluator (parameters, series, profiles)
//! - [`driver`]: Animation driver and periodic scheduler
//! - [`output`]: Profile visualization and export (CSV, PNG/SVG)
//! - [`error`]: Typed error taxonomy

// Core modules
pub mod error;
pub mod physics;

pub mod driver;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use fick_rs::prelude::*;
    //! ```
    pub use crate::driver::{AnimationDriver, DriverConfig, HorizonPolicy, TickScheduler};
    pub use crate::error::{FickError, FickResult};
    pub use crate::physics::{
        evaluate_profile, ConcentrationProfile, EvaluatorConfig, ProfileEvaluator, ProfileSample,
        SlabParameters,
    };
}
