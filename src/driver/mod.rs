//! Animation driver and periodic scheduler
//!
//! The evaluator in [`crate::physics`] is a pure function: it does not
//! manage time. This module supplies the collaborator that does — a small,
//! two-layer abstraction:
//!
//! 1. **[`AnimationDriver`]** — the simulated clock as an explicit state
//!    machine: advance one step, pause, resume, reset, swap parameters.
//!    No wall-clock dependency, so every behavior is unit-testable without
//!    sleeping.
//! 2. **[`TickScheduler`]** — the wall clock: a background thread that
//!    ticks a driver on a fixed period and hands each profile to a host
//!    callback.
//!
//! # Contract with the Evaluator
//!
//! The driver supplies monotonically-advancing time and owns horizon
//! wraparound and step size; the evaluator never sees either concern. The
//! end-of-horizon behavior is an explicit [`HorizonPolicy`]: wrap back to
//! zero and replay (the default, looping-animation behavior) or clamp at
//! the horizon and freeze at saturation.
//!
//! # Quick Start
//!
//! ```rust
//! use fick_rs::driver::{AnimationDriver, DriverConfig};
//! use fick_rs::physics::{EvaluatorConfig, SlabParameters};
//!
//! let mut driver = AnimationDriver::new(
//!     SlabParameters::default(),
//!     EvaluatorConfig::default(),
//!     DriverConfig::default(),
//! )?;
//!
//! // One manual tick: 5 simulated seconds, one fresh profile
//! let profile = driver.tick()?.expect("running driver yields a profile");
//! assert_eq!(profile.time(), 5.0);
//! # Ok::<(), fick_rs::error::FickError>(())
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================

mod animation;
mod scheduler;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use animation::{AnimationDriver, DriverConfig, HorizonPolicy};
pub use scheduler::TickScheduler;
