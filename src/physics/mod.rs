//! Diffusion physics: parameters, closed-form series, profile evaluation
//!
//! This module is the computational core of the crate. It turns three
//! physical parameters — diffusion coefficient D, slab thickness L, surface
//! concentration C0 — plus a simulation time t into a spatial concentration
//! profile, using the truncated-series solution of the 1D diffusion
//! equation with a fixed surface concentration.
//!
//! # Core Concepts
//!
//! - **[`SlabParameters`]**: the physical inputs (D, L, C0) with domain
//!   validation
//! - **[`EvaluatorConfig`]**: algorithm-quality knobs (sample count, series
//!   terms)
//! - **[`evaluate_profile`]**: the one-shot pure evaluation
//! - **[`ProfileEvaluator`]**: same result, with the time-independent mode
//!   tables precomputed for tick-rate re-evaluation
//! - **[`ConcentrationProfile`]**: the ordered (depth, concentration) output
//!
//! # Architecture (WHAT vs HOW)
//!
//! The physics is separated from everything that schedules or displays it:
//!
//! 1. **Parameters** — WHAT slab to evaluate (physical inputs)
//! 2. **Evaluator** — HOW the closed form is sampled and truncated
//! 3. **Driver** ([`crate::driver`]) — WHEN to re-evaluate (out of the core)
//!
//! The evaluator is pure: no internal state, no I/O, deterministic, and
//! safe to call concurrently from multiple threads. A paused or restarted
//! driver therefore never affects the correctness of the next evaluation.
//!
//! # Quick Start
//!
//! ```rust
//! use fick_rs::physics::{evaluate_profile, EvaluatorConfig, SlabParameters};
//!
//! // 1. Describe the slab (WHAT)
//! let params = SlabParameters::new(1e-10, 200e-6, 1.0);
//!
//! // 2. Pick resolution and truncation (HOW)
//! let config = EvaluatorConfig::default();
//!
//! // 3. Evaluate at a simulated time
//! let profile = evaluate_profile(&params, 600.0, &config)?;
//!
//! println!("surface: {:?}", profile.surface());
//! println!("deepest: {:?}", profile.deepest());
//! # Ok::<(), fick_rs::error::FickError>(())
//! ```
//!
//! # Error Handling
//!
//! All evaluation entry points return [`FickResult`](crate::error::FickResult)
//! and fail before computing anything:
//!
//! - Physical inputs outside their domain → `InvalidParameter`, naming the
//!   offending field
//! - Knobs out of range → `InvalidConfiguration`
//!
//! The evaluator never silently produces NaN or infinity for in-domain
//! inputs: every exponent in the series is non-positive and every
//! trigonometric argument is bounded.

// =================================================================================================
// Module Declarations
// =================================================================================================

mod evaluator;
mod parameters;
mod profile;
mod series;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand the sampling loop to Rayon is an execution
// concern, not a physics concern, but it lives next to the evaluator that
// consumes it. The threshold is stored in an AtomicUsize so benchmarks and
// tests can change it at runtime without a mutex on every evaluation.
// Relaxed ordering is sufficient: the value is a performance hint, not a
// synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default sample count above which [`evaluate_profile`] switches to
/// parallel iteration (only with the `parallel` feature).
///
/// Below this point Rayon's dispatch overhead outweighs the per-sample
/// series summation; the default 81-sample profile always stays sequential.
const DEFAULT_PARALLEL_THRESHOLD: usize = 999;

/// Runtime-configurable parallel-execution threshold.
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// [`evaluate_profile`] iterates sequentially when the configured sample
/// count is below this value and switches to Rayon at or above it — but
/// only when the crate is compiled with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use fick_rs::physics::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold.
///
/// # Panics
///
/// Panics when `threshold == 0`, which would force parallel dispatch even
/// for a two-sample profile.
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds. Prevents one test from leaking a modified
/// threshold into the next.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that restores
    /// the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Bypass the public setter so restoring any saved value never panics.
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use evaluator::{evaluate_profile, EvaluatorConfig, ProfileEvaluator};
pub use parameters::SlabParameters;
pub use profile::{ConcentrationProfile, ProfileSample};
pub use series::{concentration_at, mode_decay_rate, mode_wavenumber, series_sum};

// =================================================================================================
// Tests
// =================================================================================================
