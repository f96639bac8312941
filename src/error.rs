//! Error types for the diffusion core
//!
//! The core distinguishes two failure classes:
//!
//! - [`FickError::InvalidParameter`]: a physical input violates its domain
//!   (non-positive diffusivity or thickness, negative surface concentration
//!   or time). The offending field is named so the host can surface a
//!   precise message.
//! - [`FickError::InvalidConfiguration`]: an algorithm-quality knob is out of
//!   range (too few samples or series terms). These are not physics; they
//!   control resolution and truncation accuracy.
//!
//! Both are raised on entry, before any computation starts — the evaluator
//! never partially computes and then fails. Both are recoverable: the host
//! fixes the input and calls again. Retrying with the same inputs always
//! fails the same way (the computation is deterministic), so no retry
//! semantics apply.
//!
//! # Example
//!
//! ```rust
//! use fick_rs::error::FickError;
//! use fick_rs::physics::{SlabParameters, EvaluatorConfig, evaluate_profile};
//!
//! let params = SlabParameters::new(-1.0, 200e-6, 1.0);
//! let result = evaluate_profile(&params, 10.0, &EvaluatorConfig::default());
//!
//! match result {
//!     Err(FickError::InvalidParameter { field, .. }) => assert_eq!(field, "diffusivity"),
//!     other => panic!("expected InvalidParameter, got {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Result alias used throughout the core.
pub type FickResult<T> = Result<T, FickError>;

/// Errors raised by the profile evaluator and the animation driver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FickError {
    /// A physical input violates its domain.
    ///
    /// Raised for `diffusivity <= 0`, `thickness <= 0`,
    /// `surface_concentration < 0`, `time < 0`, and for non-finite values
    /// of any of these.
    #[error("invalid parameter `{field}` = {value}: must be {constraint}")]
    InvalidParameter {
        /// Name of the offending field
        field: &'static str,
        /// Value that was rejected
        value: f64,
        /// Human-readable domain constraint
        constraint: &'static str,
    },

    /// An algorithm-quality knob is out of range.
    ///
    /// Raised for `sample_count < 2` and `series_terms < 1`.
    #[error("invalid configuration `{field}` = {value}: must be {constraint}")]
    InvalidConfiguration {
        /// Name of the offending knob
        field: &'static str,
        /// Value that was rejected
        value: usize,
        /// Human-readable constraint
        constraint: &'static str,
    },
}

impl FickError {
    /// Shorthand constructor for a domain violation.
    pub(crate) fn parameter(field: &'static str, value: f64, constraint: &'static str) -> Self {
        Self::InvalidParameter { field, value, constraint }
    }

    /// Shorthand constructor for a configuration violation.
    pub(crate) fn configuration(field: &'static str, value: usize, constraint: &'static str) -> Self {
        Self::InvalidConfiguration { field, value, constraint }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
