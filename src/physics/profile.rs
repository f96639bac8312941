//! Concentration profile types
//!
//! A [`ConcentrationProfile`] is the output of one evaluation: an ordered
//! sequence of (depth, concentration) samples across the slab at a single
//! simulated time. Profiles are recomputed from scratch on every parameter
//! or time change — there is no caching, incremental update, or mutation of
//! prior results.

use std::collections::HashMap;

// =================================================================================================
// Profile Sample
// =================================================================================================

/// One (depth, concentration) point of a profile
///
/// Depth is measured from the dosed surface (x = 0) into the slab, in
/// meters. Concentration carries the units of the surface concentration C0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileSample {
    /// Depth below the surface [m], in `[0, L]`
    pub depth: f64,

    /// Drug concentration at this depth (units of C0)
    pub concentration: f64,
}

// =================================================================================================
// Concentration Profile
// =================================================================================================

/// Spatial concentration profile at a fixed simulated time
///
/// # Guarantees
///
/// When produced by the evaluator:
/// - samples are ordered by strictly increasing depth
/// - depths span exactly `[0, L]`, both endpoints included
/// - every value is finite
/// - the sample count equals the configured `sample_count`
///
/// # Example
///
/// ```rust
/// use fick_rs::physics::{SlabParameters, EvaluatorConfig, evaluate_profile};
///
/// let params = SlabParameters::default();
/// let profile = evaluate_profile(&params, 100.0, &EvaluatorConfig::default()).unwrap();
///
/// assert_eq!(profile.len(), 81);
/// assert_eq!(profile.samples()[0].depth, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConcentrationProfile {
    /// Simulated time this profile was evaluated at [s]
    time: f64,

    /// Samples in increasing-depth order
    samples: Vec<ProfileSample>,

    /// Evaluation metadata (evaluator name, series terms, ...) for
    /// diagnostics and export headers
    metadata: HashMap<String, String>,
}

impl ConcentrationProfile {
    /// Build a profile from pre-computed samples
    pub fn new(time: f64, samples: Vec<ProfileSample>) -> Self {
        Self {
            time,
            samples,
            metadata: HashMap::new(),
        }
    }

    /// Simulated time of this profile [s]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Samples in increasing-depth order
    pub fn samples(&self) -> &[ProfileSample] {
        &self.samples
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the profile holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Depth values as a contiguous vector (for plotting and export)
    pub fn depths(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.depth).collect()
    }

    /// Concentration values as a contiguous vector (for plotting and export)
    pub fn concentrations(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.concentration).collect()
    }

    /// Concentration at the dosed surface (x = 0)
    pub fn surface(&self) -> Option<ProfileSample> {
        self.samples.first().copied()
    }

    /// Concentration at the far boundary (x = L)
    pub fn deepest(&self) -> Option<ProfileSample> {
        self.samples.last().copied()
    }

    /// Attach a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Read a metadata entry
    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
