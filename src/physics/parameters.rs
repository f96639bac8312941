//! Physical parameters of the tissue slab
//!
//! # Physical System
//!
//! A finite slab of tissue of thickness L occupies `x ∈ [0, L]`. At `t = 0`
//! the slab contains no drug. For all `t > 0` the surface `x = 0` is held at
//! a fixed concentration C0 (a drug reservoir in perfect contact with the
//! tissue), while the far boundary `x = L` is a no-flux plane — either a
//! symmetry plane of a slab dosed from both sides, or an impermeable backing.
//!
//! Transport inside the slab follows Fick's second law:
//!
//! ```text
//! ∂c/∂t = D · ∂²c/∂x²
//! ```
//!
//! Where:
//! - **D** : Diffusion coefficient [m²/s]
//! - **L** : Slab thickness [m]
//! - **C0**: Surface concentration (arbitrary units, scales the output)
//!
//! # Parameter Domains
//!
//! - `D > 0` — a non-positive diffusivity has no physical meaning
//! - `L > 0` — the spatial domain must have extent
//! - `C0 >= 0` — concentrations are non-negative
//!
//! Values outside these domains are a contract violation and are rejected
//! with [`FickError::InvalidParameter`] before any computation.
//!
//! # Typical Values
//!
//! The defaults model a small drug molecule diffusing through skin:
//! D = 1e-10 m²/s, L = 200 µm, C0 = 1.0. Equilibration time scales as
//! L²/D ≈ 400 s for these values.

use crate::error::{FickError, FickResult};

// =================================================================================================
// Slab Parameters
// =================================================================================================

/// Physical parameters of a single diffusion evaluation
///
/// Immutable per evaluation call; the UI or driver layer constructs a new
/// value whenever a slider changes. All fields are plain `f64`, so the
/// struct is `Copy`, `Send` and `Sync` — multiple evaluators can share the
/// same parameters freely.
///
/// # Example
///
/// ```rust
/// use fick_rs::physics::SlabParameters;
///
/// // Drug diffusing through a 200 µm skin sample
/// let params = SlabParameters::new(
///     1e-10,   // D  : diffusivity, m²/s
///     200e-6,  // L  : slab thickness, m
///     1.0,     // C0 : surface concentration
/// );
///
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlabParameters {
    /// Diffusion coefficient D [m²/s]
    ///
    /// Controls the rate of spatial equilibration. Typical small-molecule
    /// values in soft tissue: 1e-11 to 1e-9 m²/s.
    pub diffusivity: f64,

    /// Slab thickness L [m]
    ///
    /// Spatial extent of the 1D domain. Scales the depth axis and slows
    /// equilibration quadratically (the governing group is D·t/L²).
    pub thickness: f64,

    /// Surface concentration C0 (arbitrary units)
    ///
    /// Fixed concentration imposed at x = 0 for all t > 0. Scales the
    /// output magnitude linearly; C0 = 0 yields an identically zero profile.
    pub surface_concentration: f64,
}

impl SlabParameters {
    /// Create a new parameter set
    ///
    /// No validation happens here — construction is infallible so that UI
    /// code can hold transient out-of-range values. [`Self::validate`] runs
    /// on entry of every evaluation.
    pub fn new(diffusivity: f64, thickness: f64, surface_concentration: f64) -> Self {
        Self {
            diffusivity,
            thickness,
            surface_concentration,
        }
    }

    /// Validate that all parameters are inside their physical domain
    ///
    /// Checks each field in declaration order and reports the first
    /// violation, naming the offending field. Non-finite values are
    /// rejected with the same error as out-of-domain ones.
    pub fn validate(&self) -> FickResult<()> {
        if !self.diffusivity.is_finite() || self.diffusivity <= 0.0 {
            return Err(FickError::parameter(
                "diffusivity",
                self.diffusivity,
                "finite and strictly positive",
            ));
        }

        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            return Err(FickError::parameter(
                "thickness",
                self.thickness,
                "finite and strictly positive",
            ));
        }

        if !self.surface_concentration.is_finite() || self.surface_concentration < 0.0 {
            return Err(FickError::parameter(
                "surface_concentration",
                self.surface_concentration,
                "finite and non-negative",
            ));
        }

        Ok(())
    }

    /// Characteristic equilibration time L²/D [s]
    ///
    /// The slab reaches a visually saturated profile after a few multiples
    /// of this. Useful for choosing an animation horizon.
    pub fn characteristic_time(&self) -> f64 {
        self.thickness * self.thickness / self.diffusivity
    }
}

impl Default for SlabParameters {
    /// Small drug molecule in a 200 µm skin slab
    fn default() -> Self {
        Self {
            diffusivity: 1e-10,
            thickness: 200e-6,
            surface_concentration: 1.0,
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
