//! Export module for computed profiles.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export
//! format. Each format is an independent implementation in its own
//! sub-module: adding a new format means adding a file, without modifying
//! existing code.
//!
//! # Available formats
//!
//! | Format  | Module          | Version |
//! |---------|-----------------|---------|
//! | CSV     | [`csv`]         | v0.1.0  |
//! | JSON    | `json` (future) | v0.2.0  |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use fick_rs::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//!
//! // One profile, two columns
//! exporter.export_profile(&profile, "profile.csv")?;
//!
//! // A saturation series, one column per simulated time
//! exporter.export_profiles(&profiles, "saturation.csv")?;
//! ```

pub mod csv;

// Re-export the most commonly used types at the module level so users can write:
//   use fick_rs::output::export::{CsvExporter, CsvConfig, CsvError};
// instead of the full sub-module path.
pub use csv::{
    export_profile_csv, export_profiles_csv, CsvConfig, CsvError, CsvExporter, CsvMetadata,
};

use crate::physics::ConcentrationProfile;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type. This avoids
/// systematic boxing (`Box<dyn Error>`) and lets the caller react precisely
/// based on the error type.
///
/// # Implementing this trait
///
/// A new format must implement [`Exporter::export_profile`] and
/// [`Exporter::export_profiles`]. Formats that do not distinguish between
/// the two cases can delegate one to the other.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Exports a single profile.
    ///
    /// The file contains two columns: depth and concentration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the path is invalid or the directory does not exist
    /// - the profile contains no data or non-finite values
    fn export_profile(
        &self,
        profile: &ConcentrationProfile,
        path: &str,
    ) -> Result<(), Self::Error>;

    /// Exports several profiles sampled on a shared depth grid.
    ///
    /// The file contains the depth column followed by one concentration
    /// column per simulated time.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the profiles disagree on sample count or depth grid
    /// - the path is invalid
    /// - any profile contains no data or non-finite values
    fn export_profiles(
        &self,
        profiles: &[ConcentrationProfile],
        path: &str,
    ) -> Result<(), Self::Error>;
}
