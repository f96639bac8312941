//! CSV export for concentration profiles
//!
//! Writes profile data to CSV (Comma-Separated Values), readable by Excel,
//! Python pandas, MATLAB, and most analysis tools.
//!
//! # Features
//!
//! - **Single profile**: depth + concentration columns
//! - **Multiple times**: depth + one concentration column per simulated time
//! - **Metadata support**: optional `#`-prefixed header with the slab
//!   parameters and evaluator settings
//! - **Customizable**: delimiter, decimal separator, precision
//! - **Validation**: empty data, NaN/Inf, and mismatched depth grids are
//!   rejected before anything is written
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,ignore
//! use fick_rs::output::export::export_profile_csv;
//!
//! let profile = evaluate_profile(&params, 600.0, &config)?;
//! export_profile_csv(&profile, "profile.csv", None)?;
//! ```
//!
//! **Output** (`profile.csv`):
//! ```csv
//! Depth (m),Concentration
//! 0.000000,1.000000
//! 0.000003,0.891906
//! ...
//! ```
//!
//! ## Saturation Series with Metadata
//!
//! ```rust,ignore
//! use fick_rs::output::export::{export_profiles_csv, CsvConfig, CsvMetadata};
//!
//! let config = CsvConfig::default()
//!     .with_metadata(CsvMetadata::from_parameters(&params, &eval_config));
//!
//! let times = [0.0, 60.0, 600.0, 3600.0];
//! let profiles: Vec<_> = times
//!     .iter()
//!     .map(|&t| evaluate_profile(&params, t, &eval_config).unwrap())
//!     .collect();
//!
//! export_profiles_csv(&profiles, "saturation.csv", Some(&config))?;
//! ```
//!
//! **Output** (`saturation.csv`):
//! ```csv
//! # Fickian Diffusion Profile Data
//! # Generated: 2026-08-05T10:00:00Z
//! # Diffusivity: 1e-10 m^2/s
//! # Thickness: 0.0002 m
//! # Surface Concentration: 1
//! #
//! Depth (m),t = 0 s,t = 60 s,t = 600 s,t = 3600 s
//! 0.000000,1.000000,1.000000,1.000000,1.000000
//! ...
//! ```

use std::fs::File;
use std::io::Write;

use thiserror::Error;

use crate::physics::{ConcentrationProfile, EvaluatorConfig, SlabParameters};

use super::Exporter;

// =============================================================================
// Error Type
// =============================================================================

/// Errors specific to CSV export
///
/// Validation failures are reported before any byte is written; I/O
/// failures wrap the underlying error.
#[derive(Error, Debug)]
pub enum CsvError {
    /// No profiles, or a profile with no samples
    #[error("empty data: nothing to export")]
    EmptyData,

    /// Profiles of a multi-time export have different sample counts
    #[error("sample count mismatch: profile at t = {time} s has {actual} samples, expected {expected}")]
    LengthMismatch {
        /// Simulated time of the offending profile
        time: f64,
        /// Its sample count
        actual: usize,
        /// Sample count of the first profile
        expected: usize,
    },

    /// Profiles of a multi-time export were sampled on different depth grids
    #[error("depth grid mismatch: profile at t = {time} s was sampled on a different grid")]
    GridMismatch {
        /// Simulated time of the offending profile
        time: f64,
    },

    /// A NaN or infinity was found in the data
    #[error("invalid data: NaN or Inf detected in profile at t = {time} s")]
    NonFinite {
        /// Simulated time of the offending profile
        time: f64,
    },

    /// Underlying file-system failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use fick_rs::output::export::CsvConfig;
///
/// let config = CsvConfig::default()
///     .with_delimiter(';')
///     .with_precision(10);
///
/// assert_eq!(config.delimiter, ';');
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in the header
    pub metadata: Option<CsvMetadata>,

    /// Header for the depth column (default: "Depth (m)")
    pub depth_header: String,

    /// Header for a single concentration column (default: "Concentration")
    pub concentration_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            depth_header: "Depth (m)".to_string(),
            concentration_header: "Concentration".to_string(),
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon columns, comma decimals)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// High precision output (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional; only populated fields are written.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Diffusion coefficient D [m²/s]
    pub diffusivity: Option<f64>,

    /// Slab thickness L [m]
    pub thickness: Option<f64>,

    /// Surface concentration C0
    pub surface_concentration: Option<f64>,

    /// Number of series terms used by the evaluator
    pub series_terms: Option<usize>,

    /// Number of depth samples
    pub sample_count: Option<usize>,

    /// Additional custom entries
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Capture the slab parameters and evaluator knobs
    ///
    /// # Example
    ///
    /// ```rust
    /// use fick_rs::output::export::CsvMetadata;
    /// use fick_rs::physics::{EvaluatorConfig, SlabParameters};
    ///
    /// let metadata = CsvMetadata::from_parameters(
    ///     &SlabParameters::default(),
    ///     &EvaluatorConfig::default(),
    /// );
    /// assert_eq!(metadata.series_terms, Some(20));
    /// ```
    pub fn from_parameters(params: &SlabParameters, config: &EvaluatorConfig) -> Self {
        Self {
            diffusivity: Some(params.diffusivity),
            thickness: Some(params.thickness),
            surface_concentration: Some(params.surface_concentration),
            series_terms: Some(config.series_terms),
            sample_count: Some(config.sample_count),
            custom: Vec::new(),
        }
    }

    /// Add a custom entry
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write the `#`-prefixed metadata header
fn write_metadata_header(file: &mut File, metadata: &CsvMetadata) -> Result<(), CsvError> {
    writeln!(file, "# Fickian Diffusion Profile Data")?;

    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    if let Some(d) = metadata.diffusivity {
        writeln!(file, "# Diffusivity: {} m^2/s", d)?;
    }
    if let Some(l) = metadata.thickness {
        writeln!(file, "# Thickness: {} m", l)?;
    }
    if let Some(c0) = metadata.surface_concentration {
        writeln!(file, "# Surface Concentration: {}", c0)?;
    }
    if let Some(terms) = metadata.series_terms {
        writeln!(file, "# Series Terms: {}", terms)?;
    }
    if let Some(count) = metadata.sample_count {
        writeln!(file, "# Sample Count: {}", count)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    writeln!(file, "#")?;

    Ok(())
}

/// Format a number with the configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

/// Validate one profile: non-empty and fully finite
fn validate_profile(profile: &ConcentrationProfile) -> Result<(), CsvError> {
    if profile.is_empty() {
        return Err(CsvError::EmptyData);
    }

    let finite = profile
        .samples()
        .iter()
        .all(|s| s.depth.is_finite() && s.concentration.is_finite());

    if !finite {
        return Err(CsvError::NonFinite { time: profile.time() });
    }

    Ok(())
}

/// Validate that all profiles share the first profile's depth grid
fn validate_shared_grid(profiles: &[ConcentrationProfile]) -> Result<(), CsvError> {
    let reference = &profiles[0];

    for profile in &profiles[1..] {
        if profile.len() != reference.len() {
            return Err(CsvError::LengthMismatch {
                time: profile.time(),
                actual: profile.len(),
                expected: reference.len(),
            });
        }

        let same_grid = profile
            .samples()
            .iter()
            .zip(reference.samples().iter())
            .all(|(a, b)| a.depth == b.depth);

        if !same_grid {
            return Err(CsvError::GridMismatch { time: profile.time() });
        }
    }

    Ok(())
}

// =============================================================================
// CSV Exporter
// =============================================================================

/// CSV implementation of the [`Exporter`] trait
///
/// Wraps a [`CsvConfig`]; the free functions [`export_profile_csv`] and
/// [`export_profiles_csv`] are thin conveniences over this type.
#[derive(Clone, Default)]
pub struct CsvExporter {
    /// Formatting configuration
    pub config: CsvConfig,
}

impl CsvExporter {
    /// Create an exporter with an explicit configuration
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export_profile(
        &self,
        profile: &ConcentrationProfile,
        path: &str,
    ) -> Result<(), CsvError> {
        // ============================= Validation =============================

        validate_profile(profile)?;

        // ============================= Open File ==============================

        let mut file = File::create(path)?;

        // ============================= Write Metadata =========================

        if self.config.include_metadata {
            if let Some(metadata) = &self.config.metadata {
                write_metadata_header(&mut file, metadata)?;
            }
        }

        // ============================= Write Header ===========================

        writeln!(
            file,
            "{}{}{}",
            self.config.depth_header, self.config.delimiter, self.config.concentration_header
        )?;

        // ============================= Write Data =============================

        for sample in profile.samples() {
            writeln!(
                file,
                "{}{}{}",
                format_number(sample.depth, &self.config),
                self.config.delimiter,
                format_number(sample.concentration, &self.config)
            )?;
        }

        Ok(())
    }

    fn export_profiles(
        &self,
        profiles: &[ConcentrationProfile],
        path: &str,
    ) -> Result<(), CsvError> {
        // ============================= Validation =============================

        if profiles.is_empty() {
            return Err(CsvError::EmptyData);
        }

        for profile in profiles {
            validate_profile(profile)?;
        }

        validate_shared_grid(profiles)?;

        // ============================= Open File ==============================

        let mut file = File::create(path)?;

        // ============================= Write Metadata =========================

        if self.config.include_metadata {
            if let Some(metadata) = &self.config.metadata {
                write_metadata_header(&mut file, metadata)?;
            }
        }

        // ============================= Write Header ===========================

        write!(file, "{}", self.config.depth_header)?;
        for profile in profiles {
            write!(
                file,
                "{}t = {} s",
                self.config.delimiter,
                profile.time()
            )?;
        }
        writeln!(file)?;

        // ============================= Write Data =============================

        for i in 0..profiles[0].len() {
            write!(
                file,
                "{}",
                format_number(profiles[0].samples()[i].depth, &self.config)
            )?;

            for profile in profiles {
                write!(
                    file,
                    "{}{}",
                    self.config.delimiter,
                    format_number(profile.samples()[i].concentration, &self.config)
                )?;
            }
            writeln!(file)?;
        }

        Ok(())
    }
}

// =============================================================================
// Convenience Functions
// =============================================================================

/// Export a single profile to CSV (depth, concentration)
///
/// # Errors
///
/// - Empty profile
/// - NaN or Inf values
/// - File creation errors
///
/// # Example
///
/// ```rust,ignore
/// export_profile_csv(&profile, "profile.csv", None)?;
/// ```
pub fn export_profile_csv(
    profile: &ConcentrationProfile,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    let exporter = match configuration {
        Some(config) => CsvExporter::new(config.clone()),
        None => CsvExporter::default(),
    };
    exporter.export_profile(profile, output_path)
}

/// Export several profiles to CSV (depth + one column per simulated time)
///
/// All profiles must share the same depth grid — evaluate them with the
/// same parameters and configuration.
///
/// # Errors
///
/// - Empty input
/// - Mismatched sample counts or depth grids
/// - NaN or Inf values
/// - File creation errors
///
/// # Example
///
/// ```rust,ignore
/// export_profiles_csv(&profiles, "saturation.csv", None)?;
/// ```
pub fn export_profiles_csv(
    profiles: &[ConcentrationProfile],
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    let exporter = match configuration {
        Some(config) => CsvExporter::new(config.clone()),
        None => CsvExporter::default(),
    };
    exporter.export_profiles(profiles, output_path)
}

// =================================================================================================
// Tests
// =================================================================================================
