//! Plot configuration shared across visualization modules
//!
//! This module defines the common configuration structure used by the
//! profile plotting functions.

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// Used by both the single-profile and the multi-time comparison plots.
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `line_color`: Line color for single-profile plots
/// - `series_colors`: Optional colors for multi-time plots (one per curve)
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example: Single Profile
///
/// ```rust
/// use fick_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::default();
/// config.title = "Drug Penetration".to_string();
/// config.line_color = BLUE;
/// config.width = 1920;  // Full HD
/// config.height = 1080;
/// ```
///
/// # Example: Saturation Series with Custom Colors
///
/// ```rust
/// use fick_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::default();
/// config.series_colors = Some(vec![
///     RED,
///     BLUE,
///     GREEN,
///     RGBColor(255, 165, 0),  // Orange
/// ]);
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: auto-set by plot type)
    pub xlabel: String,

    /// Y-axis label (default: "Concentration")
    pub ylabel: String,

    /// Line color for single-profile plots (default: RED)
    pub line_color: RGBColor,

    /// Optional colors for multi-time plots (one per curve)
    ///
    /// If None, uses the default palette: [RED, BLUE, GREEN, MAGENTA, ...]
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: String::new(), // Set by specific plot type
            ylabel: "Concentration".to_string(),
            line_color: RED,
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// # Example
///
/// ```rust,ignore
/// let config = PlotConfig::profile(NO_TITLE);
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for concentration profiles with optional custom title
    ///
    /// Sets xlabel to "Depth (µm)" and title to custom value or
    /// "Concentration Profile"
    ///
    /// # Arguments
    ///
    /// * `title` - Custom title (String, &str) or None for default
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// // With custom title (no Some() needed!)
    /// let config = PlotConfig::profile("Skin Penetration");
    /// let config = PlotConfig::profile(format!("Profile at t = {} s", time));
    ///
    /// // With default title
    /// let config = PlotConfig::profile(NO_TITLE);
    /// ```
    pub fn profile(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "Depth (µm)".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Concentration Profile".to_string());
        config
    }

    /// Create config for a multi-time comparison with custom colors
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use plotters::prelude::*;
    ///
    /// let config = PlotConfig::with_series_colors(vec![RED, BLUE, GREEN]);
    /// ```
    pub fn with_series_colors(colors: Vec<RGBColor>) -> Self {
        let mut config = Self::profile(NO_TITLE);
        config.series_colors = Some(colors);
        config
    }

    /// Get the color for the curve at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to the default
    /// palette
    pub(crate) fn get_series_color(&self, series_index: usize) -> RGBColor {
        if let Some(ref colors) = self.series_colors {
            if series_index < colors.len() {
                return colors[series_index];
            }
        }

        // Default palette
        let default_colors = [
            RED,
            BLUE,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0),   // Orange
            RGBColor(128, 0, 128),   // Purple
            RGBColor(255, 192, 203), // Pink
            RGBColor(165, 42, 42),   // Brown
        ];

        default_colors[series_index % default_colors.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert!(config.show_grid);
    }

    #[test]
    fn test_profile_config_sets_depth_axis() {
        let config = PlotConfig::profile(NO_TITLE);
        assert_eq!(config.xlabel, "Depth (µm)");
        assert_eq!(config.title, "Concentration Profile");
    }

    #[test]
    fn test_profile_config_custom_title() {
        let config = PlotConfig::profile("Skin Penetration");
        assert_eq!(config.title, "Skin Penetration");
    }

    #[test]
    fn test_series_color_fallback_cycles() {
        let config = PlotConfig::default();
        // Index past the palette wraps around instead of panicking
        let first = config.get_series_color(0);
        let wrapped = config.get_series_color(10);
        assert_eq!(first, wrapped);
    }

    #[test]
    fn test_custom_series_colors_take_priority() {
        let config = PlotConfig::with_series_colors(vec![GREEN]);
        assert_eq!(config.get_series_color(0), GREEN);
        // Beyond the custom list, fall back to the default palette
        assert_eq!(config.get_series_color(1), BLUE);
    }
}
