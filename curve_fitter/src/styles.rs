//! Styling configuration for plot rendering.
//!
//! Presentation settings travel as plain values into the renderer; nothing
//! here is process-global state.

use crate::geometry::PointSymbol;

/// Overall color scheme of a rendered plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Plot background color.
    pub fn background(&self) -> &'static str {
        match self {
            Theme::Dark => "#121212",
            Theme::Light => "#ffffff",
        }
    }

    /// Color for titles, labels and the legend.
    pub fn foreground(&self) -> &'static str {
        match self {
            Theme::Dark => "#e0e0e0",
            Theme::Light => "#202020",
        }
    }

    /// Color for grid lines.
    pub fn grid(&self) -> &'static str {
        match self {
            Theme::Dark => "#3a3a3a",
            Theme::Light => "#d0d0d0",
        }
    }
}

/// Styling of the interpolated curve line.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveStyle {
    pub label: String,
    pub color: String,
    pub width: f64,
}

impl Default for CurveStyle {
    fn default() -> Self {
        Self {
            label: "Interpolated Curve".to_string(),
            color: "blue".to_string(),
            width: 2.0,
        }
    }
}

/// Styling of the original point markers.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub label: String,
    pub color: String,
    pub symbol: PointSymbol,
    pub size: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            label: "Original Points".to_string(),
            color: "red".to_string(),
            symbol: PointSymbol::Circle,
            size: 4.0,
        }
    }
}

/// Full configuration for one rendered plot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub theme: Theme,
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub show_grid: bool,
    pub curve: CurveStyle,
    pub markers: MarkerStyle,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            width: 1000,
            height: 600,
            title: "Curve Interpolation Using Omega Function".to_string(),
            x_label: None,
            y_label: None,
            show_grid: false,
            curve: CurveStyle::default(),
            markers: MarkerStyle::default(),
        }
    }
}

impl PlotConfig {
    /// Returns the configuration with the given axis labels applied.
    pub fn with_labels(mut self, x_label: Option<String>, y_label: Option<String>) -> Self {
        self.x_label = x_label;
        self.y_label = y_label;
        self
    }
}
