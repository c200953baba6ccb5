//! Configuration types for topology generation and rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file; every field has a default, so a partial file is fine.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Where the generator places spine and leaf rows.
//! - [`StyleConfig`] - Visual options for the SVG snapshot.
//!
//! # Example
//!
//! ```
//! # use trellis::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().spine_y(), 50.0);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use trellis_core::color::Color;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Row placement for generated topologies.
///
/// Spine `i` (1-based) lands at `start_x + (i - 1) * spacing` on the
/// `spine_y` row, where spacing is `spine_span / spine_count` but never less
/// than `min_spacing`. Leaves follow the same rule on the `leaf_y` row with
/// `leaf_span`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    start_x: f32,
    spine_y: f32,
    leaf_y: f32,
    min_spacing: f32,
    spine_span: f32,
    leaf_span: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            start_x: 100.0,
            spine_y: 50.0,
            leaf_y: 250.0,
            min_spacing: 200.0,
            spine_span: 800.0,
            leaf_span: 600.0,
        }
    }
}

impl LayoutConfig {
    /// X coordinate of the first node in each row.
    pub fn start_x(&self) -> f32 {
        self.start_x
    }

    /// Y coordinate of the spine row.
    pub fn spine_y(&self) -> f32 {
        self.spine_y
    }

    /// Y coordinate of the leaf row.
    pub fn leaf_y(&self) -> f32 {
        self.leaf_y
    }

    /// Floor applied to both row spacings.
    pub fn min_spacing(&self) -> f32 {
        self.min_spacing
    }

    /// Width shared out between spines before the floor applies.
    pub fn spine_span(&self) -> f32 {
        self.spine_span
    }

    /// Width shared out between leaves before the floor applies.
    pub fn leaf_span(&self) -> f32 {
        self.leaf_span
    }

    /// Sets the minimum spacing between neighbours in a row.
    pub fn with_min_spacing(mut self, min_spacing: f32) -> Self {
        self.min_spacing = min_spacing;
        self
    }

    /// Sets both row spans.
    pub fn with_spans(mut self, spine_span: f32, leaf_span: f32) -> Self {
        self.spine_span = spine_span;
        self.leaf_span = leaf_span;
        self
    }
}

/// Visual styling configuration for SVG snapshots.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background color as a CSS color string.
    background_color: Option<String>,

    /// Whether to draw the port legend.
    show_legend: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            show_legend: true,
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns whether the port legend is drawn.
    pub fn show_legend(&self) -> bool {
        self.show_legend
    }

    /// Sets the background color string.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Turns the legend on or off.
    pub fn with_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }
}
