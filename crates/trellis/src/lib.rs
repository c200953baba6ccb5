//! Trellis - spine/leaf fabric descriptions rendered as topology graphs.
//!
//! Parsing, validation, topology generation and export for declarative
//! network-fabric descriptions, plus a [`session::Session`] that keeps the
//! description text and the generated graph in sync under live editing.

pub mod config;
pub mod export;
pub mod generate;
pub mod serialize;
pub mod session;
pub mod store;
pub mod summary;

mod error;

pub use trellis_core::{color, description, geometry, topology};

pub use error::TrellisError;
pub use generate::generate;

use log::{debug, info, trace, warn};

use trellis_core::{description::FabricDescription, topology::Topology};

use config::AppConfig;
use generate::TopologyGenerator;

/// Builder for parsing, generating and rendering fabric topologies.
///
/// # Examples
///
/// ```rust
/// use trellis::{FabricBuilder, config::AppConfig};
///
/// let source = trellis::serialize::quick_config(&Default::default());
///
/// let builder = FabricBuilder::new(AppConfig::default());
///
/// // Parse and validate the description
/// let description = builder.parse(&source).expect("Failed to parse");
///
/// // Expand it into a positioned graph
/// let topology = builder.generate(&description);
/// assert_eq!(topology.edges().len(), 6);
///
/// // Render a static snapshot
/// let svg = builder.render_svg(&topology).expect("Failed to render");
/// assert!(svg.contains("Spine-1"));
/// ```
#[derive(Default)]
pub struct FabricBuilder {
    config: AppConfig,
}

impl FabricBuilder {
    /// Create a new fabric builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse and validate description text.
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::Parse`] if the text is not a well-formed
    /// description, or [`TrellisError::Invalid`] listing every required-field
    /// rule the description breaks. Warnings are logged, not returned.
    pub fn parse(&self, source: &str) -> Result<FabricDescription, TrellisError> {
        info!("Parsing fabric description");

        let (errors, warnings): (Vec<_>, Vec<_>) = trellis_parser::check_source(source)
            .map_err(|err| TrellisError::new_parse_error(err, source))?
            .into_iter()
            .partition(|diag| diag.severity().is_error());
        if !errors.is_empty() {
            return Err(TrellisError::new_invalid(errors, source));
        }
        for diag in &warnings {
            warn!(diag:%; "Description relies on a default");
        }

        let description = trellis_parser::parse(source)
            .map_err(|err| TrellisError::new_parse_error(err, source))?;

        debug!(fabric = description.name().unwrap_or_default(); "Description parsed successfully");
        trace!(description:?; "Parsed description");

        Ok(description)
    }

    /// Expand a description into a positioned topology.
    pub fn generate(&self, description: &FabricDescription) -> Topology {
        TopologyGenerator::new(self.config.layout().clone()).generate(description)
    }

    /// Render a topology to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::Config`] if the style configuration is invalid.
    pub fn render_svg(&self, topology: &Topology) -> Result<String, TrellisError> {
        export::svg::render_svg(topology, self.config.style())
    }

    /// Render a topology to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::Serialize`] if serialization fails.
    pub fn render_json(&self, topology: &Topology) -> Result<String, TrellisError> {
        export::render_json(topology)
    }
}
