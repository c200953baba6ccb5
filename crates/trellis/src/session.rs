//! Text/graph synchronization.
//!
//! A [`Session`] owns the description text a user is editing and the topology
//! derived from it. Text changes flow one way into the graph: every change is
//! parsed and validated, and a valid description replaces the topology
//! wholesale. Graph edits flow back only as far as the topology; they never
//! rewrite the text, and the next valid text change discards them.

use log::{debug, info, warn};

use trellis_core::{
    geometry::Point,
    topology::{Topology, TopologyError},
};
use trellis_parser::error::ParseError;

use crate::{
    error::TrellisError,
    generate::TopologyGenerator,
    serialize::{self, DEFAULT_FABRIC_NAME, QuickConfig},
    store::DescriptionStore,
};

/// Rejection of an [`Edit`] naming a node or edge the topology does not hold.
pub type EditError = TopologyError;

/// Graph edit reported by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    MoveNode { id: String, position: Point },
    Connect { source: String, target: String },
    DeleteNode { id: String },
    DeleteEdge { id: String },
}

/// Non-fatal problem surfaced to the user until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    LoadFailed(String),
    SaveFailed(String),
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::LoadFailed(reason) => write!(f, "failed to load description: {reason}"),
            Warning::SaveFailed(reason) => write!(f, "failed to save description: {reason}"),
        }
    }
}

/// Editing session over one fabric description.
#[derive(Debug, Default)]
pub struct Session {
    generator: TopologyGenerator,
    current_text: String,
    is_valid: bool,
    topology: Topology,
    fabric_name: String,
    parse_error: Option<ParseError>,
    warnings: Vec<Warning>,
}

impl Session {
    /// Empty session: no text, invalid, empty topology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty session generating with a custom layout.
    pub fn with_generator(generator: TopologyGenerator) -> Self {
        Self {
            generator,
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.current_text
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// `metadata.name` of the current text; empty if it has none or does not parse.
    pub fn fabric_name(&self) -> &str {
        &self.fabric_name
    }

    /// Parse failure of the current text, if it failed to parse.
    pub fn parse_error(&self) -> Option<&ParseError> {
        self.parse_error.as_ref()
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Removes the warning at `index`; out-of-range indices are ignored.
    pub fn dismiss_warning(&mut self, index: usize) {
        if index < self.warnings.len() {
            self.warnings.remove(index);
        }
    }

    pub fn dismiss_all_warnings(&mut self) {
        self.warnings.clear();
    }

    /// Replaces the text and resynchronizes the graph.
    ///
    /// A valid description regenerates the topology, discarding any graph
    /// edits. Anything else keeps the previous topology.
    pub fn on_text_change(&mut self, text: impl Into<String>) {
        self.current_text = text.into();

        match trellis_parser::parse(&self.current_text) {
            Ok(description) => {
                self.parse_error = None;
                self.fabric_name = description.name().unwrap_or_default().to_string();
                self.is_valid = trellis_parser::validate_description(&description);

                if self.is_valid {
                    self.topology = self.generator.generate(&description);
                    debug!(
                        fabric = self.fabric_name.as_str(),
                        nodes = self.topology.nodes().len();
                        "Topology regenerated"
                    );
                } else {
                    debug!(fabric = self.fabric_name.as_str(); "Description incomplete, keeping topology");
                }
            }
            Err(err) => {
                debug!(err:%; "Description does not parse, keeping topology");
                self.is_valid = false;
                self.fabric_name.clear();
                self.parse_error = Some(err);
            }
        }
    }

    /// Loads a preset's description text.
    ///
    /// Returns `false` without changing anything if no preset has this name.
    pub fn apply_preset(&mut self, name: &str) -> bool {
        match serialize::preset(name) {
            Some(preset) => {
                info!(preset = preset.name; "Applying preset");
                self.apply_quick_config(&preset.config());
                true
            }
            None => {
                warn!(preset = name; "Unknown preset");
                false
            }
        }
    }

    /// Loads generated description text for a quick configuration.
    pub fn apply_quick_config(&mut self, config: &QuickConfig) {
        self.on_text_change(serialize::quick_config(config));
    }

    /// Applies a renderer edit to the topology.
    ///
    /// The text is never touched.
    ///
    /// # Errors
    ///
    /// Returns an [`EditError`] if the edit names a missing node or edge; the
    /// topology is left unchanged.
    pub fn on_user_edit(&mut self, edit: Edit) -> Result<(), EditError> {
        match edit {
            Edit::MoveNode { id, position } => self.topology.move_node(&id, position),
            Edit::Connect { source, target } => {
                self.topology.connect(&source, &target).map(|_| ())
            }
            Edit::DeleteNode { id } => self.topology.remove_node(&id).map(|_| ()),
            Edit::DeleteEdge { id } => self.topology.remove_edge(&id),
        }
    }

    /// Canonical description text for the current fabric name.
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::Serialize`] if the YAML emitter fails.
    pub fn export_text(&self) -> Result<String, TrellisError> {
        let name = if self.fabric_name.is_empty() {
            DEFAULT_FABRIC_NAME
        } else {
            &self.fabric_name
        };
        serialize::serialize(&serialize::topology_to_description(&self.topology, name))
    }

    /// Loads text from `store` into the session.
    ///
    /// On failure the text stays as it was and a warning is recorded.
    pub fn load(&mut self, store: &dyn DescriptionStore) {
        match store.load() {
            Ok(text) => {
                info!(bytes = text.len(); "Description loaded");
                self.on_text_change(text);
            }
            Err(err) => {
                warn!(err:%; "Failed to load description");
                self.warnings.push(Warning::LoadFailed(err.to_string()));
            }
        }
    }

    /// Saves the current text to `store`.
    ///
    /// Saving never changes the session apart from recording a warning on
    /// failure.
    pub fn save(&mut self, store: &mut dyn DescriptionStore) {
        if let Err(err) = store.save(&self.current_text) {
            warn!(err:%; "Failed to save description");
            self.warnings.push(Warning::SaveFailed(err.to_string()));
        }
    }
}
