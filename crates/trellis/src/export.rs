//! Export of generated topologies.
//!
//! # Available Backends
//!
//! - [`svg`]: static SVG snapshot via [`svg::render_svg`]
//! - JSON: the serialized [`Topology`] via [`render_json`], for renderers
//!   that draw the graph themselves

pub mod svg;

use trellis_core::topology::Topology;

use crate::error::TrellisError;

/// Serializes a topology as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`TrellisError::Serialize`] if serialization fails.
pub fn render_json(topology: &Topology) -> Result<String, TrellisError> {
    Ok(serde_json::to_string_pretty(topology)?)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::generate;

    #[test]
    fn test_json_shape() {
        let topology = generate(&trellis_parser::parse("spec: {}").unwrap());
        let value: Value = serde_json::from_str(&render_json(&topology).unwrap()).unwrap();

        let nodes = value["nodes"].as_array().unwrap();
        assert_eq!(nodes.len(), 5);
        assert_eq!(nodes[0]["id"], "spine-1");
        assert_eq!(nodes[0]["role"], "spine");
        assert_eq!(nodes[0]["model"], "7220 IXR-D5");
        assert_eq!(nodes[0]["ports"][0]["kind"], "inter-switch");
        assert_eq!(nodes[0]["position"]["x"], 100.0);

        let edges = value["edges"].as_array().unwrap();
        assert_eq!(edges.len(), 6);
        assert_eq!(edges[0]["id"], "spine1-leaf1");
        assert_eq!(edges[0]["color"], "#90caf9");
    }
}
