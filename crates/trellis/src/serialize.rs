//! Topology and name back to description text.
//!
//! Exporting is lossy: the canonical description only carries the fabric
//! name, so device counts and hand edits in a topology do not survive a
//! round trip. Quick configurations and presets go the other way, building
//! full description text from a handful of numbers.

use log::debug;

use trellis_core::{
    description::{
        Bgp, FABRIC_KIND, FabricDescription, FabricSpec, InterSwitchLinks, Leafs, Metadata,
        OverlayProtocol, Spines, UnderlayProtocol,
    },
    topology::Topology,
};

use crate::error::TrellisError;

pub const API_VERSION: &str = "fabrics.eda.nokia.com/v1alpha1";
pub const NAMESPACE: &str = "eda";
pub const LEAF_SELECTOR: &str = "eda.nokia.com/role=leaf";
pub const SPINE_SELECTOR: &str = "eda.nokia.com/role=spine";
pub const LINK_SELECTOR: &str = "eda.nokia.com/role=interSwitch";
pub const UNNUMBERED: &str = "IPV6";
pub const SYSTEM_POOL_IPV4: &str = "systemipv4-pool";
pub const ASN_POOL: &str = "asn-pool";
pub const DEFAULT_PROTOCOL: &str = "EBGP";

/// Name used when exporting a fabric that has none.
pub const DEFAULT_FABRIC_NAME: &str = "myfabric-1";

/// Builds the canonical single-leaf, single-spine description for `name`.
///
/// # Examples
///
/// ```
/// let description = trellis::serialize::to_description("dc1");
/// assert_eq!(description.name(), Some("dc1"));
/// assert!(trellis_parser::validate_description(&description));
/// ```
pub fn to_description(name: &str) -> FabricDescription {
    canonical(name, 1, 1, DEFAULT_PROTOCOL)
}

fn canonical(name: &str, spines: usize, leaves: usize, protocol: &str) -> FabricDescription {
    FabricDescription {
        api_version: Some(API_VERSION.to_string()),
        kind: Some(FABRIC_KIND.to_string()),
        metadata: Some(Metadata {
            name: Some(name.to_string()),
            namespace: Some(NAMESPACE.to_string()),
        }),
        spec: Some(FabricSpec {
            leafs: Some(Leafs {
                leaf_node_selector: Some(vec![LEAF_SELECTOR.to_string(); leaves]),
            }),
            spines: Some(Spines {
                spine_node_selector: Some(vec![SPINE_SELECTOR.to_string(); spines]),
            }),
            inter_switch_links: Some(InterSwitchLinks {
                link_selector: Some(vec![LINK_SELECTOR.to_string()]),
                unnumbered: Some(UNNUMBERED.to_string()),
            }),
            system_pool_ipv4: Some(SYSTEM_POOL_IPV4.to_string()),
            underlay_protocol: Some(UnderlayProtocol {
                protocol: Some(vec![protocol.to_string()]),
                bgp: Some(Bgp {
                    asn_pool: Some(ASN_POOL.to_string()),
                }),
            }),
            overlay_protocol: Some(OverlayProtocol {
                protocol: Some(protocol.to_string()),
            }),
        }),
    }
}

/// Exports a topology under `name`.
///
/// Only the name is carried over; the topology itself is ignored.
pub fn topology_to_description(topology: &Topology, name: &str) -> FabricDescription {
    debug!(
        nodes = topology.nodes().len(),
        edges = topology.edges().len(),
        name;
        "Exporting topology as canonical description"
    );
    to_description(name)
}

/// Renders a description as YAML text.
///
/// # Errors
///
/// Returns [`TrellisError::Serialize`] if the YAML emitter fails.
pub fn serialize(description: &FabricDescription) -> Result<String, TrellisError> {
    Ok(serde_yaml::to_string(description)?)
}

/// Parameters for generating a complete description from counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickConfig {
    pub spine_count: usize,
    pub leaf_count: usize,
    pub protocol: String,
    pub fabric_name: String,
}

impl Default for QuickConfig {
    fn default() -> Self {
        Self {
            spine_count: 2,
            leaf_count: 3,
            protocol: DEFAULT_PROTOCOL.to_string(),
            fabric_name: DEFAULT_FABRIC_NAME.to_string(),
        }
    }
}

impl QuickConfig {
    pub fn new(spine_count: usize, leaf_count: usize, protocol: impl Into<String>) -> Self {
        Self {
            spine_count,
            leaf_count,
            protocol: protocol.into(),
            ..Self::default()
        }
    }

    pub fn with_fabric_name(mut self, fabric_name: impl Into<String>) -> Self {
        self.fabric_name = fabric_name.into();
        self
    }
}

/// Builds the full description for a quick configuration.
///
/// Selectors are repeated once per requested device, and the protocol is
/// used for both the underlay and the overlay.
pub fn quick_description(config: &QuickConfig) -> FabricDescription {
    canonical(
        &config.fabric_name,
        config.spine_count,
        config.leaf_count,
        &config.protocol,
    )
}

/// Writes full description text for a quick configuration.
///
/// The text goes through the YAML emitter, so any fabric name or protocol
/// reads back unchanged.
pub fn quick_config(config: &QuickConfig) -> String {
    serde_yaml::to_string(&quick_description(config))
        .expect("descriptions hold only strings and string lists")
}

/// A named quick configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub spine_count: usize,
    pub leaf_count: usize,
    pub protocol: &'static str,
}

impl Preset {
    /// Quick configuration for this preset, under the default fabric name.
    pub fn config(&self) -> QuickConfig {
        QuickConfig::new(self.spine_count, self.leaf_count, self.protocol)
    }

    /// One-line description such as `3 spines, 4 leaves, EBGP`.
    pub fn summary(&self) -> String {
        format!(
            "{} spines, {} leaves, {}",
            self.spine_count, self.leaf_count, self.protocol
        )
    }
}

pub const PRESETS: [Preset; 4] = [
    Preset {
        name: "Small EBGP",
        spine_count: 2,
        leaf_count: 3,
        protocol: "EBGP",
    },
    Preset {
        name: "Medium EBGP",
        spine_count: 3,
        leaf_count: 4,
        protocol: "EBGP",
    },
    Preset {
        name: "Large OSPF",
        spine_count: 4,
        leaf_count: 6,
        protocol: "OSPF",
    },
    Preset {
        name: "Small ISIS",
        spine_count: 2,
        leaf_count: 2,
        protocol: "ISIS",
    },
];

/// Looks up a preset by name, ignoring ASCII case.
pub fn preset(name: &str) -> Option<&'static Preset> {
    PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use trellis_core::topology::Role;

    use super::*;
    use crate::generate;

    #[test]
    fn test_canonical_description_fields() {
        let description = to_description("dc-west");

        assert_eq!(description.api_version.as_deref(), Some(API_VERSION));
        assert_eq!(description.kind.as_deref(), Some("Fabric"));
        assert_eq!(description.name(), Some("dc-west"));
        assert_eq!(description.namespace(), Some("eda"));
        assert_eq!(description.leaf_selectors(), &[LEAF_SELECTOR.to_string()]);
        assert_eq!(description.spine_selectors(), &[SPINE_SELECTOR.to_string()]);
        assert_eq!(description.link_selectors(), &[LINK_SELECTOR.to_string()]);
        assert_eq!(description.unnumbered(), Some("IPV6"));
        assert_eq!(description.system_pool_ipv4(), Some("systemipv4-pool"));
        assert_eq!(description.underlay_protocols(), &["EBGP".to_string()]);
        assert_eq!(description.asn_pool(), Some("asn-pool"));
        assert_eq!(description.overlay_protocol(), Some("EBGP"));
    }

    #[test]
    fn test_name_survives_text_round_trip() {
        let text = serialize(&to_description("dc1")).unwrap();
        assert!(text.contains("systemPoolIPV4: systemipv4-pool"));

        let parsed = trellis_parser::parse(&text).unwrap();
        assert_eq!(parsed, to_description("dc1"));
        assert!(trellis_parser::validate(&text));

        let topology = generate(&parsed);
        assert_eq!(topology.nodes_with_role(Role::Spine).count(), 1);
        assert_eq!(topology.nodes_with_role(Role::Leaf).count(), 1);
        assert_eq!(topology.edges().len(), 1);
    }

    #[test]
    fn test_export_is_idempotent() {
        let once = serialize(&to_description("dc1")).unwrap();
        let reparsed = trellis_parser::parse(&once).unwrap();
        let twice = serialize(&reparsed).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_topology_export_drops_topology() {
        let big = generate(&trellis_parser::parse(&quick_config(&QuickConfig::new(4, 6, "OSPF"))).unwrap());
        let exported = topology_to_description(&big, "dc1");

        assert_eq!(exported, to_description("dc1"));
        assert_eq!(exported.spine_selectors().len(), 1);
        assert_eq!(exported.underlay_protocols(), &["EBGP".to_string()]);
    }

    #[test]
    fn test_quick_config_defaults() {
        let text = quick_config(&QuickConfig::default());
        let description = trellis_parser::parse(&text).unwrap();

        assert!(trellis_parser::validate_description(&description));
        assert_eq!(description.name(), Some("myfabric-1"));
        assert_eq!(description.spine_selectors().len(), 2);
        assert_eq!(description.leaf_selectors().len(), 3);
        assert_eq!(description.overlay_protocol(), Some("EBGP"));
    }

    #[test]
    fn test_quick_config_sets_both_protocols() {
        let config = QuickConfig::new(3, 5, "ISIS").with_fabric_name("lab");
        let description = trellis_parser::parse(&quick_config(&config)).unwrap();

        assert_eq!(description.name(), Some("lab"));
        assert_eq!(description.spine_selectors().len(), 3);
        assert_eq!(description.leaf_selectors().len(), 5);
        assert_eq!(description.underlay_protocols(), &["ISIS".to_string()]);
        assert_eq!(description.overlay_protocol(), Some("ISIS"));
    }

    #[test]
    fn test_quick_config_quotes_yaml_syntax() {
        for name in ["dc: west", "#lab", "[a]", "null", "- x", "'quoted'"] {
            let text = quick_config(&QuickConfig::default().with_fabric_name(name));
            let description = trellis_parser::parse(&text).unwrap();

            assert_eq!(description.name(), Some(name), "{text}");
            assert!(trellis_parser::validate_description(&description));
        }
    }

    #[test]
    fn test_quick_description_matches_text() {
        let config = QuickConfig::new(2, 4, "OSPF").with_fabric_name("dc4");
        let parsed = trellis_parser::parse(&quick_config(&config)).unwrap();
        assert_eq!(parsed, quick_description(&config));
    }

    #[test]
    fn test_preset_lookup_ignores_case() {
        let large = preset("large ospf").unwrap();
        assert_eq!(large.spine_count, 4);
        assert_eq!(large.leaf_count, 6);
        assert_eq!(large.protocol, "OSPF");
        assert_eq!(large.summary(), "4 spines, 6 leaves, OSPF");

        assert_eq!(preset("SMALL ISIS").map(|p| p.leaf_count), Some(2));
        assert!(preset("Huge EBGP").is_none());
    }

    #[test]
    fn test_every_preset_is_valid() {
        for preset in &PRESETS {
            let text = quick_config(&preset.config());
            assert!(trellis_parser::validate(&text), "{} is invalid", preset.name);

            let topology = generate(&trellis_parser::parse(&text).unwrap());
            assert_eq!(
                topology.edges().len(),
                preset.spine_count * preset.leaf_count
            );
        }
    }

    proptest! {
        #[test]
        fn quick_config_keeps_any_name(
            name in "[ -~]{0,12}[!-~][ -~]{0,12}",
            protocol in "[ -~]{1,8}",
        ) {
            let config = QuickConfig::new(2, 3, protocol.as_str()).with_fabric_name(name.as_str());
            let description = trellis_parser::parse(&quick_config(&config)).unwrap();

            prop_assert_eq!(description.name(), Some(name.as_str()));
            prop_assert_eq!(description.overlay_protocol(), Some(protocol.as_str()));
            prop_assert!(trellis_parser::validate_description(&description));
        }
    }
}
