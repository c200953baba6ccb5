//! Typed fabric description.
//!
//! [`FabricDescription`] mirrors the YAML document a user edits. Every field is
//! optional so that a syntactically valid but incomplete document still
//! deserializes; required-field rules live in the validator, not here.
//!
//! ```yaml
//! apiVersion: fabrics.eda.nokia.com/v1alpha1
//! kind: Fabric
//! metadata:
//!   name: myfabric-1
//!   namespace: eda
//! spec:
//!   leafs:
//!     leafNodeSelector:
//!       - eda.nokia.com/role=leaf
//!   spines:
//!     spineNodeSelector:
//!       - eda.nokia.com/role=spine
//!   underlayProtocol:
//!     protocol:
//!       - EBGP
//! ```

use serde::{Deserialize, Serialize};

/// The literal `kind` value a fabric document must carry.
pub const FABRIC_KIND: &str = "Fabric";

/// Root of a parsed fabric document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<FabricSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// The `spec` section: node selection, links, pools and protocols.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leafs: Option<Leafs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spines: Option<Spines>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inter_switch_links: Option<InterSwitchLinks>,
    #[serde(
        rename = "systemPoolIPV4",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub system_pool_ipv4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underlay_protocol: Option<UnderlayProtocol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_protocol: Option<OverlayProtocol>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leafs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaf_node_selector: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spines {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spine_node_selector: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterSwitchLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_selector: Option<Vec<String>>,
    /// Unnumbered addressing mode, e.g. `IPV6`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unnumbered: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnderlayProtocol {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgp: Option<Bgp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bgp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asn_pool: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayProtocol {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

impl FabricDescription {
    /// Returns `metadata.name`, if present.
    pub fn name(&self) -> Option<&str> {
        self.metadata.as_ref()?.name.as_deref()
    }

    /// Returns `metadata.namespace`, if present.
    pub fn namespace(&self) -> Option<&str> {
        self.metadata.as_ref()?.namespace.as_deref()
    }

    /// Spine node selectors in document order; empty when absent.
    pub fn spine_selectors(&self) -> &[String] {
        self.spec
            .as_ref()
            .and_then(|spec| spec.spines.as_ref())
            .and_then(|spines| spines.spine_node_selector.as_deref())
            .unwrap_or_default()
    }

    /// Leaf node selectors in document order; empty when absent.
    pub fn leaf_selectors(&self) -> &[String] {
        self.spec
            .as_ref()
            .and_then(|spec| spec.leafs.as_ref())
            .and_then(|leafs| leafs.leaf_node_selector.as_deref())
            .unwrap_or_default()
    }

    /// Inter-switch link selectors; empty when absent.
    pub fn link_selectors(&self) -> &[String] {
        self.spec
            .as_ref()
            .and_then(|spec| spec.inter_switch_links.as_ref())
            .and_then(|links| links.link_selector.as_deref())
            .unwrap_or_default()
    }

    /// Underlay protocol names in document order; empty when absent.
    pub fn underlay_protocols(&self) -> &[String] {
        self.spec
            .as_ref()
            .and_then(|spec| spec.underlay_protocol.as_ref())
            .and_then(|underlay| underlay.protocol.as_deref())
            .unwrap_or_default()
    }

    /// Underlay protocols joined with `", "`, the form used for link labels.
    pub fn joined_underlay(&self) -> String {
        self.underlay_protocols().join(", ")
    }

    /// Returns `spec.underlayProtocol.bgp.asnPool`, if present.
    pub fn asn_pool(&self) -> Option<&str> {
        self.spec
            .as_ref()?
            .underlay_protocol
            .as_ref()?
            .bgp
            .as_ref()?
            .asn_pool
            .as_deref()
    }

    /// Returns `spec.overlayProtocol.protocol`, if present.
    pub fn overlay_protocol(&self) -> Option<&str> {
        self.spec
            .as_ref()?
            .overlay_protocol
            .as_ref()?
            .protocol
            .as_deref()
    }

    /// Returns `spec.interSwitchLinks.unnumbered`, if present.
    pub fn unnumbered(&self) -> Option<&str> {
        self.spec
            .as_ref()?
            .inter_switch_links
            .as_ref()?
            .unnumbered
            .as_deref()
    }

    /// Returns `spec.systemPoolIPV4`, if present.
    pub fn system_pool_ipv4(&self) -> Option<&str> {
        self.spec.as_ref()?.system_pool_ipv4.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FabricDescription {
        FabricDescription {
            api_version: Some("fabrics.eda.nokia.com/v1alpha1".to_string()),
            kind: Some(FABRIC_KIND.to_string()),
            metadata: Some(Metadata {
                name: Some("dc1".to_string()),
                namespace: Some("eda".to_string()),
            }),
            spec: Some(FabricSpec {
                spines: Some(Spines {
                    spine_node_selector: Some(vec!["role=spine".to_string(); 2]),
                }),
                underlay_protocol: Some(UnderlayProtocol {
                    protocol: Some(vec!["EBGP".to_string(), "OSPF".to_string()]),
                    bgp: Some(Bgp {
                        asn_pool: Some("asn-pool".to_string()),
                    }),
                }),
                ..FabricSpec::default()
            }),
        }
    }

    #[test]
    fn test_accessors_on_populated_description() {
        let fabric = sample();
        assert_eq!(fabric.name(), Some("dc1"));
        assert_eq!(fabric.namespace(), Some("eda"));
        assert_eq!(fabric.spine_selectors().len(), 2);
        assert_eq!(fabric.joined_underlay(), "EBGP, OSPF");
        assert_eq!(fabric.asn_pool(), Some("asn-pool"));
    }

    #[test]
    fn test_accessors_on_empty_description() {
        let fabric = FabricDescription::default();
        assert_eq!(fabric.name(), None);
        assert!(fabric.leaf_selectors().is_empty());
        assert!(fabric.spine_selectors().is_empty());
        assert!(fabric.link_selectors().is_empty());
        assert_eq!(fabric.joined_underlay(), "");
        assert_eq!(fabric.overlay_protocol(), None);
        assert_eq!(fabric.system_pool_ipv4(), None);
    }
}
