//! Human-readable overview of a fabric description.

use std::fmt;

use trellis_core::description::FabricDescription;

/// Placeholder shown for values the description leaves out.
const ABSENT: &str = "-";

/// The fields shown in the fabric info panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FabricSummary {
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub api_version: Option<String>,
    pub leaf_selectors: Vec<String>,
    pub spine_selectors: Vec<String>,
    pub link_selectors: Vec<String>,
    pub unnumbered: Option<String>,
    pub underlay_protocols: Vec<String>,
    pub overlay_protocol: Option<String>,
    pub asn_pool: Option<String>,
    pub system_pool_ipv4: Option<String>,
}

impl FabricSummary {
    pub fn from_description(description: &FabricDescription) -> Self {
        let owned = |value: Option<&str>| value.map(str::to_string);

        Self {
            name: owned(description.name()),
            namespace: owned(description.namespace()),
            api_version: description.api_version.clone(),
            leaf_selectors: description.leaf_selectors().to_vec(),
            spine_selectors: description.spine_selectors().to_vec(),
            link_selectors: description.link_selectors().to_vec(),
            unnumbered: owned(description.unnumbered()),
            underlay_protocols: description.underlay_protocols().to_vec(),
            overlay_protocol: owned(description.overlay_protocol()),
            asn_pool: owned(description.asn_pool()),
            system_pool_ipv4: owned(description.system_pool_ipv4()),
        }
    }
}

fn or_absent(value: &Option<String>) -> &str {
    value.as_deref().filter(|v| !v.is_empty()).unwrap_or(ABSENT)
}

fn join_or_absent(values: &[String]) -> String {
    if values.is_empty() {
        ABSENT.to_string()
    } else {
        values.join(", ")
    }
}

impl fmt::Display for FabricSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name:             {}", or_absent(&self.name))?;
        writeln!(f, "Namespace:        {}", or_absent(&self.namespace))?;
        writeln!(f, "API version:      {}", or_absent(&self.api_version))?;
        writeln!(
            f,
            "Leaves:           {} ({})",
            self.leaf_selectors.len(),
            join_or_absent(&self.leaf_selectors)
        )?;
        writeln!(
            f,
            "Spines:           {} ({})",
            self.spine_selectors.len(),
            join_or_absent(&self.spine_selectors)
        )?;
        writeln!(f, "Link selectors:   {}", join_or_absent(&self.link_selectors))?;
        writeln!(f, "Unnumbered:       {}", or_absent(&self.unnumbered))?;
        writeln!(f, "Underlay:         {}", join_or_absent(&self.underlay_protocols))?;
        writeln!(f, "Overlay:          {}", or_absent(&self.overlay_protocol))?;
        writeln!(f, "ASN pool:         {}", or_absent(&self.asn_pool))?;
        write!(f, "System IPv4 pool: {}", or_absent(&self.system_pool_ipv4))
    }
}
