//! Fabric description to positioned topology.
//!
//! The generator expands the selector lists of a description into concrete
//! devices: one spine per spine selector, one leaf per leaf selector, and a
//! link from every spine to every leaf. It never fails; empty or absent
//! selector lists fall back to a default fabric of two spines and three
//! leaves.

use log::{debug, info};

use trellis_core::{
    color::LinkColor,
    description::FabricDescription,
    geometry::Point,
    topology::{Role, Topology, TopologyEdge, TopologyNode},
};

use crate::config::LayoutConfig;

/// Spines used when the description lists no spine selectors.
pub const DEFAULT_SPINE_COUNT: usize = 2;

/// Leaves used when the description lists no leaf selectors.
pub const DEFAULT_LEAF_COUNT: usize = 3;

/// Generates a topology with the default layout.
///
/// # Examples
///
/// ```
/// let description = trellis_parser::parse("spec: {}").unwrap();
/// let topology = trellis::generate(&description);
///
/// // Two spines, three leaves, fully meshed.
/// assert_eq!(topology.nodes().len(), 5);
/// assert_eq!(topology.edges().len(), 6);
/// ```
pub fn generate(description: &FabricDescription) -> Topology {
    TopologyGenerator::default().generate(description)
}

/// Topology generator bound to a [`LayoutConfig`].
#[derive(Debug, Clone, Default)]
pub struct TopologyGenerator {
    layout: LayoutConfig,
}

impl TopologyGenerator {
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Number of spines the description yields.
    pub fn spine_count(description: &FabricDescription) -> usize {
        count_or(description.spine_selectors().len(), DEFAULT_SPINE_COUNT)
    }

    /// Number of leaves the description yields.
    pub fn leaf_count(description: &FabricDescription) -> usize {
        count_or(description.leaf_selectors().len(), DEFAULT_LEAF_COUNT)
    }

    /// Horizontal distance between neighbouring spines.
    pub fn spine_spacing(&self, spine_count: usize) -> f32 {
        self.spacing(self.layout.spine_span(), spine_count)
    }

    /// Horizontal distance between neighbouring leaves.
    pub fn leaf_spacing(&self, leaf_count: usize) -> f32 {
        self.spacing(self.layout.leaf_span(), leaf_count)
    }

    /// Expands a description into nodes and links.
    pub fn generate(&self, description: &FabricDescription) -> Topology {
        let spine_count = Self::spine_count(description);
        let leaf_count = Self::leaf_count(description);
        let spine_spacing = self.spine_spacing(spine_count);
        let leaf_spacing = self.leaf_spacing(leaf_count);

        debug!(
            spine_count,
            leaf_count,
            spine_spacing,
            leaf_spacing;
            "Computed fabric dimensions"
        );

        let spines = (1..=spine_count).map(|i| {
            TopologyNode::for_role(
                Role::Spine,
                i,
                self.position(i, spine_spacing, self.layout.spine_y()),
            )
        });
        let leaves = (1..=leaf_count).map(|i| {
            TopologyNode::for_role(
                Role::Leaf,
                i,
                self.position(i, leaf_spacing, self.layout.leaf_y()),
            )
        });
        let nodes: Vec<_> = spines.chain(leaves).collect();

        let label = description.joined_underlay();
        let color = LinkColor::from_protocol(&label);
        let mut edges = Vec::with_capacity(spine_count * leaf_count);
        for spine in 1..=spine_count {
            for leaf in 1..=leaf_count {
                edges.push(TopologyEdge::new(
                    format!("spine{spine}-leaf{leaf}"),
                    Role::Spine.node_id(spine),
                    Role::Leaf.node_id(leaf),
                    label.as_str(),
                    color,
                ));
            }
        }

        let topology = Topology::from_parts(nodes, edges)
            .expect("generated node ids are unique and every link joins generated nodes");

        info!(
            spines = spine_count,
            leaves = leaf_count,
            links = topology.edges().len(),
            color:% = color;
            "Generated topology"
        );

        topology
    }

    fn spacing(&self, span: f32, count: usize) -> f32 {
        self.layout.min_spacing().max(span / count as f32)
    }

    fn position(&self, index: usize, spacing: f32, y: f32) -> Point {
        Point::new(self.layout.start_x() + (index - 1) as f32 * spacing, y)
    }
}

fn count_or(selectors: usize, default: usize) -> usize {
    if selectors == 0 { default } else { selectors }
}
