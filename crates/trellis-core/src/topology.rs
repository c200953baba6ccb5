//! Positioned topology graph.
//!
//! A [`Topology`] is the renderable form of a fabric: device nodes placed on
//! the canvas and the links between them. The generator builds a complete
//! spine/leaf bipartite graph; afterwards the graph is mutated only by user
//! edits (move, connect, delete), which keep every edge endpoint pointing at
//! an existing node.

use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::{color::LinkColor, geometry::Point};

/// Errors raised when an edit refers to elements the graph does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("unknown node `{0}`")]
    UnknownNode(String),

    #[error("unknown edge `{0}`")]
    UnknownEdge(String),

    #[error("node `{0}` already exists")]
    DuplicateNode(String),
}

/// Device tier in a two-stage Clos fabric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Spine,
    Leaf,
}

impl Role {
    /// Node id for the `index`-th device of this role (1-based), e.g. `spine-1`.
    pub fn node_id(self, index: usize) -> String {
        format!("{self}-{index}")
    }

    /// Display label for the `index`-th device of this role, e.g. `Leaf-3`.
    pub fn node_label(self, index: usize) -> String {
        match self {
            Role::Spine => format!("Spine-{index}"),
            Role::Leaf => format!("Leaf-{index}"),
        }
    }

    /// Hardware model shown on every node of this role.
    pub fn model(self) -> &'static str {
        match self {
            Role::Spine => "7220 IXR-D5",
            Role::Leaf => "7220 IXR-D3L",
        }
    }

    /// Fixed port layout of this role.
    pub fn ports(self) -> Vec<Port> {
        use PortKind::*;

        let layout: &[(u16, PortKind)] = match self {
            Role::Spine => &[
                (1, InterSwitch),
                (2, InterSwitch),
                (3, Access),
                (10, Lag),
                (12, MultiHomedLag),
            ],
            Role::Leaf => &[
                (3, Access),
                (9, Access),
                (10, Lag),
                (11, Lag),
                (12, MultiHomedLag),
            ],
        };

        layout
            .iter()
            .map(|&(number, kind)| Port::new(number, kind))
            .collect()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Spine => f.write_str("spine"),
            Role::Leaf => f.write_str("leaf"),
        }
    }
}

/// What a port is wired for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PortKind {
    InterSwitch,
    Access,
    Lag,
    MultiHomedLag,
}

impl PortKind {
    /// Wire name, e.g. `multi-homed-lag`.
    pub fn as_str(self) -> &'static str {
        match self {
            PortKind::InterSwitch => "inter-switch",
            PortKind::Access => "access",
            PortKind::Lag => "lag",
            PortKind::MultiHomedLag => "multi-homed-lag",
        }
    }

    /// Human-readable legend entry.
    pub fn legend_label(self) -> &'static str {
        match self {
            PortKind::InterSwitch => "inter-switch link",
            PortKind::Access => "edge link (access)",
            PortKind::Lag => "LAG",
            PortKind::MultiHomedLag => "Multi-homed LAG",
        }
    }

    /// All kinds in legend order.
    pub fn all() -> [PortKind; 4] {
        [
            PortKind::InterSwitch,
            PortKind::Access,
            PortKind::Lag,
            PortKind::MultiHomedLag,
        ]
    }
}

impl fmt::Display for PortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Port {
    number: u16,
    kind: PortKind,
}

impl Port {
    pub fn new(number: u16, kind: PortKind) -> Self {
        Self { number, kind }
    }

    pub fn number(self) -> u16 {
        self.number
    }

    pub fn kind(self) -> PortKind {
        self.kind
    }
}

/// A device vertex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopologyNode {
    id: String,
    role: Role,
    label: String,
    model: String,
    ports: Vec<Port>,
    position: Point,
}

impl TopologyNode {
    /// Creates the `index`-th node (1-based) of `role` at `position`, with the
    /// role's id scheme, label, model and port layout.
    pub fn for_role(role: Role, index: usize, position: Point) -> Self {
        Self {
            id: role.node_id(index),
            role,
            label: role.node_label(index),
            model: role.model().to_string(),
            ports: role.ports(),
            position,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

/// A link between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopologyEdge {
    id: String,
    source: String,
    target: String,
    label: String,
    color: LinkColor,
}

impl TopologyEdge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
        color: LinkColor,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            label: label.into(),
            color,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Joined underlay protocols; empty for hand-drawn links.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> LinkColor {
        self.color
    }

    fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }

    fn joins(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

/// Ordered nodes and edges of one fabric view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Topology {
    nodes: Vec<TopologyNode>,
    edges: Vec<TopologyEdge>,
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a topology from ready-made nodes and edges.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::DuplicateNode`] if two nodes share an id, or
    /// [`TopologyError::UnknownNode`] if an edge names a node not in `nodes`.
    pub fn from_parts(
        nodes: Vec<TopologyNode>,
        edges: Vec<TopologyEdge>,
    ) -> Result<Self, TopologyError> {
        {
            let mut ids = HashSet::with_capacity(nodes.len());
            for node in &nodes {
                if !ids.insert(node.id.as_str()) {
                    return Err(TopologyError::DuplicateNode(node.id.clone()));
                }
            }

            let missing = edges
                .iter()
                .flat_map(|edge| [&edge.source, &edge.target])
                .find(|id| !ids.contains(id.as_str()));
            if let Some(id) = missing {
                return Err(TopologyError::UnknownNode(id.clone()));
            }
        }

        Ok(Self { nodes, edges })
    }

    /// Index of nodes by id, for callers resolving many edge endpoints.
    pub fn node_index(&self) -> HashMap<&str, &TopologyNode> {
        self.nodes
            .iter()
            .map(|node| (node.id.as_str(), node))
            .collect()
    }

    pub fn nodes(&self) -> &[TopologyNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[TopologyEdge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&TopologyNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&TopologyEdge> {
        self.edges.iter().find(|edge| edge.id == id)
    }

    /// Nodes of the given role in insertion order.
    pub fn nodes_with_role(&self, role: Role) -> impl Iterator<Item = &TopologyNode> {
        self.nodes.iter().filter(move |node| node.role == role)
    }

    /// Appends a node.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::DuplicateNode`] if the id is taken.
    pub fn add_node(&mut self, node: TopologyNode) -> Result<(), TopologyError> {
        if self.node(&node.id).is_some() {
            return Err(TopologyError::DuplicateNode(node.id));
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Appends an edge whose endpoints must already be present.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::UnknownNode`] naming the first missing endpoint.
    pub fn add_edge(&mut self, edge: TopologyEdge) -> Result<(), TopologyError> {
        self.require_node(&edge.source)?;
        self.require_node(&edge.target)?;
        self.edges.push(edge);
        Ok(())
    }

    /// Links two existing nodes with a hand-drawn edge.
    ///
    /// Returns `Ok(false)` without touching the graph when the pair is already
    /// linked in either direction.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::UnknownNode`] if either endpoint is missing.
    pub fn connect(&mut self, source: &str, target: &str) -> Result<bool, TopologyError> {
        self.require_node(source)?;
        self.require_node(target)?;

        if self.edges.iter().any(|edge| edge.joins(source, target)) {
            debug!(source, target; "Nodes already connected");
            return Ok(false);
        }

        self.edges.push(TopologyEdge::new(
            format!("edge-{source}-{target}"),
            source,
            target,
            "",
            LinkColor::default(),
        ));
        Ok(true)
    }

    /// Moves a node to a new position.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::UnknownNode`] if no node has this id.
    pub fn move_node(&mut self, id: &str, position: Point) -> Result<(), TopologyError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|node| node.id == id)
            .ok_or_else(|| TopologyError::UnknownNode(id.to_string()))?;
        node.position = position;
        Ok(())
    }

    /// Removes a node together with every edge touching it.
    ///
    /// Returns the number of edges dropped alongside the node.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::UnknownNode`] if no node has this id.
    pub fn remove_node(&mut self, id: &str) -> Result<usize, TopologyError> {
        let index = self
            .nodes
            .iter()
            .position(|node| node.id == id)
            .ok_or_else(|| TopologyError::UnknownNode(id.to_string()))?;
        self.nodes.remove(index);

        let before = self.edges.len();
        self.edges.retain(|edge| !edge.touches(id));
        let dropped = before - self.edges.len();
        debug!(node = id, dropped_edges = dropped; "Removed node");
        Ok(dropped)
    }

    /// Removes a single edge.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::UnknownEdge`] if no edge has this id.
    pub fn remove_edge(&mut self, id: &str) -> Result<(), TopologyError> {
        let index = self
            .edges
            .iter()
            .position(|edge| edge.id == id)
            .ok_or_else(|| TopologyError::UnknownEdge(id.to_string()))?;
        self.edges.remove(index);
        Ok(())
    }

    fn require_node(&self, id: &str) -> Result<(), TopologyError> {
        match self.node(id) {
            Some(_) => Ok(()),
            None => Err(TopologyError::UnknownNode(id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_one() -> Topology {
        let mut topology = Topology::new();
        for i in 1..=2 {
            topology
                .add_node(TopologyNode::for_role(
                    Role::Spine,
                    i,
                    Point::new(100.0 * i as f32, 50.0),
                ))
                .unwrap();
        }
        topology
            .add_node(TopologyNode::for_role(
                Role::Leaf,
                1,
                Point::new(100.0, 250.0),
            ))
            .unwrap();
        for i in 1..=2 {
            topology
                .add_edge(TopologyEdge::new(
                    format!("spine{i}-leaf1"),
                    Role::Spine.node_id(i),
                    "leaf-1",
                    "EBGP",
                    LinkColor::Gold,
                ))
                .unwrap();
        }
        topology
    }

    #[test]
    fn test_role_naming() {
        assert_eq!(Role::Spine.node_id(3), "spine-3");
        assert_eq!(Role::Leaf.node_label(2), "Leaf-2");
        assert_eq!(Role::Spine.model(), "7220 IXR-D5");
        assert_eq!(Role::Leaf.model(), "7220 IXR-D3L");
    }

    #[test]
    fn test_role_port_layouts() {
        let spine: Vec<_> = Role::Spine
            .ports()
            .iter()
            .map(|p| (p.number(), p.kind()))
            .collect();
        assert_eq!(
            spine,
            vec![
                (1, PortKind::InterSwitch),
                (2, PortKind::InterSwitch),
                (3, PortKind::Access),
                (10, PortKind::Lag),
                (12, PortKind::MultiHomedLag),
            ]
        );

        let leaf: Vec<_> = Role::Leaf.ports().iter().map(|p| p.number()).collect();
        assert_eq!(leaf, vec![3, 9, 10, 11, 12]);
    }

    #[test]
    fn test_add_edge_requires_endpoints() {
        let mut topology = two_by_one();
        let err = topology
            .add_edge(TopologyEdge::new(
                "x",
                "spine-1",
                "leaf-9",
                "",
                LinkColor::Blue,
            ))
            .unwrap_err();
        assert_eq!(err, TopologyError::UnknownNode("leaf-9".to_string()));
        assert_eq!(topology.edges().len(), 2);
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut topology = two_by_one();
        let err = topology
            .add_node(TopologyNode::for_role(Role::Leaf, 1, Point::default()))
            .unwrap_err();
        assert_eq!(err, TopologyError::DuplicateNode("leaf-1".to_string()));
    }

    #[test]
    fn test_connect_and_dedup() {
        let mut topology = two_by_one();
        assert!(topology.connect("spine-1", "spine-2").unwrap());
        assert!(!topology.connect("spine-2", "spine-1").unwrap());
        assert!(!topology.connect("spine-1", "leaf-1").unwrap());

        let manual = topology.edge("edge-spine-1-spine-2").unwrap();
        assert_eq!(manual.label(), "");
        assert_eq!(manual.color(), LinkColor::Blue);
        assert_eq!(topology.edges().len(), 3);
    }

    #[test]
    fn test_remove_node_drops_incident_edges() {
        let mut topology = two_by_one();
        assert_eq!(topology.remove_node("leaf-1").unwrap(), 2);
        assert!(topology.edges().is_empty());
        assert_eq!(topology.nodes().len(), 2);
        assert!(topology.remove_node("leaf-1").is_err());
    }

    #[test]
    fn test_move_and_remove_edge() {
        let mut topology = two_by_one();
        topology
            .move_node("spine-2", Point::new(900.0, 10.0))
            .unwrap();
        assert_eq!(
            topology.node("spine-2").unwrap().position(),
            Point::new(900.0, 10.0)
        );

        topology.remove_edge("spine1-leaf1").unwrap();
        assert!(topology.edge("spine1-leaf1").is_none());
        assert_eq!(
            topology.remove_edge("spine1-leaf1"),
            Err(TopologyError::UnknownEdge("spine1-leaf1".to_string()))
        );
    }

    #[test]
    fn test_from_parts_validates() {
        let nodes = vec![
            TopologyNode::for_role(Role::Spine, 1, Point::default()),
            TopologyNode::for_role(Role::Leaf, 1, Point::default()),
        ];
        let edge = TopologyEdge::new("spine1-leaf1", "spine-1", "leaf-1", "", LinkColor::Blue);
        let topology = Topology::from_parts(nodes.clone(), vec![edge]).unwrap();
        assert_eq!(topology.nodes().len(), 2);
        assert_eq!(topology.edges().len(), 1);

        let dangling = TopologyEdge::new("spine1-leaf2", "spine-1", "leaf-2", "", LinkColor::Blue);
        assert_eq!(
            Topology::from_parts(nodes.clone(), vec![dangling]),
            Err(TopologyError::UnknownNode("leaf-2".to_string()))
        );

        let mut doubled = nodes;
        doubled.push(TopologyNode::for_role(Role::Leaf, 1, Point::new(5.0, 5.0)));
        assert_eq!(
            Topology::from_parts(doubled, Vec::new()),
            Err(TopologyError::DuplicateNode("leaf-1".to_string()))
        );
    }

    #[test]
    fn test_node_index() {
        let topology = two_by_one();
        let index = topology.node_index();
        assert_eq!(index.len(), 3);
        assert_eq!(index["leaf-1"].role(), Role::Leaf);
        assert!(!index.contains_key("leaf-2"));
    }

    #[test]
    fn test_nodes_with_role() {
        let topology = two_by_one();
        assert_eq!(topology.nodes_with_role(Role::Spine).count(), 2);
        assert_eq!(topology.nodes_with_role(Role::Leaf).count(), 1);
    }
}
