//! Static SVG snapshot of a topology.
//!
//! Nodes are drawn as cards anchored at their top-left position, showing the
//! label, the hardware model and one badge per port. Links run from the
//! bottom of the upper node to the top of the lower one in their protocol
//! color. The port legend sits to the right of the graph.

use std::collections::HashMap;

use ::svg::{Document, node::element as svg_element};
use log::{debug, info};

use trellis_core::{
    geometry::{Bounds, Point, Size},
    topology::{PortKind, Role, Topology, TopologyEdge, TopologyNode},
};

use crate::{config::StyleConfig, error::TrellisError};

const NODE_WIDTH: f32 = 180.0;
const NODE_HEIGHT: f32 = 84.0;
const BADGE_SIZE: f32 = 22.0;
const BADGE_GAP: f32 = 5.0;
const PADDING: f32 = 40.0;
const LEGEND_GAP: f32 = 60.0;
const LEGEND_ROW: f32 = 30.0;
const LEGEND_WIDTH: f32 = 220.0;
const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

/// Badge fill, stroke and text colors for a port kind.
fn badge_palette(kind: PortKind) -> (&'static str, &'static str, &'static str) {
    match kind {
        PortKind::InterSwitch => ("#ede7f6", "#b39ddb", "#6d4caf"),
        PortKind::Access => ("#eceff1", "#b0bec5", "#37474f"),
        PortKind::Lag => ("#e8f5e9", "#66bb6a", "#1b5e20"),
        PortKind::MultiHomedLag => ("#e3f2fd", "#29b6f6", "#01579b"),
    }
}

/// Renders `topology` as an SVG document string.
///
/// # Errors
///
/// Returns [`TrellisError::Config`] if the configured background color does
/// not parse.
pub fn render_svg(topology: &Topology, style: &StyleConfig) -> Result<String, TrellisError> {
    let background = style.background_color().map_err(TrellisError::Config)?;

    let graph_bounds = graph_bounds(topology);
    let legend_origin = Point::new(graph_bounds.max_x() + LEGEND_GAP, graph_bounds.min_y());
    let content_bounds = if style.show_legend() {
        graph_bounds.merge(&legend_bounds(legend_origin))
    } else {
        graph_bounds
    };

    let width = content_bounds.width() + 2.0 * PADDING;
    let height = content_bounds.height() + 2.0 * PADDING;
    debug!(width, height; "Computed SVG canvas size");

    let mut doc = Document::new()
        .set("viewBox", format!("0 0 {width} {height}"))
        .set("width", width)
        .set("height", height);

    if let Some(color) = background {
        doc = doc.add(
            svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("fill", &color),
        );
    }

    let mut main_group = svg_element::Group::new().set(
        "transform",
        format!(
            "translate({}, {})",
            PADDING - content_bounds.min_x(),
            PADDING - content_bounds.min_y()
        ),
    );

    // Links go first so node cards cover their ends.
    let nodes = topology.node_index();
    for edge in topology.edges() {
        if let Some(group) = render_edge(&nodes, edge) {
            main_group = main_group.add(group);
        }
    }
    for node in topology.nodes() {
        main_group = main_group.add(render_node(node));
    }
    if style.show_legend() {
        main_group = main_group.add(render_legend(legend_origin));
    }

    info!(
        nodes = topology.nodes().len(),
        edges = topology.edges().len();
        "SVG rendered"
    );
    Ok(doc.add(main_group).to_string())
}

fn node_bounds(node: &TopologyNode) -> Bounds {
    node.position().to_bounds(Size::new(NODE_WIDTH, NODE_HEIGHT))
}

fn graph_bounds(topology: &Topology) -> Bounds {
    let mut nodes = topology.nodes().iter();
    let Some(first) = nodes.next() else {
        return Bounds::default();
    };
    nodes.fold(node_bounds(first), |acc, node| acc.merge(&node_bounds(node)))
}

fn legend_bounds(origin: Point) -> Bounds {
    let rows = PortKind::all().len() as f32;
    origin.to_bounds(Size::new(LEGEND_WIDTH, rows * LEGEND_ROW + 16.0))
}

fn text(content: impl Into<String>, position: Point, size: f32, fill: &str) -> svg_element::Text {
    svg_element::Text::new(content)
        .set("x", position.x())
        .set("y", position.y())
        .set("font-family", FONT_FAMILY)
        .set("font-size", size)
        .set("fill", fill)
}

fn render_node(node: &TopologyNode) -> svg_element::Group {
    let bounds = node_bounds(node);
    let center_x = bounds.min_x() + NODE_WIDTH / 2.0;
    let fill = match node.role() {
        Role::Spine => "#20223a",
        Role::Leaf => "#23293a",
    };

    let mut group = svg_element::Group::new()
        .set("id", node.id())
        .set("class", format!("node {}", node.role()))
        .add(
            svg_element::Rectangle::new()
                .set("x", bounds.min_x())
                .set("y", bounds.min_y())
                .set("width", NODE_WIDTH)
                .set("height", NODE_HEIGHT)
                .set("rx", 10)
                .set("fill", fill)
                .set("stroke", "#6366f1")
                .set("stroke-width", 1.5),
        )
        .add(
            text(node.label(), Point::new(center_x, bounds.min_y() + 20.0), 13.0, "#e2e8f0")
                .set("text-anchor", "middle")
                .set("font-weight", 600),
        )
        .add(
            text(node.model(), Point::new(center_x, bounds.min_y() + 36.0), 10.0, "#b0b0b0")
                .set("text-anchor", "middle"),
        );

    let ports = node.ports();
    let row_width = ports.len() as f32 * (BADGE_SIZE + BADGE_GAP) - BADGE_GAP;
    let mut x = center_x - row_width / 2.0;
    let y = bounds.max_y() - BADGE_SIZE - 10.0;
    for port in ports {
        group = group.add(render_badge(
            Point::new(x, y),
            &port.number().to_string(),
            port.kind(),
        ));
        x += BADGE_SIZE + BADGE_GAP;
    }

    group
}

fn render_badge(top_left: Point, content: &str, kind: PortKind) -> svg_element::Group {
    let (fill, stroke, color) = badge_palette(kind);
    let center = top_left.add_point(Point::new(BADGE_SIZE / 2.0, BADGE_SIZE / 2.0));

    svg_element::Group::new()
        .set("class", format!("port {kind}"))
        .add(
            svg_element::Rectangle::new()
                .set("x", top_left.x())
                .set("y", top_left.y())
                .set("width", BADGE_SIZE)
                .set("height", BADGE_SIZE)
                .set("rx", 6)
                .set("fill", fill)
                .set("stroke", stroke)
                .set("stroke-width", 2),
        )
        .add(
            text(content, center, 11.0, color)
                .set("text-anchor", "middle")
                .set("dominant-baseline", "central"),
        )
}

fn render_edge(
    nodes: &HashMap<&str, &TopologyNode>,
    edge: &TopologyEdge,
) -> Option<svg_element::Group> {
    let (Some(source), Some(target)) = (nodes.get(edge.source()), nodes.get(edge.target())) else {
        debug!(edge = edge.id(); "Skipping link with a missing endpoint");
        return None;
    };

    let (upper, lower) = if source.position().y() <= target.position().y() {
        (source, target)
    } else {
        (target, source)
    };
    let upper = node_bounds(upper);
    let lower = node_bounds(lower);
    let start = Point::new(upper.min_x() + NODE_WIDTH / 2.0, upper.max_y());
    let end = Point::new(lower.min_x() + NODE_WIDTH / 2.0, lower.min_y());

    let color = edge.color().color();
    let mut group = svg_element::Group::new()
        .set("id", edge.id())
        .set("class", "link")
        .add(
            svg_element::Line::new()
                .set("x1", start.x())
                .set("y1", start.y())
                .set("x2", end.x())
                .set("y2", end.y())
                .set("stroke", &color)
                .set("stroke-width", 2),
        );

    if !edge.label().is_empty() {
        let mid = start.midpoint(end);
        group = group.add(
            text(edge.label(), Point::new(mid.x(), mid.y() - 4.0), 10.0, edge.color().hex())
                .set("text-anchor", "middle"),
        );
    }

    Some(group)
}

fn render_legend(origin: Point) -> svg_element::Group {
    let mut group = svg_element::Group::new().set("class", "legend").add(
        svg_element::Rectangle::new()
            .set("x", origin.x())
            .set("y", origin.y())
            .set("width", LEGEND_WIDTH)
            .set("height", legend_bounds(origin).height())
            .set("rx", 14)
            .set("fill", "#2c303c")
            .set("stroke", "#333333")
            .set("stroke-width", 1.5),
    );

    let sample_ports = [1, 3, 10, 12];
    for (row, (kind, port)) in PortKind::all().into_iter().zip(sample_ports).enumerate() {
        let top = origin.y() + 8.0 + row as f32 * LEGEND_ROW + (LEGEND_ROW - BADGE_SIZE) / 2.0;
        let badge = Point::new(origin.x() + 16.0, top);
        group = group.add(render_badge(badge, &port.to_string(), kind));
        group = group.add(
            text(
                kind.legend_label(),
                Point::new(badge.x() + BADGE_SIZE + 10.0, top + BADGE_SIZE / 2.0),
                13.0,
                "#e2e8f0",
            )
            .set("dominant-baseline", "central"),
        );
    }

    group
}
