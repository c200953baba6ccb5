//! Example: Driving an editing session
//!
//! This example loads a preset, edits the generated graph the way an
//! interactive renderer would, and shows that the next text change
//! regenerates the topology from the description.

use trellis::{
    geometry::Point,
    serialize::PRESETS,
    session::{Edit, Session},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Available presets:");
    for preset in &PRESETS {
        println!("  {:<12} {}", preset.name, preset.summary());
    }

    let mut session = Session::new();
    session.apply_preset("Medium EBGP");
    println!(
        "\n{}: valid={}, {} nodes, {} links",
        session.fabric_name(),
        session.is_valid(),
        session.topology().nodes().len(),
        session.topology().edges().len()
    );

    session.on_user_edit(Edit::MoveNode {
        id: "spine-2".to_string(),
        position: Point::new(420.0, 10.0),
    })?;
    session.on_user_edit(Edit::DeleteNode {
        id: "leaf-4".to_string(),
    })?;
    println!(
        "After edits: {} nodes, {} links",
        session.topology().nodes().len(),
        session.topology().edges().len()
    );

    // A broken edit keeps the current graph.
    session.on_text_change("kind: Fabric\nspec: [");
    println!(
        "Broken text: valid={}, {} nodes",
        session.is_valid(),
        session.topology().nodes().len()
    );

    session.apply_preset("Small ISIS");
    println!(
        "Small ISIS: {} nodes, {} links",
        session.topology().nodes().len(),
        session.topology().edges().len()
    );

    println!("\nExported description:\n{}", session.export_text()?);
    Ok(())
}
