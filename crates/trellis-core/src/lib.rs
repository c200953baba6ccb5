//! Trellis Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Trellis crates:
//!
//! - **Description**: The typed fabric document ([`description::FabricDescription`])
//! - **Topology**: Positioned device nodes and links ([`topology::Topology`])
//! - **Geometry**: Canvas coordinates and bounds ([`geometry`] module)
//! - **Colors**: CSS color handling and the link palette ([`color`] module)

pub mod color;
pub mod description;
pub mod geometry;
pub mod topology;
