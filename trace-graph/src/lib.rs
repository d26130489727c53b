//! # trace-graph
//!
//! Read-only adjacency views over the current transaction topology.
//! The index is built once per topology load and answers per-hover queries
//! without touching the payload again.

pub mod highlight;
pub mod index;

pub use highlight::{link_highlighted, link_particles, node_emphasis, NodeEmphasis};
pub use index::{Direction, GraphIndex, NodeLink};
