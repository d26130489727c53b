//! Hover emphasis: which nodes and links the renderer should foreground
//! while a pointer rests on a node.

use trace_core::models::ResolvedEdge;

use crate::index::GraphIndex;

/// Visual weight of a node under the current hover target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeEmphasis {
    /// The hovered node itself.
    Focus,
    /// Directly connected to the hovered node.
    Adjacent,
    /// Everything else while a hover target is active.
    Dimmed,
    /// No hover target; normal palette applies.
    Normal,
}

/// Classify `node` against the current hover target.
pub fn node_emphasis(index: &GraphIndex, hover: Option<&str>, node: &str) -> NodeEmphasis {
    match hover {
        None => NodeEmphasis::Normal,
        Some(h) if h == node => NodeEmphasis::Focus,
        Some(h) if index.are_adjacent(h, node) => NodeEmphasis::Adjacent,
        Some(_) => NodeEmphasis::Dimmed,
    }
}

/// Whether a link should be drawn highlighted under the hover target.
pub fn link_highlighted(hover: Option<&str>, edge: &ResolvedEdge) -> bool {
    hover.is_some_and(|h| edge.touches(h))
}

/// Directional particle count for a link: 4 on edges touching the hover
/// target, 0 on the rest while hovering, 2 when nothing is hovered.
pub fn link_particles(hover: Option<&str>, edge: &ResolvedEdge) -> u8 {
    match hover {
        Some(h) if edge.touches(h) => 4,
        Some(_) => 0,
        None => 2,
    }
}
