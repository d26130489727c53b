//! Transaction topology schema with dual edge-endpoint representation.
//!
//! The rendering engine rewrites plain `"A" -> "B"` links into object-linked
//! nodes in place after layout, so an endpoint arrives either as a bare id or
//! as an object carrying an `id`. Both forms are normalized at ingestion;
//! nothing downstream branches on representation.

use serde::{Deserialize, Serialize};

/// A single account node. Identity only; all other facts about an account
/// live in the analysis report, if it was flagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountNode {
    pub id: String,
}

/// One side of an edge: a bare account id, or a node object with an `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EndpointRef {
    Id(String),
    Node { id: String },
}

impl EndpointRef {
    /// Resolve either representation to the bare account id.
    pub fn id(&self) -> &str {
        match self {
            EndpointRef::Id(id) => id,
            EndpointRef::Node { id } => id,
        }
    }
}

/// A directed transaction edge as received from the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: EndpointRef,
    pub target: EndpointRef,
}

impl Edge {
    /// Canonical `{source_id, target_id}` form.
    pub fn resolved(&self) -> ResolvedEdge {
        ResolvedEdge {
            source: self.source.id().to_string(),
            target: self.target.id().to_string(),
        }
    }
}

/// An edge with both endpoints resolved to bare ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEdge {
    pub source: String,
    pub target: String,
}

impl ResolvedEdge {
    /// Whether the edge has `node` on either side.
    pub fn touches(&self, node: &str) -> bool {
        self.source == node || self.target == node
    }
}

/// The node/edge graph for one analysis session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    pub nodes: Vec<AccountNode>,
    pub links: Vec<Edge>,
}

impl Topology {
    /// All links in edge-list order, endpoints resolved.
    pub fn resolved_links(&self) -> impl Iterator<Item = ResolvedEdge> + '_ {
        self.links.iter().map(Edge::resolved)
    }

    /// Whether an id appears in the node list. Edges and ring member lists
    /// may reference ids that do not; callers must tolerate those.
    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }
}
