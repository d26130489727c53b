//! GraphIndex: symmetric neighbor sets and per-node directed link ledgers.

use rustc_hash::{FxHashMap, FxHashSet};

use trace_core::models::Topology;

/// Direction of a link relative to the queried node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The queried node is the resolved target.
    In,
    /// The queried node is the resolved source.
    Out,
}

/// One ledger entry: the far endpoint of an edge touching the queried node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLink {
    pub connected_to: String,
    pub direction: Direction,
}

/// Adjacency views derived from one topology, immutable once built.
///
/// Neighbor sets are symmetric by construction: every edge contributes to
/// both endpoints regardless of direction. Ledger entries keep edge-list
/// order, so queries are stable across calls.
#[derive(Debug, Default)]
pub struct GraphIndex {
    neighbors: FxHashMap<String, FxHashSet<String>>,
    links: FxHashMap<String, Vec<NodeLink>>,
}

impl GraphIndex {
    /// Build the index with one pass over the edge list.
    ///
    /// Endpoints absent from the node list are indexed anyway; they show up
    /// as opaque ids with no additional facts.
    pub fn build(topology: &Topology) -> Self {
        let known: FxHashSet<&str> = topology.nodes.iter().map(|n| n.id.as_str()).collect();

        let mut index = Self::default();
        for edge in topology.resolved_links() {
            for id in [edge.source.as_str(), edge.target.as_str()] {
                if !known.contains(id) {
                    tracing::debug!("graph: edge references unknown account {id}");
                }
            }

            index
                .neighbors
                .entry(edge.source.clone())
                .or_default()
                .insert(edge.target.clone());
            index
                .neighbors
                .entry(edge.target.clone())
                .or_default()
                .insert(edge.source.clone());

            index.links.entry(edge.source.clone()).or_default().push(NodeLink {
                connected_to: edge.target.clone(),
                direction: Direction::Out,
            });
            index.links.entry(edge.target.clone()).or_default().push(NodeLink {
                connected_to: edge.source.clone(),
                direction: Direction::In,
            });
        }
        index
    }

    /// Accounts adjacent to `node`, in no particular order.
    /// Empty for unknown nodes or an empty topology; never an error.
    pub fn neighbors(&self, node: &str) -> impl Iterator<Item = &str> + '_ {
        self.neighbors
            .get(node)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Whether `a` and `b` share an edge in either direction.
    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        self.neighbors.get(a).is_some_and(|set| set.contains(b))
    }

    /// Directed link ledger for `node`, in edge-list order.
    pub fn links(&self, node: &str) -> &[NodeLink] {
        self.links.get(node).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct neighbors of `node`.
    pub fn degree(&self, node: &str) -> usize {
        self.neighbors.get(node).map_or(0, FxHashSet::len)
    }
}
