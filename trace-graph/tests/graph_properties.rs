//! Property tests for the adjacency index.

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use trace_core::models::{AccountNode, Edge, EndpointRef, Topology};
use trace_graph::{Direction, GraphIndex};

const NODE_COUNT: usize = 12;

fn node_id(i: usize) -> String {
    format!("ACC_{i:03}")
}

/// Random edge lists over a small fixed node universe. The boolean per
/// endpoint picks the bare-id or object representation.
fn edge_strategy() -> impl Strategy<Value = Vec<(usize, usize, bool, bool)>> {
    prop::collection::vec(
        (0..NODE_COUNT, 0..NODE_COUNT, any::<bool>(), any::<bool>()),
        0..40,
    )
}

fn endpoint(i: usize, as_object: bool) -> EndpointRef {
    if as_object {
        EndpointRef::Node { id: node_id(i) }
    } else {
        EndpointRef::Id(node_id(i))
    }
}

fn build_topology(edges: &[(usize, usize, bool, bool)]) -> Topology {
    Topology {
        nodes: (0..NODE_COUNT)
            .map(|i| AccountNode { id: node_id(i) })
            .collect(),
        links: edges
            .iter()
            .map(|&(s, t, s_obj, t_obj)| Edge {
                source: endpoint(s, s_obj),
                target: endpoint(t, t_obj),
            })
            .collect(),
    }
}

proptest! {
    #[test]
    fn neighbor_sets_are_symmetric(edges in edge_strategy()) {
        let index = GraphIndex::build(&build_topology(&edges));

        for a in 0..NODE_COUNT {
            for b in 0..NODE_COUNT {
                prop_assert_eq!(
                    index.are_adjacent(&node_id(a), &node_id(b)),
                    index.are_adjacent(&node_id(b), &node_id(a)),
                    "adjacency must be symmetric for {} and {}", a, b
                );
            }
        }
    }

    #[test]
    fn link_targets_equal_neighbor_set(edges in edge_strategy()) {
        let index = GraphIndex::build(&build_topology(&edges));

        for i in 0..NODE_COUNT {
            let id = node_id(i);
            let from_links: FxHashSet<&str> = index
                .links(&id)
                .iter()
                .map(|l| l.connected_to.as_str())
                .collect();
            let from_neighbors: FxHashSet<&str> = index.neighbors(&id).collect();
            prop_assert_eq!(from_links, from_neighbors);
        }
    }

    #[test]
    fn directions_match_edge_orientation(edges in edge_strategy()) {
        let index = GraphIndex::build(&build_topology(&edges));

        for &(s, t, _, _) in &edges {
            let source = node_id(s);
            let target = node_id(t);
            let has_out = index.links(&source).iter().any(|l| {
                l.connected_to == target && l.direction == Direction::Out
            });
            prop_assert!(has_out);
            let has_in = index.links(&target).iter().any(|l| {
                l.connected_to == source && l.direction == Direction::In
            });
            prop_assert!(has_in);
        }
    }

    #[test]
    fn representation_does_not_change_views(edges in edge_strategy()) {
        // Same edge list, once as written, once forced to bare ids.
        let mixed = GraphIndex::build(&build_topology(&edges));
        let bare_edges: Vec<_> = edges
            .iter()
            .map(|&(s, t, _, _)| (s, t, false, false))
            .collect();
        let bare = GraphIndex::build(&build_topology(&bare_edges));

        for i in 0..NODE_COUNT {
            let id = node_id(i);
            prop_assert_eq!(mixed.links(&id), bare.links(&id));
            let m: FxHashSet<&str> = mixed.neighbors(&id).collect();
            let b: FxHashSet<&str> = bare.neighbors(&id).collect();
            prop_assert_eq!(m, b);
        }
    }
}
