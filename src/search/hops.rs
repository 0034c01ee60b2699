//! Plain breadth-first hop distance over unused edges.

use std::collections::hash_map::Entry;
use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::core::NodeId;
use crate::graph::GraphModel;

/// Hop count from the nearest source, for every reachable node.
///
/// Unreachable nodes have no entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HopDistances {
    distance: FxHashMap<NodeId, u32>,
}

impl HopDistances {
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<u32> {
        self.distance.get(&node).copied()
    }

    #[must_use]
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance.contains_key(&node)
    }

    /// Number of reachable nodes, sources included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.distance.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distance.is_empty()
    }
}

/// BFS from `sources` over the live graph.
pub fn distance_hops(graph: &GraphModel, sources: &[NodeId]) -> HopDistances {
    let mut distance = FxHashMap::default();
    let mut queue = VecDeque::new();

    for &source in sources {
        if distance.insert(source, 0).is_none() {
            queue.push_back(source);
        }
    }

    while let Some(node) = queue.pop_front() {
        let here = distance[&node];
        for edge in graph.live_edges(node) {
            let next = graph.edge(edge).other(node);
            if let Entry::Vacant(slot) = distance.entry(next) {
                slot.insert(here + 1);
                queue.push_back(next);
            }
        }
    }

    HopDistances { distance }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EdgeId;
    use crate::graph::{GraphBuilder, Node, Position};

    fn path(len: usize) -> GraphModel {
        let mut builder = GraphBuilder::new();
        let nodes: Vec<_> = (0..len)
            .map(|_| builder.add_node(Node::new(Position::default())))
            .collect();
        for pair in nodes.windows(2) {
            builder.add_edge(pair[0], pair[1], false);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_path_distances() {
        let graph = path(4);
        let hops = distance_hops(&graph, &[NodeId(0)]);

        assert_eq!(hops.get(NodeId(0)), Some(0));
        assert_eq!(hops.get(NodeId(3)), Some(3));
        assert_eq!(hops.len(), 4);
    }

    #[test]
    fn test_used_edge_blocks() {
        let mut graph = path(4);
        graph.mark_used(EdgeId(1));
        let hops = distance_hops(&graph, &[NodeId(0)]);

        assert_eq!(hops.get(NodeId(1)), Some(1));
        assert!(!hops.is_reachable(NodeId(2)));
        assert_eq!(hops.get(NodeId(3)), None);
    }

    #[test]
    fn test_multiple_sources() {
        let graph = path(5);
        let hops = distance_hops(&graph, &[NodeId(0), NodeId(4)]);

        assert_eq!(hops.get(NodeId(1)), Some(1));
        assert_eq!(hops.get(NodeId(2)), Some(2));
        assert_eq!(hops.get(NodeId(3)), Some(1));
    }

    #[test]
    fn test_no_sources() {
        let graph = path(3);
        assert!(distance_hops(&graph, &[]).is_empty());
    }
}
