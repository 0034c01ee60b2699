//! Turn-weighted distance over unused edges.
//!
//! Stepping onto a node nobody has visited hands the turn to the other
//! player, so it costs one turn and resets the step counter. Stepping onto a
//! visited node keeps the same player moving: zero turns, one extra step.
//!
//! The search runs one turn level at a time. Every node of level `t` enters
//! the queue with zero steps before any free edge is followed, so within a
//! level the queue is a plain BFS and the first discovery of a visited node
//! carries its fewest steps. Unvisited nodes found along the way wait for
//! level `t + 1`, where they all start at zero steps.

use std::collections::hash_map::Entry;
use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::NodeId;
use crate::graph::GraphModel;

/// `(turns, steps)` distance, ordered lexicographically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TurnDistance {
    /// Player switches on the way.
    pub turns: u32,
    /// Extra moves by the same player since the last switch.
    pub steps: u32,
}

impl TurnDistance {
    /// Stand-in for nodes with no path, larger than every real distance.
    pub const UNREACHABLE: TurnDistance = TurnDistance {
        turns: u32::MAX,
        steps: u32::MAX,
    };

    #[must_use]
    pub const fn new(turns: u32, steps: u32) -> Self {
        Self { turns, steps }
    }

    fn then_free(self) -> Self {
        Self::new(self.turns, self.steps + 1)
    }

    fn then_turn(self) -> Self {
        Self::new(self.turns + 1, 0)
    }
}

/// Turn distance from the nearest source, for every reachable node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnDistances {
    distance: FxHashMap<NodeId, TurnDistance>,
}

impl TurnDistances {
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<TurnDistance> {
        self.distance.get(&node).copied()
    }

    /// Distance, with unreachable nodes mapped to `TurnDistance::UNREACHABLE`.
    #[must_use]
    pub fn get_or_unreachable(&self, node: NodeId) -> TurnDistance {
        self.get(node).unwrap_or(TurnDistance::UNREACHABLE)
    }

    #[must_use]
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance.contains_key(&node)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.distance.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distance.is_empty()
    }
}

/// Level-by-level BFS from `sources` over the live graph.
#[must_use]
pub fn distance_turns(graph: &GraphModel, sources: &[NodeId]) -> TurnDistances {
    let mut distance = FxHashMap::default();
    let mut next_level = VecDeque::new();

    for &source in sources {
        if distance.insert(source, TurnDistance::default()).is_none() {
            next_level.push_back(source);
        }
    }

    while !next_level.is_empty() {
        let mut queue = std::mem::take(&mut next_level);
        while let Some(node) = queue.pop_front() {
            let here: TurnDistance = distance[&node];
            for edge in graph.live_edges(node) {
                let next = graph.edge(edge).other(node);
                if let Entry::Vacant(slot) = distance.entry(next) {
                    if graph.is_visited(next) {
                        slot.insert(here.then_free());
                        queue.push_back(next);
                    } else {
                        slot.insert(here.then_turn());
                        next_level.push_back(next);
                    }
                }
            }
        }
    }

    TurnDistances { distance }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn test_ordering_is_lexicographic() {
        assert!(TurnDistance::new(0, 9) < TurnDistance::new(1, 0));
        assert!(TurnDistance::new(2, 1) < TurnDistance::new(2, 3));
        assert!(TurnDistance::new(u32::MAX - 1, 0) < TurnDistance::UNREACHABLE);
    }

    #[test]
    fn test_unvisited_path_costs_turns() {
        let graph = path(4);
        let turns = distance_turns(&graph, &[NodeId(0)]);

        assert_eq!(turns.get(NodeId(0)), Some(TurnDistance::new(0, 0)));
        assert_eq!(turns.get(NodeId(1)), Some(TurnDistance::new(1, 0)));
        assert_eq!(turns.get(NodeId(3)), Some(TurnDistance::new(3, 0)));
    }

    #[test]
    fn test_visited_nodes_cost_steps() {
        let mut graph = path(4);
        graph.mark_visited(NodeId(1));
        graph.mark_visited(NodeId(2));
        let turns = distance_turns(&graph, &[NodeId(0)]);

        assert_eq!(turns.get(NodeId(1)), Some(TurnDistance::new(0, 1)));
        assert_eq!(turns.get(NodeId(2)), Some(TurnDistance::new(0, 2)));
        assert_eq!(turns.get(NodeId(3)), Some(TurnDistance::new(1, 0)));
    }

    #[test]
    fn test_visited_detour_stays_in_level() {
        // 0 - 1 - 2 and 0 - 3 - 2 where 3 is visited: 2 is one turn away
        // through either side.
        let mut builder = GraphBuilder::new();
        let n: Vec<_> = (0..4)
            .map(|_| builder.add_node(Node::new(Position::default())))
            .collect();
        builder.add_edge(n[0], n[1], false);
        builder.add_edge(n[1], n[2], false);
        builder.add_edge(n[0], n[3], false);
        builder.add_edge(n[3], n[2], false);
        let mut graph = builder.build().unwrap();
        graph.mark_visited(n[3]);

        let turns = distance_turns(&graph, &[n[0]]);
        assert_eq!(turns.get(n[3]), Some(TurnDistance::new(0, 1)));
        assert_eq!(turns.get(n[2]), Some(TurnDistance::new(1, 0)));
        assert_eq!(turns.get(n[1]), Some(TurnDistance::new(1, 0)));
    }

    #[test]
    fn test_unreachable_default() {
        let graph = path(2);
        let turns = distance_turns(&graph, &[]);
        assert_eq!(turns.get_or_unreachable(NodeId(1)), TurnDistance::UNREACHABLE);
    }
}
