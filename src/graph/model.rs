//! The graph arena: shared topology plus per-game flags.
//!
//! Topology (nodes, edges, incidence lists, exit lists) never changes after
//! construction and is shared behind an `Arc`. The mutable flags use `im`
//! persistent vectors, so cloning a `GraphModel` is O(1). The pure
//! `Game::play` path relies on that.
//!
//! No legality checks happen here; `Game` decides what may be marked.

use std::sync::Arc;

use im::Vector;
use smallvec::SmallVec;

use super::edge::Edge;
use super::node::Node;
use crate::core::{EdgeId, NodeId, Player, PlayerPair};

/// Incident edge list, stored inline up to 8 entries.
pub type Incidence = SmallVec<[EdgeId; 8]>;

#[derive(Clone, Debug)]
struct Topology {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    incident: Vec<Incidence>,
    exits: PlayerPair<Vec<NodeId>>,
}

/// Node/edge arenas with mutable `used`, `visited` and `pruned` flags.
#[derive(Clone, Debug)]
pub struct GraphModel {
    topology: Arc<Topology>,
    used: Vector<bool>,
    visited: Vector<bool>,
    pruned: Vector<bool>,
}

impl GraphModel {
    /// Assemble a model from validated parts.
    ///
    /// Edges flagged `initially_used` start used and mark both endpoints
    /// visited.
    pub(crate) fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let mut incident: Vec<Incidence> = vec![SmallVec::new(); nodes.len()];
        let mut visited = vec![false; nodes.len()];

        for (i, edge) in edges.iter().enumerate() {
            let id = EdgeId(i as u32);
            incident[edge.a.index()].push(id);
            incident[edge.b.index()].push(id);
            if edge.initially_used {
                visited[edge.a.index()] = true;
                visited[edge.b.index()] = true;
            }
        }

        let mut exits: PlayerPair<Vec<NodeId>> = PlayerPair::default();
        for (i, node) in nodes.iter().enumerate() {
            if let Some(player) = node.exit {
                exits[player].push(NodeId(i as u32));
            }
        }

        let used = edges.iter().map(|e| e.initially_used).collect();
        let pruned = Vector::from(vec![false; nodes.len()]);

        Self {
            topology: Arc::new(Topology {
                nodes,
                edges,
                incident,
                exits,
            }),
            used,
            visited: Vector::from(visited),
            pruned,
        }
    }

    // === Topology ===

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.topology.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.topology.edges.len()
    }

    /// Whether `node` is a valid index in this graph.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    /// Panics if `node` is out of range; check with `contains` first.
    #[must_use]
    pub fn node(&self, node: NodeId) -> &Node {
        &self.topology.nodes[node.index()]
    }

    /// Panics if `edge` is out of range.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> &Edge {
        &self.topology.edges[edge.index()]
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.node_count() as u32).map(NodeId)
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.edge_count() as u32).map(EdgeId)
    }

    /// All edges incident to `node`, used or not, in insertion order.
    #[must_use]
    pub fn incident(&self, node: NodeId) -> &[EdgeId] {
        &self.topology.incident[node.index()]
    }

    /// Exit nodes of `player`, in node order.
    #[must_use]
    pub fn exits(&self, player: Player) -> &[NodeId] {
        &self.topology.exits[player]
    }

    // === Live edges ===

    /// Unused edges incident to `node`, in insertion order.
    pub fn live_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.incident(node).iter().copied().filter(|&e| !self.is_used(e))
    }

    #[must_use]
    pub fn live_degree(&self, node: NodeId) -> usize {
        self.live_edges(node).count()
    }

    /// First unused edge connecting `from` and `to`, in `from`'s incident order.
    #[must_use]
    pub fn live_edge_between(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        self.live_edges(from)
            .find(|&e| self.edge(e).other(from) == to)
    }

    // === Flags ===

    #[must_use]
    pub fn is_used(&self, edge: EdgeId) -> bool {
        self.used[edge.index()]
    }

    /// Mark an edge used. Returns true if it was unused before.
    pub fn mark_used(&mut self, edge: EdgeId) -> bool {
        !self.used.set(edge.index(), true)
    }

    /// Number of used edges.
    #[must_use]
    pub fn used_count(&self) -> usize {
        self.used.iter().filter(|&&u| u).count()
    }

    #[must_use]
    pub fn is_visited(&self, node: NodeId) -> bool {
        self.visited[node.index()]
    }

    /// Mark a node visited. Returns true if it was unvisited before.
    pub fn mark_visited(&mut self, node: NodeId) -> bool {
        !self.visited.set(node.index(), true)
    }

    #[must_use]
    pub fn is_pruned(&self, node: NodeId) -> bool {
        self.pruned[node.index()]
    }

    /// Mark a node pruned. Returns true if it was not pruned before.
    pub fn mark_pruned(&mut self, node: NodeId) -> bool {
        !self.pruned.set(node.index(), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Position;

    fn triangle_with_parallel() -> GraphModel {
        let nodes = vec![
            Node::new(Position::default()).with_exit(Player::P1),
            Node::new(Position::default()),
            Node::new(Position::default()).with_exit(Player::P2),
        ];
        let edges = vec![
            Edge::new(NodeId(0), NodeId(1), false),
            Edge::new(NodeId(1), NodeId(2), false),
            Edge::new(NodeId(1), NodeId(2), false),
            Edge::new(NodeId(2), NodeId(0), true),
        ];
        GraphModel::from_parts(nodes, edges)
    }

    #[test]
    fn test_incidence_is_symmetric() {
        let graph = triangle_with_parallel();
        for edge in graph.edge_ids() {
            let e = *graph.edge(edge);
            assert!(graph.incident(e.a).contains(&edge));
            assert!(graph.incident(e.b).contains(&edge));
        }
        assert_eq!(graph.incident(NodeId(1)).len(), 3);
    }

    #[test]
    fn test_initially_used_marks_endpoints_visited() {
        let graph = triangle_with_parallel();
        assert!(graph.is_used(EdgeId(3)));
        assert!(graph.is_visited(NodeId(0)));
        assert!(graph.is_visited(NodeId(2)));
        assert!(!graph.is_visited(NodeId(1)));
    }

    #[test]
    fn test_exit_lists() {
        let graph = triangle_with_parallel();
        assert_eq!(graph.exits(Player::P1), &[NodeId(0)]);
        assert_eq!(graph.exits(Player::P2), &[NodeId(2)]);
    }

    #[test]
    fn test_parallel_edges_are_distinct() {
        let mut graph = triangle_with_parallel();
        assert_eq!(graph.live_edge_between(NodeId(1), NodeId(2)), Some(EdgeId(1)));

        assert!(graph.mark_used(EdgeId(1)));
        assert_eq!(graph.live_edge_between(NodeId(1), NodeId(2)), Some(EdgeId(2)));

        assert!(graph.mark_used(EdgeId(2)));
        assert_eq!(graph.live_edge_between(NodeId(1), NodeId(2)), None);
    }

    #[test]
    fn test_mark_used_reports_first_transition_only() {
        let mut graph = triangle_with_parallel();
        assert!(graph.mark_used(EdgeId(0)));
        assert!(!graph.mark_used(EdgeId(0)));
        assert!(graph.is_used(EdgeId(0)));
        assert_eq!(graph.used_count(), 2);
    }

    #[test]
    fn test_clone_is_independent() {
        let graph = triangle_with_parallel();
        let mut branch = graph.clone();
        branch.mark_used(EdgeId(0));
        branch.mark_visited(NodeId(1));

        assert!(!graph.is_used(EdgeId(0)));
        assert!(!graph.is_visited(NodeId(1)));
        assert_eq!(branch.live_degree(NodeId(0)), 0);
    }
}
