//! Construction input from a map collaborator.
//!
//! Nodes and edges are appended in order; their positions in the builder
//! become their `NodeId`/`EdgeId`. `build` validates the input instead of
//! panicking on bad indices.
//!
//! ```
//! use graph_walker::core::Player;
//! use graph_walker::graph::{GraphBuilder, Node, Position};
//!
//! let mut builder = GraphBuilder::new();
//! let exit = builder.add_node(Node::new(Position::new(0.0, 0.0)).with_exit(Player::P1));
//! let hub = builder.add_node(Node::new(Position::new(1.0, 0.0)));
//! builder.add_edge(exit, hub, false);
//!
//! let graph = builder.build().unwrap();
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.live_degree(hub), 1);
//! ```

use super::edge::Edge;
use super::model::GraphModel;
use super::node::Node;
use crate::core::{BuildError, EdgeId, NodeId};

/// Ordered node and edge lists awaiting validation.
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node, returning its ID.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Append an undirected edge, returning its ID.
    ///
    /// `used` pre-removes the edge (a wall in the map design).
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, used: bool) -> EdgeId {
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Edge::new(a, b, used));
        id
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node.index())
    }

    /// Mutable access to a node already added, e.g. to tag an exit later.
    pub fn node_mut(&mut self, node: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(node.index())
    }

    /// Validate and produce the graph.
    pub fn build(self) -> Result<GraphModel, BuildError> {
        if self.nodes.is_empty() {
            return Err(BuildError::EmptyGraph);
        }

        let node_count = self.nodes.len();
        for (i, edge) in self.edges.iter().enumerate() {
            for node in [edge.a, edge.b] {
                if node.index() >= node_count {
                    return Err(BuildError::EndpointOutOfRange {
                        edge: i,
                        node,
                        node_count,
                    });
                }
            }
            if edge.a == edge.b {
                return Err(BuildError::SelfLoop { edge: i, node: edge.a });
            }
        }

        Ok(GraphModel::from_parts(self.nodes, self.edges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Position;

    fn plain() -> Node {
        Node::new(Position::default())
    }

    #[test]
    fn test_ids_follow_insertion_order() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_node(plain());
        let b = builder.add_node(plain());
        let e = builder.add_edge(a, b, false);

        assert_eq!(a, NodeId(0));
        assert_eq!(b, NodeId(1));
        assert_eq!(e, EdgeId(0));
        assert_eq!(builder.node_count(), 2);
        assert_eq!(builder.edge_count(), 1);
    }

    #[test]
    fn test_empty_graph_rejected() {
        assert_eq!(GraphBuilder::new().build().unwrap_err(), BuildError::EmptyGraph);
    }

    #[test]
    fn test_out_of_range_endpoint_rejected() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_node(plain());
        builder.add_edge(a, NodeId(5), false);

        assert_eq!(
            builder.build().unwrap_err(),
            BuildError::EndpointOutOfRange {
                edge: 0,
                node: NodeId(5),
                node_count: 1
            }
        );
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_node(plain());
        let b = builder.add_node(plain());
        builder.add_edge(a, b, false);
        builder.add_edge(b, b, false);

        assert_eq!(
            builder.build().unwrap_err(),
            BuildError::SelfLoop { edge: 1, node: b }
        );
    }

    #[test]
    fn test_node_mut_tags_exit() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_node(plain());
        if let Some(node) = builder.node_mut(a) {
            *node = node.clone().with_exit(crate::core::Player::P2);
        }
        let graph = builder.build().unwrap();
        assert_eq!(graph.exits(crate::core::Player::P2), &[a]);
    }
}
