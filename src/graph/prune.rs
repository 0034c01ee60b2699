//! Dead-end pruning.
//!
//! After the token leaves a node, any non-exit node left with a single unused
//! edge can only be entered and never left through anything new, so that
//! last edge is removed and the check continues at its far end. A node left
//! with no unused edges is reported as pruned.
//!
//! The cascade is an explicit loop: each step uses up one edge, so it runs at
//! most `edge_count` times whatever the map looks like.
//!
//! Exit nodes always stop the cascade. An `occupied` node stops it too; the
//! construction pass uses this for the start node. After a move the engine
//! passes `None`, so a chain may run through the token's new node and strand
//! it.

use super::model::GraphModel;
use crate::core::{EdgeId, NodeId};

/// Nodes and edges removed by one pruning run, in removal order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PruneReport {
    /// Nodes newly marked pruned.
    pub nodes: Vec<NodeId>,
    /// Edges marked used by pruning.
    pub edges: Vec<EdgeId>,
}

impl PruneReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Prune starting at `start`, never pivoting on `occupied`.
pub fn prune(graph: &mut GraphModel, start: NodeId, occupied: Option<NodeId>) -> PruneReport {
    let mut report = PruneReport::default();
    prune_into(graph, start, occupied, &mut report);
    report
}

/// Prune every node in index order. Run once after construction, with the
/// start node as `occupied`.
pub fn prune_all(graph: &mut GraphModel, occupied: Option<NodeId>) -> PruneReport {
    let mut report = PruneReport::default();
    for node in graph.node_ids() {
        prune_into(graph, node, occupied, &mut report);
    }
    report
}

/// True when no prunable node has exactly one unused edge.
#[must_use]
pub fn is_stable(graph: &GraphModel, occupied: Option<NodeId>) -> bool {
    graph.node_ids().all(|node| {
        graph.node(node).is_exit() || Some(node) == occupied || graph.live_degree(node) != 1
    })
}

fn prune_into(
    graph: &mut GraphModel,
    start: NodeId,
    occupied: Option<NodeId>,
    report: &mut PruneReport,
) {
    let mut cursor = Some(start);

    while let Some(node) = cursor.take() {
        if graph.node(node).is_exit() || Some(node) == occupied {
            break;
        }

        let (first, second) = {
            let mut live = graph.live_edges(node);
            (live.next(), live.next())
        };

        match (first, second) {
            (None, _) => {
                if graph.mark_pruned(node) {
                    report.nodes.push(node);
                }
            }
            (Some(edge), None) => {
                if graph.mark_pruned(node) {
                    report.nodes.push(node);
                }
                graph.mark_used(edge);
                report.edges.push(edge);

                let next = graph.edge(edge).other(node);
                log::trace!("pruned {} at {}, continuing at {}", edge, node, next);
                cursor = Some(next);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;
    use crate::graph::{GraphBuilder, Node, Position};

    fn plain() -> Node {
        Node::new(Position::default())
    }

    /// exit(0) - 1 - 2 - 3 - 4(hub) with 4 also linked to 5 and 6.
    fn chain_into_hub() -> GraphModel {
        let mut builder = GraphBuilder::new();
        let nodes: Vec<_> = (0..7)
            .map(|i| {
                if i == 0 {
                    builder.add_node(plain().with_exit(Player::P1))
                } else {
                    builder.add_node(plain())
                }
            })
            .collect();
        builder.add_edge(nodes[0], nodes[1], false);
        builder.add_edge(nodes[1], nodes[2], false);
        builder.add_edge(nodes[2], nodes[3], false);
        builder.add_edge(nodes[3], nodes[4], false);
        builder.add_edge(nodes[4], nodes[5], false);
        builder.add_edge(nodes[4], nodes[6], false);
        builder.add_edge(nodes[5], nodes[6], false);
        builder.build().unwrap()
    }

    #[test]
    fn test_two_live_edges_stop() {
        let mut graph = chain_into_hub();
        let report = prune(&mut graph, NodeId(2), None);
        assert!(report.is_empty());
    }

    #[test]
    fn test_cascade_stops_at_exit() {
        let mut graph = chain_into_hub();
        // Cut the hub side so 3 becomes a dead end.
        graph.mark_used(EdgeId(3));

        let report = prune(&mut graph, NodeId(3), None);

        assert_eq!(report.nodes, vec![NodeId(3), NodeId(2), NodeId(1)]);
        assert_eq!(report.edges, vec![EdgeId(2), EdgeId(1), EdgeId(0)]);
        assert!(!graph.is_pruned(NodeId(0)));
        assert!(is_stable(&graph, None));
    }

    #[test]
    fn test_cascade_stops_at_occupied_node() {
        let mut graph = chain_into_hub();
        graph.mark_used(EdgeId(3));

        let report = prune(&mut graph, NodeId(3), Some(NodeId(1)));

        assert_eq!(report.nodes, vec![NodeId(3), NodeId(2)]);
        assert_eq!(report.edges, vec![EdgeId(2), EdgeId(1)]);
        assert!(!graph.is_used(EdgeId(0)));
    }

    #[test]
    fn test_exit_is_never_a_pivot() {
        let mut graph = chain_into_hub();
        graph.mark_used(EdgeId(1));

        let report = prune(&mut graph, NodeId(0), None);
        assert!(report.is_empty());
        assert!(!graph.is_used(EdgeId(0)));
    }

    #[test]
    fn test_dead_end_reported_once() {
        let mut graph = chain_into_hub();
        for edge in graph.incident(NodeId(2)).to_vec() {
            graph.mark_used(edge);
        }

        assert_eq!(prune(&mut graph, NodeId(2), None).nodes, vec![NodeId(2)]);
        assert!(prune(&mut graph, NodeId(2), None).is_empty());
    }

    #[test]
    fn test_prune_all_is_idempotent() {
        let mut graph = chain_into_hub();
        graph.mark_used(EdgeId(3));

        let first = prune_all(&mut graph, None);
        assert!(!first.is_empty());
        assert!(is_stable(&graph, None));

        let used_before = graph.used_count();
        let second = prune_all(&mut graph, None);
        assert!(second.is_empty());
        assert_eq!(graph.used_count(), used_before);
    }
}
