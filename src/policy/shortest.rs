//! Greedy players that walk downhill towards their own exits.
//!
//! Both give up when their exits are out of reach, or when no neighbour is
//! strictly closer than where they stand.

use super::scan::ScanOrder;
use super::{Decision, DecisionPolicy};
use crate::core::{GameRng, NodeId, Player};
use crate::graph::GraphModel;
use crate::search::{distance_hops, distance_turns};

/// Minimises hop count to its own exits.
///
/// Happily walks into a turn switch even when a slightly longer chain of free
/// moves would have reached the exit sooner.
#[derive(Clone, Debug, Default)]
pub struct ShortestPath;

impl DecisionPolicy for ShortestPath {
    fn name(&self) -> &'static str {
        "Shortest path"
    }

    fn decide(&self, graph: &GraphModel, position: NodeId, player: Player, rng: &mut GameRng) -> Decision {
        let hops = distance_hops(graph, graph.exits(player));
        let Some(here) = hops.get(position) else {
            return Decision::Forfeit;
        };

        ScanOrder::for_node(graph, position, rng)
            .live_moves(graph, position)
            .find(|&next| hops.get(next).is_some_and(|there| there < here))
            .map_or(Decision::Forfeit, Decision::Move)
    }
}

/// Minimises `(turns, steps)` to its own exits.
#[derive(Clone, Debug, Default)]
pub struct ShortestTurns;

impl DecisionPolicy for ShortestTurns {
    fn name(&self) -> &'static str {
        "Shortest turns"
    }

    fn decide(&self, graph: &GraphModel, position: NodeId, player: Player, rng: &mut GameRng) -> Decision {
        let distances = distance_turns(graph, graph.exits(player));
        let Some(here) = distances.get(position) else {
            return Decision::Forfeit;
        };

        ScanOrder::for_node(graph, position, rng)
            .live_moves(graph, position)
            .find(|&next| distances.get(next).is_some_and(|there| there < here))
            .map_or(Decision::Forfeit, Decision::Move)
    }
}
