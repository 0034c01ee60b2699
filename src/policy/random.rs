//! Uniformly careless player.

use super::scan::ScanOrder;
use super::{Decision, DecisionPolicy};
use crate::core::{GameRng, NodeId, Player};
use crate::graph::GraphModel;

/// Takes the first unused edge in a random scan order.
#[derive(Clone, Debug, Default)]
pub struct RandomWalk;

impl DecisionPolicy for RandomWalk {
    fn name(&self) -> &'static str {
        "Random player"
    }

    fn decide(&self, graph: &GraphModel, position: NodeId, _player: Player, rng: &mut GameRng) -> Decision {
        ScanOrder::for_node(graph, position, rng)
            .live_moves(graph, position)
            .next()
            .map_or(Decision::Forfeit, Decision::Move)
    }
}
