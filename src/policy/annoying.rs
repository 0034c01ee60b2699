//! Adversarial player that plays against the opponent's route home.
//!
//! It measures turn distance from the *opponent's* exits, not its own, and
//! tries four tactics in order, each over the same random scan:
//!
//! 1. `FreeMove`: same opponent turns, more steps (burn a move, give nothing)
//! 2. `PushAway`: more opponent turns
//! 3. `Hold`: same opponent turns
//! 4. `Survive`: anything legal
//!
//! Unreachable nodes count as `TurnDistance::UNREACHABLE`.

use serde::{Deserialize, Serialize};

use super::scan::ScanOrder;
use super::{Decision, DecisionPolicy};
use crate::core::{GameRng, NodeId, Player};
use crate::graph::GraphModel;
use crate::search::{distance_turns, TurnDistance};

/// One escalation step of the annoying player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tactic {
    FreeMove,
    PushAway,
    Hold,
    Survive,
}

impl Tactic {
    /// Tactics in the order they are tried.
    pub const ESCALATION: [Tactic; 4] = [Tactic::FreeMove, Tactic::PushAway, Tactic::Hold, Tactic::Survive];

    /// Whether moving from distance `here` to `there` satisfies this tactic.
    #[must_use]
    pub fn accepts(self, here: TurnDistance, there: TurnDistance) -> bool {
        match self {
            Tactic::FreeMove => there.turns == here.turns && there.steps > here.steps,
            Tactic::PushAway => there.turns > here.turns,
            Tactic::Hold => there.turns == here.turns,
            Tactic::Survive => true,
        }
    }
}

/// Stalls the opponent instead of racing to its own exit.
#[derive(Clone, Debug, Default)]
pub struct Annoying;

impl Annoying {
    /// The move and the tactic that picked it, or `None` without live edges.
    pub fn choose(
        &self,
        graph: &GraphModel,
        position: NodeId,
        player: Player,
        rng: &mut GameRng,
    ) -> Option<(NodeId, Tactic)> {
        let distances = distance_turns(graph, graph.exits(player.other()));
        let here = distances.get_or_unreachable(position);
        let order = ScanOrder::for_node(graph, position, rng);

        Tactic::ESCALATION.into_iter().find_map(|tactic| {
            order
                .live_moves(graph, position)
                .find(|&next| tactic.accepts(here, distances.get_or_unreachable(next)))
                .map(|next| (next, tactic))
        })
    }
}

impl DecisionPolicy for Annoying {
    fn name(&self) -> &'static str {
        "Annoying"
    }

    fn decide(&self, graph: &GraphModel, position: NodeId, player: Player, rng: &mut GameRng) -> Decision {
        match self.choose(graph, position, player, rng) {
            Some((next, tactic)) => {
                log::debug!("annoying {} picks {} via {:?}", player, next, tactic);
                Decision::Move(next)
            }
            None => Decision::Forfeit,
        }
    }
}
