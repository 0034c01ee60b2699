//! Change notifications.
//!
//! Every engine call returns the events it caused, in order. Each carries the
//! node/edge indices and player tag a renderer needs to update visuals. Move
//! events also say who chose the move, so a network layer can tell the moves
//! to broadcast from the ones a mirrored game replays on its own.

use serde::{Deserialize, Serialize};

use super::record::MoveSource;
use super::state::Outcome;
use crate::core::{EdgeId, NodeId, Player};
use crate::graph::PruneReport;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// `player` moved the token along `edge`, which is now used.
    EdgeTraversed {
        edge: EdgeId,
        from: NodeId,
        to: NodeId,
        player: Player,
        source: MoveSource,
    },

    /// `player` passed without moving.
    Passed {
        node: NodeId,
        player: Player,
        source: MoveSource,
    },

    /// Pruning marked `edge` used.
    EdgePruned { edge: EdgeId },

    /// Pruning found `node` to be a dead end.
    NodePruned { node: NodeId },

    /// The token reached `node` for the first time.
    NodeVisited { node: NodeId },

    /// The move passed to `player`.
    TurnChanged { player: Player },

    /// Decision point for a human seat; `attempt_move` is open.
    AwaitingInput { player: Player, node: NodeId },

    GameOver { outcome: Outcome },
}

impl GameEvent {
    /// Pruning events for a report, nodes before edges.
    pub fn from_prune_report(report: PruneReport) -> impl Iterator<Item = GameEvent> {
        let nodes = report.nodes.into_iter().map(|node| GameEvent::NodePruned { node });
        let edges = report.edges.into_iter().map(|edge| GameEvent::EdgePruned { edge });
        nodes.chain(edges)
    }

    /// Seat and destination of a move that was chosen rather than forced.
    #[must_use]
    pub fn chosen_move(&self) -> Option<(Player, NodeId)> {
        match *self {
            GameEvent::EdgeTraversed { to, player, source, .. } if source != MoveSource::Forced => Some((player, to)),
            GameEvent::Passed { node, player, source } if source != MoveSource::Forced => Some((player, node)),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, GameEvent::GameOver { .. })
    }
}
