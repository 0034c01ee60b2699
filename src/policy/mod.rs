//! Decision policies: who picks the next move at a decision point.
//!
//! Policies are trait-based so the engine never hardcodes a strategy:
//! - `RandomWalk`: any legal move
//! - `ShortestPath`: fewest hops to its own exit
//! - `ShortestTurns`: fewest player switches to its own exit
//! - `Annoying`: stall the opponent
//!
//! A policy only reads the graph and returns a `Decision`; the engine applies
//! it. `PolicyKind::Human` has no policy object: the engine waits for
//! external input instead.

pub mod scan;
pub mod random;
pub mod shortest;
pub mod annoying;

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, NodeId, Player};
use crate::graph::GraphModel;

pub use annoying::{Annoying, Tactic};
pub use random::RandomWalk;
pub use scan::{ScanOrder, PRIME_STRIDES};
pub use shortest::{ShortestPath, ShortestTurns};

// =============================================================================
// Decision Policy
// =============================================================================

/// Outcome of asking a policy for a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Move the token to this neighbour.
    Move(NodeId),
    /// Give up; the game ends with the asking player forfeiting.
    Forfeit,
}

/// Automatic move selection for one seat.
pub trait DecisionPolicy: Send + Sync {
    /// Display name, as shown in the new-game menu.
    fn name(&self) -> &'static str;

    /// Choose a move for `player` with the token at `position`.
    ///
    /// Only called at decision points (two or more unused edges).
    fn decide(&self, graph: &GraphModel, position: NodeId, player: Player, rng: &mut GameRng) -> Decision;
}

// =============================================================================
// Policy Selection
// =============================================================================

/// The built-in controllers, in menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    Human,
    Random,
    ShortestPath,
    ShortestTurns,
    Annoying,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::Human,
        PolicyKind::Random,
        PolicyKind::ShortestPath,
        PolicyKind::ShortestTurns,
        PolicyKind::Annoying,
    ];

    /// Look up by menu index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn is_human(self) -> bool {
        self == PolicyKind::Human
    }

    /// The policy object, or `None` when moves come from outside.
    #[must_use]
    pub fn automatic(self) -> Option<&'static dyn DecisionPolicy> {
        let policy: &'static dyn DecisionPolicy = match self {
            PolicyKind::Human => return None,
            PolicyKind::Random => &RandomWalk,
            PolicyKind::ShortestPath => &ShortestPath,
            PolicyKind::ShortestTurns => &ShortestTurns,
            PolicyKind::Annoying => &Annoying,
        };
        Some(policy)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.automatic().map_or("Human", |policy| policy.name())
    }
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order() {
        let names: Vec<_> = PolicyKind::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            vec!["Human", "Random player", "Shortest path", "Shortest turns", "Annoying"]
        );
    }

    #[test]
    fn test_from_index() {
        assert_eq!(PolicyKind::from_index(3), Some(PolicyKind::ShortestTurns));
        assert_eq!(PolicyKind::from_index(5), None);
    }

    #[test]
    fn test_human_has_no_policy() {
        assert!(PolicyKind::Human.is_human());
        assert!(PolicyKind::Human.automatic().is_none());
        assert!(PolicyKind::ALL[1..].iter().all(|p| p.automatic().is_some()));
    }
}
