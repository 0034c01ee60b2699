//! Turn state: where the token is, whose move it is, and how the game stands.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::record::MoveRecord;
use crate::core::{NodeId, Player, PlayerPair};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The token reached this player's exit.
    Won(Player),
    /// The token got stuck with no unused edge.
    Tied,
    /// This player's policy gave up.
    Forfeited(Player),
}

impl Outcome {
    /// The player credited with the game. A forfeit credits the opponent.
    #[must_use]
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            Outcome::Forfeited(player) => Some(player.other()),
            Outcome::Tied => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won(player) => write!(f, "{} has won!", player),
            Outcome::Tied => write!(f, "The game is a tie!"),
            Outcome::Forfeited(player) => write!(f, "{} has given up!", player),
        }
    }
}

/// Engine state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// The game runs and this player moves next.
    AwaitingDecision(Player),
    Won(Player),
    Tied,
    Forfeited(Player),
}

impl Status {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::AwaitingDecision(_))
    }

    #[must_use]
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Status::AwaitingDecision(_) => None,
            Status::Won(player) => Some(Outcome::Won(player)),
            Status::Tied => Some(Outcome::Tied),
            Status::Forfeited(player) => Some(Outcome::Forfeited(player)),
        }
    }
}

impl From<Outcome> for Status {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won(player) => Status::Won(player),
            Outcome::Tied => Status::Tied,
            Outcome::Forfeited(player) => Status::Forfeited(player),
        }
    }
}

/// The only mutable turn data of a running game.
///
/// Replaced wholesale when a new game starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Token position.
    pub position: NodeId,

    /// Player whose move it is (or was, once the game ended).
    pub active: Player,

    /// Set only while waiting for external input at a decision point.
    pub can_move: bool,

    pub status: Status,

    /// Node the token is transitioning into, waiting for `resume`.
    pub pending: Option<NodeId>,

    /// Exit nodes per player.
    pub exits: PlayerPair<Vec<NodeId>>,

    /// Every move applied so far, forced and automatic ones included.
    pub history: Vector<MoveRecord>,
}

impl GameState {
    /// Fresh state with the token arriving at `start`.
    #[must_use]
    pub fn new(start: NodeId, starting_player: Player, exits: PlayerPair<Vec<NodeId>>) -> Self {
        Self {
            position: start,
            active: starting_player,
            can_move: false,
            status: Status::AwaitingDecision(starting_player),
            pending: Some(start),
            exits,
            history: Vector::new(),
        }
    }

    /// Number of moves applied, passes included.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Record a move in history.
    pub fn record_move(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_waits_for_resume() {
        let state = GameState::new(NodeId(4), Player::P2, PlayerPair::default());

        assert_eq!(state.position, NodeId(4));
        assert_eq!(state.pending, Some(NodeId(4)));
        assert!(!state.can_move);
        assert_eq!(state.status, Status::AwaitingDecision(Player::P2));
        assert_eq!(state.move_count(), 0);
    }

    #[test]
    fn test_status_outcome() {
        assert!(!Status::AwaitingDecision(Player::P1).is_terminal());
        assert_eq!(Status::AwaitingDecision(Player::P1).outcome(), None);
        assert_eq!(Status::Tied.outcome(), Some(Outcome::Tied));
        assert_eq!(Status::from(Outcome::Won(Player::P2)), Status::Won(Player::P2));
        assert!(Status::Forfeited(Player::P1).is_terminal());
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::Won(Player::P1).winner(), Some(Player::P1));
        assert_eq!(Outcome::Forfeited(Player::P1).winner(), Some(Player::P2));
        assert_eq!(Outcome::Tied.winner(), None);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::Won(Player::P1).to_string(), "Player 1 has won!");
        assert_eq!(Outcome::Tied.to_string(), "The game is a tie!");
        assert_eq!(Outcome::Forfeited(Player::P2).to_string(), "Player 2 has given up!");
    }
}
