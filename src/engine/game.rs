//! The move engine: a two-phase turn state machine.
//!
//! ## Phases
//!
//! - `attempt_move(target)`: validate and apply a move, prune the vacated
//!   node, then hold the token in a transition window (`can_move = false`).
//! - `resume()`: settle the token once the caller's transition is done. Forced
//!   moves and automatic policies are played out synchronously in this call,
//!   until a human seat must decide or the game ends.
//!
//! The split exists so a presentation layer can animate between the two; the
//! engine itself has no timers. `play` runs both phases on a clone and is the
//! pure form of a turn.
//!
//! ## Settling at a node
//!
//! 1. An exit ends the game in favour of its owner.
//! 2. A node nobody stood on before hands the move to the other player.
//! 3. No unused edges: tie. One: forced move. More: a decision point.
//! 4. At a decision point an automatic seat is asked once. Passing or naming
//!    a node it cannot reach forfeits the game for that seat.
//!
//! Pruning after a move starts at the vacated node and may run through the
//! token's new node. A token left with no unused edges then ties at step 3.

use crate::core::{BuildError, GameConfig, GameRng, GameRngState, MoveError, NodeId, Player, PlayerPair};
use crate::graph::{prune, prune_all, GraphModel};
use crate::policy::{Decision, PolicyKind};

use super::event::GameEvent;
use super::record::{MoveRecord, MoveSource};
use super::state::{GameState, Outcome, Status};

/// A running game: graph, turn state, seat controllers and RNG.
///
/// Cloning is cheap (shared topology, persistent flag vectors).
#[derive(Clone, Debug)]
pub struct Game {
    graph: GraphModel,
    state: GameState,
    policies: PlayerPair<PolicyKind>,
    rng: GameRng,
}

impl Game {
    /// Start a game on `graph` with the token at `start`.
    ///
    /// Marks the start visited and runs the initial pruning pass. The token
    /// is treated as arriving at `start`: call `resume` to reach the first
    /// decision point.
    pub fn new(
        mut graph: GraphModel,
        start: NodeId,
        starting_player: Player,
        policies: PlayerPair<PolicyKind>,
        rng: GameRng,
    ) -> Result<Self, BuildError> {
        if !graph.contains(start) {
            return Err(BuildError::StartOutOfRange {
                node: start,
                node_count: graph.node_count(),
            });
        }

        graph.mark_visited(start);
        let report = prune_all(&mut graph, Some(start));
        log::debug!(
            "initial pruning removed {} edges, {} dead ends",
            report.edges.len(),
            report.nodes.len()
        );

        let exits = PlayerPair::from_fn(|player| graph.exits(player).to_vec());
        let state = GameState::new(start, starting_player, exits);

        Ok(Self {
            graph,
            state,
            policies,
            rng,
        })
    }

    /// Build the configured map and start a game on it.
    pub fn from_config(config: &GameConfig) -> Result<Self, BuildError> {
        let layout = config.map.layout()?;
        let mut rng = GameRng::new(config.seed);
        let starting_player = config.starting_player.unwrap_or_else(|| rng.coin_flip());

        log::info!(
            "new game on {} ({} vs {}), {} starts",
            config.map,
            config.policies[Player::P1],
            config.policies[Player::P2],
            starting_player
        );

        Self::new(layout.graph, layout.start, starting_player, config.policies.clone(), rng.fork())
    }

    // === Accessors ===

    #[must_use]
    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.state.status
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.status.outcome()
    }

    #[must_use]
    pub fn position(&self) -> NodeId {
        self.state.position
    }

    #[must_use]
    pub fn active_player(&self) -> Player {
        self.state.active
    }

    #[must_use]
    pub fn can_move(&self) -> bool {
        self.state.can_move
    }

    #[must_use]
    pub fn policy(&self, player: Player) -> PolicyKind {
        self.policies[player]
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.snapshot()
    }

    /// Whether `attempt_move` would currently consider a move at all.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        matches!(self.state.status, Status::AwaitingDecision(_))
            && self.state.can_move
            && self.state.pending.is_none()
    }

    /// Distinct neighbours reachable over unused edges from the token.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<NodeId> {
        let position = self.state.position;
        let mut moves: Vec<NodeId> = Vec::new();
        for edge in self.graph.live_edges(position) {
            let next = self.graph.edge(edge).other(position);
            if !moves.contains(&next) {
                moves.push(next);
            }
        }
        moves
    }

    // === Phases ===

    /// Propose a move for the active player.
    ///
    /// A pass (`target` equal to the token's node) is always legal. On
    /// success the token enters its transition window; call `resume` next.
    pub fn attempt_move(&mut self, target: NodeId) -> Result<Vec<GameEvent>, MoveError> {
        if !self.accepts_input() {
            return Err(MoveError::NotAccepting);
        }

        let mut events = Vec::new();
        self.apply_move(target, MoveSource::External, &mut events)?;
        Ok(events)
    }

    /// Settle the pending transition and play on until input is needed.
    pub fn resume(&mut self) -> Result<Vec<GameEvent>, MoveError> {
        let Some(mut node) = self.state.pending.take() else {
            return Err(MoveError::NothingPending);
        };

        let mut events = Vec::new();
        loop {
            if let Some(owner) = self.graph.node(node).exit {
                self.finish(Outcome::Won(owner), &mut events);
                break;
            }

            if self.graph.mark_visited(node) {
                self.state.active = self.state.active.other();
                self.state.status = Status::AwaitingDecision(self.state.active);
                events.push(GameEvent::NodeVisited { node });
                events.push(GameEvent::TurnChanged {
                    player: self.state.active,
                });
            }

            let player = self.state.active;
            let (first, second) = {
                let mut live = self.graph.live_edges(node);
                (live.next(), live.next())
            };

            let (target, source) = match (first, second) {
                (None, _) => {
                    self.finish(Outcome::Tied, &mut events);
                    break;
                }
                (Some(edge), None) => (self.graph.edge(edge).other(node), MoveSource::Forced),
                _ => {
                    let Some(policy) = self.policies[player].automatic() else {
                        self.state.can_move = true;
                        events.push(GameEvent::AwaitingInput { player, node });
                        break;
                    };
                    match policy.decide(&self.graph, node, player, &mut self.rng) {
                        Decision::Forfeit => {
                            self.finish(Outcome::Forfeited(player), &mut events);
                            break;
                        }
                        Decision::Move(target) if target == node => {
                            log::warn!("{} ({}) passed at a decision point", player, policy.name());
                            self.finish(Outcome::Forfeited(player), &mut events);
                            break;
                        }
                        Decision::Move(target) => (target, MoveSource::Policy),
                    }
                }
            };

            if let Err(err) = self.apply_move(target, source, &mut events) {
                log::warn!("{} ({}) proposed an illegal move: {}", player, self.policies[player], err);
                self.finish(Outcome::Forfeited(player), &mut events);
                break;
            }
            self.state.pending = None;
            node = target;
        }

        Ok(events)
    }

    /// Pure turn: `attempt_move` then `resume` on a copy of this game.
    pub fn play(&self, target: NodeId) -> Result<(Game, Vec<GameEvent>), MoveError> {
        let mut next = self.clone();
        let mut events = next.attempt_move(target)?;
        events.extend(next.resume()?);
        Ok((next, events))
    }

    // === Internals ===

    fn apply_move(&mut self, target: NodeId, source: MoveSource, events: &mut Vec<GameEvent>) -> Result<(), MoveError> {
        if !self.graph.contains(target) {
            return Err(MoveError::UnknownNode { node: target });
        }

        let from = self.state.position;
        let player = self.state.active;

        let edge = if target == from {
            events.push(GameEvent::Passed { node: from, player, source });
            None
        } else {
            let edge = self
                .graph
                .live_edge_between(from, target)
                .ok_or(MoveError::NotAdjacent { from, to: target })?;

            self.graph.mark_used(edge);
            events.push(GameEvent::EdgeTraversed {
                edge,
                from,
                to: target,
                player,
                source,
            });
            let report = prune(&mut self.graph, from, None);
            events.extend(GameEvent::from_prune_report(report));
            Some(edge)
        };

        log::debug!("{} moves {} -> {} ({:?})", player, from, target, source);
        self.state.record_move(MoveRecord::new(player, from, target, edge, source));
        self.state.position = target;
        self.state.can_move = false;
        self.state.pending = Some(target);
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome, events: &mut Vec<GameEvent>) {
        log::info!("game over after {} moves: {}", self.state.move_count(), outcome);
        self.state.status = outcome.into();
        self.state.can_move = false;
        self.state.pending = None;
        events.push(GameEvent::GameOver { outcome });
    }
}
