//! # graph-walker
//!
//! Engine for a two-player game played with one shared token on an
//! undirected graph. Each move walks the token along an unused edge and uses
//! it up. Reaching a node for the first time hands the move to the other
//! player. The token keeps moving while only one unused edge remains. A
//! player wins when the token reaches their exit; a token with no way out is
//! a tie.
//!
//! ## Design Principles
//!
//! 1. **Dead ends are never playable**: after every move the pruning pass
//!    removes chains leading nowhere, so any node the token can reach still
//!    leads somewhere.
//!
//! 2. **Seats are pluggable**: each player is driven by a `PolicyKind`.
//!    `Human` waits for `attempt_move`; the others decide synchronously.
//!
//! 3. **Deterministic**: all randomness flows through a seeded `GameRng`, so
//!    two peers with the same config and moves stay in lockstep.
//!
//! ## Architecture
//!
//! - **Persistent flags**: edge and node flags live in `im` vectors over a
//!   shared topology, so `Game` clones in O(1) and `Game::play` can be pure.
//!
//! - **Events over callbacks**: every engine call returns the `GameEvent`s
//!   it caused for renderers and transports to consume.
//!
//! ## Modules
//!
//! - `core`: IDs, players, RNG, configuration, errors
//! - `graph`: graph model, construction, dead-end pruning
//! - `search`: hop and turn distances to a set of exits
//! - `policy`: automatic decision policies
//! - `engine`: the move state machine
//! - `maps`: built-in map generators
//! - `protocol`: wire messages for mirrored games

pub mod core;
pub mod graph;
pub mod search;
pub mod policy;
pub mod engine;
pub mod maps;
pub mod protocol;

// Re-export commonly used types
pub use crate::core::{
    EdgeId, NodeId, Player, PlayerPair,
    GameRng, GameRngState,
    GameConfig, PlayerProfile,
    BuildError, MoveError, ProtocolError,
};

pub use crate::graph::{Edge, GraphBuilder, GraphModel, Node, Position, PruneReport};

pub use crate::search::{distance_hops, distance_turns, HopDistances, TurnDistance, TurnDistances};

pub use crate::policy::{Decision, DecisionPolicy, PolicyKind};

pub use crate::engine::{Game, GameEvent, GameState, MoveRecord, MoveSource, Outcome, Status};

pub use crate::maps::{MapKind, MapLayout};

pub use crate::protocol::{Handshake, WireMessage};
