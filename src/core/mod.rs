//! Core engine types: identifiers, players, RNG, configuration, errors.
//!
//! Everything here is independent of graph topology and game rules.

pub mod ids;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use ids::{EdgeId, NodeId};
pub use player::{Player, PlayerPair};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, PlayerProfile};
pub use error::{BuildError, MoveError, ProtocolError};
