//! Game configuration.
//!
//! A new game is described by:
//! - the map to play on,
//! - which policy drives each seat (`Human` waits for external input),
//! - the RNG seed,
//! - an optional fixed starting player (random otherwise),
//! - display profiles for both seats.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerPair};
use crate::maps::MapKind;
use crate::policy::PolicyKind;

/// Display name and colour of a seat.
///
/// The engine never reads these; renderers and the handshake carry them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub color: String,
}

impl PlayerProfile {
    /// Create a profile.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Default profile for a seat.
    #[must_use]
    pub fn default_for(player: Player) -> Self {
        match player {
            Player::P1 => Self::new("Player Red", "red"),
            Player::P2 => Self::new("Player Blue", "blue"),
        }
    }
}

/// Complete configuration for a new game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Map to build.
    pub map: MapKind,

    /// Decision policy per seat.
    pub policies: PlayerPair<PolicyKind>,

    /// Random seed for the starting player and automatic policies.
    pub seed: u64,

    /// Fixed starting player. `None` picks one at random.
    pub starting_player: Option<Player>,

    /// Display profiles.
    pub profiles: PlayerPair<PlayerProfile>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            map: MapKind::Original,
            policies: PlayerPair::new(PolicyKind::ShortestTurns, PolicyKind::Human),
            seed: 42,
            starting_player: None,
            profiles: PlayerPair::from_fn(PlayerProfile::default_for),
        }
    }
}

impl GameConfig {
    /// Set the map.
    #[must_use]
    pub fn with_map(mut self, map: MapKind) -> Self {
        self.map = map;
        self
    }

    /// Set the policy for one seat.
    #[must_use]
    pub fn with_policy(mut self, player: Player, policy: PolicyKind) -> Self {
        self.policies[player] = policy;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Fix the starting player.
    #[must_use]
    pub fn with_starting_player(mut self, player: Player) -> Self {
        self.starting_player = Some(player);
        self
    }

    /// Set the profile for one seat.
    #[must_use]
    pub fn with_profile(mut self, player: Player, profile: PlayerProfile) -> Self {
        self.profiles[player] = profile;
        self
    }
}
