//! Wire format for mirrored games between two peers.
//!
//! Both peers run the same engine. The host sends a `Hello` with the map and
//! the resolved starting player, then each side forwards every move its local
//! seat chose, whether a person submitted it through `attempt_move` or an
//! automatic policy picked it inside `resume`. The receiving side sees that
//! seat as a remote human and feeds each move to `attempt_move` then
//! `resume`. Forced moves and pruning replay on both sides and never travel.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, NodeId, Player, PlayerPair, PlayerProfile, ProtocolError};
use crate::engine::GameEvent;
use crate::maps::MapKind;
use crate::policy::PolicyKind;

/// Opening message describing the game to mirror.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handshake {
    pub map: MapKind,
    pub starting_player: Player,
    /// Display profile of the sending peer's seat.
    pub profile: PlayerProfile,
}

impl Handshake {
    /// Describe `config` as seen by its `local` seat.
    ///
    /// `starting_player` must already be resolved so both sides agree.
    #[must_use]
    pub fn from_config(config: &GameConfig, local: Player, starting_player: Player) -> Self {
        Self {
            map: config.map,
            starting_player,
            profile: config.profiles[local].clone(),
        }
    }

    /// Configuration for the receiving peer playing `local`.
    ///
    /// The remote seat takes its moves from the wire, so it is `Human`.
    #[must_use]
    pub fn into_config(self, local: Player, local_policy: PolicyKind, seed: u64) -> GameConfig {
        let remote = local.other();

        let mut policies = PlayerPair::with_value(PolicyKind::Human);
        policies[local] = local_policy;

        let mut profiles = PlayerPair::from_fn(PlayerProfile::default_for);
        profiles[remote] = self.profile;

        GameConfig {
            map: self.map,
            policies,
            seed,
            starting_player: Some(self.starting_player),
            profiles,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireMessage {
    Hello(Handshake),
    /// A move submitted by the sender's seat. Equal to the current node for
    /// a pass.
    Move { node: NodeId },
}

impl WireMessage {
    /// The moves `local` chose among `events`, in order.
    pub fn outgoing(events: &[GameEvent], local: Player) -> impl Iterator<Item = WireMessage> + '_ {
        events.iter().filter_map(move |event| match event.chosen_move() {
            Some((player, node)) if player == local => Some(WireMessage::Move { node }),
            _ => None,
        })
    }

    pub fn encode(&self) -> Result<Vec<u8>, ProtocolError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, ProtocolError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
