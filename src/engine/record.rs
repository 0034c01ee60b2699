//! Move history records.
//!
//! Used for:
//! - Broadcasting moves to a mirrored game (the local seat's `External` and
//!   `Policy` moves travel; `Forced` moves replay on their own)
//! - Replay/debugging

use serde::{Deserialize, Serialize};

use crate::core::{EdgeId, NodeId, Player};

/// Who chose a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveSource {
    /// Submitted through `attempt_move` (local click or remote peer).
    External,
    /// The only unused edge; nobody was asked.
    Forced,
    /// Picked by an automatic decision policy.
    Policy,
}

/// One applied move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,
    pub from: NodeId,
    pub to: NodeId,
    /// Edge walked; `None` for a pass.
    pub edge: Option<EdgeId>,
    pub source: MoveSource,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: Player, from: NodeId, to: NodeId, edge: Option<EdgeId>, source: MoveSource) -> Self {
        Self {
            player,
            from,
            to,
            edge,
            source,
        }
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.edge.is_none()
    }
}
