//! Node topology.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Planar position, display only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Immutable part of a node. Mutable flags (`visited`, `pruned`) live in
/// `GraphModel`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub position: Position,

    /// The seat that wins by reaching this node, if any.
    pub exit: Option<Player>,

    /// On the rim of a generated grid.
    pub boundary: bool,
}

impl Node {
    /// Create a plain (non-exit, interior) node.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self {
            position,
            exit: None,
            boundary: false,
        }
    }

    /// Make this node an exit for `player`.
    #[must_use]
    pub fn with_exit(mut self, player: Player) -> Self {
        self.exit = Some(player);
        self
    }

    /// Mark this node as lying on the grid boundary.
    #[must_use]
    pub fn on_boundary(mut self) -> Self {
        self.boundary = true;
        self
    }

    #[must_use]
    pub fn is_exit(&self) -> bool {
        self.exit.is_some()
    }
}
