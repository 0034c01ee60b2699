//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The game always has exactly two seats, `P1` and `P2`.
//!
//! ## PlayerPair
//!
//! One value per seat with O(1) indexing by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// Both seats in order.
    pub const ALL: [Player; 2] = [Player::P1, Player::P2];

    /// The other seat.
    ///
    /// ```
    /// use graph_walker::core::Player;
    ///
    /// assert_eq!(Player::P1.other(), Player::P2);
    /// assert_eq!(Player::P2.other(), Player::P1);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }

    /// Short tag used by renderers and transports ("p1" / "p2").
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Player::P1 => "p1",
            Player::P2 => "p2",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Per-seat data storage.
///
/// ## Example
///
/// ```
/// use graph_walker::core::{Player, PlayerPair};
///
/// let mut moves: PlayerPair<u32> = PlayerPair::with_value(0);
/// moves[Player::P2] += 1;
/// assert_eq!(moves[Player::P1], 0);
/// assert_eq!(moves[Player::P2], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create from explicit values for each seat.
    pub fn new(p1: T, p2: T) -> Self {
        Self { data: [p1, p2] }
    }

    /// Create with values from a factory function.
    pub fn from_fn(factory: impl Fn(Player) -> T) -> Self {
        Self::new(factory(Player::P1), factory(Player::P2))
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value)
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerPair<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
