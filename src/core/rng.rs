//! Seeded randomness for games.
//!
//! Two things in a game are random: who moves first, and the order in which
//! automatic players scan their options. Both draw from a `GameRng`, so two
//! peers with the same seed make the same choices.
//!
//! ```
//! use graph_walker::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.coin_flip(), b.coin_flip());
//!
//! // Policy streams forked after the same draws agree too.
//! let mut pa = a.fork();
//! let mut pb = b.fork();
//! assert_eq!(pa.below(10), pb.below(10));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::player::Player;

/// Golden-ratio increment separating forked seeds.
const FORK_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Split off an independent stream.
    ///
    /// The n-th fork of a given seed is always the same stream, whatever was
    /// drawn from the parent in between.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_SPACING)))
    }

    /// Uniform index in `0..len`, or 0 for an empty range.
    pub fn below(&mut self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.inner.gen_range(0..len)
        }
    }

    /// Uniform pick from `options`.
    pub fn pick<'a, T>(&mut self, options: &'a [T]) -> Option<&'a T> {
        options.choose(&mut self.inner)
    }

    /// Fair draw between the two seats.
    pub fn coin_flip(&mut self) -> Player {
        if self.inner.gen_bool(0.5) {
            Player::P1
        } else {
            Player::P2
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            forks: self.forks,
        }
    }

    #[must_use]
    pub fn restore(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            forks: state.forks,
        }
    }
}

/// Position of a `GameRng` in its stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha word position.
    pub word_pos: u128,
    pub forks: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);

        let seq_a: Vec<_> = (0..50).map(|_| a.below(13)).collect();
        let seq_b: Vec<_> = (0..50).map(|_| b.below(13)).collect();
        assert_eq!(seq_a, seq_b);
        assert!(seq_a.iter().all(|&i| i < 13));
    }

    #[test]
    fn test_below_empty_range() {
        let mut rng = GameRng::new(0);
        assert_eq!(rng.below(0), 0);
    }

    #[test]
    fn test_fork_ignores_parent_draws() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..5 {
            b.below(100);
        }

        let fork_a = a.fork();
        let fork_b = b.fork();
        assert_eq!(fork_a.seed(), fork_b.seed());
        assert_ne!(fork_a.seed(), 42);
        assert_ne!(a.fork().seed(), fork_a.seed());
    }

    #[test]
    fn test_coin_flip_reaches_both_seats() {
        let mut rng = GameRng::new(3);
        let flips: Vec<_> = (0..64).map(|_| rng.coin_flip()).collect();
        assert!(flips.contains(&Player::P1));
        assert!(flips.contains(&Player::P2));
    }

    #[test]
    fn test_pick() {
        let mut rng = GameRng::new(42);
        let strides = [2063, 2069, 2081];
        for _ in 0..20 {
            assert!(rng.pick(&strides).is_some_and(|s| strides.contains(s)));
        }
        assert!(rng.pick::<u32>(&[]).is_none());
    }

    #[test]
    fn test_snapshot_restore() {
        let mut rng = GameRng::new(11);
        for _ in 0..30 {
            rng.below(1000);
        }

        let state = rng.snapshot();
        let expected: Vec<_> = (0..10).map(|_| rng.below(1000)).collect();

        let mut restored = GameRng::restore(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.below(1000)).collect();
        assert_eq!(expected, actual);

        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<GameRngState>(&json).unwrap(), state);
    }
}
