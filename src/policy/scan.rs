//! Randomised scan order over a node's incident edges.
//!
//! Rather than shuffling, a scan starts at a random offset and steps by a
//! prime drawn from a fixed pool, modulo the edge count. Every prime in the
//! pool is larger than any realistic degree, so the scan visits each incident
//! edge exactly once.

use crate::core::{GameRng, NodeId};
use crate::graph::GraphModel;

/// Stride pool for scan orders.
pub const PRIME_STRIDES: [usize; 10] = [2063, 2069, 2081, 2083, 2087, 2089, 2099, 2111, 2113, 2129];

/// Visits `(start + i * stride) % len` for `i` in `0..len`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanOrder {
    start: usize,
    stride: usize,
    len: usize,
}

impl ScanOrder {
    #[must_use]
    pub const fn new(start: usize, stride: usize, len: usize) -> Self {
        Self { start, stride, len }
    }

    /// Random start offset and random stride from `PRIME_STRIDES`.
    pub fn random(len: usize, rng: &mut GameRng) -> Self {
        let start = rng.below(len);
        let stride = rng.pick(&PRIME_STRIDES).copied().unwrap_or(PRIME_STRIDES[0]);
        Self::new(start, stride, len)
    }

    /// Scan order over `position`'s incident edges.
    pub fn for_node(graph: &GraphModel, position: NodeId, rng: &mut GameRng) -> Self {
        Self::random(graph.incident(position).len(), rng)
    }

    pub fn indices(self) -> impl Iterator<Item = usize> {
        (0..self.len).map(move |i| (self.start + i * self.stride) % self.len)
    }

    /// Far endpoints of `position`'s unused edges, in scan order.
    pub fn live_moves(self, graph: &GraphModel, position: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let incident = graph.incident(position);
        self.indices()
            .map(move |i| incident[i])
            .filter(move |&edge| !graph.is_used(edge))
            .map(move |edge| graph.edge(edge).other(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_form_permutation() {
        for len in 1..12 {
            for &stride in &PRIME_STRIDES {
                let mut seen: Vec<_> = ScanOrder::new(len / 2, stride, len).indices().collect();
                seen.sort_unstable();
                assert_eq!(seen, (0..len).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_starts_at_offset() {
        let order = ScanOrder::new(3, 2063, 5);
        assert_eq!(order.indices().next(), Some(3));
    }

    #[test]
    fn test_empty_scan() {
        let mut rng = GameRng::new(1);
        let order = ScanOrder::random(0, &mut rng);
        assert_eq!(order.indices().count(), 0);
    }

    #[test]
    fn test_random_stride_from_pool() {
        let mut rng = GameRng::new(9);
        for _ in 0..50 {
            let order = ScanOrder::random(6, &mut rng);
            assert!(PRIME_STRIDES.contains(&order.stride));
            assert!(order.start < 6);
        }
    }
}
