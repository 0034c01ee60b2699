//! Edge topology.

use serde::{Deserialize, Serialize};

use crate::core::NodeId;

/// Immutable part of an undirected edge. The `used` flag lives in
/// `GraphModel`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,

    /// Removed by map design before the first move.
    pub initially_used: bool,
}

impl Edge {
    #[must_use]
    pub const fn new(a: NodeId, b: NodeId, initially_used: bool) -> Self {
        Self { a, b, initially_used }
    }

    /// The endpoint opposite `node`.
    ///
    /// `node` must be one of the endpoints. Debug builds panic otherwise.
    #[must_use]
    pub fn other(&self, node: NodeId) -> NodeId {
        debug_assert!(self.touches(node), "{} is not an endpoint of {}-{}", node, self.a, self.b);
        if self.a == node {
            self.b
        } else {
            self.a
        }
    }

    /// Whether `node` is an endpoint.
    #[must_use]
    pub fn touches(&self, node: NodeId) -> bool {
        self.a == node || self.b == node
    }
}
