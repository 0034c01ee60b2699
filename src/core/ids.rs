//! Arena identifiers for nodes and edges.
//!
//! Nodes and edges live in two flat arenas owned by the graph. They refer to
//! each other by index only, so neither arena owns the other.
//!
//! ## Usage
//!
//! ```
//! use graph_walker::core::{EdgeId, NodeId};
//!
//! let node = NodeId::new(3);
//! assert_eq!(node.index(), 3);
//! assert_eq!(format!("{}", node), "node3");
//!
//! let edge = EdgeId::from(7u32);
//! assert_eq!(edge.raw(), 7);
//! ```

use serde::{Deserialize, Serialize};

/// Stable index of a node in the graph arena.
///
/// Assigned in insertion order by the graph builder, starting at 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Arena index of this node.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node{}", self.0)
    }
}

/// Stable index of an edge in the graph arena.
///
/// Parallel edges between the same pair of nodes get distinct IDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub u32);

impl EdgeId {
    /// Create an edge ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Arena index of this edge.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EdgeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "edge{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_index() {
        assert_eq!(NodeId::new(0).index(), 0);
        assert_eq!(NodeId::new(42).index(), 42);
        assert_eq!(NodeId::from(5u32), NodeId(5));
    }

    #[test]
    fn test_edge_id_index() {
        assert_eq!(EdgeId::new(9).index(), 9);
        assert_eq!(EdgeId::new(9).raw(), 9);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", NodeId(12)), "node12");
        assert_eq!(format!("{}", EdgeId(4)), "edge4");
    }

    #[test]
    fn test_ordering() {
        assert!(NodeId(1) < NodeId(2));
        assert!(EdgeId(0) < EdgeId(10));
    }

    #[test]
    fn test_serialization() {
        let id = NodeId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: NodeId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
