//! Error types for the engine.
//!
//! None of these end a game. Wins, ties and forfeits are outcomes, reported
//! through `Status` and `GameEvent::GameOver`.

use thiserror::Error;

use super::ids::NodeId;

/// A rejected `attempt_move` or `resume` call. The game state is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveError {
    #[error("game is not accepting moves")]
    NotAccepting,

    #[error("{node} does not exist in this graph")]
    UnknownNode { node: NodeId },

    #[error("no unused edge between {from} and {to}")]
    NotAdjacent { from: NodeId, to: NodeId },

    #[error("no move is waiting to be resumed")]
    NothingPending,
}

/// Malformed construction input from a map builder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildError {
    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("edge {edge} references {node}, but the graph has {node_count} nodes")]
    EndpointOutOfRange {
        edge: usize,
        node: NodeId,
        node_count: usize,
    },

    #[error("edge {edge} connects {node} to itself")]
    SelfLoop { edge: usize, node: NodeId },

    #[error("start {node} is out of range for {node_count} nodes")]
    StartOutOfRange { node: NodeId, node_count: usize },
}

/// Failure to encode or decode a wire message.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProtocolError {
    #[error("wire codec error: {0}")]
    Codec(#[from] bincode::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        let err = MoveError::NotAdjacent {
            from: NodeId(1),
            to: NodeId(4),
        };
        assert_eq!(err.to_string(), "no unused edge between node1 and node4");
        assert_eq!(
            MoveError::UnknownNode { node: NodeId(9) }.to_string(),
            "node9 does not exist in this graph"
        );
    }

    #[test]
    fn test_build_error_messages() {
        let err = BuildError::EndpointOutOfRange {
            edge: 2,
            node: NodeId(7),
            node_count: 4,
        };
        assert_eq!(
            err.to_string(),
            "edge 2 references node7, but the graph has 4 nodes"
        );
    }
}
