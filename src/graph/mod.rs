//! Graph data model: node/edge arenas, construction, and pruning.
//!
//! - `Node`, `Edge`: immutable topology records
//! - `GraphModel`: arenas plus the `used`/`visited`/`pruned` flags
//! - `GraphBuilder`: validated construction from ordered node/edge lists
//! - `prune`: dead-end elimination

pub mod node;
pub mod edge;
pub mod model;
pub mod builder;
pub mod prune;

pub use node::{Node, Position};
pub use edge::Edge;
pub use model::{GraphModel, Incidence};
pub use builder::GraphBuilder;
pub use prune::{is_stable, prune, prune_all, PruneReport};
