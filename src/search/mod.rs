//! Distance queries over the live graph (unused edges only).
//!
//! - `distance_hops`: plain BFS hop counts
//! - `distance_turns`: BFS over `(turns, steps)`, one turn level at a time
//!
//! Both report unreachable nodes by leaving them out, never by failing.

pub mod hops;
pub mod turns;

pub use hops::{distance_hops, HopDistances};
pub use turns::{distance_turns, TurnDistance, TurnDistances};
