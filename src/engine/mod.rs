//! The move engine and its state, history and events.

pub mod event;
pub mod game;
pub mod record;
pub mod state;

pub use event::GameEvent;
pub use game::Game;
pub use record::{MoveRecord, MoveSource};
pub use state::{GameState, Outcome, Status};
