//! Answer validation
//!
//! Decides whether free-text input names an accepted answer for its first
//! letter, given the caller's progress through the game.

mod engine;
mod outcome;
pub mod session;
mod state;

pub use engine::{Validator, validate_input};
pub use outcome::{Outcome, Warning};
pub use session::GameSession;
pub use state::ValidationState;
