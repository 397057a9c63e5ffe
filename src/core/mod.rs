//! Core state machine types.
//!
//! - State definitions via the `State` trait
//! - Transition history records
//!
//! Nothing in this module performs I/O or logging.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;
