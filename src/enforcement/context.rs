//! What the invariant checks look at.

use crate::core::StateHistory;
use crate::machine::GumballState;

/// A machine at rest, borrowed for checking.
#[derive(Clone, Copy, Debug)]
pub struct InvariantContext<'a> {
    pub state: GumballState,
    pub inventory: u32,
    pub history: &'a StateHistory<GumballState>,
}
