//! Builder for constructing gumball machines.

use crate::builder::error::BuildError;
use crate::machine::GumballMachine;

/// Builder for constructing gumball machines with a fluent API.
///
/// # Example
///
/// ```
/// use gumball::{GumballMachineBuilder, GumballState};
///
/// let machine = GumballMachineBuilder::new()
///     .inventory(10)
///     .record_history(false)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.state(), GumballState::NoQuarter);
/// assert!(!machine.records_history());
/// ```
#[derive(Clone, Debug)]
pub struct GumballMachineBuilder {
    inventory: Option<u32>,
    record_history: bool,
    history_limit: Option<usize>,
}

impl GumballMachineBuilder {
    /// Create a new builder. History recording is on by default.
    pub fn new() -> Self {
        Self {
            inventory: None,
            record_history: true,
            history_limit: None,
        }
    }

    /// Set the starting inventory (required).
    pub fn inventory(mut self, count: u32) -> Self {
        self.inventory = Some(count);
        self
    }

    /// Record every accepted transition in the machine's history.
    ///
    /// Unbounded unless [`history_limit`](Self::history_limit) is set.
    /// Quarter insert/eject cycles add entries without using up stock, so
    /// the history of a long-running machine grows without bound.
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    /// Keep only the most recent `limit` transitions in the history.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Build the machine.
    /// Returns an error if the inventory was never set.
    pub fn build(self) -> Result<GumballMachine, BuildError> {
        let inventory = self.inventory.ok_or(BuildError::MissingInventory)?;
        Ok(GumballMachine::with_options(
            inventory,
            self.record_history,
            self.history_limit,
        ))
    }
}

impl Default for GumballMachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
