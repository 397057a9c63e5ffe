//! The gumball machine: owns the inventory and the current state and feeds
//! events through the transition table.

use super::state::{Event, GumballState};
use super::transition::{transition, Effect};
use crate::checkpoint::MachineMetadata;
use crate::core::{State, StateHistory, StateTransition};
use crate::enforcement::{self, InvariantContext, ViolationError};
use chrono::Utc;
use std::fmt;
use stillwater::validation::Validation;
use tracing::info;

/// A gumball machine.
///
/// Operations never fail. An event the current state does not allow is
/// logged, counted and otherwise ignored.
///
/// Not internally synchronized. Share it behind a `Mutex` if several
/// callers need it.
///
/// History recording is on by default and unbounded. Quarter insert/eject
/// cycles never consume stock, so a long-running machine should either cap
/// its history with [`GumballMachineBuilder::history_limit`] or switch it
/// off.
///
/// [`GumballMachineBuilder::history_limit`]: crate::GumballMachineBuilder::history_limit
///
/// # Example
///
/// ```
/// use gumball::{GumballMachine, GumballState};
///
/// let mut machine = GumballMachine::new(1);
/// assert!(machine.insert_quarter());
/// machine.turn_crank();
///
/// assert_eq!(machine.inventory(), 0);
/// assert_eq!(machine.state(), GumballState::SoldOut);
/// ```
#[derive(Clone, Debug)]
pub struct GumballMachine {
    state: GumballState,
    inventory: u32,
    history: StateHistory<GumballState>,
    record_history: bool,
    metadata: MachineMetadata,
}

impl GumballMachine {
    /// Create a machine holding `inventory` gumballs, recording unbounded history.
    pub fn new(inventory: u32) -> Self {
        Self::with_options(inventory, true, None)
    }

    pub(crate) fn with_options(
        inventory: u32,
        record_history: bool,
        history_limit: Option<usize>,
    ) -> Self {
        let history = match history_limit {
            Some(limit) => StateHistory::with_limit(limit),
            None => StateHistory::new(),
        };
        let state = if inventory > 0 {
            GumballState::NoQuarter
        } else {
            GumballState::SoldOut
        };
        Self::from_parts(
            state,
            inventory,
            history,
            MachineMetadata::default(),
            record_history,
        )
    }

    pub(crate) fn from_parts(
        state: GumballState,
        inventory: u32,
        history: StateHistory<GumballState>,
        metadata: MachineMetadata,
        record_history: bool,
    ) -> Self {
        Self {
            state,
            inventory,
            history,
            record_history,
            metadata,
        }
    }

    /// Insert a quarter. Returns `true` if the machine kept it.
    pub fn insert_quarter(&mut self) -> bool {
        matches!(self.apply(Event::InsertQuarter), Effect::QuarterAccepted)
    }

    /// Ask for the quarter back.
    pub fn eject_quarter(&mut self) -> Effect {
        self.apply(Event::EjectQuarter)
    }

    /// Turn the crank, then dispense.
    ///
    /// Dispense is dispatched even when the crank is refused; it is then
    /// refused as well. The crank's rejection is returned in that case,
    /// otherwise the dispense effect.
    pub fn turn_crank(&mut self) -> Effect {
        let crank = self.apply(Event::TurnCrank);
        let dispensed = self.apply(Event::Dispense);
        if crank.is_rejected() {
            crank
        } else {
            dispensed
        }
    }

    /// Release a gumball. Only does anything in [`GumballState::Sold`],
    /// which is never observable between calls, so a direct call is always
    /// refused.
    pub fn dispense(&mut self) -> Effect {
        self.apply(Event::Dispense)
    }

    pub fn state(&self) -> GumballState {
        self.state
    }

    pub fn inventory(&self) -> u32 {
        self.inventory
    }

    pub fn is_sold_out(&self) -> bool {
        self.state.is_final()
    }

    /// Accepted transitions so far. Empty when history recording is off.
    pub fn history(&self) -> &StateHistory<GumballState> {
        &self.history
    }

    pub fn records_history(&self) -> bool {
        self.record_history
    }

    pub fn metadata(&self) -> &MachineMetadata {
        &self.metadata
    }

    /// Check the machine's invariants, reporting every violation found.
    pub fn verify(&self) -> Result<(), Vec<ViolationError>> {
        let context = InvariantContext {
            state: self.state,
            inventory: self.inventory,
            history: &self.history,
        };
        match enforcement::enforce(&context) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }

    fn apply(&mut self, event: Event) -> Effect {
        let from = self.state;
        let outcome = transition(from, event, self.inventory);
        self.metadata.updated_at = Utc::now();

        if let Effect::Rejected(reason) = outcome.effect {
            self.metadata.rejected_events += 1;
            info!(state = %from, event = %event, %reason, "event rejected");
            return outcome.effect;
        }

        self.state = outcome.next;
        self.inventory = outcome.inventory;

        match outcome.effect {
            Effect::QuarterAccepted => self.metadata.quarters_accepted += 1,
            Effect::QuarterReturned => self.metadata.quarters_returned += 1,
            Effect::GumballDispensed { .. } => self.metadata.gumballs_dispensed += 1,
            Effect::CrankTurned | Effect::Rejected(_) => {}
        }

        info!(
            from = %from,
            to = %self.state,
            event = %event,
            inventory = self.inventory,
            "{}",
            outcome.effect
        );

        if self.record_history {
            self.history.push(StateTransition {
                from,
                to: self.state,
                event,
                inventory: self.inventory,
                timestamp: self.metadata.updated_at,
            });
        }

        outcome.effect
    }
}

impl fmt::Display for GumballMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Currently, the machine has {} gumballs. It's in state {}",
            self.inventory, self.state
        )
    }
}
