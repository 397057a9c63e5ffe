//! Invariant violations.

use crate::machine::{Event, GumballState};
use thiserror::Error;

/// A machine invariant that does not hold.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ViolationError {
    #[error("Machine is sold out but still holds {inventory} gumballs")]
    SoldOutWithInventory { inventory: u32 },

    #[error("Machine is in state {state} with an empty hopper")]
    EmptyWithoutSoldOut { state: GumballState },

    #[error("Machine is at rest in transient state {state}")]
    TransientState { state: GumballState },

    #[error("History ends in {recorded} but machine is in {current}")]
    HistoryDiverged {
        recorded: GumballState,
        current: GumballState,
    },

    #[error("History jumps from {previous_to} to a transition starting at {next_from}")]
    HistoryDiscontinuous {
        previous_to: GumballState,
        next_from: GumballState,
    },

    #[error("History records {from} --{event}--> {to}, which the machine cannot do")]
    IllegalTransition {
        from: GumballState,
        event: Event,
        to: GumballState,
    },

    #[error("Inventory increased from {before} to {after}")]
    InventoryIncreased { before: u32, after: u32 },

    #[error("History ends with {recorded} gumballs but machine holds {current}")]
    HistoryInventoryMismatch { recorded: u32, current: u32 },
}
