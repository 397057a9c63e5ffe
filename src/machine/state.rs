//! Gumball machine states and the events that drive them.

use serde::{Deserialize, Serialize};
use std::fmt;

crate::state_enum! {
    /// Where the machine is in a sale.
    ///
    /// States carry no data. Inventory lives in the machine and is handed to
    /// the transition table explicitly.
    pub enum GumballState {
        /// Waiting for a quarter. Initial state when stocked.
        NoQuarter,
        /// A quarter is in the slot.
        HasQuarter,
        /// The crank was turned and a gumball is about to drop.
        Sold,
        /// Empty. Initial state when constructed with no stock; never left.
        SoldOut,
    }
    final: [SoldOut]
}

/// An input to the machine.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Event {
    InsertQuarter,
    EjectQuarter,
    TurnCrank,
    Dispense,
}

impl Event {
    /// Every event, in declaration order.
    pub const ALL: &'static [Event] = &[
        Event::InsertQuarter,
        Event::EjectQuarter,
        Event::TurnCrank,
        Event::Dispense,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::InsertQuarter => "InsertQuarter",
            Self::EjectQuarter => "EjectQuarter",
            Self::TurnCrank => "TurnCrank",
            Self::Dispense => "Dispense",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
