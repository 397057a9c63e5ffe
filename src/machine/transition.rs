//! The gumball transition table.
//!
//! Every (state, event) pair is answered here and nowhere else. The function
//! is pure: inventory goes in as an argument and comes back in the outcome.

use super::state::{Event, GumballState};
use std::fmt;
use thiserror::Error;

/// Why an event was refused. `Display` is the diagnostic shown to the customer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("You haven't inserted a quarter")]
    NoQuarterToEject,

    #[error("You turned, but there's no quarter")]
    CrankWithoutQuarter,

    #[error("You need to pay first")]
    DispenseWithoutPayment,

    #[error("You already inserted a quarter")]
    QuarterAlreadyInserted,

    #[error("You need to turn the crank first")]
    DispenseBeforeCrank,

    #[error("Cannot accept another quarter")]
    QuarterDuringSale,

    #[error("Cannot eject, the transaction has been completed")]
    EjectAfterSale,

    #[error("Cannot dispense again, no more quarters")]
    CrankDuringSale,

    #[error("Cannot accept quarter, no gumballs to dispense")]
    QuarterWhenSoldOut,

    #[error("Cannot eject, you did not insert a quarter")]
    EjectWhenSoldOut,

    #[error("No gumballs to dispense")]
    NoGumballs,

    /// `Sold` with nothing left in the hopper. Unreachable through
    /// [`GumballMachine`](super::GumballMachine).
    #[error("The hopper is empty")]
    EmptyHopper,
}

/// What an event did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    QuarterAccepted,
    QuarterReturned,
    CrankTurned,
    GumballDispensed { remaining: u32 },
    Rejected(Rejection),
}

impl Effect {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuarterAccepted => f.write_str("You inserted a quarter"),
            Self::QuarterReturned => f.write_str("Quarter returned"),
            Self::CrankTurned => f.write_str("Turning the crank"),
            Self::GumballDispensed { remaining: 0 } => {
                f.write_str("Dispensing gumball. Oops, out of gumballs")
            }
            Self::GumballDispensed { .. } => f.write_str("Dispensing gumball"),
            Self::Rejected(reason) => fmt::Display::fmt(reason, f),
        }
    }
}

/// Result of one lookup in the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub next: GumballState,
    pub inventory: u32,
    pub effect: Effect,
}

impl Outcome {
    fn moved(next: GumballState, inventory: u32, effect: Effect) -> Self {
        Self {
            next,
            inventory,
            effect,
        }
    }

    fn rejected(state: GumballState, inventory: u32, reason: Rejection) -> Self {
        Self {
            next: state,
            inventory,
            effect: Effect::Rejected(reason),
        }
    }
}

/// Look up `(state, event)` in the transition table.
///
/// A rejected outcome always carries the input state and inventory back
/// unchanged.
///
/// # Example
///
/// ```
/// use gumball::{transition, Effect, Event, GumballState};
///
/// let outcome = transition(GumballState::Sold, Event::Dispense, 1);
/// assert_eq!(outcome.next, GumballState::SoldOut);
/// assert_eq!(outcome.inventory, 0);
/// assert_eq!(outcome.effect, Effect::GumballDispensed { remaining: 0 });
/// ```
pub fn transition(state: GumballState, event: Event, inventory: u32) -> Outcome {
    use Event::*;
    use GumballState::*;

    let reject = |reason| Outcome::rejected(state, inventory, reason);

    match (state, event) {
        (NoQuarter, InsertQuarter) => Outcome::moved(HasQuarter, inventory, Effect::QuarterAccepted),
        (NoQuarter, EjectQuarter) => reject(Rejection::NoQuarterToEject),
        (NoQuarter, TurnCrank) => reject(Rejection::CrankWithoutQuarter),
        (NoQuarter, Dispense) => reject(Rejection::DispenseWithoutPayment),

        (HasQuarter, InsertQuarter) => reject(Rejection::QuarterAlreadyInserted),
        (HasQuarter, EjectQuarter) => Outcome::moved(NoQuarter, inventory, Effect::QuarterReturned),
        (HasQuarter, TurnCrank) => Outcome::moved(Sold, inventory, Effect::CrankTurned),
        (HasQuarter, Dispense) => reject(Rejection::DispenseBeforeCrank),

        (Sold, InsertQuarter) => reject(Rejection::QuarterDuringSale),
        (Sold, EjectQuarter) => reject(Rejection::EjectAfterSale),
        (Sold, TurnCrank) => reject(Rejection::CrankDuringSale),
        (Sold, Dispense) => match inventory.checked_sub(1) {
            None => reject(Rejection::EmptyHopper),
            Some(remaining) => {
                let next = if remaining > 0 { NoQuarter } else { SoldOut };
                Outcome::moved(next, remaining, Effect::GumballDispensed { remaining })
            }
        },

        (SoldOut, InsertQuarter) => reject(Rejection::QuarterWhenSoldOut),
        (SoldOut, EjectQuarter) => reject(Rejection::EjectWhenSoldOut),
        (SoldOut, TurnCrank) | (SoldOut, Dispense) => reject(Rejection::NoGumballs),
    }
}
