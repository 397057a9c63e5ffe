//! The gumball machine.
//!
//! Split into a pure transition table ([`transition`]) and a thin owner
//! ([`GumballMachine`]) that holds the inventory, applies outcomes, logs and
//! records history.
//!
//! | State \ Event | InsertQuarter | EjectQuarter | TurnCrank | Dispense |
//! |---|---|---|---|---|
//! | NoQuarter  | → HasQuarter | rejected | rejected | rejected |
//! | HasQuarter | rejected | → NoQuarter | → Sold | rejected |
//! | Sold       | rejected | rejected | rejected | → NoQuarter / SoldOut |
//! | SoldOut    | rejected | rejected | rejected | rejected |

mod gumball;
mod state;
mod transition;

pub use gumball::GumballMachine;
pub use state::{Event, GumballState};
pub use transition::{transition, Effect, Outcome, Rejection};
