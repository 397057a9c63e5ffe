//! Gumball: the classic gumball machine as a finite state machine.
//!
//! The machine is split the "pure core, thin shell" way. A single pure
//! function, [`transition`], answers every `(state, event)` pair; the
//! [`GumballMachine`] owns the inventory and current state, applies what the
//! table says, logs through `tracing` and records history.
//!
//! # Core Concepts
//!
//! - **State**: [`GumballState`], one of `NoQuarter`, `HasQuarter`, `Sold`, `SoldOut`
//! - **Events**: insert a quarter, eject it, turn the crank, dispense
//! - **Rejections**: events a state does not allow are refused with a
//!   [`Rejection`] and change nothing. No operation ever fails.
//! - **Checkpoints**: a machine can be saved and resumed; resuming validates
//!   the machine invariants first
//!
//! # Example
//!
//! ```rust
//! use gumball::{Effect, GumballMachine, GumballState, Rejection};
//!
//! let mut machine = GumballMachine::new(2);
//!
//! assert!(machine.insert_quarter());
//! assert!(!machine.insert_quarter());
//! assert_eq!(machine.turn_crank(), Effect::GumballDispensed { remaining: 1 });
//!
//! assert_eq!(
//!     machine.turn_crank(),
//!     Effect::Rejected(Rejection::CrankWithoutQuarter)
//! );
//! assert_eq!(machine.state(), GumballState::NoQuarter);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod enforcement;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, GumballMachineBuilder};
pub use crate::checkpoint::{Checkpoint, CheckpointError, MachineMetadata};
pub use crate::core::{State, StateHistory, StateTransition};
pub use crate::enforcement::ViolationError;
pub use crate::machine::{transition, Effect, Event, GumballMachine, GumballState, Outcome, Rejection};
