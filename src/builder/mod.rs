//! Builder API for configuring gumball machines.
//!
//! [`GumballMachine::new`](crate::GumballMachine::new) covers the common
//! case. The builder exists for the knobs beyond the starting inventory.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::GumballMachineBuilder;
