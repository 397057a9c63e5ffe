//! Validation-based invariant checks for a gumball machine at rest.
//!
//! Uses Stillwater's `Validation` so that a broken snapshot reports every
//! violation at once instead of the first one found.
//!
//! # Example
//!
//! ```rust
//! use gumball::core::StateHistory;
//! use gumball::enforcement::{enforce, InvariantContext};
//! use gumball::GumballState;
//!
//! let history = StateHistory::new();
//! let context = InvariantContext {
//!     state: GumballState::SoldOut,
//!     inventory: 3,
//!     history: &history,
//! };
//!
//! assert!(enforce(&context).is_failure());
//! ```

pub mod context;
pub mod rules;
pub mod violations;

pub use context::InvariantContext;
pub use rules::enforce;
pub use violations::ViolationError;
