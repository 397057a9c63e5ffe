//! Build errors for the machine builder.

use thiserror::Error;

/// Errors that can occur when building a gumball machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial inventory not specified. Call .inventory(count) before .build()")]
    MissingInventory,
}
