//! Core State trait for state machine states.
//!
//! States are plain values. Everything mutable (inventory, history) lives in
//! the machine that owns the state, never in the state itself.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. Implementors are usually fieldless enums generated
/// by [`state_enum!`](crate::state_enum).
///
/// # Required Traits
///
/// - `Copy` + `Eq`: states are compared by variant, never by identity
/// - `Debug`: for diagnostics
/// - `Serialize` + `Deserialize`: for checkpoints
///
/// # Example
///
/// ```rust
/// use gumball::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
///     Welded,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Welded => "Welded",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Welded)
///     }
/// }
///
/// assert!(Door::Welded.is_final());
/// ```
pub trait State:
    Copy + Eq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &'static str;

    /// Check if this is a final (terminal) state.
    ///
    /// No event moves a machine out of a final state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
    enum Lamp {
        On,
        Off,
        Broken,
    }

    impl State for Lamp {
        fn name(&self) -> &'static str {
            match self {
                Self::On => "On",
                Self::Off => "Off",
                Self::Broken => "Broken",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Broken)
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(Lamp::On.name(), "On");
        assert_eq!(Lamp::Off.name(), "Off");
        assert_eq!(Lamp::Broken.name(), "Broken");
    }

    #[test]
    fn is_final_identifies_terminal_states() {
        assert!(!Lamp::On.is_final());
        assert!(!Lamp::Off.is_final());
        assert!(Lamp::Broken.is_final());
    }

    #[test]
    fn state_serializes_correctly() {
        let json = serde_json::to_string(&Lamp::Off).unwrap();
        assert_eq!(json, "\"Off\"");
        let deserialized: Lamp = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Lamp::Off);
    }

    #[test]
    fn states_compare_by_variant() {
        let copy = Lamp::On;
        assert_eq!(copy, Lamp::On);
        assert_ne!(Lamp::On, Lamp::Off);
    }
}
