//! State transition history tracking.
//!
//! Only accepted transitions are recorded. Rejected events never change the
//! state, so they never appear here.

use super::state::State;
use crate::machine::Event;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single accepted state transition.
///
/// # Example
///
/// ```rust
/// use gumball::core::StateTransition;
/// use gumball::{Event, GumballState};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: GumballState::NoQuarter,
///     to: GumballState::HasQuarter,
///     event: Event::InsertQuarter,
///     inventory: 5,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.inventory, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The event that caused the transition
    pub event: Event,
    /// Inventory remaining after the transition
    pub inventory: u32,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// A history built with [`StateHistory::with_limit`] keeps only the most
/// recent `limit` transitions; older ones are dropped as new ones arrive.
///
/// # Example
///
/// ```rust
/// use gumball::core::{StateHistory, StateTransition};
/// use gumball::{Event, GumballState};
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
/// history.push(StateTransition {
///     from: GumballState::NoQuarter,
///     to: GumballState::HasQuarter,
///     event: Event::InsertQuarter,
///     inventory: 1,
///     timestamp: Utc::now(),
/// });
/// history.push(StateTransition {
///     from: GumballState::HasQuarter,
///     to: GumballState::Sold,
///     event: Event::TurnCrank,
///     inventory: 1,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // NoQuarter -> HasQuarter -> Sold
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
    #[serde(default)]
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// Create a new empty history keeping at most `limit` transitions.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Append a transition, dropping the oldest ones past the limit.
    pub fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
        if let Some(limit) = self.limit {
            let excess = self.transitions.len().saturating_sub(limit);
            self.transitions.drain(..excess);
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition, then the `to` state
    /// of each transition. Empty when nothing has been recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// Get all transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
