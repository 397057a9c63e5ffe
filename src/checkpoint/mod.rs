//! Checkpoint and resume for gumball machines.
//!
//! A checkpoint is a plain serializable copy of a machine at rest. Resuming
//! validates it against the machine invariants first, so a hand-edited or
//! corrupted checkpoint cannot produce a machine in an impossible state.

use crate::core::StateHistory;
use crate::machine::{GumballMachine, GumballState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Counters tracked by a machine over its lifetime
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineMetadata {
    /// When machine was created
    pub created_at: DateTime<Utc>,

    /// Time of the last event, accepted or not
    pub updated_at: DateTime<Utc>,

    pub quarters_accepted: u64,
    pub quarters_returned: u64,
    pub gumballs_dispensed: u64,

    /// Events refused by the state they arrived in
    pub rejected_events: u64,
}

impl Default for MachineMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            quarters_accepted: 0,
            quarters_returned: 0,
            gumballs_dispensed: 0,
            rejected_events: 0,
        }
    }
}

/// Serializable checkpoint of a gumball machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    pub state: GumballState,

    pub inventory: u32,

    pub record_history: bool,

    /// Complete transition history
    pub history: StateHistory<GumballState>,

    pub metadata: MachineMetadata,
}

impl Checkpoint {
    /// Human-readable JSON form.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Compact binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}

impl GumballMachine {
    /// Take a checkpoint of the machine as it is now.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            state: self.state(),
            inventory: self.inventory(),
            record_history: self.records_history(),
            history: self.history().clone(),
            metadata: self.metadata().clone(),
        }
    }

    /// Rebuild a machine from a checkpoint.
    ///
    /// # Example
    ///
    /// ```
    /// use gumball::GumballMachine;
    ///
    /// let mut machine = GumballMachine::new(3);
    /// machine.insert_quarter();
    ///
    /// let json = machine.checkpoint().to_json().unwrap();
    /// let restored = GumballMachine::resume(gumball::Checkpoint::from_json(&json).unwrap()).unwrap();
    ///
    /// assert_eq!(restored.state(), machine.state());
    /// assert_eq!(restored.inventory(), 3);
    /// ```
    pub fn resume(checkpoint: Checkpoint) -> Result<Self, CheckpointError> {
        if checkpoint.version != CHECKPOINT_VERSION {
            warn!(
                id = %checkpoint.id,
                found = checkpoint.version,
                supported = CHECKPOINT_VERSION,
                "refusing checkpoint with unsupported version"
            );
            return Err(CheckpointError::UnsupportedVersion {
                found: checkpoint.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let machine = GumballMachine::from_parts(
            checkpoint.state,
            checkpoint.inventory,
            checkpoint.history,
            checkpoint.metadata,
            checkpoint.record_history,
        );

        if let Err(violations) = machine.verify() {
            warn!(
                id = %checkpoint.id,
                violations = violations.len(),
                "refusing inconsistent checkpoint"
            );
            return Err(CheckpointError::ValidationFailed { violations });
        }

        Ok(machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateTransition;
    use crate::enforcement::ViolationError;
    use crate::machine::Event;

    fn used_machine() -> GumballMachine {
        let mut machine = GumballMachine::new(3);
        machine.insert_quarter();
        machine.turn_crank();
        machine.insert_quarter();
        machine
    }

    #[test]
    fn json_checkpoint_resumes_identical_machine() {
        let machine = used_machine();
        let checkpoint = machine.checkpoint();

        let json = checkpoint.to_json().unwrap();
        let decoded = Checkpoint::from_json(&json).unwrap();
        assert_eq!(decoded, checkpoint);

        let restored = GumballMachine::resume(decoded).unwrap();
        assert_eq!(restored.state(), GumballState::HasQuarter);
        assert_eq!(restored.inventory(), 2);
        assert_eq!(restored.history(), machine.history());
        assert_eq!(restored.metadata(), machine.metadata());
    }

    #[test]
    fn binary_checkpoint_resumes() {
        let machine = used_machine();
        let bytes = machine.checkpoint().to_bytes().unwrap();

        let restored = GumballMachine::resume(Checkpoint::from_bytes(&bytes).unwrap()).unwrap();
        assert_eq!(restored.state(), machine.state());
        assert_eq!(restored.inventory(), machine.inventory());
        assert_eq!(restored.history().len(), machine.history().len());
    }

    #[test]
    fn resumed_machine_keeps_selling() {
        let machine = used_machine();
        let mut restored = GumballMachine::resume(machine.checkpoint()).unwrap();

        restored.turn_crank();
        assert_eq!(restored.inventory(), 1);
        assert_eq!(restored.metadata().gumballs_dispensed, 2);
        assert!(restored.verify().is_ok());
    }

    #[test]
    fn checkpoint_ids_are_unique() {
        let machine = GumballMachine::new(1);
        assert_ne!(machine.checkpoint().id, machine.checkpoint().id);
    }

    #[test]
    fn unsupported_version_is_refused() {
        let mut checkpoint = GumballMachine::new(1).checkpoint();
        checkpoint.version = CHECKPOINT_VERSION + 1;

        let result = GumballMachine::resume(checkpoint);
        assert!(matches!(
            result,
            Err(CheckpointError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn inconsistent_checkpoint_is_refused() {
        let mut checkpoint = GumballMachine::new(0).checkpoint();
        checkpoint.inventory = 10;

        match GumballMachine::resume(checkpoint) {
            Err(CheckpointError::ValidationFailed { violations }) => {
                assert_eq!(
                    violations,
                    vec![ViolationError::SoldOutWithInventory { inventory: 10 }]
                );
            }
            other => panic!("Expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn impossible_history_is_refused() {
        let mut checkpoint = GumballMachine::new(2).checkpoint();
        let mut history = StateHistory::new();
        for (from, event, to) in [
            (GumballState::SoldOut, Event::InsertQuarter, GumballState::NoQuarter),
            (GumballState::NoQuarter, Event::TurnCrank, GumballState::Sold),
            (GumballState::Sold, Event::EjectQuarter, GumballState::NoQuarter),
        ] {
            history.push(StateTransition {
                from,
                to,
                event,
                inventory: 2,
                timestamp: Utc::now(),
            });
        }
        checkpoint.history = history;

        match GumballMachine::resume(checkpoint) {
            Err(CheckpointError::ValidationFailed { violations }) => {
                assert_eq!(
                    violations,
                    vec![
                        ViolationError::IllegalTransition {
                            from: GumballState::SoldOut,
                            event: Event::InsertQuarter,
                            to: GumballState::NoQuarter,
                        },
                        ViolationError::IllegalTransition {
                            from: GumballState::NoQuarter,
                            event: Event::TurnCrank,
                            to: GumballState::Sold,
                        },
                        ViolationError::IllegalTransition {
                            from: GumballState::Sold,
                            event: Event::EjectQuarter,
                            to: GumballState::NoQuarter,
                        },
                    ]
                );
            }
            other => panic!("Expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn unknown_event_name_fails_to_decode() {
        let mut machine = GumballMachine::new(2);
        machine.insert_quarter();
        let json = machine
            .checkpoint()
            .to_json()
            .unwrap()
            .replace("\"InsertQuarter\"", "\"Refill\"");

        let result = Checkpoint::from_json(&json);
        assert!(matches!(result, Err(CheckpointError::DeserializationFailed(_))));
    }

    #[test]
    fn history_limit_survives_checkpoint() {
        let mut machine = GumballMachine::with_options(4, true, Some(2));
        for _ in 0..5 {
            machine.insert_quarter();
            machine.eject_quarter();
        }

        let bytes = machine.checkpoint().to_bytes().unwrap();
        let mut restored = GumballMachine::resume(Checkpoint::from_bytes(&bytes).unwrap()).unwrap();
        restored.insert_quarter();

        assert_eq!(restored.history().limit(), Some(2));
        assert_eq!(restored.history().len(), 2);
    }

    #[test]
    fn garbage_json_is_a_deserialization_error() {
        let result = Checkpoint::from_json("{\"version\": 1}");
        assert!(matches!(result, Err(CheckpointError::DeserializationFailed(_))));
    }
}
