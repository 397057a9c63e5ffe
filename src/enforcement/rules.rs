//! Machine invariants, checked with Validation.

use crate::enforcement::context::InvariantContext;
use crate::enforcement::violations::ViolationError;
use crate::machine::{transition, Event, GumballState};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ViolationError>>;

fn check(holds: bool, violation: impl FnOnce() -> ViolationError) -> Check {
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Enforce every invariant, accumulating ALL violations.
///
/// - `SoldOut` iff the hopper is empty
/// - `Sold` is never observed at rest
/// - every recorded step is one the transition table allows
/// - recorded history is continuous, never gains inventory, and agrees with
///   the current state and inventory
pub fn enforce(context: &InvariantContext<'_>) -> Check {
    let state = context.state;
    let inventory = context.inventory;
    let mut checks: Vec<Check> = Vec::new();

    checks.push(check(state != GumballState::SoldOut || inventory == 0, || {
        ViolationError::SoldOutWithInventory { inventory }
    }));

    let waiting = matches!(state, GumballState::NoQuarter | GumballState::HasQuarter);
    checks.push(check(!waiting || inventory > 0, || {
        ViolationError::EmptyWithoutSoldOut { state }
    }));

    checks.push(check(state != GumballState::Sold, || {
        ViolationError::TransientState { state }
    }));

    let transitions = context.history.transitions();
    for (index, step) in transitions.iter().enumerate() {
        // a trimmed history has no record of the stock before its first step
        let before = match index {
            0 => step
                .inventory
                .saturating_add(u32::from(step.event == Event::Dispense)),
            _ => transitions[index - 1].inventory,
        };
        let outcome = transition(step.from, step.event, before);
        let legal = !outcome.effect.is_rejected()
            && outcome.next == step.to
            && outcome.inventory == step.inventory;
        checks.push(check(legal, || ViolationError::IllegalTransition {
            from: step.from,
            event: step.event,
            to: step.to,
        }));
    }

    for pair in transitions.windows(2) {
        let (previous, next) = (&pair[0], &pair[1]);
        checks.push(check(previous.to == next.from, || {
            ViolationError::HistoryDiscontinuous {
                previous_to: previous.to,
                next_from: next.from,
            }
        }));
        checks.push(check(next.inventory <= previous.inventory, || {
            ViolationError::InventoryIncreased {
                before: previous.inventory,
                after: next.inventory,
            }
        }));
    }

    if let Some(last) = transitions.last() {
        checks.push(check(last.to == state, || ViolationError::HistoryDiverged {
            recorded: last.to,
            current: state,
        }));
        checks.push(check(last.inventory == inventory, || {
            ViolationError::HistoryInventoryMismatch {
                recorded: last.inventory,
                current: inventory,
            }
        }));
    }

    Validation::all_vec(checks).map(|_| ())
}
