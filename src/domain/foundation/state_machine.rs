//! Transition rules for small state enums.

use super::ValidationError;

/// An enum whose values move between each other under fixed rules.
///
/// Implementors list which moves are legal; `transition_to` turns an illegal
/// move into a `ValidationError` so callers can use `?`.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    fn can_transition_to(&self, target: &Self) -> bool;

    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::illegal_transition(self, target))
        }
    }
}
