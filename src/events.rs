//! Event handling vocabulary shared by the select subcomponents.

use crate::option::SelectOption;

/// Result of handling an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Observer invoked synchronously on every selection transition.
///
/// Receives the new selection; `None` when a toggle cleared it. Invoked
/// inside the activation call, after the selection cell has been updated.
pub type ChangeObserver = Box<dyn Fn(Option<&SelectOption>) + Send + Sync>;
