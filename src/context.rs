//! Shared state handle passed from the root to every subcomponent.

use std::sync::{Arc, Weak};

use crate::error::SelectError;
use crate::state::Shared;

/// Capability handle for the root's shared state.
///
/// Subcomponents can only be constructed through a [`Select`] root, which
/// hands each of them one of these. The handle is weak: once the root is
/// dropped, every operation fails fast with
/// [`SelectError::DetachedFromRoot`] instead of silently operating on
/// stale state.
///
/// [`Select`]: crate::state::Select
#[derive(Debug, Clone)]
pub struct SelectContext {
    shared: Weak<Shared>,
}

impl SelectContext {
    pub(crate) fn new(shared: &Arc<Shared>) -> Self {
        Self {
            shared: Arc::downgrade(shared),
        }
    }

    /// Upgrade to the live shared state, or fail fast.
    pub(crate) fn shared(&self) -> Result<Arc<Shared>, SelectError> {
        self.shared.upgrade().ok_or(SelectError::DetachedFromRoot)
    }
}
