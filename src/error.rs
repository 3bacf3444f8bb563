//! Error types for the select widget.

use thiserror::Error;

/// Errors raised by select subcomponents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// A subcomponent handle was used after its `Select` root was dropped.
    ///
    /// This is a programmer-error guard, not a recoverable runtime
    /// condition: subcomponents are only valid for the lifetime of the
    /// root that created them.
    #[error("must be used within a Select root")]
    DetachedFromRoot,
}
