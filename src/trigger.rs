//! Trigger projection: the closed appearance of the select.

use crate::context::SelectContext;
use crate::error::SelectError;
use crate::events::EventResult;

/// Indicator glyph while the dropdown is closed.
const INDICATOR_CLOSED: &str = "▼";
/// Indicator glyph while the dropdown is open.
const INDICATOR_OPEN: &str = "▲";

/// Derived visual state for the trigger.
///
/// A pure projection of (selection, placeholder, open, pressed); the
/// trigger owns no state of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerView {
    /// Selected value, or the placeholder when nothing is selected.
    pub text: String,
    /// True when the placeholder is showing; rendered dimmed.
    pub placeholder_shown: bool,
    /// True while the interactive primitive reports a press; rendered
    /// dimmed. Supplied by the caller, not owned here.
    pub pressed: bool,
    /// Open/closed indicator glyph.
    pub indicator: &'static str,
}

/// The select trigger.
///
/// Displays the current selection (its value) or a caller-supplied
/// placeholder, and toggles the overlay on activation.
#[derive(Debug, Clone)]
pub struct SelectTrigger {
    ctx: SelectContext,
    placeholder: String,
}

impl SelectTrigger {
    pub(crate) fn new(ctx: SelectContext, placeholder: impl Into<String>) -> Self {
        Self {
            ctx,
            placeholder: placeholder.into(),
        }
    }

    /// The placeholder shown when nothing is selected.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// The text the trigger displays: the selected option's value, or the
    /// placeholder when nothing is selected.
    pub fn display_text(&self) -> Result<String, SelectError> {
        let shared = self.ctx.shared()?;
        Ok(shared
            .selected_value()
            .unwrap_or_else(|| self.placeholder.clone()))
    }

    /// Whether the placeholder is currently showing.
    pub fn shows_placeholder(&self) -> Result<bool, SelectError> {
        let shared = self.ctx.shared()?;
        Ok(shared.selected_value().is_none())
    }

    /// Build the visual projection.
    ///
    /// `pressed` comes from the underlying interactive primitive.
    pub fn view(&self, pressed: bool) -> Result<TriggerView, SelectError> {
        let shared = self.ctx.shared()?;
        let selected = shared.selected_value();
        let placeholder_shown = selected.is_none();
        Ok(TriggerView {
            text: selected.unwrap_or_else(|| self.placeholder.clone()),
            placeholder_shown,
            pressed,
            indicator: if shared.is_open() {
                INDICATOR_OPEN
            } else {
                INDICATOR_CLOSED
            },
        })
    }

    /// Activation toggles the overlay open/closed.
    pub fn activate(&self) -> Result<EventResult, SelectError> {
        let shared = self.ctx.shared()?;
        shared.toggle_open();
        Ok(EventResult::Consumed)
    }
}
