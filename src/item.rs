//! Selectable rows: activation toggles the selection and dismisses the
//! overlay.

use crate::context::SelectContext;
use crate::error::SelectError;
use crate::events::EventResult;
use crate::option::SelectOption;

/// Derived visual state for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    /// Display text for the row.
    pub label: String,
    /// Checked marker: this row's value is the current selection.
    pub checked: bool,
    /// True while the interactive primitive reports a press; rendered
    /// dimmed. Supplied by the caller, not owned here.
    pub pressed: bool,
    /// Rows after the first draw a separator above themselves.
    pub separated: bool,
}

/// One selectable row of the dropdown.
#[derive(Debug, Clone)]
pub struct SelectItemRow {
    ctx: SelectContext,
    index: usize,
    option: SelectOption,
}

impl SelectItemRow {
    pub(crate) fn new(ctx: SelectContext, index: usize, option: SelectOption) -> Self {
        Self { ctx, index, option }
    }

    /// Position of this row within the catalog.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The option this row displays.
    pub fn option(&self) -> &SelectOption {
        &self.option
    }

    /// Whether this row is the current selection, compared by value.
    pub fn is_checked(&self) -> Result<bool, SelectError> {
        let shared = self.ctx.shared()?;
        Ok(shared.selected_value().as_deref() == Some(self.option.value.as_str()))
    }

    /// Activate this row.
    ///
    /// Toggles the selection: the row becomes the selection, unless it
    /// already was, in which case the selection clears. The observer is
    /// invoked with the new selection, and the overlay is asked to
    /// dismiss.
    pub fn activate(&self) -> Result<EventResult, SelectError> {
        let shared = self.ctx.shared()?;
        shared.toggle_selection(&self.option);
        shared.set_open(false);
        Ok(EventResult::Consumed)
    }

    /// Build the visual projection for the row.
    ///
    /// `pressed` comes from the underlying interactive primitive.
    pub fn view(&self, pressed: bool) -> Result<ItemView, SelectError> {
        Ok(ItemView {
            label: self.option.label.clone(),
            checked: self.is_checked()?,
            pressed,
            separated: self.index > 0,
        })
    }
}
