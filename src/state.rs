//! Select root state: the selection cell, the open/close mirror, and the
//! subcomponent factory.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::debug;

use crate::context::SelectContext;
use crate::events::ChangeObserver;
use crate::item::SelectItemRow;
use crate::list::SelectList;
use crate::option::{Catalog, SelectOption};
use crate::overlay::PopoverConfig;
use crate::trigger::SelectTrigger;

/// Unique identifier for a Select widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectId(usize);

impl SelectId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for SelectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__select_{}", self.0)
    }
}

/// Mutable selection state guarded by the root's lock.
#[derive(Debug)]
struct Inner {
    /// Current selection (None if nothing selected)
    selected: Option<SelectOption>,
    /// Bumped on every selection transition; memo and invalidation key
    generation: u64,
}

/// State shared between the root and its subcomponent handles.
pub(crate) struct Shared {
    /// Unique identifier for this select instance
    id: SelectId,
    /// Fixed catalog, insertion order = display order
    catalog: Catalog,
    /// Selection cell
    inner: RwLock<Inner>,
    /// Mirror of the external overlay's open/closed state
    open: AtomicBool,
    /// Dirty flag for re-render
    dirty: AtomicBool,
    /// Observer invoked on selection transitions
    observer: RwLock<Option<ChangeObserver>>,
    /// Configuration forwarded to the popover primitive
    popover: RwLock<PopoverConfig>,
}

impl Shared {
    fn new(catalog: Catalog, default: Option<SelectOption>) -> Self {
        Self {
            id: SelectId::new(),
            catalog,
            inner: RwLock::new(Inner {
                selected: default,
                generation: 0,
            }),
            open: AtomicBool::new(false),
            dirty: AtomicBool::new(false),
            observer: RwLock::new(None),
            popover: RwLock::new(PopoverConfig::default()),
        }
    }

    pub(crate) fn id(&self) -> SelectId {
        self.id
    }

    pub(crate) fn catalog(&self) -> Catalog {
        self.catalog.clone()
    }

    // -------------------------------------------------------------------------
    // Selection state
    // -------------------------------------------------------------------------

    pub(crate) fn selected(&self) -> Option<SelectOption> {
        self.inner
            .read()
            .map(|guard| guard.selected.clone())
            .unwrap_or(None)
    }

    pub(crate) fn selected_value(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.selected.as_ref().map(|opt| opt.value.clone()))
    }

    pub(crate) fn selection_generation(&self) -> u64 {
        self.inner.read().map(|guard| guard.generation).unwrap_or(0)
    }

    /// Read (generation, selection) under one lock acquisition.
    pub(crate) fn selection_snapshot(&self) -> (u64, Option<SelectOption>) {
        self.inner
            .read()
            .map(|guard| (guard.generation, guard.selected.clone()))
            .unwrap_or((0, None))
    }

    /// Toggle selection for `option`, compared by value.
    ///
    /// Clears the selection when `option` is already selected, otherwise
    /// makes `option` the selection. Invokes the observer with the new
    /// selection after the cell has been updated.
    pub(crate) fn toggle_selection(&self, option: &SelectOption) -> Option<SelectOption> {
        let Ok(mut guard) = self.inner.write() else {
            return None;
        };
        let next = if guard
            .selected
            .as_ref()
            .is_some_and(|current| current.value == option.value)
        {
            None
        } else {
            Some(option.clone())
        };
        guard.selected = next.clone();
        guard.generation = guard.generation.wrapping_add(1);
        drop(guard);

        self.dirty.store(true, Ordering::SeqCst);
        debug!(
            "{}: selection changed to {:?}",
            self.id,
            next.as_ref().map(|opt| opt.value.as_str())
        );
        self.notify(next.as_ref());
        next
    }

    fn notify(&self, selected: Option<&SelectOption>) {
        if let Ok(guard) = self.observer.read()
            && let Some(observer) = guard.as_ref()
        {
            observer(selected);
        }
    }

    pub(crate) fn set_observer(&self, observer: ChangeObserver) {
        if let Ok(mut guard) = self.observer.write() {
            *guard = Some(observer);
        }
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    pub(crate) fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    pub(crate) fn set_open(&self, open: bool) {
        if self.open.swap(open, Ordering::SeqCst) != open {
            self.dirty.store(true, Ordering::SeqCst);
            debug!("{}: overlay {}", self.id, if open { "open" } else { "closed" });
        }
    }

    pub(crate) fn toggle_open(&self) {
        self.set_open(!self.is_open());
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub(crate) fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Popover pass-through
    // -------------------------------------------------------------------------

    pub(crate) fn popover(&self) -> PopoverConfig {
        self.popover
            .read()
            .map(|guard| *guard)
            .unwrap_or_default()
    }

    pub(crate) fn set_popover(&self, config: PopoverConfig) {
        if let Ok(mut guard) = self.popover.write() {
            *guard = config;
        }
    }
}

impl fmt::Debug for Shared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shared")
            .field("id", &self.id)
            .field("catalog_len", &self.catalog.len())
            .field("selected", &self.selected_value())
            .field("open", &self.is_open())
            .finish()
    }
}

/// A compound dropdown-select widget root.
///
/// `Select` owns the selection cell for one widget instance: the fixed
/// catalog, the single nullable selection, and the open/closed mirror of
/// the external overlay. Subcomponents — the trigger, the overlay list,
/// and the item rows — are vended by the root and read the shared state
/// through it; none of them holds its own copy.
///
/// The selection is seeded from an optional default at construction and is
/// mutated only by item activation.
///
/// # Example
///
/// ```ignore
/// let catalog = Catalog::from_entries(&["Low", "Medium", "High"]);
/// let select = Select::new(catalog);
/// select.set_on_change(|selected| {
///     // react to the new selection (None when cleared)
/// });
///
/// let trigger = select.trigger("Select priority");
/// let list = select.list();
/// ```
pub struct Select {
    shared: Arc<Shared>,
}

impl Select {
    /// Create a select with no selection.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            shared: Arc::new(Shared::new(catalog, None)),
        }
    }

    /// Create a select seeded with a default selection.
    ///
    /// The default is expected to be drawn from the catalog; this is not
    /// enforced here.
    pub fn with_default(catalog: Catalog, default: SelectOption) -> Self {
        Self {
            shared: Arc::new(Shared::new(catalog, Some(default))),
        }
    }

    /// Get the unique ID for this select.
    pub fn id(&self) -> SelectId {
        self.shared.id()
    }

    /// Get the ID as a string (for overlay ownership).
    pub fn id_string(&self) -> String {
        self.shared.id().to_string()
    }

    /// The catalog shown by this instance.
    pub fn catalog(&self) -> Catalog {
        self.shared.catalog()
    }

    // -------------------------------------------------------------------------
    // Selection state
    // -------------------------------------------------------------------------

    /// Get the current selection.
    pub fn selected(&self) -> Option<SelectOption> {
        self.shared.selected()
    }

    /// Get the current selection's value.
    pub fn selected_value(&self) -> Option<String> {
        self.shared.selected_value()
    }

    /// Install the change observer.
    ///
    /// Invoked synchronously on every selection transition with the new
    /// selection, or `None` when a toggle cleared it.
    pub fn set_on_change<F>(&self, observer: F)
    where
        F: Fn(Option<&SelectOption>) + Send + Sync + 'static,
    {
        self.shared.set_observer(Box::new(observer));
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    /// Check if the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.shared.is_open()
    }

    /// Mirror the overlay opening.
    pub fn open(&self) {
        self.shared.set_open(true);
    }

    /// Mirror the overlay closing.
    pub fn close(&self) {
        self.shared.set_open(false);
    }

    /// Toggle the dropdown open/closed.
    pub fn toggle(&self) {
        self.shared.toggle_open();
    }

    // -------------------------------------------------------------------------
    // Popover pass-through
    // -------------------------------------------------------------------------

    /// Configuration forwarded to the popover primitive.
    pub fn popover(&self) -> PopoverConfig {
        self.shared.popover()
    }

    /// Set the configuration forwarded to the popover primitive.
    pub fn set_popover(&self, config: PopoverConfig) {
        self.shared.set_popover(config);
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the widget state has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.shared.is_dirty()
    }

    /// Clear the dirty flag after rendering.
    pub fn clear_dirty(&self) {
        self.shared.clear_dirty()
    }

    // -------------------------------------------------------------------------
    // Subcomponents
    // -------------------------------------------------------------------------

    /// Vend the trigger bound to this root.
    pub fn trigger(&self, placeholder: impl Into<String>) -> SelectTrigger {
        SelectTrigger::new(self.context(), placeholder)
    }

    /// Vend the overlay list container bound to this root.
    pub fn list(&self) -> SelectList {
        SelectList::new(self.context())
    }

    /// Vend the item row at `index`, or `None` past the end of the catalog.
    pub fn item_row(&self, index: usize) -> Option<SelectItemRow> {
        let option = self.shared.catalog().get(index).cloned()?;
        Some(SelectItemRow::new(self.context(), index, option))
    }

    fn context(&self) -> SelectContext {
        SelectContext::new(&self.shared)
    }
}

impl Clone for Select {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl fmt::Debug for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("id", &self.shared.id())
            .field("selected", &self.shared.selected_value())
            .field("open", &self.shared.is_open())
            .finish()
    }
}
