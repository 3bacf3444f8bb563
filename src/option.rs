//! Option data model: the (value, label) entity and the fixed catalog.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One selectable option: an opaque identifier plus its display text.
///
/// Equality and hashing compare `value` only. That is the single equality
/// policy for the entity: the activation toggle, the checked marker, and
/// the scroll-index lookup all agree on it, regardless of label changes or
/// fresh clones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectOption {
    /// Opaque identifier, unique within a catalog.
    pub value: String,
    /// Display text for the row.
    pub label: String,
}

impl SelectOption {
    /// Create an option from a value and a label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl PartialEq for SelectOption {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for SelectOption {}

impl Hash for SelectOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// Trait for plain data that can be turned into a catalog entry.
///
/// # Example
///
/// ```ignore
/// struct Priority {
///     id: u32,
///     name: String,
/// }
///
/// impl CatalogEntry for Priority {
///     fn entry_value(&self) -> String {
///         self.id.to_string()
///     }
///
///     fn entry_label(&self) -> String {
///         self.name.clone()
///     }
/// }
/// ```
pub trait CatalogEntry {
    /// Unique identifier for this entry.
    fn entry_value(&self) -> String;

    /// Display text for this entry.
    fn entry_label(&self) -> String;
}

impl CatalogEntry for SelectOption {
    fn entry_value(&self) -> String {
        self.value.clone()
    }

    fn entry_label(&self) -> String {
        self.label.clone()
    }
}

impl CatalogEntry for String {
    fn entry_value(&self) -> String {
        self.clone()
    }

    fn entry_label(&self) -> String {
        self.clone()
    }
}

impl CatalogEntry for &str {
    fn entry_value(&self) -> String {
        (*self).to_string()
    }

    fn entry_label(&self) -> String {
        (*self).to_string()
    }
}

impl<S1, S2> CatalogEntry for (S1, S2)
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    fn entry_value(&self) -> String {
        self.0.as_ref().to_string()
    }

    fn entry_label(&self) -> String {
        self.1.as_ref().to_string()
    }
}

/// The fixed, ordered set of options shown by one widget instance.
///
/// Insertion order is display order. Catalogs are immutable once built and
/// cheap to clone; clones share one allocation, and catalog identity is the
/// identity of that allocation.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    options: Arc<[SelectOption]>,
}

impl Catalog {
    /// Build a catalog from options.
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options: options.into(),
        }
    }

    /// Build a catalog from plain entries.
    pub fn from_entries<E: CatalogEntry>(entries: &[E]) -> Self {
        Self::new(
            entries
                .iter()
                .map(|e| SelectOption::new(e.entry_value(), e.entry_label()))
                .collect(),
        )
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the catalog has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// The option at `index`, in display order.
    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.options.get(index)
    }

    /// Iterate options in display order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter()
    }

    /// Position of the option with the given value, by linear search.
    pub fn position_of(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|opt| opt.value == value)
    }

    /// Whether two catalog handles share the same allocation.
    pub fn same_instance(&self, other: &Catalog) -> bool {
        Arc::ptr_eq(&self.options, &other.options)
    }
}

impl From<Vec<SelectOption>> for Catalog {
    fn from(options: Vec<SelectOption>) -> Self {
        Self::new(options)
    }
}

impl FromIterator<SelectOption> for Catalog {
    fn from_iter<I: IntoIterator<Item = SelectOption>>(iter: I) -> Self {
        Self {
            options: iter.into_iter().collect(),
        }
    }
}
