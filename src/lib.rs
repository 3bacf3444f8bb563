//! Compound dropdown-select widget: a trigger, an overlay list, and
//! selectable rows, composed over an external popover primitive and an
//! external virtualized-list primitive.
//!
//! The crate owns interaction state only: the single nullable selection,
//! the open/closed mirror, and the projections derived from them — the
//! trigger text, the per-row checked markers, and the one-shot scroll hint
//! that makes the selected row visible when the dropdown opens. Rendering,
//! gestures, and the floating container itself belong to the host and its
//! primitives, reached through explicit config and request structs.
//!
//! ```ignore
//! let catalog = Catalog::from_entries(&[("a", "Alpha"), ("b", "Beta")]);
//! let select = Select::new(catalog);
//! let trigger = select.trigger("Select...");
//!
//! assert_eq!(trigger.display_text()?, "Select...");
//! select.item_row(1).unwrap().activate()?;
//! assert_eq!(trigger.display_text()?, "b");
//! ```

pub mod context;
pub mod error;
pub mod events;
pub mod item;
pub mod list;
pub mod option;
pub mod overlay;
pub mod state;
pub mod trigger;

pub use error::SelectError;
pub use state::{Select, SelectId};

pub mod prelude {
    //! Convenient imports for hosts embedding the widget.

    pub use crate::context::SelectContext;
    pub use crate::error::SelectError;
    pub use crate::events::{ChangeObserver, EventResult};
    pub use crate::item::{ItemView, SelectItemRow};
    pub use crate::list::{ITEM_HEIGHT, LIST_PADDING, ListViewConfig, SelectList};
    pub use crate::option::{Catalog, CatalogEntry, SelectOption};
    pub use crate::overlay::{
        OverlayConfig, OverlayPosition, OverlayRequest, PopoverConfig, Rect,
        resolve_overlay_position,
    };
    pub use crate::state::{Select, SelectId};
    pub use crate::trigger::{SelectTrigger, TriggerView};
}
