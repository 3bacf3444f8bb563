//! List container: geometry and the one-shot scroll hint for the external
//! virtualized-list primitive.

use std::sync::RwLock;

use log::trace;

use crate::context::SelectContext;
use crate::error::SelectError;
use crate::item::SelectItemRow;
use crate::overlay::{OverlayConfig, OverlayRequest, Rect};

/// Fixed row height, in cells.
pub const ITEM_HEIGHT: u16 = 1;
/// Vertical padding added below the rows.
pub const LIST_PADDING: u16 = 1;

/// Configuration handed to the external virtualized-list primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListViewConfig {
    /// Number of rows to virtualize.
    pub row_count: usize,
    /// Fixed row height hint.
    pub row_height: u16,
    /// One-shot hint: scroll so this row is visible when the list opens.
    /// Not re-applied while the list stays open.
    pub initial_scroll_index: Option<usize>,
    /// Invalidation key: visible rows re-render when this changes.
    pub invalidation_key: u64,
}

#[derive(Debug, Clone, Copy)]
struct ScrollMemo {
    generation: u64,
    index: Option<usize>,
}

/// The overlay list container.
///
/// Computes what the two collaborating primitives need: the overlay's
/// content geometry, and the virtualization config with the scroll hint
/// that makes the selected row visible when the dropdown opens.
#[derive(Debug)]
pub struct SelectList {
    ctx: SelectContext,
    overlay: OverlayConfig,
    memo: RwLock<Option<ScrollMemo>>,
}

impl SelectList {
    pub(crate) fn new(ctx: SelectContext) -> Self {
        Self {
            ctx,
            overlay: OverlayConfig::default(),
            memo: RwLock::new(None),
        }
    }

    /// Override the overlay container configuration.
    pub fn with_overlay(mut self, overlay: OverlayConfig) -> Self {
        self.overlay = overlay;
        self
    }

    /// Number of rows in the list.
    pub fn row_count(&self) -> Result<usize, SelectError> {
        Ok(self.ctx.shared()?.catalog().len())
    }

    /// Vend the row at `index`, or `None` past the end of the catalog.
    pub fn row(&self, index: usize) -> Result<Option<SelectItemRow>, SelectError> {
        let shared = self.ctx.shared()?;
        Ok(shared
            .catalog()
            .get(index)
            .cloned()
            .map(|option| SelectItemRow::new(self.ctx.clone(), index, option)))
    }

    /// Position of the selected option within the catalog, or `None` when
    /// nothing is selected.
    ///
    /// Memoized on the selection generation; the catalog is fixed for the
    /// widget's lifetime, so the generation is the only live part of the
    /// key. The result is a one-shot hint for the virtualization primitive
    /// at open time, not a reactive binding.
    pub fn initial_scroll_index(&self) -> Result<Option<usize>, SelectError> {
        let shared = self.ctx.shared()?;
        let (generation, selected) = shared.selection_snapshot();

        if let Ok(memo) = self.memo.read()
            && let Some(memo) = *memo
            && memo.generation == generation
        {
            return Ok(memo.index);
        }

        let index = selected.and_then(|opt| shared.catalog().position_of(&opt.value));
        trace!(
            "{}: recomputed initial scroll index: {:?}",
            shared.id(),
            index
        );
        if let Ok(mut memo) = self.memo.write() {
            *memo = Some(ScrollMemo { generation, index });
        }
        Ok(index)
    }

    /// Deterministic content height: `row_count * ITEM_HEIGHT + LIST_PADDING`.
    pub fn content_height(&self) -> Result<u16, SelectError> {
        let rows = u16::try_from(self.row_count()?).unwrap_or(u16::MAX);
        Ok(rows
            .saturating_mul(ITEM_HEIGHT)
            .saturating_add(LIST_PADDING))
    }

    /// Assemble the configuration for the virtualized-list primitive.
    pub fn list_view(&self) -> Result<ListViewConfig, SelectError> {
        let shared = self.ctx.shared()?;
        Ok(ListViewConfig {
            row_count: shared.catalog().len(),
            row_height: ITEM_HEIGHT,
            initial_scroll_index: self.initial_scroll_index()?,
            invalidation_key: shared.selection_generation(),
        })
    }

    /// Assemble the overlay request for the popover primitive.
    ///
    /// `anchor` is the trigger's screen rectangle; the overlay takes the
    /// anchor's width unless the container config overrides it, and its
    /// height is the content height capped by the config.
    pub fn overlay_request(&self, anchor: Rect) -> Result<OverlayRequest, SelectError> {
        let shared = self.ctx.shared()?;
        let width = self.overlay.width.unwrap_or(anchor.width);
        let mut height = self.content_height()?;
        if let Some(max) = self.overlay.max_height {
            height = height.min(max);
        }
        Ok(OverlayRequest {
            owner_id: shared.id().to_string(),
            anchor,
            position: self.overlay.position,
            size: (width, height),
        })
    }
}
