//! Seams toward the external overlay/popover primitive.
//!
//! The popover is an external collaborator: it opens, positions, and
//! dismisses the floating container that hosts the list. This module
//! carries the explicit configuration handed to it and the anchor-relative
//! placement geometry.
//!
//! The overlay is owned by the widget rather than the host runtime: it is
//! anchored to the trigger's rectangle and is expected to dismiss on blur
//! or on an outside press, per [`PopoverConfig`].

/// Screen-space rectangle, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Placement preference for the overlay relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPosition {
    /// Under the anchor, the dropdown default; flips above when the
    /// content does not fit below.
    #[default]
    Below,
    /// Over the anchor; flips below when the content does not fit above.
    Above,
    /// At an explicit position, context-menu style.
    AtCursor { x: u16, y: u16 },
}

/// Container overrides for the overlay hosting the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayConfig {
    /// Preferred placement relative to the anchor.
    pub position: OverlayPosition,
    /// Cap on the overlay height, in cells.
    pub max_height: Option<u16>,
    /// Explicit overlay width; defaults to the anchor width.
    pub width: Option<u16>,
}

/// Configuration the root forwards to the popover primitive.
///
/// An enumerable contract in place of open-ended pass-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopoverConfig {
    /// Preferred placement of the floating container.
    pub position: OverlayPosition,
    /// Dismiss when the user activates outside the overlay.
    pub dismiss_on_outside_press: bool,
    /// Dismiss when the trigger loses focus.
    pub dismiss_on_blur: bool,
}

impl Default for PopoverConfig {
    fn default() -> Self {
        Self {
            position: OverlayPosition::Below,
            dismiss_on_outside_press: true,
            dismiss_on_blur: true,
        }
    }
}

/// A request from the widget to the popover primitive to show an overlay.
///
/// The list container assembles one of these when the dropdown opens; the
/// popover primitive resolves it against the screen and renders the
/// floating container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayRequest {
    /// ID of the widget that owns this overlay.
    /// Used for outside-press detection and blur handling.
    pub owner_id: String,
    /// Anchor rectangle (the trigger element's screen position).
    pub anchor: Rect,
    /// Preferred position relative to the anchor.
    pub position: OverlayPosition,
    /// Content size (width, height) in cells.
    pub size: (u16, u16),
}

impl OverlayRequest {
    /// Resolve the final overlay rectangle within `screen`.
    pub fn resolve(&self, screen: Rect) -> Rect {
        resolve_overlay_position(screen, self.anchor, self.size, self.position)
    }
}

/// Resolve the screen rectangle for an overlay from its anchor, the
/// preferred placement, and the screen bounds, flipping vertically when the
/// content does not fit on the preferred side.
pub fn resolve_overlay_position(
    screen: Rect,
    anchor: Rect,
    content_size: (u16, u16),
    position: OverlayPosition,
) -> Rect {
    let (width, height) = content_size;

    // Constrain dimensions to screen
    let width = width.min(screen.width);
    let height = height.min(screen.height);

    match position {
        OverlayPosition::Below => {
            let y_below = anchor.bottom();
            let fits_below = y_below + height <= screen.bottom();

            if fits_below {
                Rect::new(constrain_x(anchor.x, width, screen), y_below, width, height)
            } else {
                let y_above = anchor.y.saturating_sub(height);
                Rect::new(constrain_x(anchor.x, width, screen), y_above, width, height)
            }
        }
        OverlayPosition::Above => {
            let fits_above = anchor.y >= height;

            if fits_above {
                let y = anchor.y.saturating_sub(height);
                Rect::new(constrain_x(anchor.x, width, screen), y, width, height)
            } else {
                let y = anchor.bottom();
                Rect::new(constrain_x(anchor.x, width, screen), y, width, height)
            }
        }
        OverlayPosition::AtCursor { x, y } => {
            let x = x.min(screen.x + screen.width.saturating_sub(width));
            let y = y.min(screen.y + screen.height.saturating_sub(height));
            Rect::new(x, y, width, height)
        }
    }
}

/// Constrain x position to fit within screen bounds.
fn constrain_x(x: u16, width: u16, screen: Rect) -> u16 {
    let max_x = screen.x + screen.width.saturating_sub(width);
    x.min(max_x).max(screen.x)
}
