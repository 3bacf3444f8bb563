use picklist::overlay::{OverlayPosition, Rect, resolve_overlay_position};

#[test]
fn test_overlay_below_when_space() {
    let screen = Rect::new(0, 0, 80, 24);
    let anchor = Rect::new(10, 5, 20, 1);

    let area = resolve_overlay_position(screen, anchor, (20, 4), OverlayPosition::Below);
    assert_eq!(area, Rect::new(10, 6, 20, 4));
}

#[test]
fn test_overlay_below_flips_above_when_no_space() {
    let screen = Rect::new(0, 0, 80, 24);
    let anchor = Rect::new(10, 22, 20, 1);

    let area = resolve_overlay_position(screen, anchor, (20, 4), OverlayPosition::Below);
    assert_eq!(area, Rect::new(10, 18, 20, 4));
}

#[test]
fn test_overlay_above_when_space() {
    let screen = Rect::new(0, 0, 80, 24);
    let anchor = Rect::new(10, 10, 20, 1);

    let area = resolve_overlay_position(screen, anchor, (20, 4), OverlayPosition::Above);
    assert_eq!(area, Rect::new(10, 6, 20, 4));
}

#[test]
fn test_overlay_above_flips_below_when_no_space() {
    let screen = Rect::new(0, 0, 80, 24);
    let anchor = Rect::new(10, 2, 20, 1);

    let area = resolve_overlay_position(screen, anchor, (20, 4), OverlayPosition::Above);
    assert_eq!(area, Rect::new(10, 3, 20, 4));
}

#[test]
fn test_overlay_constrained_to_screen_right_edge() {
    let screen = Rect::new(0, 0, 80, 24);
    let anchor = Rect::new(70, 5, 10, 1);

    let area = resolve_overlay_position(screen, anchor, (30, 4), OverlayPosition::Below);
    assert_eq!(area.x, 50);
    assert_eq!(area.right(), 80);
}

#[test]
fn test_overlay_size_clamped_to_screen() {
    let screen = Rect::new(0, 0, 40, 10);
    let anchor = Rect::new(0, 0, 10, 1);

    let area = resolve_overlay_position(screen, anchor, (60, 20), OverlayPosition::Below);
    assert_eq!(area.width, 40);
    assert_eq!(area.height, 10);
}

#[test]
fn test_overlay_at_cursor_constrained() {
    let screen = Rect::new(0, 0, 80, 24);

    let area = resolve_overlay_position(
        screen,
        Rect::default(),
        (10, 5),
        OverlayPosition::AtCursor { x: 78, y: 23 },
    );
    assert_eq!(area, Rect::new(70, 19, 10, 5));
}

#[test]
fn test_rect_contains() {
    let rect = Rect::new(5, 5, 10, 10);

    assert!(rect.contains(5, 5));
    assert!(rect.contains(14, 14));
    assert!(!rect.contains(15, 15));
    assert!(!rect.contains(4, 10));
}
