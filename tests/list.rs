use picklist::Select;
use picklist::list::{ITEM_HEIGHT, LIST_PADDING};
use picklist::option::{Catalog, SelectOption};
use picklist::overlay::{OverlayConfig, OverlayPosition, Rect};

fn fruit_catalog() -> Catalog {
    Catalog::from_entries(&[("apple", "Apple"), ("banana", "Banana"), ("cherry", "Cherry")])
}

#[test]
fn test_scroll_index_unset_when_nothing_selected() {
    let select = Select::new(fruit_catalog());
    let list = select.list();

    assert_eq!(list.initial_scroll_index().unwrap(), None);
}

#[test]
fn test_scroll_index_matches_catalog_position() {
    let select = Select::with_default(fruit_catalog(), SelectOption::new("cherry", "Cherry"));
    let list = select.list();

    assert_eq!(list.initial_scroll_index().unwrap(), Some(2));
}

#[test]
fn test_scroll_index_stable_until_selection_changes() {
    let select = Select::with_default(fruit_catalog(), SelectOption::new("banana", "Banana"));
    let list = select.list();

    assert_eq!(list.initial_scroll_index().unwrap(), Some(1));
    assert_eq!(list.initial_scroll_index().unwrap(), Some(1));

    select.item_row(0).unwrap().activate().unwrap();
    assert_eq!(list.initial_scroll_index().unwrap(), Some(0));

    select.item_row(0).unwrap().activate().unwrap();
    assert_eq!(list.initial_scroll_index().unwrap(), None);
}

#[test]
fn test_scroll_index_unset_for_value_outside_catalog() {
    // Callers are expected to seed defaults from the catalog, but a stray
    // value must not produce a bogus scroll position.
    let select = Select::with_default(fruit_catalog(), SelectOption::new("durian", "Durian"));
    let list = select.list();

    assert_eq!(list.initial_scroll_index().unwrap(), None);
}

#[test]
fn test_content_height_formula() {
    let select = Select::new(fruit_catalog());
    let list = select.list();

    assert_eq!(
        list.content_height().unwrap(),
        3 * ITEM_HEIGHT + LIST_PADDING
    );
}

#[test]
fn test_list_view_config() {
    let select = Select::with_default(fruit_catalog(), SelectOption::new("banana", "Banana"));
    let list = select.list();

    let view = list.list_view().unwrap();
    assert_eq!(view.row_count, 3);
    assert_eq!(view.row_height, ITEM_HEIGHT);
    assert_eq!(view.initial_scroll_index, Some(1));
}

#[test]
fn test_invalidation_key_changes_on_selection() {
    let select = Select::new(fruit_catalog());
    let list = select.list();

    let before = list.list_view().unwrap().invalidation_key;
    select.item_row(2).unwrap().activate().unwrap();
    let after = list.list_view().unwrap().invalidation_key;

    assert_ne!(before, after);
}

#[test]
fn test_row_vends_catalog_option() {
    let select = Select::new(fruit_catalog());
    let list = select.list();

    let row = list.row(1).unwrap().unwrap();
    assert_eq!(row.index(), 1);
    assert_eq!(row.option().value, "banana");

    assert!(list.row(3).unwrap().is_none());
}

#[test]
fn test_overlay_request_takes_anchor_width() {
    let select = Select::new(fruit_catalog());
    let list = select.list();
    let anchor = Rect::new(4, 2, 20, 1);

    let request = list.overlay_request(anchor).unwrap();
    assert_eq!(request.owner_id, select.id_string());
    assert_eq!(request.anchor, anchor);
    assert_eq!(request.position, OverlayPosition::Below);
    assert_eq!(request.size, (20, 3 * ITEM_HEIGHT + LIST_PADDING));
}

#[test]
fn test_overlay_request_honors_container_overrides() {
    let select = Select::new(fruit_catalog());
    let list = select.list().with_overlay(OverlayConfig {
        position: OverlayPosition::Above,
        max_height: Some(2),
        width: Some(30),
    });

    let request = list.overlay_request(Rect::new(0, 10, 20, 1)).unwrap();
    assert_eq!(request.position, OverlayPosition::Above);
    assert_eq!(request.size, (30, 2));
}
