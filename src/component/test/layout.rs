use super::*;

/// Tests buttons fill the first button row before a new row is made.
///
/// Expected: five buttons in row one, the sixth in row two
#[test]
fn places_buttons_in_first_row_with_room() {
    let mut layout = ComponentLayout::default();

    for i in 0..6 {
        layout.place_button(button(&i.to_string())).unwrap();
    }

    assert_eq!(layout.rows.len(), 2);
    assert_eq!(layout.rows[0].components.len(), 5);
    assert_eq!(layout.rows[1].components.len(), 1);
}

/// Tests buttons are never placed into a menu row.
///
/// Expected: button placed on a new row after the menu
#[test]
fn skips_menu_rows_when_placing() {
    let mut layout = ComponentLayout::default();
    layout.add_menu(menu("roles", &["A"])).unwrap();

    layout.place_button(button("a")).unwrap();

    assert_eq!(layout.rows.len(), 2);
    assert!(matches!(
        layout.rows[1].components[0],
        MessageComponent::Button(_)
    ));
}

/// Tests a message with five full rows refuses new components.
///
/// Expected: Err(LayoutError::Full)
#[test]
fn full_layout_rejects_components() {
    let mut layout = ComponentLayout::default();
    for i in 0..5 {
        layout.add_menu(menu(&format!("m{}", i), &["A"])).unwrap();
    }

    assert_eq!(layout.place_button(button("a")), Err(LayoutError::Full));
    assert_eq!(layout.add_menu(menu("m5", &["A"])), Err(LayoutError::Full));
}

/// Tests custom IDs must be unique across buttons and menus.
///
/// Expected: Err(LayoutError::DuplicateId)
#[test]
fn rejects_duplicate_custom_ids() {
    let mut layout = ComponentLayout::default();
    layout.place_button(button("shared")).unwrap();

    assert_eq!(
        layout.add_menu(menu("shared", &["A"])),
        Err(LayoutError::DuplicateId("shared".to_string()))
    );
}

/// Tests walking returns components in row order.
///
/// Expected: button IDs then the menu ID
#[test]
fn walks_in_display_order() {
    let mut layout = ComponentLayout::default();
    layout.place_button(button("a")).unwrap();
    layout.place_button(button("b")).unwrap();
    layout.add_menu(menu("m", &["A"])).unwrap();

    let ids: Vec<_> = layout.walk().filter_map(|c| c.custom_id()).collect();

    assert_eq!(ids, vec!["a", "b", "m"]);
    assert_eq!(layout.buttons().count(), 2);
    assert_eq!(layout.menus().count(), 1);
}

/// Tests updating a button by label.
///
/// Expected: label lookup finds the button and the change is kept
#[test]
fn updates_button_by_label() {
    let mut layout = ComponentLayout::default();
    layout.place_button(button("a")).unwrap();

    layout
        .update_button("Label a", |b| {
            b.disabled = true;
            Ok(())
        })
        .unwrap();

    assert!(layout.find_button("a").unwrap().disabled);
}

/// Tests updating a missing component.
///
/// Expected: Err(LayoutError::NotFound)
#[test]
fn update_missing_component_fails() {
    let mut layout = ComponentLayout::default();

    let result = layout.update_menu("nope", |_| Ok(()));

    assert_eq!(result, Err(LayoutError::NotFound("nope".to_string())));
}

/// Tests removing the last component of a row drops the row.
///
/// Expected: row count shrinks and remaining rows keep order
#[test]
fn removing_last_component_drops_row() {
    let mut layout = ComponentLayout::default();
    layout.add_menu(menu("first", &["A"])).unwrap();
    layout.place_button(button("a")).unwrap();
    layout.add_menu(menu("last", &["A"])).unwrap();

    let removed = layout.remove_button("a").unwrap();

    assert_eq!(removed.custom_id(), Some("a"));
    assert_eq!(layout.rows.len(), 2);
    assert_eq!(layout.find_menu("last").unwrap().custom_id, "last");
    assert_eq!(
        layout.remove_menu("a"),
        Err(LayoutError::NotFound("a".to_string()))
    );
}

/// Tests renaming a menu ID.
///
/// Expected: new ID found, old ID gone, clashes rejected
#[test]
fn renames_menu_id() {
    let mut layout = ComponentLayout::default();
    layout.add_menu(menu("old", &["A"])).unwrap();
    layout.place_button(button("taken")).unwrap();

    layout.rename_menu("old", "new".to_string()).unwrap();

    assert!(layout.find_menu("old").is_none());
    assert!(layout.find_menu("new").is_some());
    assert_eq!(
        layout.rename_menu("new", "taken".to_string()),
        Err(LayoutError::DuplicateId("taken".to_string()))
    );
}

/// Tests builders are produced per non-empty row.
///
/// Expected: one builder per row
#[test]
fn builds_one_row_per_row() {
    let mut layout = ComponentLayout::default();
    layout.place_button(button("a")).unwrap();
    layout.add_menu(menu("m", &["A"])).unwrap();

    assert_eq!(layout.to_builders().len(), 2);
}
