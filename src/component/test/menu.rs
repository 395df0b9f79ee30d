use super::*;

/// Tests new menus get a placeholder and one option.
///
/// Expected: "Poke me!" placeholder with Option 1
#[test]
fn default_menu_has_one_option() {
    let menu = MenuComponent::with_defaults("roles".to_string());

    assert_eq!(menu.placeholder.as_deref(), Some("Poke me!"));
    assert_eq!(labels(&menu), vec!["Option 1"]);
    assert_eq!(menu.options[0].value, "Value 1");
}

/// Tests option labels stay unique.
///
/// Expected: Err(LayoutError::DuplicateOption)
#[test]
fn rejects_duplicate_labels() {
    let mut menu = menu("roles", &["Red"]);

    let result = menu.add_option(MenuOption::new("Red".to_string(), "x".to_string(), None));

    assert_eq!(
        result,
        Err(LayoutError::DuplicateOption {
            menu_id: "roles".to_string(),
            label: "Red".to_string()
        })
    );
}

/// Tests option values stay unique when adding options.
///
/// Verifies a second option cannot reuse the default option's value, so a submitted
/// value never maps to more than one label.
///
/// Expected: Err(LayoutError::DuplicateValue), one label for the value
#[test]
fn rejects_duplicate_values() {
    let mut menu = MenuComponent::with_defaults("roles".to_string());

    let result = menu.add_option(MenuOption::new("B".to_string(), "Value 1".to_string(), None));

    assert_eq!(
        result,
        Err(LayoutError::DuplicateValue {
            menu_id: "roles".to_string(),
            value: "Value 1".to_string()
        })
    );
    assert_eq!(
        menu.labels_for_values(&["Value 1".to_string()]),
        vec!["Option 1".to_string()]
    );
}

/// Tests changing an option's value.
///
/// Expected: new value applied, values of other options rejected, same value accepted
#[test]
fn sets_option_values() {
    let mut menu = menu("roles", &["Red", "Blue"]);

    menu.set_option_value("Red", "crimson".to_string()).unwrap();
    assert_eq!(menu.option("Red").unwrap().value, "crimson");

    assert_eq!(
        menu.set_option_value("Red", "Blue-value".to_string()),
        Err(LayoutError::DuplicateValue {
            menu_id: "roles".to_string(),
            value: "Blue-value".to_string()
        })
    );
    assert_eq!(menu.option("Red").unwrap().value, "crimson");

    assert!(menu.set_option_value("Blue", "Blue-value".to_string()).is_ok());
    assert!(matches!(
        menu.set_option_value("Green", "green".to_string()),
        Err(LayoutError::OptionNotFound { .. })
    ));
}

/// Tests menus hold at most 25 options.
///
/// Expected: Err(LayoutError::TooManyOptions) for the 26th
#[test]
fn caps_option_count() {
    let mut menu = menu("roles", &[]);
    for i in 0..25 {
        menu.add_option(MenuOption::new(i.to_string(), i.to_string(), None))
            .unwrap();
    }

    let result = menu.add_option(MenuOption::new("26".to_string(), "26".to_string(), None));

    assert_eq!(result, Err(LayoutError::TooManyOptions("roles".to_string())));
}

/// Tests removing options, including the last one.
///
/// Expected: removal works until one option is left
#[test]
fn keeps_last_option() {
    let mut menu = menu("roles", &["Red", "Blue"]);

    menu.remove_option("Red").unwrap();

    assert_eq!(labels(&menu), vec!["Blue"]);
    assert_eq!(
        menu.remove_option("Blue"),
        Err(LayoutError::LastOption("roles".to_string()))
    );
    assert!(matches!(
        menu.remove_option("Green"),
        Err(LayoutError::OptionNotFound { .. })
    ));
}

/// Tests removing options shrinks a selection range that no longer fits.
///
/// Expected: max_values clamped to the option count
#[test]
fn removal_clamps_range() {
    let mut menu = menu("roles", &["A", "B", "C"]);
    menu.set_select_range(3, 3).unwrap();

    menu.remove_option("C").unwrap();

    assert_eq!(menu.max_values, Some(2));
    assert_eq!(menu.min_values, Some(2));
}

/// Tests renaming an option.
///
/// Expected: label changed, clashes rejected
#[test]
fn renames_options() {
    let mut menu = menu("roles", &["Red", "Blue"]);

    menu.rename_option("Red", "Crimson".to_string()).unwrap();

    assert_eq!(labels(&menu), vec!["Crimson", "Blue"]);
    assert!(matches!(
        menu.rename_option("Crimson", "Blue".to_string()),
        Err(LayoutError::DuplicateOption { .. })
    ));
}

/// Tests reordering by a full permutation of labels.
///
/// Expected: new order applied; partial or repeated lists rejected unchanged
#[test]
fn reorders_options() {
    let mut menu = menu("roles", &["A", "B", "C"]);
    let order = |labels: &[&str]| labels.iter().map(|l| l.to_string()).collect::<Vec<_>>();

    menu.reorder(&order(&["C", "A", "B"])).unwrap();
    assert_eq!(labels(&menu), vec!["C", "A", "B"]);

    assert_eq!(menu.reorder(&order(&["A", "B"])), Err(LayoutError::InvalidOrder));
    assert_eq!(
        menu.reorder(&order(&["A", "A", "B"])),
        Err(LayoutError::InvalidOrder)
    );
    assert_eq!(
        menu.reorder(&order(&["A", "B", "Z"])),
        Err(LayoutError::InvalidOrder)
    );
    assert_eq!(labels(&menu), vec!["C", "A", "B"]);
}

/// Tests selection range validation.
///
/// Expected: valid ranges applied, invalid ones rejected
#[test]
fn validates_select_range() {
    let mut menu = menu("roles", &["A", "B", "C"]);

    menu.set_select_range(0, 3).unwrap();
    assert_eq!((menu.min_values, menu.max_values), (Some(0), Some(3)));

    assert_eq!(
        menu.set_select_range(2, 1),
        Err(LayoutError::InvalidRange {
            min: 2,
            max: 1,
            options: 3
        })
    );
    assert!(menu.set_select_range(1, 4).is_err());
}

/// Tests submitted values map back to option labels.
///
/// Expected: labels of matching options, unknown values ignored
#[test]
fn maps_values_to_labels() {
    let menu = menu("roles", &["Red", "Blue"]);

    let selected = menu.labels_for_values(&["Blue-value".to_string(), "ghost".to_string()]);

    assert_eq!(selected, vec!["Blue".to_string()]);
}
