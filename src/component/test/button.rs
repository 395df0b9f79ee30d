use serenity::all::ButtonStyle;

use super::*;

/// Tests style names and their color aliases parse.
///
/// Expected: matching ButtonType, None for unknown names
#[test]
fn parses_style_names() {
    assert_eq!(ButtonType::parse("primary"), Some(ButtonType::Primary));
    assert_eq!(ButtonType::parse("Blurple"), Some(ButtonType::Primary));
    assert_eq!(ButtonType::parse("gray"), Some(ButtonType::Secondary));
    assert_eq!(ButtonType::parse("GREEN"), Some(ButtonType::Success));
    assert_eq!(ButtonType::parse("red"), Some(ButtonType::Danger));
    assert_eq!(ButtonType::parse("url"), Some(ButtonType::Link));
    assert_eq!(ButtonType::parse("purple"), None);
}

/// Tests link buttons carry their URL as target and have no custom ID.
///
/// Expected: Link target and matching by label only
#[test]
fn link_buttons_match_by_label() {
    let link = ButtonComponent::new(
        ButtonType::Link,
        "https://example.com".to_string(),
        "Website".to_string(),
    );

    assert!(link.is_link());
    assert_eq!(link.custom_id(), None);
    assert!(link.matches("Website"));
    assert!(!link.matches("https://example.com"));
    assert_eq!(link.type_name(), "link");
}

/// Tests restyling an interactive button.
///
/// Expected: new style applied
#[test]
fn restyles_custom_button() {
    let mut custom = button("a");

    custom.set_style(ButtonType::Danger).unwrap();

    assert_eq!(
        custom.target,
        ButtonTarget::Custom {
            custom_id: "a".to_string(),
            style: ButtonStyle::Danger
        }
    );
    assert_eq!(custom.type_name(), "danger");
}

/// Tests link buttons cannot be restyled and buttons cannot become links.
///
/// Expected: Err(LayoutError::LinkButton) both ways
#[test]
fn link_style_changes_are_rejected() {
    let mut link = ButtonComponent::new(
        ButtonType::Link,
        "https://example.com".to_string(),
        "Website".to_string(),
    );
    let mut custom = button("a");

    assert_eq!(link.set_style(ButtonType::Primary), Err(LayoutError::LinkButton));
    assert_eq!(custom.set_style(ButtonType::Link), Err(LayoutError::LinkButton));
}
