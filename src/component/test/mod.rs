use crate::component::{
    ButtonComponent, ButtonTarget, ButtonType, ComponentLayout, MenuComponent, MenuOption,
    MessageComponent,
};
use crate::error::layout::LayoutError;

mod button;
mod layout;
mod menu;

fn button(custom_id: &str) -> ButtonComponent {
    ButtonComponent::new(
        ButtonType::Primary,
        custom_id.to_string(),
        format!("Label {}", custom_id),
    )
}

fn menu(custom_id: &str, labels: &[&str]) -> MenuComponent {
    let mut menu = MenuComponent::with_defaults(custom_id.to_string());
    menu.options = labels
        .iter()
        .map(|label| MenuOption::new(label.to_string(), format!("{}-value", label), None))
        .collect();
    menu
}

fn labels(menu: &MenuComponent) -> Vec<&str> {
    menu.options.iter().map(|o| o.label.as_str()).collect()
}
