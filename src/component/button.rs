use serenity::all::{Button, ButtonKind, ButtonStyle, CreateButton, ReactionType};

use crate::error::layout::LayoutError;

/// Button kinds accepted by the `button add` and `button style` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonType {
    Primary,
    Secondary,
    Success,
    Danger,
    Link,
}

impl ButtonType {
    /// Parses a style name, accepting Discord's names and their colors.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "primary" | "blurple" | "blue" => Some(Self::Primary),
            "secondary" | "grey" | "gray" => Some(Self::Secondary),
            "success" | "green" => Some(Self::Success),
            "danger" | "red" => Some(Self::Danger),
            "link" | "url" => Some(Self::Link),
            _ => None,
        }
    }

    /// Serenity style for non-link buttons.
    pub fn style(&self) -> Option<ButtonStyle> {
        match self {
            Self::Primary => Some(ButtonStyle::Primary),
            Self::Secondary => Some(ButtonStyle::Secondary),
            Self::Success => Some(ButtonStyle::Success),
            Self::Danger => Some(ButtonStyle::Danger),
            Self::Link => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Link => "link",
        }
    }
}

/// What clicking the button does: send an interaction, or open a URL.
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonTarget {
    Custom { custom_id: String, style: ButtonStyle },
    Link { url: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonComponent {
    pub target: ButtonTarget,
    pub label: Option<String>,
    pub emoji: Option<ReactionType>,
    pub disabled: bool,
}

impl ButtonComponent {
    /// Creates an enabled button of the given type.
    ///
    /// # Arguments
    /// - `button_type` - Style, or `Link` for URL buttons
    /// - `target` - Custom ID for interactive buttons, URL for link buttons
    /// - `label` - Visible text
    pub fn new(button_type: ButtonType, target: String, label: String) -> Self {
        let target = match button_type.style() {
            Some(style) => ButtonTarget::Custom {
                custom_id: target,
                style,
            },
            None => ButtonTarget::Link { url: target },
        };

        Self {
            target,
            label: Some(label),
            emoji: None,
            disabled: false,
        }
    }

    /// Converts a button from a fetched message. Premium buttons are not editable.
    pub fn from_model(button: &Button) -> Option<Self> {
        let target = match &button.data {
            ButtonKind::NonLink { custom_id, style } => ButtonTarget::Custom {
                custom_id: custom_id.clone(),
                style: *style,
            },
            ButtonKind::Link { url } => ButtonTarget::Link { url: url.clone() },
            #[allow(unreachable_patterns)]
            _ => return None,
        };

        Some(Self {
            target,
            label: button.label.clone(),
            emoji: button.emoji.clone(),
            disabled: button.disabled,
        })
    }

    pub fn to_builder(&self) -> CreateButton {
        let mut builder = match &self.target {
            ButtonTarget::Custom { custom_id, style } => {
                CreateButton::new(custom_id.clone()).style(*style)
            }
            ButtonTarget::Link { url } => CreateButton::new_link(url.clone()),
        };

        if let Some(label) = &self.label {
            builder = builder.label(label.clone());
        }
        if let Some(emoji) = &self.emoji {
            builder = builder.emoji(emoji.clone());
        }

        builder.disabled(self.disabled)
    }

    pub fn custom_id(&self) -> Option<&str> {
        match &self.target {
            ButtonTarget::Custom { custom_id, .. } => Some(custom_id),
            ButtonTarget::Link { .. } => None,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self.target, ButtonTarget::Link { .. })
    }

    /// Buttons are addressed by custom ID, or by label since link buttons have no ID.
    pub fn matches(&self, id_or_label: &str) -> bool {
        self.custom_id() == Some(id_or_label) || self.label.as_deref() == Some(id_or_label)
    }

    /// Name of the button's current style.
    pub fn type_name(&self) -> &'static str {
        match &self.target {
            ButtonTarget::Link { .. } => ButtonType::Link.name(),
            ButtonTarget::Custom { style, .. } => match *style {
                ButtonStyle::Primary => ButtonType::Primary.name(),
                ButtonStyle::Secondary => ButtonType::Secondary.name(),
                ButtonStyle::Success => ButtonType::Success.name(),
                ButtonStyle::Danger => ButtonType::Danger.name(),
                _ => "unknown",
            },
        }
    }

    /// Changes the style of an interactive button.
    ///
    /// # Returns
    /// - `Ok(())` - Style changed
    /// - `Err(LayoutError::LinkButton)` - Link buttons keep their style, and cannot become one
    pub fn set_style(&mut self, button_type: ButtonType) -> Result<(), LayoutError> {
        match (&mut self.target, button_type.style()) {
            (ButtonTarget::Custom { style, .. }, Some(new_style)) => {
                *style = new_style;
                Ok(())
            }
            _ => Err(LayoutError::LinkButton),
        }
    }
}
