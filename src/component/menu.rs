use serenity::all::{
    ComponentType, CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption, ReactionType,
    SelectMenu, SelectMenuOption,
};

use super::MAX_MENU_OPTIONS;
use crate::error::layout::LayoutError;

#[derive(Debug, Clone, PartialEq)]
pub struct MenuOption {
    pub label: String,
    pub value: String,
    pub description: Option<String>,
    pub emoji: Option<ReactionType>,
    pub default: bool,
}

impl MenuOption {
    pub fn new(label: String, value: String, description: Option<String>) -> Self {
        Self {
            label,
            value,
            description,
            emoji: None,
            default: false,
        }
    }

    fn from_model(option: &SelectMenuOption) -> Self {
        Self {
            label: option.label.clone(),
            value: option.value.clone(),
            description: option.description.clone(),
            emoji: option.emoji.clone(),
            default: option.default,
        }
    }

    fn to_builder(&self) -> CreateSelectMenuOption {
        let mut builder = CreateSelectMenuOption::new(self.label.clone(), self.value.clone())
            .default_selection(self.default);

        if let Some(description) = &self.description {
            builder = builder.description(description.clone());
        }
        if let Some(emoji) = &self.emoji {
            builder = builder.emoji(emoji.clone());
        }

        builder
    }
}

/// A string select menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuComponent {
    pub custom_id: String,
    pub placeholder: Option<String>,
    pub min_values: Option<u8>,
    pub max_values: Option<u8>,
    pub disabled: bool,
    pub options: Vec<MenuOption>,
}

impl MenuComponent {
    /// New menu with a placeholder and a single example option.
    pub fn with_defaults(custom_id: String) -> Self {
        Self {
            custom_id,
            placeholder: Some("Poke me!".to_string()),
            min_values: None,
            max_values: None,
            disabled: false,
            options: vec![MenuOption::new(
                "Option 1".to_string(),
                "Value 1".to_string(),
                Some("Description 1".to_string()),
            )],
        }
    }

    /// Converts a fetched menu. Only string selects with a custom ID are editable.
    pub fn from_model(menu: &SelectMenu) -> Option<Self> {
        if menu.kind != ComponentType::StringSelect {
            return None;
        }

        Some(Self {
            custom_id: menu.custom_id.clone()?,
            placeholder: menu.placeholder.clone(),
            min_values: menu.min_values,
            max_values: menu.max_values,
            disabled: menu.disabled,
            options: menu.options.iter().map(MenuOption::from_model).collect(),
        })
    }

    pub fn to_builder(&self) -> CreateSelectMenu {
        let options = self.options.iter().map(MenuOption::to_builder).collect();
        let mut builder = CreateSelectMenu::new(
            self.custom_id.clone(),
            CreateSelectMenuKind::String { options },
        )
        .disabled(self.disabled);

        if let Some(placeholder) = &self.placeholder {
            builder = builder.placeholder(placeholder.clone());
        }
        if let Some(min) = self.min_values {
            builder = builder.min_values(min);
        }
        if let Some(max) = self.max_values {
            builder = builder.max_values(max);
        }

        builder
    }

    pub fn option(&self, label: &str) -> Option<&MenuOption> {
        self.options.iter().find(|option| option.label == label)
    }

    /// Mutable access to an option by label.
    pub fn option_mut(&mut self, label: &str) -> Result<&mut MenuOption, LayoutError> {
        let menu_id = self.custom_id.clone();
        self.options
            .iter_mut()
            .find(|option| option.label == label)
            .ok_or_else(|| LayoutError::OptionNotFound {
                menu_id,
                label: label.to_string(),
            })
    }

    /// Appends an option.
    ///
    /// # Returns
    /// - `Ok(())` - Option appended
    /// - `Err(LayoutError::TooManyOptions)` - Menu already has 25 options
    /// - `Err(LayoutError::DuplicateOption)` - Label already used
    /// - `Err(LayoutError::DuplicateValue)` - Value already used
    pub fn add_option(&mut self, option: MenuOption) -> Result<(), LayoutError> {
        if self.options.len() >= MAX_MENU_OPTIONS {
            return Err(LayoutError::TooManyOptions(self.custom_id.clone()));
        }
        self.ensure_label_free(&option.label)?;
        self.ensure_value_free(&option.value)?;

        self.options.push(option);
        Ok(())
    }

    /// Removes an option by label. The last option cannot be removed.
    pub fn remove_option(&mut self, label: &str) -> Result<MenuOption, LayoutError> {
        let index = self
            .options
            .iter()
            .position(|option| option.label == label)
            .ok_or_else(|| LayoutError::OptionNotFound {
                menu_id: self.custom_id.clone(),
                label: label.to_string(),
            })?;

        if self.options.len() == 1 {
            return Err(LayoutError::LastOption(self.custom_id.clone()));
        }

        let removed = self.options.remove(index);
        self.clamp_range();
        Ok(removed)
    }

    /// Changes an option's label, keeping labels unique.
    pub fn rename_option(&mut self, label: &str, new_label: String) -> Result<(), LayoutError> {
        if label != new_label {
            self.ensure_label_free(&new_label)?;
        }

        self.option_mut(label)?.label = new_label;
        Ok(())
    }

    /// Changes the value submitted for an option, keeping values unique.
    pub fn set_option_value(&mut self, label: &str, value: String) -> Result<(), LayoutError> {
        let unchanged = self.option(label).is_some_and(|option| option.value == value);
        if !unchanged {
            self.ensure_value_free(&value)?;
        }

        self.option_mut(label)?.value = value;
        Ok(())
    }

    /// Puts options in the order of `labels`, which must name every option once.
    pub fn reorder(&mut self, labels: &[String]) -> Result<(), LayoutError> {
        if labels.len() != self.options.len() {
            return Err(LayoutError::InvalidOrder);
        }

        let mut ordered: Vec<MenuOption> = Vec::with_capacity(labels.len());
        for label in labels {
            if ordered.iter().any(|option| &option.label == label) {
                return Err(LayoutError::InvalidOrder);
            }
            let option = self.option(label).ok_or(LayoutError::InvalidOrder)?;
            ordered.push(option.clone());
        }

        self.options = ordered;
        Ok(())
    }

    /// Sets how many options may be selected at once.
    ///
    /// # Returns
    /// - `Ok(())` - Range applied
    /// - `Err(LayoutError::InvalidRange)` - Unless `min <= max <= 25` and `max` does not
    ///   exceed the option count
    pub fn set_select_range(&mut self, min: u8, max: u8) -> Result<(), LayoutError> {
        let options = self.options.len();
        if min > max || usize::from(max) > MAX_MENU_OPTIONS || usize::from(max) > options || max == 0 {
            return Err(LayoutError::InvalidRange { min, max, options });
        }

        self.min_values = Some(min);
        self.max_values = Some(max);
        Ok(())
    }

    /// Labels of the options whose values were submitted.
    pub fn labels_for_values(&self, values: &[String]) -> Vec<String> {
        self.options
            .iter()
            .filter(|option| values.contains(&option.value))
            .map(|option| option.label.clone())
            .collect()
    }

    fn ensure_label_free(&self, label: &str) -> Result<(), LayoutError> {
        if self.option(label).is_some() {
            return Err(LayoutError::DuplicateOption {
                menu_id: self.custom_id.clone(),
                label: label.to_string(),
            });
        }
        Ok(())
    }

    fn ensure_value_free(&self, value: &str) -> Result<(), LayoutError> {
        if self.options.iter().any(|option| option.value == value) {
            return Err(LayoutError::DuplicateValue {
                menu_id: self.custom_id.clone(),
                value: value.to_string(),
            });
        }
        Ok(())
    }

    fn clamp_range(&mut self) {
        let count = u8::try_from(self.options.len()).unwrap_or(u8::MAX);
        if let Some(max) = self.max_values {
            if max > count {
                self.max_values = Some(count);
            }
        }
        if let (Some(min), Some(max)) = (self.min_values, self.max_values) {
            if min > max {
                self.min_values = Some(max);
            }
        }
    }
}
