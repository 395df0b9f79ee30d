use serenity::all::{ActionRow, ActionRowComponent, CreateActionRow};

use super::{button::ButtonComponent, menu::MenuComponent, MAX_ROWS, MAX_ROW_BUTTONS};
use crate::error::layout::LayoutError;

#[derive(Debug, Clone, PartialEq)]
pub enum MessageComponent {
    Button(ButtonComponent),
    Menu(MenuComponent),
}

impl MessageComponent {
    pub fn custom_id(&self) -> Option<&str> {
        match self {
            Self::Button(button) => button.custom_id(),
            Self::Menu(menu) => Some(&menu.custom_id),
        }
    }
}

/// One action row. A row holds either up to five buttons or a single menu.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComponentRow {
    pub components: Vec<MessageComponent>,
}

impl ComponentRow {
    fn holds_buttons(&self) -> bool {
        self.components
            .iter()
            .any(|component| matches!(component, MessageComponent::Button(_)))
    }

    fn to_builder(&self) -> Option<CreateActionRow> {
        if let Some(MessageComponent::Menu(menu)) = self.components.first() {
            return Some(CreateActionRow::SelectMenu(menu.to_builder()));
        }

        let buttons: Vec<_> = self
            .components
            .iter()
            .filter_map(|component| match component {
                MessageComponent::Button(button) => Some(button.to_builder()),
                MessageComponent::Menu(_) => None,
            })
            .collect();

        (!buttons.is_empty()).then_some(CreateActionRow::Buttons(buttons))
    }
}

/// All component rows of one message.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComponentLayout {
    pub rows: Vec<ComponentRow>,
}

impl ComponentLayout {
    /// Reads the rows of a fetched message.
    ///
    /// Components the bot cannot edit (text inputs, premium buttons, non-string
    /// selects) are left out, and rows left empty are dropped.
    pub fn from_rows(rows: &[ActionRow]) -> Self {
        let rows = rows
            .iter()
            .map(|row| ComponentRow {
                components: row
                    .components
                    .iter()
                    .filter_map(|component| match component {
                        ActionRowComponent::Button(button) => {
                            ButtonComponent::from_model(button).map(MessageComponent::Button)
                        }
                        ActionRowComponent::SelectMenu(menu) => {
                            MenuComponent::from_model(menu).map(MessageComponent::Menu)
                        }
                        _ => {
                            tracing::debug!("Skipping unsupported component {:?}", component);
                            None
                        }
                    })
                    .collect(),
            })
            .filter(|row| !row.components.is_empty())
            .collect();

        Self { rows }
    }

    /// Builders for writing the layout back to Discord.
    pub fn to_builders(&self) -> Vec<CreateActionRow> {
        self.rows.iter().filter_map(ComponentRow::to_builder).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every component in display order.
    pub fn walk(&self) -> impl Iterator<Item = &MessageComponent> {
        self.rows.iter().flat_map(|row| row.components.iter())
    }

    pub fn buttons(&self) -> impl Iterator<Item = &ButtonComponent> {
        self.walk().filter_map(|component| match component {
            MessageComponent::Button(button) => Some(button),
            MessageComponent::Menu(_) => None,
        })
    }

    pub fn menus(&self) -> impl Iterator<Item = &MenuComponent> {
        self.walk().filter_map(|component| match component {
            MessageComponent::Menu(menu) => Some(menu),
            MessageComponent::Button(_) => None,
        })
    }

    pub fn find_button(&self, id_or_label: &str) -> Option<&ButtonComponent> {
        self.buttons().find(|button| button.matches(id_or_label))
    }

    pub fn find_menu(&self, custom_id: &str) -> Option<&MenuComponent> {
        self.menus().find(|menu| menu.custom_id == custom_id)
    }

    /// Applies `f` to the first button matching the custom ID or label.
    ///
    /// # Returns
    /// - `Ok(T)` - Result of `f`
    /// - `Err(LayoutError::NotFound)` - No button matched
    /// - `Err(LayoutError)` - Error returned by `f`
    pub fn update_button<T, F>(&mut self, id_or_label: &str, f: F) -> Result<T, LayoutError>
    where
        F: FnOnce(&mut ButtonComponent) -> Result<T, LayoutError>,
    {
        let button = self
            .rows
            .iter_mut()
            .flat_map(|row| row.components.iter_mut())
            .find_map(|component| match component {
                MessageComponent::Button(button) if button.matches(id_or_label) => Some(button),
                _ => None,
            })
            .ok_or_else(|| LayoutError::NotFound(id_or_label.to_string()))?;

        f(button)
    }

    /// Applies `f` to the menu with the custom ID.
    pub fn update_menu<T, F>(&mut self, custom_id: &str, f: F) -> Result<T, LayoutError>
    where
        F: FnOnce(&mut MenuComponent) -> Result<T, LayoutError>,
    {
        let menu = self
            .rows
            .iter_mut()
            .flat_map(|row| row.components.iter_mut())
            .find_map(|component| match component {
                MessageComponent::Menu(menu) if menu.custom_id == custom_id => Some(menu),
                _ => None,
            })
            .ok_or_else(|| LayoutError::NotFound(custom_id.to_string()))?;

        f(menu)
    }

    /// Places a button in the first button row with room, else in a new row.
    ///
    /// # Returns
    /// - `Ok(())` - Button placed
    /// - `Err(LayoutError::DuplicateId)` - Custom ID already used on the message
    /// - `Err(LayoutError::Full)` - Every row is full and no row can be added
    pub fn place_button(&mut self, button: ButtonComponent) -> Result<(), LayoutError> {
        if let Some(custom_id) = button.custom_id() {
            self.ensure_id_free(custom_id)?;
        }

        if let Some(row) = self
            .rows
            .iter_mut()
            .find(|row| row.holds_buttons() && row.components.len() < MAX_ROW_BUTTONS)
        {
            row.components.push(MessageComponent::Button(button));
            return Ok(());
        }

        self.push_row(MessageComponent::Button(button))
    }

    /// Adds a menu on its own new row.
    pub fn add_menu(&mut self, menu: MenuComponent) -> Result<(), LayoutError> {
        self.ensure_id_free(&menu.custom_id)?;
        self.push_row(MessageComponent::Menu(menu))
    }

    /// Removes the first button matching the custom ID or label.
    pub fn remove_button(&mut self, id_or_label: &str) -> Result<ButtonComponent, LayoutError> {
        let removed = self.remove_where(|component| {
            matches!(component, MessageComponent::Button(button) if button.matches(id_or_label))
        });

        match removed {
            Some(MessageComponent::Button(button)) => Ok(button),
            _ => Err(LayoutError::NotFound(id_or_label.to_string())),
        }
    }

    pub fn remove_menu(&mut self, custom_id: &str) -> Result<MenuComponent, LayoutError> {
        let removed = self.remove_where(|component| {
            matches!(component, MessageComponent::Menu(menu) if menu.custom_id == custom_id)
        });

        match removed {
            Some(MessageComponent::Menu(menu)) => Ok(menu),
            _ => Err(LayoutError::NotFound(custom_id.to_string())),
        }
    }

    /// Changes a menu's custom ID, keeping IDs unique on the message.
    pub fn rename_menu(&mut self, custom_id: &str, new_id: String) -> Result<(), LayoutError> {
        if custom_id != new_id {
            self.ensure_id_free(&new_id)?;
        }

        self.update_menu(custom_id, |menu| {
            menu.custom_id = new_id;
            Ok(())
        })
    }

    fn push_row(&mut self, component: MessageComponent) -> Result<(), LayoutError> {
        if self.rows.len() >= MAX_ROWS {
            return Err(LayoutError::Full);
        }

        self.rows.push(ComponentRow {
            components: vec![component],
        });
        Ok(())
    }

    fn remove_where<P>(&mut self, predicate: P) -> Option<MessageComponent>
    where
        P: Fn(&MessageComponent) -> bool,
    {
        for row_index in 0..self.rows.len() {
            let row = &mut self.rows[row_index];
            if let Some(index) = row.components.iter().position(&predicate) {
                let removed = row.components.remove(index);
                if row.components.is_empty() {
                    self.rows.remove(row_index);
                }
                return Some(removed);
            }
        }

        None
    }

    fn ensure_id_free(&self, custom_id: &str) -> Result<(), LayoutError> {
        if self.walk().any(|component| component.custom_id() == Some(custom_id)) {
            return Err(LayoutError::DuplicateId(custom_id.to_string()));
        }
        Ok(())
    }
}
