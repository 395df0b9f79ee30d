//! Editable model of the component rows attached to a message.
//!
//! Discord only lets a bot replace a message's components wholesale, so every edit
//! loads the current rows into a [`ComponentLayout`], changes it in memory and writes
//! the result back with [`ComponentLayout::to_builders`].

pub mod button;
pub mod layout;
pub mod menu;

pub use button::{ButtonComponent, ButtonTarget, ButtonType};
pub use layout::{ComponentLayout, ComponentRow, MessageComponent};
pub use menu::{MenuComponent, MenuOption};

/// Maximum action rows on one message.
pub const MAX_ROWS: usize = 5;
/// Maximum buttons in one action row.
pub const MAX_ROW_BUTTONS: usize = 5;
/// Maximum options in one select menu.
pub const MAX_MENU_OPTIONS: usize = 25;

#[cfg(test)]
mod test;
