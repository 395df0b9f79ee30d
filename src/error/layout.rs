use thiserror::Error;

/// Failures while editing the component rows of a message.
#[derive(Error, Debug, PartialEq)]
pub enum LayoutError {
    /// No component matched the given custom ID or label.
    #[error("No component `{0}` found on that message")]
    NotFound(String),

    /// The message already holds the maximum number of rows or components.
    #[error("That message has no room for another component")]
    Full,

    /// A select menu already has the maximum number of options.
    #[error("Select menu `{0}` already has 25 options")]
    TooManyOptions(String),

    /// An option with the same label already exists on the menu.
    #[error("Select menu `{menu_id}` already has an option labelled `{label}`")]
    DuplicateOption {
        /// Custom ID of the menu
        menu_id: String,
        /// The conflicting label
        label: String,
    },

    /// An option with the same value already exists on the menu.
    #[error("Select menu `{menu_id}` already has an option with value `{value}`")]
    DuplicateValue {
        /// Custom ID of the menu
        menu_id: String,
        /// The conflicting value
        value: String,
    },

    /// A component with the same custom ID already exists on the message.
    #[error("A component with custom ID `{0}` already exists on that message")]
    DuplicateId(String),

    /// An option with the given label does not exist on the menu.
    #[error("Select menu `{menu_id}` has no option labelled `{label}`")]
    OptionNotFound {
        /// Custom ID of the menu
        menu_id: String,
        /// The missing label
        label: String,
    },

    /// Select menus need at least one option.
    #[error("Select menu `{0}` must keep at least one option")]
    LastOption(String),

    /// The requested option order is not a permutation of the current labels.
    #[error("The new order must list every option label exactly once")]
    InvalidOrder,

    /// The requested selection range cannot be satisfied.
    #[error("Invalid selection range {min}..={max} for a menu with {options} options")]
    InvalidRange {
        /// Requested minimum
        min: u8,
        /// Requested maximum
        max: u8,
        /// Current option count
        options: usize,
    },

    /// Link buttons have a fixed style and no custom ID.
    #[error("Link buttons cannot be given a style or actions")]
    LinkButton,
}
