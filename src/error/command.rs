use thiserror::Error;

/// User-facing failures while parsing a text command.
///
/// The `Display` output of each variant is sent back to the invoking channel,
/// so messages are phrased for moderators rather than developers.
#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    /// A required positional argument was not supplied.
    #[error("Missing required argument `{0}`")]
    MissingArgument(&'static str),

    /// An argument was supplied but could not be converted.
    #[error("`{value}` is not a valid {expected}")]
    InvalidArgument {
        /// The raw token
        value: String,
        /// Human readable description of the expected kind
        expected: &'static str,
    },

    /// A double-quoted argument was never closed.
    #[error("Unclosed quote in command arguments")]
    UnclosedQuote,

    /// The command needs a JSON file attached to the invoking message.
    #[error("Missing JSON file attachment")]
    MissingAttachment,

    /// The invoking member lacks moderator permissions.
    #[error("You need the Manage Server permission to use this command")]
    NotModerator,

    /// The command was used outside of a guild.
    #[error("This command can only be used in a server")]
    GuildOnly,
}
