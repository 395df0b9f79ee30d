//! Error types for the bot.
//!
//! `AppError` is the top-level error returned by services, repositories and command
//! handlers. Event handlers never propagate errors to serenity; they log them and,
//! where a user invoked something, reply with the error's display text.

pub mod action;
pub mod command;
pub mod config;
pub mod internal;
pub mod layout;

use thiserror::Error;

use crate::error::{
    action::ActionError, command::CommandError, config::ConfigError, internal::InternalError,
    layout::LayoutError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic conversion. The user-facing variants (`CommandErr`,
/// `LayoutErr`, `NotFound`, `BadRequest`) are safe to echo back to a channel; the rest
/// are logged and replaced with a generic message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// JSON (de)serialization error outside of action documents.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Action document parsing, validation or execution error.
    #[error(transparent)]
    ActionErr(#[from] ActionError),

    /// Text command argument error.
    #[error(transparent)]
    CommandErr(#[from] CommandError),

    /// Component layout editing error.
    #[error(transparent)]
    LayoutErr(#[from] LayoutError),

    /// Internal consistency error.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Voice connection or playback error.
    #[error("Voice error: {0}")]
    VoiceErr(String),

    /// Music library file error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),

    /// Internal error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for logging
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Returns the message that may be shown to the user who triggered the error.
    ///
    /// User-facing variants return their display text. Everything else is logged
    /// at error level and replaced with a generic message to avoid leaking internals.
    pub fn user_message(&self) -> String {
        match self {
            Self::CommandErr(err) => err.to_string(),
            Self::LayoutErr(err) => err.to_string(),
            Self::NotFound(msg) | Self::BadRequest(msg) => msg.clone(),
            Self::ActionErr(err @ ActionError::Gateway(_)) => {
                tracing::error!("{}", err);
                "Something went wrong, try again later".to_string()
            }
            Self::ActionErr(err) => err.to_string(),
            err => {
                tracing::error!("{}", err);
                "Something went wrong, try again later".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that user-facing errors surface their message.
    ///
    /// Expected: the display text of the command error
    #[test]
    fn command_errors_are_shown_to_users() {
        let err = AppError::from(CommandError::MissingArgument("message"));
        assert_eq!(err.user_message(), "Missing required argument `message`");
    }

    /// Tests that internal errors are hidden from users.
    ///
    /// Expected: generic message instead of the database error text
    #[test]
    fn internal_errors_are_hidden() {
        let err = AppError::from(sea_orm::DbErr::Custom("secret detail".to_string()));
        assert_eq!(err.user_message(), "Something went wrong, try again later");
    }
}
