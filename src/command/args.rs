//! Tokenizing and typed parsing of command arguments.

use std::collections::VecDeque;

use serenity::all::ReactionType;

use crate::{
    component::ButtonType,
    error::command::CommandError,
    util::parse::{parse_bool, parse_channel_id, parse_role_id},
};

/// Splits command text into tokens
///
/// Tokens are separated by whitespace. A double quote starts a quoted part that may
/// contain whitespace; inside it a backslash escapes the next character. Quotes can
/// be glued to unquoted text, so `a"b c"` is the single token `ab c`.
///
/// # Returns
/// - `Ok(Vec<String>)` - The tokens in order
/// - `Err(CommandError::UnclosedQuote)` - A quoted part was never closed
pub fn tokenize(input: &str) -> Result<Vec<String>, CommandError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_token = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(escaped) => current.push(escaped),
                            None => return Err(CommandError::UnclosedQuote),
                        },
                        Some(other) => current.push(other),
                        None => return Err(CommandError::UnclosedQuote),
                    }
                }
            }
            c if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                in_token = true;
                current.push(c);
            }
        }
    }

    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}

/// Remaining arguments of a command, consumed front to back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    tokens: VecDeque<String>,
}

impl Args {
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        Ok(Self::from(tokenize(input)?))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn peek(&self) -> Option<&str> {
        self.tokens.front().map(String::as_str)
    }

    /// Takes the next token, lowercased, for matching sub-command names.
    pub fn subcommand(&mut self) -> Option<String> {
        self.tokens.pop_front().map(|t| t.to_lowercase())
    }

    pub fn optional(&mut self) -> Option<String> {
        self.tokens.pop_front()
    }

    pub fn required(&mut self, name: &'static str) -> Result<String, CommandError> {
        self.tokens
            .pop_front()
            .ok_or(CommandError::MissingArgument(name))
    }

    /// Every remaining token.
    pub fn rest(&mut self) -> Vec<String> {
        self.tokens.drain(..).collect()
    }

    /// The remaining tokens joined by single spaces, `None` when nothing is left.
    pub fn rest_text(&mut self) -> Option<String> {
        let rest = self.rest();
        (!rest.is_empty()).then(|| rest.join(" "))
    }

    pub fn required_text(&mut self, name: &'static str) -> Result<String, CommandError> {
        self.rest_text().ok_or(CommandError::MissingArgument(name))
    }
}

impl From<Vec<String>> for Args {
    fn from(tokens: Vec<String>) -> Self {
        Self {
            tokens: tokens.into(),
        }
    }
}

/// A message given as a link, `channel-message` pair or bare ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageRef {
    /// Only known for links.
    pub guild_id: Option<u64>,
    pub channel_id: u64,
    pub message_id: u64,
}

/// Parses a message reference
///
/// # Arguments
/// - `token` - `https://discord.com/channels/<guild>/<channel>/<message>`,
///   `<channel>-<message>` or `<message>`
/// - `current_channel` - Channel assumed for bare message IDs
pub fn parse_message_ref(token: &str, current_channel: u64) -> Option<MessageRef> {
    let snowflake = |s: &str| s.parse::<u64>().ok().filter(|id| *id != 0);

    if let Some((_, path)) = token.split_once("/channels/") {
        let host = token.split("/channels/").next().unwrap_or_default();
        if !["discord.com", "discordapp.com"]
            .iter()
            .any(|domain| host.ends_with(domain))
        {
            return None;
        }

        let mut parts = path.trim_end_matches('/').split('/');
        let guild = parts.next().and_then(snowflake)?;
        let channel = parts.next().and_then(snowflake)?;
        let message = parts.next().and_then(snowflake)?;
        if parts.next().is_some() {
            return None;
        }

        return Some(MessageRef {
            guild_id: Some(guild),
            channel_id: channel,
            message_id: message,
        });
    }

    if let Some((channel, message)) = token.split_once('-') {
        return Some(MessageRef {
            guild_id: None,
            channel_id: snowflake(channel)?,
            message_id: snowflake(message)?,
        });
    }

    Some(MessageRef {
        guild_id: None,
        channel_id: current_channel,
        message_id: snowflake(token)?,
    })
}

pub fn message_ref(token: &str, current_channel: u64) -> Result<MessageRef, CommandError> {
    parse_message_ref(token, current_channel).ok_or_else(|| invalid(token, "message link or ID"))
}

pub fn channel(token: &str) -> Result<u64, CommandError> {
    parse_channel_id(token).ok_or_else(|| invalid(token, "channel"))
}

pub fn role(token: &str) -> Result<u64, CommandError> {
    parse_role_id(token).ok_or_else(|| invalid(token, "role"))
}

pub fn button_type(token: &str) -> Result<ButtonType, CommandError> {
    ButtonType::parse(token).ok_or_else(|| invalid(token, "button style"))
}

pub fn integer<T: std::str::FromStr>(token: &str, expected: &'static str) -> Result<T, CommandError> {
    token.parse().map_err(|_| invalid(token, expected))
}

pub fn boolean(token: &str) -> Result<bool, CommandError> {
    parse_bool(token).ok_or_else(|| invalid(token, "boolean"))
}

/// Parses a unicode emoji or a custom emoji like `<:name:id>`.
pub fn emoji(token: &str) -> Result<ReactionType, CommandError> {
    ReactionType::try_from(token).map_err(|_| invalid(token, "emoji"))
}

fn invalid(value: &str, expected: &'static str) -> CommandError {
    CommandError::InvalidArgument {
        value: value.to_string(),
        expected,
    }
}
