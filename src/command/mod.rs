//! Prefix commands used by moderators to build component messages and manage the bot.
//!
//! A command is a message starting with the configured prefix. The first token names
//! the command; group commands (`button`, `menu`, `role`, `config`, `spotify`) take a
//! sub-command as their next token. Every command except `help` needs a guild and
//! moderator permissions.

pub mod args;
pub mod help;
pub mod reply;

mod button;
mod config;
mod embed;
mod menu;
mod music;
mod role_group;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, Context, EditMessage, GuildId, Message, MessageId, Permissions, UserId,
};

use crate::{
    command::args::{Args, MessageRef},
    component::ComponentLayout,
    config::Config,
    error::{command::CommandError, AppError},
    model::action::MessageLocation,
    service::{
        music::RadioState,
        permissions::{guild_permissions, is_moderator},
    },
};

/// Command names and aliases that are routed to a handler.
const COMMANDS: &[&str] = &[
    "help", "ping", "config", "copy", "upload", "download", "button", "buttons", "menu",
    "selectmenu", "role", "play", "p", "stop", "spotify",
];

/// Everything a command handler needs about the invocation.
pub struct CommandContext<'a> {
    pub ctx: &'a Context,
    pub msg: &'a Message,
    pub guild_id: GuildId,
    pub db: &'a DatabaseConnection,
    pub config: &'a Config,
    pub http_client: &'a reqwest::Client,
    pub radio: &'a Arc<RadioState>,
}

/// Shared state the bot hands to every command.
pub struct CommandServices<'a> {
    pub db: &'a DatabaseConnection,
    pub config: &'a Config,
    pub http_client: &'a reqwest::Client,
    pub radio: &'a Arc<RadioState>,
}

/// Splits a message into a command name and its arguments
///
/// # Returns
/// - `None` - The message is not a command
/// - `Some(Ok((name, args)))` - Lowercased command name and the remaining arguments
/// - `Some(Err(CommandError))` - The arguments could not be tokenized
pub fn parse_invocation(prefix: &str, content: &str) -> Option<Result<(String, Args), CommandError>> {
    let body = content.strip_prefix(prefix)?;
    if body.starts_with(char::is_whitespace) {
        return None;
    }

    let (name, rest) = body.split_once(char::is_whitespace).unwrap_or((body, ""));
    let name = name.to_lowercase();
    if !COMMANDS.contains(&name.as_str()) {
        return None;
    }

    Some(Args::parse(rest).map(|args| (name, args)))
}

/// Runs the command in a message, replying with the error if it fails.
pub async fn handle_message(ctx: &Context, msg: &Message, services: CommandServices<'_>) {
    if msg.author.bot {
        return;
    }

    let Some(parsed) = parse_invocation(&services.config.command_prefix, &msg.content) else {
        return;
    };

    let result = match parsed {
        Ok((name, args)) => run(ctx, msg, &services, &name, args).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        let text = e.user_message();
        if let Err(e) = reply::reply_embed(&ctx.http, msg.channel_id, msg.id, reply::fail_embed(&text)).await {
            tracing::error!("Failed to send command error reply: {}", e);
        }
    }
}

async fn run(
    ctx: &Context,
    msg: &Message,
    services: &CommandServices<'_>,
    name: &str,
    mut args: Args,
) -> Result<(), AppError> {
    if name == "help" {
        let topic = args.optional();
        return help::send(&ctx.http, msg, &services.config.command_prefix, topic.as_deref()).await;
    }

    let guild_id = msg.guild_id.ok_or(CommandError::GuildOnly)?;
    let cx = CommandContext {
        ctx,
        msg,
        guild_id,
        db: services.db,
        config: services.config,
        http_client: services.http_client,
        radio: services.radio,
    };

    if !is_moderator(cx.invoker_permissions().await?) {
        return Err(CommandError::NotModerator.into());
    }

    tracing::debug!(
        "Running command '{}' from {} in guild {}",
        name,
        msg.author.id,
        guild_id
    );

    match name {
        "ping" => music::ping(&cx).await,
        "config" => config::run(&cx, args).await,
        "copy" => embed::copy(&cx, args).await,
        "upload" => embed::upload(&cx, args).await,
        "download" => embed::download(&cx, args).await,
        "button" | "buttons" => button::run(&cx, args).await,
        "menu" | "selectmenu" => menu::run(&cx, args).await,
        "role" => role_group::run(&cx, args).await,
        "play" | "p" => music::play(&cx, args).await,
        "stop" => music::stop(&cx, args).await,
        "spotify" => music::spotify(&cx, args).await,
        _ => Ok(()),
    }
}

impl CommandContext<'_> {
    pub fn bot_id(&self) -> UserId {
        self.ctx.cache.current_user().id
    }

    /// Guild-wide permissions of the invoking member.
    async fn invoker_permissions(&self) -> Result<Permissions, AppError> {
        let member_roles = match &self.msg.member {
            Some(member) => member.roles.clone(),
            None => {
                self.guild_id
                    .member(&self.ctx.http, self.msg.author.id)
                    .await?
                    .roles
            }
        };

        let cached = self
            .guild_id
            .to_guild_cached(&self.ctx.cache)
            .map(|guild| (guild.owner_id, guild.roles.clone()));
        let (owner_id, roles) = match cached {
            Some(cached) => cached,
            None => {
                let guild = self.guild_id.to_partial_guild(&self.ctx.http).await?;
                (guild.owner_id, guild.roles)
            }
        };

        Ok(guild_permissions(
            self.guild_id,
            owner_id,
            self.msg.author.id,
            &roles,
            &member_roles,
        ))
    }

    pub fn message_ref(&self, token: &str) -> Result<MessageRef, CommandError> {
        args::message_ref(token, self.msg.channel_id.get())
    }

    /// Fetches a referenced message, making sure it belongs to this guild.
    pub async fn fetch_message(&self, reference: MessageRef) -> Result<Message, AppError> {
        let not_here = || AppError::NotFound("That message is not in this server".to_string());

        if reference.guild_id.is_some_and(|id| id != self.guild_id.get()) {
            return Err(not_here());
        }

        let channel_id = ChannelId::new(reference.channel_id);
        if channel_id != self.msg.channel_id {
            let channel = channel_id.to_channel(&self.ctx.http).await?;
            if channel.guild().map(|c| c.guild_id) != Some(self.guild_id) {
                return Err(not_here());
            }
        }

        Ok(channel_id
            .message(&self.ctx.http, MessageId::new(reference.message_id))
            .await?)
    }

    /// Fetches a referenced message the bot is allowed to edit.
    pub async fn fetch_own_message(&self, token: &str) -> Result<Message, AppError> {
        let message = self.fetch_message(self.message_ref(token)?).await?;

        if message.author.id != self.bot_id() {
            return Err(AppError::BadRequest(
                "I can only edit messages I sent myself".to_string(),
            ));
        }

        Ok(message)
    }

    /// Replaces the components of a message with the edited layout.
    pub async fn save_layout(&self, message: &Message, layout: &ComponentLayout) -> Result<(), AppError> {
        message
            .channel_id
            .edit_message(
                &self.ctx.http,
                message.id,
                EditMessage::new().components(layout.to_builders()),
            )
            .await?;

        Ok(())
    }

    pub fn location(&self, message: &Message) -> MessageLocation {
        MessageLocation {
            guild_id: self.guild_id.get(),
            channel_id: message.channel_id.get(),
            message_id: message.id.get(),
        }
    }

    /// Downloads the attached action document as text.
    pub async fn action_document(&self) -> Result<String, AppError> {
        String::from_utf8(self.json_attachment().await?).map_err(|_| {
            AppError::BadRequest("The attached file is not valid UTF-8".to_string())
        })
    }

    /// Downloads the JSON file attached to the invoking message.
    pub async fn json_attachment(&self) -> Result<Vec<u8>, AppError> {
        let attachment = self
            .msg
            .attachments
            .iter()
            .find(|a| a.filename.to_lowercase().ends_with(".json"))
            .ok_or(CommandError::MissingAttachment)?;

        Ok(attachment.download().await?)
    }

    pub async fn success(&self, text: &str) -> Result<(), AppError> {
        reply::reply_embed(
            &self.ctx.http,
            self.msg.channel_id,
            self.msg.id,
            reply::success_embed(text),
        )
        .await
    }

    pub async fn send_embed(&self, embed: serenity::all::CreateEmbed) -> Result<(), AppError> {
        reply::reply_embed(&self.ctx.http, self.msg.channel_id, self.msg.id, embed).await
    }

    pub async fn send_file(&self, bytes: Vec<u8>, file_name: &str) -> Result<(), AppError> {
        reply::send_file(&self.ctx.http, self.msg.channel_id, bytes, file_name, None).await
    }

    /// Replies with the help of a command group, used for unknown sub-commands.
    pub async fn group_help(&self, group: &str) -> Result<(), AppError> {
        help::send(
            &self.ctx.http,
            self.msg,
            &self.config.command_prefix,
            Some(group),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests recognizing command invocations.
    ///
    /// Expected: known commands parsed case insensitively, everything else ignored
    #[test]
    fn parses_invocations() {
        let (name, args) = parse_invocation(";", r#";Button add blue verify "Click me""#)
            .unwrap()
            .unwrap();
        assert_eq!(name, "button");
        assert_eq!(args.len(), 4);

        assert!(parse_invocation(";", "hello").is_none());
        assert!(parse_invocation(";", "; button").is_none());
        assert!(parse_invocation(";", ";").is_none());
        assert!(parse_invocation(";", ";dance").is_none());
        assert!(parse_invocation(";", r#";-; she said "hi"#).is_none());

        let (name, args) = parse_invocation(";", ";HELP").unwrap().unwrap();
        assert_eq!(name, "help");
        assert!(args.is_empty());
    }

    /// Tests invocations whose arguments cannot be tokenized.
    ///
    /// Expected: UnclosedQuote error
    #[test]
    fn reports_tokenizer_errors() {
        assert_eq!(
            parse_invocation("!", r#"!menu option add "Red"#),
            Some(Err(CommandError::UnclosedQuote))
        );
    }
}
