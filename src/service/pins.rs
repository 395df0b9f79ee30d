//! Community pin requests.
//!
//! Members vote for a message to be pinned by reacting with 📌. Once enough members
//! did, the bot marks the message with 👀 and posts a request to the guild's
//! notification channel for moderators to review.

use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, CreateEmbed, CreateEmbedFooter, CreateMessage, GuildId, Http, Message,
    MessageId, MessageReaction, Reaction, ReactionType, Timestamp, UserId,
};

use crate::{error::AppError, service::guild_config::GuildConfigService};

pub const PIN_EMOJI: &str = "\u{1F4CC}";
pub const DENIED_EMOJI: &str = "\u{274C}";
pub const QUEUED_EMOJI: &str = "\u{1F440}";

/// Discord's limit of distinct reactions on one message.
pub const MAX_REACTIONS: usize = 20;

const FIELD_LIMIT: usize = 1024;

/// The parts of a message reaction the pin flow looks at.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionCount {
    pub emoji: ReactionType,
    pub count: u64,
    pub me: bool,
}

impl ReactionCount {
    pub fn new(emoji: &str, count: u64, me: bool) -> Self {
        Self {
            emoji: ReactionType::Unicode(emoji.to_string()),
            count,
            me,
        }
    }

    fn is(&self, emoji: &str) -> bool {
        self.emoji.unicode_eq(emoji)
    }

    fn is_marker(&self) -> bool {
        [PIN_EMOJI, DENIED_EMOJI, QUEUED_EMOJI]
            .iter()
            .any(|marker| self.is(marker))
    }
}

impl From<&MessageReaction> for ReactionCount {
    fn from(reaction: &MessageReaction) -> Self {
        Self {
            emoji: reaction.reaction_type.clone(),
            count: reaction.count,
            me: reaction.me,
        }
    }
}

/// Whether the bot already queued the message for review.
pub fn already_queued(reactions: &[ReactionCount]) -> bool {
    reactions.iter().any(|r| r.is(QUEUED_EMOJI) && r.me)
}

/// Number of 📌 votes, not counting the message author's own.
pub fn pin_votes(reactions: &[ReactionCount], author_reacted: bool) -> u64 {
    let count = reactions
        .iter()
        .find(|r| r.is(PIN_EMOJI))
        .map(|r| r.count)
        .unwrap_or(0);

    if author_reacted {
        count.saturating_sub(1)
    } else {
        count
    }
}

/// The reaction to clear so the 👀 marker fits on a message at the reaction limit
///
/// # Returns
/// - `Some(ReactionType)` - The least used reaction that is not a marker
/// - `None` - The message has room, or only markers
pub fn reaction_to_clear(reactions: &[ReactionCount]) -> Option<ReactionType> {
    if reactions.len() < MAX_REACTIONS {
        return None;
    }

    reactions
        .iter()
        .filter(|r| !r.is_marker())
        .min_by_key(|r| r.count)
        .map(|r| r.emoji.clone())
}

/// Splits message content into embed fields of at most 1024 characters.
pub fn content_fields(content: &str) -> Vec<(String, String)> {
    if content.is_empty() {
        return vec![(
            "Message Content".to_string(),
            "*No message content provided*".to_string(),
        )];
    }

    let chars: Vec<char> = content.chars().collect();
    chars
        .chunks(FIELD_LIMIT)
        .enumerate()
        .map(|(index, chunk)| {
            let name = if index == 0 {
                "Message Content"
            } else {
                "Message Content (cont.)"
            };
            (name.to_string(), chunk.iter().collect())
        })
        .collect()
}

pub fn jump_url(guild_id: GuildId, channel_id: ChannelId, message_id: MessageId) -> String {
    format!(
        "https://discord.com/channels/{}/{}/{}",
        guild_id, channel_id, message_id
    )
}

/// Builds the message posted to the notification channel.
pub fn request_message(guild_id: GuildId, message: &Message, color: u32) -> CreateMessage {
    let url = jump_url(guild_id, message.channel_id, message.id);

    let mut embed = CreateEmbed::new()
        .title(":pushpin: Pin Request")
        .description(format!(
            "Community members are requesting for a message to be pinned in <#{}>",
            message.channel_id
        ))
        .color(color)
        .url(&url)
        .timestamp(Timestamp::now())
        .footer(CreateEmbedFooter::new(format!(
            "Message ID: {} | Author ID: {}",
            message.id, message.author.id
        )));

    for (name, value) in content_fields(&message.content) {
        embed = embed.field(name, value, false);
    }

    CreateMessage::new().content(url).embed(embed)
}

/// Handles a reaction added anywhere the bot can see
///
/// # Arguments
/// - `http` - Discord HTTP client
/// - `db` - Database connection for the guild config
/// - `reaction` - The added reaction
/// - `bot_id` - The bot's own user ID, whose reactions are ignored
/// - `color` - Embed color of the bot
///
/// # Returns
/// - `Ok(true)` - A pin request was posted
/// - `Ok(false)` - Nothing to do for this reaction
/// - `Err(AppError)` - Database or Discord error
pub async fn handle_reaction(
    http: &Http,
    db: &DatabaseConnection,
    reaction: &Reaction,
    bot_id: UserId,
    color: u32,
) -> Result<bool, AppError> {
    let Some(guild_id) = reaction.guild_id else {
        return Ok(false);
    };
    if reaction.user_id == Some(bot_id) || !reaction.emoji.unicode_eq(PIN_EMOJI) {
        return Ok(false);
    }

    let config = GuildConfigService::new(db).get(guild_id.get()).await?;
    let Some(notification_channel_id) = config.notification_channel_id.filter(|_| config.pins_enabled())
    else {
        return Ok(false);
    };

    let message = reaction.message(http).await?;
    let reactions: Vec<ReactionCount> = message.reactions.iter().map(Into::into).collect();

    if already_queued(&reactions) {
        return Ok(false);
    }

    let voters = message
        .reaction_users(
            http,
            ReactionType::Unicode(PIN_EMOJI.to_string()),
            Some(100),
            None::<UserId>,
        )
        .await?;
    let author_reacted = voters.iter().any(|user| user.id == message.author.id);

    let votes = pin_votes(&reactions, author_reacted);
    if votes < config.minimum_reaction_count as u64 {
        return Ok(false);
    }

    if let Some(emoji) = reaction_to_clear(&reactions) {
        if let Err(e) = message.delete_reaction_emoji(http, emoji).await {
            tracing::warn!("Could not clear a reaction on message {}: {}", message.id, e);
            return Ok(false);
        }
    }

    if let Err(e) = message
        .react(http, ReactionType::Unicode(QUEUED_EMOJI.to_string()))
        .await
    {
        tracing::warn!("Could not mark message {} as queued: {}", message.id, e);
        return Ok(false);
    }

    ChannelId::new(notification_channel_id)
        .send_message(http, request_message(guild_id, &message, color))
        .await?;

    tracing::info!(
        "Posted pin request for message {} in guild {} with {} votes",
        message.id,
        guild_id,
        votes
    );

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests detection of messages the bot already queued.
    ///
    /// Expected: only a 👀 reaction by the bot counts
    #[test]
    fn detects_queued_messages() {
        assert!(already_queued(&[ReactionCount::new(QUEUED_EMOJI, 1, true)]));
        assert!(!already_queued(&[ReactionCount::new(QUEUED_EMOJI, 3, false)]));
        assert!(!already_queued(&[ReactionCount::new(PIN_EMOJI, 3, true)]));
    }

    /// Tests that the author's own pin vote is not counted.
    ///
    /// Expected: one less vote when the author reacted
    #[test]
    fn author_vote_is_discounted() {
        let reactions = [
            ReactionCount::new("\u{1F600}", 9, false),
            ReactionCount::new(PIN_EMOJI, 4, false),
        ];

        assert_eq!(pin_votes(&reactions, false), 4);
        assert_eq!(pin_votes(&reactions, true), 3);
        assert_eq!(pin_votes(&[], true), 0);
    }

    /// Tests choosing a reaction to clear at the reaction limit.
    ///
    /// Expected: nothing below the limit; the least used non-marker at the limit
    #[test]
    fn clears_least_used_reaction_at_limit() {
        let mut reactions: Vec<_> = (0..19)
            .map(|i| ReactionCount::new(&format!("e{}", i), 10 + i as u64, false))
            .collect();
        reactions.push(ReactionCount::new(PIN_EMOJI, 1, false));

        assert_eq!(reaction_to_clear(&reactions[..19]), None);
        assert_eq!(
            reaction_to_clear(&reactions),
            Some(ReactionType::Unicode("e0".to_string()))
        );
    }

    /// Tests splitting long content over several fields.
    ///
    /// Expected: 1024 character chunks, continuation fields named "(cont.)"
    #[test]
    fn splits_long_content() {
        let content = "a".repeat(FIELD_LIMIT * 2 + 10);

        let fields = content_fields(&content);

        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].0, "Message Content");
        assert_eq!(fields[1].0, "Message Content (cont.)");
        assert_eq!(fields[0].1.chars().count(), FIELD_LIMIT);
        assert_eq!(fields[2].1.len(), 10);
    }

    /// Tests the placeholder for messages without text.
    ///
    /// Expected: a single placeholder field
    #[test]
    fn empty_content_has_placeholder() {
        assert_eq!(
            content_fields(""),
            vec![(
                "Message Content".to_string(),
                "*No message content provided*".to_string()
            )]
        );
    }
}
