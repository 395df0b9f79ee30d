use serde::Deserialize;
use serenity::all::{Permissions, RoleId};
use serenity::async_trait;
use serde_json::Value;

use crate::error::action::ActionError;

/// Message content sent by a `SEND_EPHEMERAL_MESSAGE` action.
///
/// `embed` is kept as raw JSON in Discord's embed format and converted by the
/// gateway implementation. At least one of the two must be present.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "EphemeralMessageData")]
pub struct EphemeralMessage {
    pub content: Option<String>,
    pub embed: Option<Value>,
}

#[derive(Deserialize)]
struct EphemeralMessageData {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    embed: Option<Value>,
}

impl TryFrom<EphemeralMessageData> for EphemeralMessage {
    type Error = &'static str;

    fn try_from(data: EphemeralMessageData) -> Result<Self, Self::Error> {
        let content = data.content.filter(|content| !content.trim().is_empty());
        let embed = data.embed.filter(|embed| !embed.is_null());

        if content.is_none() && embed.is_none() {
            return Err("an ephemeral message needs `content` or an `embed`");
        }

        Ok(Self { content, embed })
    }
}

/// Everything an action environment may ask of the interaction it runs for.
///
/// Implemented over serenity component interactions by the bot, and by an
/// in-memory mock in tests. Role mutation failures are reported as
/// `ActionError::Gateway` and handled by the calling action.
#[async_trait]
pub trait InteractionGateway: Send + Sync {
    /// Acknowledges the interaction without a visible response.
    ///
    /// Does nothing when a response was already sent.
    async fn acknowledge(&self) -> Result<(), ActionError>;

    /// Sends an ephemeral reply, as a follow-up if a response was already sent.
    async fn send_ephemeral(&self, message: &EphemeralMessage) -> Result<(), ActionError>;

    /// Adds a role to the interacting member.
    async fn add_role(&self, role_id: RoleId) -> Result<(), ActionError>;

    /// Removes roles from the interacting member.
    async fn remove_roles(&self, role_ids: &[RoleId]) -> Result<(), ActionError>;

    /// Roles the interacting member currently has.
    async fn member_role_ids(&self) -> Result<Vec<RoleId>, ActionError>;

    /// Whether the guild the interaction happened in has the role.
    async fn guild_has_role(&self, role_id: RoleId) -> Result<bool, ActionError>;

    /// The member's resolved permissions in the interaction channel.
    async fn member_channel_permissions(&self) -> Result<Permissions, ActionError>;

    /// The member's guild-wide permissions.
    async fn member_guild_permissions(&self) -> Result<Permissions, ActionError>;

    /// The bot's resolved permissions in the interaction channel.
    async fn bot_channel_permissions(&self) -> Result<Permissions, ActionError>;

    /// The bot's guild-wide permissions.
    async fn bot_guild_permissions(&self) -> Result<Permissions, ActionError>;

    /// Roles of the named role group in the interaction's guild.
    async fn role_group_roles(&self, group_name: &str) -> Result<Vec<RoleId>, ActionError>;

    /// Whether any response has been sent for the interaction yet.
    fn has_responded(&self) -> bool;
}
