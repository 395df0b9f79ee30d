//! Conditions evaluated by `PREDICATE` actions.

use serde::Deserialize;
use serenity::all::{Permissions, RoleId};

use super::{gateway::InteractionGateway, snowflake};
use crate::error::action::ActionError;

/// Data for conditions checking a single role.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoleCondition {
    #[serde(deserialize_with = "snowflake::deserialize_snowflake")]
    pub role_id: u64,
}

/// Data for conditions checking a permission bit set.
///
/// `permissions_value` is Discord's permission integer; every bit set in it must be
/// present for the condition to hold.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PermissionsCondition {
    #[serde(deserialize_with = "snowflake::deserialize_u64")]
    pub permissions_value: u64,
}

impl PermissionsCondition {
    pub fn permissions(&self) -> Permissions {
        Permissions::from_bits_truncate(self.permissions_value)
    }
}

/// A single check inside a `PREDICATE`'s condition groups.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "condition", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    UserHasRole(RoleCondition),
    GuildHasRole(RoleCondition),
    UserHasChannelPermissions(PermissionsCondition),
    UserHasGuildPermissions(PermissionsCondition),
    BotHasChannelPermissions(PermissionsCondition),
    BotHasGuildPermissions(PermissionsCondition),
}

impl Condition {
    /// Evaluates the condition against the interaction.
    ///
    /// # Returns
    /// - `Ok(true)` / `Ok(false)` - Result of the check
    /// - `Err(ActionError::Gateway)` - Required Discord data could not be fetched
    pub async fn evaluate<G>(&self, gateway: &G) -> Result<bool, ActionError>
    where
        G: InteractionGateway + ?Sized,
    {
        let result = match self {
            Self::UserHasRole(data) => gateway
                .member_role_ids()
                .await?
                .contains(&RoleId::new(data.role_id)),
            Self::GuildHasRole(data) => gateway.guild_has_role(RoleId::new(data.role_id)).await?,
            Self::UserHasChannelPermissions(data) => gateway
                .member_channel_permissions()
                .await?
                .contains(data.permissions()),
            Self::UserHasGuildPermissions(data) => gateway
                .member_guild_permissions()
                .await?
                .contains(data.permissions()),
            Self::BotHasChannelPermissions(data) => gateway
                .bot_channel_permissions()
                .await?
                .contains(data.permissions()),
            Self::BotHasGuildPermissions(data) => gateway
                .bot_guild_permissions()
                .await?
                .contains(data.permissions()),
        };

        tracing::debug!("Condition {:?} evaluated to {}", self, result);

        Ok(result)
    }
}

/// Evaluates condition groups: every group must hold, and a group holds when any of
/// its conditions holds. Empty groups hold vacuously.
pub async fn check_groups<G>(groups: &[Vec<Condition>], gateway: &G) -> Result<bool, ActionError>
where
    G: InteractionGateway + ?Sized,
{
    for group in groups {
        if group.is_empty() {
            continue;
        }

        let mut satisfied = false;
        for condition in group {
            if condition.evaluate(gateway).await? {
                satisfied = true;
                break;
            }
        }

        if !satisfied {
            return Ok(false);
        }
    }

    Ok(true)
}
