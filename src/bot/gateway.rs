//! [`InteractionGateway`] over a serenity component interaction.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex,
    },
};

use sea_orm::DatabaseConnection;
use serenity::all::{
    ComponentInteraction, Context, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, Embed, GuildId,
    Permissions, Role, RoleId, UserId,
};
use serenity::async_trait;

use crate::{
    action::{EphemeralMessage, InteractionGateway},
    data::role_group::RoleGroupRepository,
    error::action::ActionError,
    service::permissions::guild_permissions,
};

const AUDIT_REASON: &str = "Component action";

pub struct SerenityGateway<'a> {
    ctx: &'a Context,
    interaction: &'a ComponentInteraction,
    guild_id: GuildId,
    db: &'a DatabaseConnection,
    /// Member roles as changed by the actions that ran so far.
    member_roles: Mutex<Vec<RoleId>>,
    responded: AtomicBool,
}

impl<'a> SerenityGateway<'a> {
    pub fn new(
        ctx: &'a Context,
        interaction: &'a ComponentInteraction,
        guild_id: GuildId,
        db: &'a DatabaseConnection,
    ) -> Self {
        let member_roles = interaction
            .member
            .as_ref()
            .map(|member| member.roles.clone())
            .unwrap_or_default();

        Self {
            ctx,
            interaction,
            guild_id,
            db,
            member_roles: Mutex::new(member_roles),
            responded: AtomicBool::new(false),
        }
    }

    fn user_id(&self) -> UserId {
        self.interaction.user.id
    }

    fn current_roles(&self) -> Vec<RoleId> {
        self.member_roles
            .lock()
            .map(|roles| roles.clone())
            .unwrap_or_default()
    }

    fn update_roles(&self, f: impl FnOnce(&mut Vec<RoleId>)) {
        if let Ok(mut roles) = self.member_roles.lock() {
            f(&mut roles);
        }
    }

    /// Guild owner and roles, from the cache when available.
    async fn guild_snapshot(&self) -> Result<(UserId, HashMap<RoleId, Role>), ActionError> {
        let cached = self
            .guild_id
            .to_guild_cached(&self.ctx.cache)
            .map(|guild| (guild.owner_id, guild.roles.clone()));
        if let Some(cached) = cached {
            return Ok(cached);
        }

        let guild = self
            .guild_id
            .to_partial_guild(&self.ctx.http)
            .await
            .map_err(gateway_error)?;
        Ok((guild.owner_id, guild.roles))
    }

    async fn permissions_of(&self, user_id: UserId, roles: &[RoleId]) -> Result<Permissions, ActionError> {
        let (owner_id, guild_roles) = self.guild_snapshot().await?;
        Ok(guild_permissions(
            self.guild_id,
            owner_id,
            user_id,
            &guild_roles,
            roles,
        ))
    }
}

#[async_trait]
impl InteractionGateway for SerenityGateway<'_> {
    async fn acknowledge(&self) -> Result<(), ActionError> {
        if self.has_responded() {
            return Ok(());
        }

        self.interaction
            .create_response(&self.ctx.http, CreateInteractionResponse::Acknowledge)
            .await
            .map_err(gateway_error)?;
        self.responded.store(true, Ordering::SeqCst);

        Ok(())
    }

    async fn send_ephemeral(&self, message: &EphemeralMessage) -> Result<(), ActionError> {
        let embed = match &message.embed {
            Some(value) => Some(CreateEmbed::from(serde_json::from_value::<Embed>(
                value.clone(),
            )?)),
            None => None,
        };

        if self.has_responded() {
            let mut followup = CreateInteractionResponseFollowup::new().ephemeral(true);
            if let Some(content) = &message.content {
                followup = followup.content(content.clone());
            }
            if let Some(embed) = embed {
                followup = followup.embed(embed);
            }

            self.interaction
                .create_followup(&self.ctx.http, followup)
                .await
                .map_err(gateway_error)?;
        } else {
            let mut reply = CreateInteractionResponseMessage::new().ephemeral(true);
            if let Some(content) = &message.content {
                reply = reply.content(content.clone());
            }
            if let Some(embed) = embed {
                reply = reply.embed(embed);
            }

            self.interaction
                .create_response(&self.ctx.http, CreateInteractionResponse::Message(reply))
                .await
                .map_err(gateway_error)?;
            self.responded.store(true, Ordering::SeqCst);
        }

        Ok(())
    }

    async fn add_role(&self, role_id: RoleId) -> Result<(), ActionError> {
        self.ctx
            .http
            .add_member_role(self.guild_id, self.user_id(), role_id, Some(AUDIT_REASON))
            .await
            .map_err(gateway_error)?;

        tracing::debug!(
            "Added role {} to {} in guild {}",
            role_id,
            self.user_id(),
            self.guild_id
        );
        self.update_roles(|roles| {
            if !roles.contains(&role_id) {
                roles.push(role_id);
            }
        });

        Ok(())
    }

    async fn remove_roles(&self, role_ids: &[RoleId]) -> Result<(), ActionError> {
        for role_id in role_ids {
            self.ctx
                .http
                .remove_member_role(self.guild_id, self.user_id(), *role_id, Some(AUDIT_REASON))
                .await
                .map_err(gateway_error)?;
            self.update_roles(|roles| roles.retain(|id| id != role_id));
        }

        tracing::debug!(
            "Removed {} role(s) from {} in guild {}",
            role_ids.len(),
            self.user_id(),
            self.guild_id
        );

        Ok(())
    }

    async fn member_role_ids(&self) -> Result<Vec<RoleId>, ActionError> {
        Ok(self.current_roles())
    }

    async fn guild_has_role(&self, role_id: RoleId) -> Result<bool, ActionError> {
        let (_, roles) = self.guild_snapshot().await?;
        Ok(roles.contains_key(&role_id))
    }

    async fn member_channel_permissions(&self) -> Result<Permissions, ActionError> {
        match self.interaction.member.as_ref().and_then(|m| m.permissions) {
            Some(permissions) => Ok(permissions),
            None => self.member_guild_permissions().await,
        }
    }

    async fn member_guild_permissions(&self) -> Result<Permissions, ActionError> {
        self.permissions_of(self.user_id(), &self.current_roles())
            .await
    }

    async fn bot_channel_permissions(&self) -> Result<Permissions, ActionError> {
        match self.interaction.app_permissions {
            Some(permissions) => Ok(permissions),
            None => self.bot_guild_permissions().await,
        }
    }

    async fn bot_guild_permissions(&self) -> Result<Permissions, ActionError> {
        let bot_id = self.ctx.cache.current_user().id;
        let member = self
            .guild_id
            .member(self.ctx, bot_id)
            .await
            .map_err(gateway_error)?;

        self.permissions_of(bot_id, &member.roles).await
    }

    async fn role_group_roles(&self, group_name: &str) -> Result<Vec<RoleId>, ActionError> {
        let roles = RoleGroupRepository::new(self.db)
            .get_roles(self.guild_id.get(), group_name)
            .await
            .map_err(|e| ActionError::Gateway(e.to_string()))?;

        Ok(roles.into_iter().map(RoleId::new).collect())
    }

    fn has_responded(&self) -> bool {
        self.responded.load(Ordering::SeqCst)
    }
}

fn gateway_error(err: serenity::Error) -> ActionError {
    ActionError::Gateway(err.to_string())
}
