use sea_orm::DatabaseConnection;
use serenity::all::{ComponentInteractionDataKind, Context, Interaction};

use crate::{
    bot::gateway::SerenityGateway, component::ComponentLayout,
    service::interaction::InteractionService,
};

/// Handles the interaction_create event.
///
/// Button clicks and string select submissions in guilds run the actions stored for
/// the component. Other interactions are ignored.
///
/// # Arguments
/// - `db` - Database connection for loading stored actions
/// - `ctx` - Discord context for responding and changing roles
/// - `interaction` - The received interaction
pub async fn handle_interaction(db: &DatabaseConnection, ctx: Context, interaction: Interaction) {
    let Interaction::Component(component) = interaction else {
        return;
    };
    let Some(guild_id) = component.guild_id else {
        return;
    };

    let gateway = SerenityGateway::new(&ctx, &component, guild_id, db);
    let service = InteractionService::new(db);
    let message_id = component.message.id.get();
    let custom_id = component.data.custom_id.as_str();

    let result = match &component.data.kind {
        ComponentInteractionDataKind::Button => {
            service.handle_button(&gateway, message_id, custom_id).await
        }
        ComponentInteractionDataKind::StringSelect { values } => {
            let layout = ComponentLayout::from_rows(&component.message.components);
            service
                .handle_menu(
                    &gateway,
                    message_id,
                    layout.find_menu(custom_id),
                    custom_id,
                    values,
                )
                .await
        }
        _ => return,
    };

    match result {
        Ok(executed) => tracing::debug!(
            "Ran {} action environment(s) for {} on message {} by {}",
            executed,
            custom_id,
            message_id,
            component.user.id
        ),
        Err(e) => tracing::error!(
            "Failed to handle interaction {} on message {}: {}",
            custom_id,
            message_id,
            e
        ),
    }
}
