use serenity::all::{Context, Message};

use crate::{bot::handler::Handler, command};

/// Handle message creation in a channel
///
/// Messages starting with the command prefix are run as commands. Everything else
/// is ignored.
pub async fn handle_message(handler: &Handler, ctx: Context, message: Message) {
    command::handle_message(
        &ctx,
        &message,
        command::CommandServices {
            db: &handler.db,
            config: &handler.config,
            http_client: &handler.http_client,
            radio: &handler.radio,
        },
    )
    .await;
}
