use serenity::all::{ChannelId, GuildChannel};

use crate::{
    command::{args, args::Args, CommandContext},
    error::AppError,
    service::embed::{MessageDocument, DOCUMENT_FILE_NAME},
};

/// `copy <message> [channel]`
pub async fn copy(cx: &CommandContext<'_>, mut args: Args) -> Result<(), AppError> {
    let reference = cx.message_ref(&args.required("message")?)?;
    let target = target_channel(cx, args.optional()).await?;

    let message = cx.fetch_message(reference).await?;
    let document = MessageDocument::from_message(&message)?;
    let posted = post(cx, target, &document).await?;

    cx.success(&format!("Copied {} message(s) to <#{}>", posted, target))
        .await
}

/// `upload [channel]` with a message JSON file attached.
pub async fn upload(cx: &CommandContext<'_>, mut args: Args) -> Result<(), AppError> {
    let target = target_channel(cx, args.optional()).await?;

    let bytes = cx.json_attachment().await?;
    let document = MessageDocument::parse(&bytes)?;
    let posted = post(cx, target, &document).await?;

    if target != cx.msg.channel_id {
        cx.success(&format!("Posted {} message(s) in <#{}>", posted, target))
            .await?;
    }

    Ok(())
}

/// `download <message>`
pub async fn download(cx: &CommandContext<'_>, mut args: Args) -> Result<(), AppError> {
    let reference = cx.message_ref(&args.required("message")?)?;
    let message = cx.fetch_message(reference).await?;

    let document = MessageDocument::from_message(&message)?;
    cx.send_file(document.to_pretty_json()?, DOCUMENT_FILE_NAME)
        .await
}

async fn target_channel(cx: &CommandContext<'_>, token: Option<String>) -> Result<ChannelId, AppError> {
    let Some(token) = token else {
        return Ok(cx.msg.channel_id);
    };

    let channel_id = ChannelId::new(args::channel(&token)?);
    let channel: Option<GuildChannel> = channel_id.to_channel(&cx.ctx.http).await?.guild();

    match channel {
        Some(channel) if channel.guild_id == cx.guild_id => Ok(channel_id),
        _ => Err(AppError::NotFound(
            "That channel is not in this server".to_string(),
        )),
    }
}

async fn post(
    cx: &CommandContext<'_>,
    channel_id: ChannelId,
    document: &MessageDocument,
) -> Result<usize, AppError> {
    let messages = document.messages()?;
    if messages.is_empty() {
        return Err(AppError::BadRequest(
            "That message has nothing to copy".to_string(),
        ));
    }

    for message in &messages {
        channel_id
            .send_message(&cx.ctx.http, message.to_builder())
            .await?;
    }

    Ok(messages.len())
}
