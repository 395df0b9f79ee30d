use serenity::all::{ChannelId, CreateAttachment, CreateEmbed, CreateMessage, Http, MessageId};

use crate::error::AppError;

pub const SUCCESS_COLOR: u32 = 0x2ecc71;
pub const FAIL_COLOR: u32 = 0xe74c3c;

pub fn success_embed(text: &str) -> CreateEmbed {
    CreateEmbed::new()
        .color(SUCCESS_COLOR)
        .description(format!("✓ {}", text))
}

pub fn fail_embed(text: &str) -> CreateEmbed {
    CreateEmbed::new()
        .color(FAIL_COLOR)
        .description(format!("✗ {}", text))
}

/// Replies to the invoking message with an embed.
pub async fn reply_embed(
    http: &Http,
    channel_id: ChannelId,
    reply_to: MessageId,
    embed: CreateEmbed,
) -> Result<(), AppError> {
    channel_id
        .send_message(
            http,
            CreateMessage::new()
                .embed(embed)
                .reference_message((channel_id, reply_to)),
        )
        .await?;

    Ok(())
}

/// Sends bytes as a file attachment with optional text.
pub async fn send_file(
    http: &Http,
    channel_id: ChannelId,
    bytes: Vec<u8>,
    file_name: &str,
    content: Option<&str>,
) -> Result<(), AppError> {
    let mut message = CreateMessage::new().add_file(CreateAttachment::bytes(bytes, file_name));
    if let Some(content) = content {
        message = message.content(content);
    }

    channel_id.send_message(http, message).await?;

    Ok(())
}
