use serenity::all::CreateEmbed;

use crate::{
    command::{args::Args, CommandContext},
    error::AppError,
    model::guild_config::ConfigKey,
    service::guild_config::GuildConfigService,
};

/// `config keys | get <key> | set <key> <value>`
pub async fn run(cx: &CommandContext<'_>, mut args: Args) -> Result<(), AppError> {
    let service = GuildConfigService::new(cx.db);

    match args.subcommand().as_deref() {
        Some("keys") => {
            let mut keys: Vec<_> = ConfigKey::ALL.iter().collect();
            keys.sort_by_key(|key| key.name());

            let lines = keys
                .iter()
                .map(|key| format!("• `{}` - `{}`", key.name(), key.expected()))
                .collect::<Vec<_>>()
                .join("\n");

            cx.send_embed(
                CreateEmbed::new()
                    .color(cx.config.color)
                    .title("**Valid Config Keys**")
                    .description(lines),
            )
            .await
        }
        Some("get") => {
            let key = args.required("key")?;
            let (key, value) = service.get_value(cx.guild_id.get(), &key).await?;

            cx.success(&format!("`{}` is set to {}", key, value)).await
        }
        Some("set") => {
            let key = args.required("key")?;
            let value = args.required_text("value")?;
            let (key, value) = service
                .set_value(cx.guild_id.get(), &key, &value)
                .await?;

            cx.success(&format!("Set `{}` to {}", key, value)).await
        }
        _ => cx.group_help("config").await,
    }
}
