use serenity::all::CreateEmbed;

use crate::{
    command::{args, args::Args, CommandContext},
    error::AppError,
    service::role_group::{RoleGroup, RoleGroupService},
};

/// `role groups list|add|remove ...`
pub async fn run(cx: &CommandContext<'_>, mut args: Args) -> Result<(), AppError> {
    if args.subcommand().as_deref() != Some("groups") {
        return cx.group_help("role").await;
    }

    let service = RoleGroupService::new(cx.db);
    let guild_id = cx.guild_id.get();

    match args.subcommand().as_deref() {
        Some("list") => {
            let groups = match args.optional() {
                Some(name) => vec![service.get(guild_id, &name).await?],
                None => service.list(guild_id).await?,
            };

            let mut embed = CreateEmbed::new().color(cx.config.color).title("Role Groups");
            if groups.is_empty() {
                embed = embed.description("This server has no role groups");
            }
            for group in &groups {
                embed = embed.field(format!("`{}`", group.name), mentions(group), false);
            }

            cx.send_embed(embed).await
        }
        Some("add") => {
            let name = args.required("name")?;
            let roles = role_ids(args.rest())?;
            let added = service.add(guild_id, &name, &roles).await?;

            cx.success(&format!("Added {} role(s) to group `{}`", added, name))
                .await
        }
        Some("remove") => {
            let name = args.required("name")?;
            let roles = role_ids(args.rest())?;
            let removed = service.remove(guild_id, &name, &roles).await?;

            if roles.is_empty() {
                cx.success(&format!("Deleted group `{}`", name)).await
            } else {
                cx.success(&format!("Removed {} role(s) from group `{}`", removed, name))
                    .await
            }
        }
        _ => cx.group_help("role").await,
    }
}

fn role_ids(tokens: Vec<String>) -> Result<Vec<u64>, AppError> {
    Ok(tokens
        .iter()
        .map(|token| args::role(token))
        .collect::<Result<Vec<_>, _>>()?)
}

fn mentions(group: &RoleGroup) -> String {
    group
        .role_ids
        .iter()
        .map(|id| format!("<@&{}>", id))
        .collect::<Vec<_>>()
        .join(" ")
}
