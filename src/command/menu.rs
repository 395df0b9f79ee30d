use serenity::all::{CreateEmbed, CreateMessage, Message};

use crate::{
    command::{args, args::Args, CommandContext},
    component::{ComponentLayout, MenuComponent, MenuOption},
    error::{layout::LayoutError, AppError},
    service::action::ActionService,
};

/// `menu <sub-command> ...`
pub async fn run(cx: &CommandContext<'_>, mut args: Args) -> Result<(), AppError> {
    match args.subcommand().as_deref() {
        Some("add") => add(cx, args).await,
        Some("remove") => {
            let (message, mut layout, menu_id) = target(cx, &mut args).await?;
            layout.remove_menu(&menu_id)?;
            cx.save_layout(&message, &layout).await?;

            let removed = ActionService::new(cx.db)
                .remove_menu_actions(message.id.get(), &menu_id)
                .await?;
            cx.success(&format!(
                "Removed menu `{}` and {} option action(s)",
                menu_id, removed
            ))
            .await
        }
        Some("renameid") => {
            let (message, mut layout, menu_id) = target(cx, &mut args).await?;
            let new_id = args.required("new ID")?;
            layout.rename_menu(&menu_id, new_id.clone())?;
            cx.save_layout(&message, &layout).await?;

            ActionService::new(cx.db)
                .rename_menu(message.id.get(), &menu_id, &new_id)
                .await?;
            cx.success(&format!("Renamed menu `{}` to `{}`", menu_id, new_id))
                .await
        }
        Some("placeholder") => {
            let (message, mut layout, menu_id) = target(cx, &mut args).await?;
            let placeholder = args.rest_text();
            let cleared = placeholder.is_none();
            layout.update_menu(&menu_id, |menu| {
                menu.placeholder = placeholder;
                Ok(())
            })?;
            cx.save_layout(&message, &layout).await?;

            if cleared {
                cx.success(&format!("Cleared the placeholder of menu `{}`", menu_id))
                    .await
            } else {
                cx.success(&format!("Set the placeholder of menu `{}`", menu_id))
                    .await
            }
        }
        Some("selectrange") => {
            let (message, mut layout, menu_id) = target(cx, &mut args).await?;
            let min: u8 = args::integer(&args.required("min")?, "number from 0 to 25")?;
            let max: u8 = args::integer(&args.required("max")?, "number from 1 to 25")?;
            layout.update_menu(&menu_id, |menu| menu.set_select_range(min, max))?;
            cx.save_layout(&message, &layout).await?;

            cx.success(&format!(
                "Menu `{}` now takes {} to {} selections",
                menu_id, min, max
            ))
            .await
        }
        Some(toggle @ ("enable" | "disable")) => {
            let disabled = toggle == "disable";
            let (message, mut layout, menu_id) = target(cx, &mut args).await?;
            layout.update_menu(&menu_id, |menu| {
                menu.disabled = disabled;
                Ok(())
            })?;
            cx.save_layout(&message, &layout).await?;

            let verb = if disabled { "Disabled" } else { "Enabled" };
            cx.success(&format!("{} menu `{}`", verb, menu_id)).await
        }
        Some("info") => {
            let message = cx.fetch_own_message(&args.required("message")?).await?;
            match args.optional() {
                Some(menu_id) => menu_info(cx, &message, &menu_id).await,
                None => message_info(cx, &message).await,
            }
        }
        Some("download") => {
            let (_, layout, menu_id) = target(cx, &mut args).await?;
            let menu = layout
                .find_menu(&menu_id)
                .ok_or_else(|| LayoutError::NotFound(menu_id.clone()))?;

            let json = serde_json::to_vec_pretty(&menu.to_builder())?;
            cx.send_file(json, &format!("{}.json", menu_id)).await
        }
        Some("option") => option(cx, args).await,
        _ => cx.group_help("menu").await,
    }
}

/// Adds a menu to a bot message, or posts a new message holding only the menu.
async fn add(cx: &CommandContext<'_>, mut args: Args) -> Result<(), AppError> {
    let message_token = if args.len() >= 2 {
        Some(args.required("message")?)
    } else {
        None
    };
    let menu_id = args.required("custom ID")?;
    let menu = MenuComponent::with_defaults(menu_id.clone());

    let Some(token) = message_token else {
        let mut layout = ComponentLayout::default();
        layout.add_menu(menu)?;

        cx.msg
            .channel_id
            .send_message(
                &cx.ctx.http,
                CreateMessage::new()
                    .content("I'm a menu")
                    .components(layout.to_builders()),
            )
            .await?;
        return Ok(());
    };

    let message = cx.fetch_own_message(&token).await?;
    let mut layout = ComponentLayout::from_rows(&message.components);
    layout.add_menu(menu)?;
    cx.save_layout(&message, &layout).await?;

    cx.success(&format!("Added menu `{}`", menu_id)).await
}

/// `menu option <sub-command> <message> <menu> ...`
async fn option(cx: &CommandContext<'_>, mut args: Args) -> Result<(), AppError> {
    let sub = args.subcommand();
    let sub = match sub.as_deref() {
        Some(
            sub @ ("add" | "remove" | "info" | "rename" | "value" | "description" | "emoji"
            | "reorder" | "actions"),
        ) => sub.to_string(),
        _ => return cx.group_help("menu").await,
    };

    let (message, mut layout, menu_id) = target(cx, &mut args).await?;
    let service = ActionService::new(cx.db);
    let message_id = message.id.get();

    match sub.as_str() {
        "add" => {
            let label = args.required("label")?;
            let value = args.required("value")?;
            let description = args.rest_text();
            layout.update_menu(&menu_id, |menu| {
                menu.add_option(MenuOption::new(label.clone(), value, description))
            })?;
            cx.save_layout(&message, &layout).await?;
            cx.success(&format!("Added option `{}` to menu `{}`", label, menu_id))
                .await
        }
        "remove" => {
            let label = args.required_text("label")?;
            layout.update_menu(&menu_id, |menu| menu.remove_option(&label))?;
            cx.save_layout(&message, &layout).await?;

            service
                .remove_menu_action(message_id, &menu_id, &label)
                .await?;
            cx.success(&format!("Removed option `{}` from menu `{}`", label, menu_id))
                .await
        }
        "info" => {
            let label = args.required_text("label")?;
            let menu = layout
                .find_menu(&menu_id)
                .ok_or_else(|| LayoutError::NotFound(menu_id.clone()))?;
            let option = menu.option(&label).ok_or_else(|| LayoutError::OptionNotFound {
                menu_id: menu_id.clone(),
                label: label.clone(),
            })?;

            let actions = match service.menu_action(message_id, &menu_id, &label).await? {
                Some(environment) => environment.summary(),
                None => "No actions".to_string(),
            };
            let emoji = option
                .emoji
                .as_ref()
                .map(|emoji| emoji.to_string())
                .unwrap_or_else(|| "*none*".to_string());

            cx.send_embed(
                CreateEmbed::new()
                    .color(cx.config.color)
                    .title(format!("Option `{}`", option.label))
                    .field("Value", format!("`{}`", option.value), true)
                    .field("Emoji", emoji, true)
                    .field(
                        "Description",
                        option.description.as_deref().unwrap_or("*none*"),
                        false,
                    )
                    .field("Actions", actions, false),
            )
            .await
        }
        "rename" => {
            let label = args.required("label")?;
            let new_label = args.required_text("new label")?;
            layout.update_menu(&menu_id, |menu| menu.rename_option(&label, new_label.clone()))?;
            cx.save_layout(&message, &layout).await?;

            service
                .rename_option(message_id, &menu_id, &label, &new_label)
                .await?;
            cx.success(&format!("Renamed option `{}` to `{}`", label, new_label))
                .await
        }
        "value" => {
            let label = args.required("label")?;
            let value = args.required("value")?;
            layout.update_menu(&menu_id, |menu| menu.set_option_value(&label, value.clone()))?;
            cx.save_layout(&message, &layout).await?;
            cx.success(&format!("Option `{}` now has value `{}`", label, value))
                .await
        }
        "description" => {
            let label = args.required("label")?;
            let description = args.rest_text();
            let cleared = description.is_none();
            layout.update_menu(&menu_id, |menu| {
                menu.option_mut(&label)?.description = description;
                Ok(())
            })?;
            cx.save_layout(&message, &layout).await?;

            let verb = if cleared { "Cleared" } else { "Set" };
            cx.success(&format!("{} the description of option `{}`", verb, label))
                .await
        }
        "emoji" => {
            let emoji = match args.subcommand().as_deref() {
                Some("set") => {
                    let label = args.required("label")?;
                    Some((label, Some(args::emoji(&args.required("emoji")?)?)))
                }
                Some("clear") => Some((args.required_text("label")?, None)),
                _ => None,
            };
            let Some((label, emoji)) = emoji else {
                return cx.group_help("menu").await;
            };
            let verb = if emoji.is_some() { "Set" } else { "Cleared" };

            layout.update_menu(&menu_id, |menu| {
                menu.option_mut(&label)?.emoji = emoji;
                Ok(())
            })?;
            cx.save_layout(&message, &layout).await?;
            cx.success(&format!("{} the emoji of option `{}`", verb, label))
                .await
        }
        "reorder" => {
            let labels = args.rest();
            layout.update_menu(&menu_id, |menu| menu.reorder(&labels))?;
            cx.save_layout(&message, &layout).await?;
            cx.success(&format!("Reordered the options of menu `{}`", menu_id))
                .await
        }
        _ => option_actions(cx, &message, &layout, &menu_id, args).await,
    }
}

/// `menu option actions set|info|remove <message> <menu> <label...>`
async fn option_actions(
    cx: &CommandContext<'_>,
    message: &Message,
    layout: &ComponentLayout,
    menu_id: &str,
    mut args: Args,
) -> Result<(), AppError> {
    let action = args.subcommand();
    if !matches!(action.as_deref(), Some("set" | "info" | "remove")) {
        return cx.group_help("menu").await;
    }

    let label = args.required_text("label")?;
    let menu = layout
        .find_menu(menu_id)
        .ok_or_else(|| LayoutError::NotFound(menu_id.to_string()))?;
    if menu.option(&label).is_none() {
        return Err(LayoutError::OptionNotFound {
            menu_id: menu_id.to_string(),
            label,
        }
        .into());
    }

    let service = ActionService::new(cx.db);
    let message_id = message.id.get();
    let no_actions = || AppError::NotFound(format!("Option `{}` has no actions", label));

    match action.as_deref() {
        Some("set") => {
            let document = cx.action_document().await?;
            let environment = service
                .set_menu_action(cx.location(message), menu_id, &label, &document)
                .await?;
            cx.success(&format!(
                "Set actions of option `{}`: {}",
                label,
                environment.summary()
            ))
            .await
        }
        Some("remove") => {
            if !service.remove_menu_action(message_id, menu_id, &label).await? {
                return Err(no_actions());
            }
            cx.success(&format!("Removed the actions of option `{}`", label))
                .await
        }
        _ => {
            let environment = service
                .menu_action(message_id, menu_id, &label)
                .await?
                .ok_or_else(no_actions)?;
            cx.send_file(
                environment.to_json()?.into_bytes(),
                &format!("{}.json", label),
            )
            .await
        }
    }
}

/// Lists the menus of a message.
async fn message_info(cx: &CommandContext<'_>, message: &Message) -> Result<(), AppError> {
    let layout = ComponentLayout::from_rows(&message.components);
    let mut embed = CreateEmbed::new()
        .color(cx.config.color)
        .title("Select menus")
        .url(message.link());

    let mut count = 0;
    for menu in layout.menus() {
        count += 1;
        embed = embed.field(format!("`{}`", menu.custom_id), menu_summary(menu), false);
    }
    if count == 0 {
        embed = embed.description("That message has no select menus");
    }

    cx.send_embed(embed).await
}

/// Shows one menu with each option's actions.
async fn menu_info(cx: &CommandContext<'_>, message: &Message, menu_id: &str) -> Result<(), AppError> {
    let layout = ComponentLayout::from_rows(&message.components);
    let menu = layout
        .find_menu(menu_id)
        .ok_or_else(|| LayoutError::NotFound(menu_id.to_string()))?;
    let service = ActionService::new(cx.db);

    let mut lines = Vec::with_capacity(menu.options.len());
    for option in &menu.options {
        let actions = match service
            .menu_action(message.id.get(), menu_id, &option.label)
            .await?
        {
            Some(environment) => environment.summary(),
            None => "no actions".to_string(),
        };
        lines.push(format!("• `{}` (`{}`): {}", option.label, option.value, actions));
    }

    cx.send_embed(
        CreateEmbed::new()
            .color(cx.config.color)
            .title(format!("Select menu `{}`", menu.custom_id))
            .url(message.link())
            .description(menu_summary(menu))
            .field("Options", truncate(&lines.join("\n"), 1024), false),
    )
    .await
}

fn menu_summary(menu: &MenuComponent) -> String {
    let status = if menu.disabled { "disabled" } else { "enabled" };
    format!(
        "Status: {}\nPlaceholder: {}\nSelections: {} to {}\nOptions: {}",
        status,
        menu.placeholder.as_deref().unwrap_or("*none*"),
        menu.min_values.unwrap_or(1),
        menu.max_values.unwrap_or(1),
        menu.options.len()
    )
}

fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(limit - 1).collect();
    cut.push('…');
    cut
}

/// Reads `<message> <menu>` and loads the message's layout.
async fn target(
    cx: &CommandContext<'_>,
    args: &mut Args,
) -> Result<(Message, ComponentLayout, String), AppError> {
    let message = cx.fetch_own_message(&args.required("message")?).await?;
    let menu_id = args.required("menu")?;
    let layout = ComponentLayout::from_rows(&message.components);

    if layout.find_menu(&menu_id).is_none() {
        return Err(LayoutError::NotFound(menu_id).into());
    }

    Ok((message, layout, menu_id))
}
