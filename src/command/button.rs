use serenity::all::{CreateEmbed, CreateMessage, Message};

use crate::{
    command::{args, args::Args, CommandContext},
    component::{ButtonComponent, ComponentLayout},
    error::{layout::LayoutError, AppError},
    service::action::ActionService,
};

/// `button <sub-command> ...`
pub async fn run(cx: &CommandContext<'_>, mut args: Args) -> Result<(), AppError> {
    match args.subcommand().as_deref() {
        Some("add") => add(cx, args).await,
        Some("remove") => remove(cx, args).await,
        Some("rename") => {
            let (message, mut layout, button) = target(cx, &mut args).await?;
            let label = args.required_text("label")?;
            layout.update_button(&button, |b| {
                b.label = Some(label.clone());
                Ok(())
            })?;
            cx.save_layout(&message, &layout).await?;
            cx.success(&format!("Renamed button `{}` to `{}`", button, label))
                .await
        }
        Some("style") => {
            let (message, mut layout, button) = target(cx, &mut args).await?;
            let style = args::button_type(&args.required("style")?)?;
            layout.update_button(&button, |b| b.set_style(style))?;
            cx.save_layout(&message, &layout).await?;
            cx.success(&format!("Button `{}` is now {}", button, style.name()))
                .await
        }
        Some(toggle @ ("enable" | "disable")) => {
            let disabled = toggle == "disable";
            let (message, mut layout, button) = target(cx, &mut args).await?;
            layout.update_button(&button, |b| {
                b.disabled = disabled;
                Ok(())
            })?;
            cx.save_layout(&message, &layout).await?;
            cx.success(&format!("{}d button `{}`", capitalize(toggle), button))
                .await
        }
        Some("emoji") => emoji(cx, args).await,
        Some("info") => {
            let message = cx.fetch_own_message(&args.required("message")?).await?;
            info(cx, &message).await
        }
        Some("actions") => actions(cx, args).await,
        _ => cx.group_help("button").await,
    }
}

/// Adds a button to a bot message, or posts a new message holding only the button.
async fn add(cx: &CommandContext<'_>, mut args: Args) -> Result<(), AppError> {
    let message_token = match args.peek().map(args::button_type) {
        Some(Ok(_)) => None,
        _ => Some(args.required("message")?),
    };

    let button_type = args::button_type(&args.required("style")?)?;
    let target = args.required("custom ID or URL")?;
    let label = args.required_text("label")?;
    let button = ButtonComponent::new(button_type, target, label.clone());

    let Some(token) = message_token else {
        let mut layout = ComponentLayout::default();
        layout.place_button(button)?;

        cx.msg
            .channel_id
            .send_message(
                &cx.ctx.http,
                CreateMessage::new()
                    .content("I'm a button!")
                    .components(layout.to_builders()),
            )
            .await?;
        return Ok(());
    };

    let message = cx.fetch_own_message(&token).await?;
    let mut layout = ComponentLayout::from_rows(&message.components);
    layout.place_button(button)?;
    cx.save_layout(&message, &layout).await?;

    cx.success(&format!("Added button `{}`", label)).await
}

async fn remove(cx: &CommandContext<'_>, mut args: Args) -> Result<(), AppError> {
    let (message, mut layout, button) = target(cx, &mut args).await?;
    let removed = layout.remove_button(&button)?;
    cx.save_layout(&message, &layout).await?;

    if let Some(custom_id) = removed.custom_id() {
        ActionService::new(cx.db)
            .remove_button_action(message.id.get(), custom_id)
            .await?;
    }

    cx.success(&format!("Removed button `{}`", button)).await
}

/// `button emoji set <message> <button> <emoji>` / `button emoji clear <message> <button>`
async fn emoji(cx: &CommandContext<'_>, mut args: Args) -> Result<(), AppError> {
    let action = args.subcommand();
    if !matches!(action.as_deref(), Some("set" | "clear")) {
        return cx.group_help("button").await;
    }

    let (message, mut layout, button) = target(cx, &mut args).await?;
    let emoji = match action.as_deref() {
        Some("set") => Some(args::emoji(&args.required("emoji")?)?),
        _ => None,
    };
    let cleared = emoji.is_none();

    layout.update_button(&button, |b| {
        b.emoji = emoji;
        Ok(())
    })?;
    cx.save_layout(&message, &layout).await?;

    if cleared {
        cx.success(&format!("Cleared the emoji of button `{}`", button))
            .await
    } else {
        cx.success(&format!("Set the emoji of button `{}`", button))
            .await
    }
}

/// Lists the buttons of a message with their style and attached actions.
async fn info(cx: &CommandContext<'_>, message: &Message) -> Result<(), AppError> {
    let layout = ComponentLayout::from_rows(&message.components);
    let service = ActionService::new(cx.db);

    let mut embed = CreateEmbed::new()
        .color(cx.config.color)
        .title("Buttons")
        .url(message.link());

    let mut count = 0;
    for button in layout.buttons() {
        count += 1;
        let actions = match button.custom_id() {
            Some(custom_id) => match service.button_action(message.id.get(), custom_id).await? {
                Some(environment) => environment.summary(),
                None => "No actions".to_string(),
            },
            None => "Link button".to_string(),
        };

        let name = button
            .custom_id()
            .or(button.label.as_deref())
            .unwrap_or("unnamed");
        let status = if button.disabled { "disabled" } else { "enabled" };
        embed = embed.field(
            format!("`{}`", name),
            format!(
                "Label: {}\nStyle: {}\nStatus: {}\nActions: {}",
                button.label.as_deref().unwrap_or("*none*"),
                button.type_name(),
                status,
                actions
            ),
            true,
        );
    }

    if count == 0 {
        embed = embed.description("That message has no buttons");
    }

    cx.send_embed(embed).await
}

/// `button actions set|info|remove <message> <button>`
async fn actions(cx: &CommandContext<'_>, mut args: Args) -> Result<(), AppError> {
    let action = args.subcommand();
    if !matches!(action.as_deref(), Some("set" | "info" | "remove")) {
        return cx.group_help("button").await;
    }

    let (message, layout, button) = target(cx, &mut args).await?;
    let custom_id = layout
        .find_button(&button)
        .ok_or_else(|| LayoutError::NotFound(button.clone()))?
        .custom_id()
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::BadRequest("Link buttons cannot have actions".to_string())
        })?;

    let service = ActionService::new(cx.db);
    match action.as_deref() {
        Some("set") => {
            let document = cx.action_document().await?;
            let environment = service
                .set_button_action(cx.location(&message), &custom_id, &document)
                .await?;
            cx.success(&format!(
                "Set actions of button `{}`: {}",
                custom_id,
                environment.summary()
            ))
            .await
        }
        Some("remove") => {
            if service
                .remove_button_action(message.id.get(), &custom_id)
                .await?
            {
                cx.success(&format!("Removed the actions of button `{}`", custom_id))
                    .await
            } else {
                Err(AppError::NotFound(format!(
                    "Button `{}` has no actions",
                    custom_id
                )))
            }
        }
        _ => {
            let environment = service
                .button_action(message.id.get(), &custom_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Button `{}` has no actions", custom_id))
                })?;
            cx.send_file(
                environment.to_json()?.into_bytes(),
                &format!("{}.json", custom_id),
            )
            .await
        }
    }
}

/// Reads `<message> <button>` and loads the message's layout.
async fn target(
    cx: &CommandContext<'_>,
    args: &mut Args,
) -> Result<(Message, ComponentLayout, String), AppError> {
    let message = cx.fetch_own_message(&args.required("message")?).await?;
    let button = args.required("button")?;
    let layout = ComponentLayout::from_rows(&message.components);

    if layout.find_button(&button).is_none() {
        return Err(LayoutError::NotFound(button).into());
    }

    Ok((message, layout, button))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
