use serenity::all::{CreateEmbed, Http, Message};

use crate::{command::reply, error::AppError};

const HELP_COLOR: u32 = 0x1fcdff;

/// Usage lines of each command group, `{p}` standing for the prefix.
const GROUPS: &[(&str, &str, &[&str])] = &[
    (
        "general",
        "General commands",
        &[
            "`{p}help [group]` - this message",
            "`{p}ping` - gateway and API latency",
        ],
    ),
    (
        "config",
        "Per-server settings",
        &[
            "`{p}config keys` - list settings and their types",
            "`{p}config get <key>` - show a setting",
            "`{p}config set <key> <value>` - change a setting (`none` clears channels and IDs)",
        ],
    ),
    (
        "embeds",
        "Copying messages as JSON",
        &[
            "`{p}copy <message> [channel]` - repost a message's embeds",
            "`{p}upload [channel]` - post the attached message JSON",
            "`{p}download <message>` - get a message as JSON",
        ],
    ),
    (
        "button",
        "Buttons on bot messages",
        &[
            "`{p}button add [message] <style> <custom_id|url> <label...>` - add a button, or post a new message with it",
            "`{p}button remove <message> <button>` - remove a button and its actions",
            "`{p}button rename <message> <button> <label...>`",
            "`{p}button style <message> <button> <style>`",
            "`{p}button enable|disable <message> <button>`",
            "`{p}button emoji set <message> <button> <emoji>` / `{p}button emoji clear <message> <button>`",
            "`{p}button info <message>` - list buttons and their actions",
            "`{p}button actions set <message> <button>` - attach the JSON file as the button's actions",
            "`{p}button actions info|remove <message> <button>`",
            "Styles: `primary`, `secondary`, `success`, `danger`, `link`. Buttons are matched by custom ID or label.",
        ],
    ),
    (
        "menu",
        "Select menus on bot messages",
        &[
            "`{p}menu add [message] <custom_id>` - add a menu, or post a new message with it",
            "`{p}menu remove <message> <menu>` - remove a menu and its actions",
            "`{p}menu renameid <message> <menu> <new_id>`",
            "`{p}menu placeholder <message> <menu> [text...]`",
            "`{p}menu selectrange <message> <menu> <min> <max>`",
            "`{p}menu enable|disable <message> <menu>`",
            "`{p}menu info <message> [menu]`",
            "`{p}menu download <message> <menu>` - get the menu as JSON",
            "`{p}menu option add <message> <menu> <label> <value> [description...]`",
            "`{p}menu option remove|info <message> <menu> <label...>`",
            "`{p}menu option rename <message> <menu> <label> <new label...>`",
            "`{p}menu option value <message> <menu> <label> <value>`",
            "`{p}menu option description <message> <menu> <label> [description...]`",
            "`{p}menu option emoji set <message> <menu> <label> <emoji>` / `... emoji clear <message> <menu> <label>`",
            "`{p}menu option reorder <message> <menu> <labels...>`",
            "`{p}menu option actions set|info|remove <message> <menu> <label...>`",
        ],
    ),
    (
        "role",
        "Role groups used by REMOVE_ROLE_GROUP actions",
        &[
            "`{p}role groups list [name]`",
            "`{p}role groups add <name> <roles...>`",
            "`{p}role groups remove <name> [roles...]` - remove roles, or the whole group",
        ],
    ),
    (
        "music",
        "The radio",
        &[
            "`{p}play [voice channel]` - play in the channel, or the one you are in",
            "`{p}stop [reason...]` - stop and leave, showing the reason on the radio message",
            "`{p}spotify album <url>` - get an album's `album.json`",
        ],
    ),
];

/// Group a command name belongs to in the help text.
fn group_for(topic: &str) -> Option<&'static str> {
    let group = match topic.to_lowercase().as_str() {
        "help" | "ping" | "general" => "general",
        "config" => "config",
        "copy" | "upload" | "download" | "embeds" | "embed" => "embeds",
        "button" | "buttons" => "button",
        "menu" | "selectmenu" | "option" => "menu",
        "role" | "roles" | "groups" => "role",
        "play" | "p" | "stop" | "spotify" | "music" => "music",
        _ => return None,
    };

    Some(group)
}

/// Builds the help embed for one group, or for all of them.
pub fn help_embed(prefix: &str, topic: Option<&str>) -> CreateEmbed {
    let selected = topic.and_then(group_for);
    let mut embed = CreateEmbed::new().color(HELP_COLOR);

    embed = match selected {
        Some(group) => embed.title(format!("Help - {}", group)),
        None => embed
            .title("Help")
            .description(format!("Use `{}help <group>` for a single group", prefix)),
    };

    for (name, title, lines) in GROUPS {
        if selected.is_some_and(|group| group != *name) {
            continue;
        }

        let text = lines
            .iter()
            .map(|line| line.replace("{p}", prefix))
            .collect::<Vec<_>>()
            .join("\n");
        embed = embed.field(*title, text, false);
    }

    embed
}

pub async fn send(http: &Http, msg: &Message, prefix: &str, topic: Option<&str>) -> Result<(), AppError> {
    reply::reply_embed(http, msg.channel_id, msg.id, help_embed(prefix, topic)).await
}
