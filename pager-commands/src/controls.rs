//! Commands that render the navigation buttons and feed presses back in.

use pager_core::{ItemList, Paginator};
use pager_utils::labels::range_label;
use pager_utils::pagination::{DEFAULT_TIMEOUT_SECS, build_modal_custom_id, build_paginated_view};
use twilight_model::channel::message::component::Component;

use crate::component::{handle_component, handle_jump_submit};
use crate::navigation::moved;
use crate::{CommandMeta, CommandOutcome};

/// Command name carried in custom IDs rendered for the console.
pub const CONSOLE_COMMAND: &str = "pager";
/// Session owner for console-rendered custom IDs.
pub const CONSOLE_USER_ID: u64 = 0;

pub const BUTTONS: CommandMeta = CommandMeta {
    name: "buttons",
    desc: "List the rendered buttons and their custom IDs.",
    usage: "buttons",
};

pub const PRESS: CommandMeta = CommandMeta {
    name: "press",
    desc: "Press a rendered button by its custom ID.",
    usage: "press <custom_id>",
};

pub const SUBMIT: CommandMeta = CommandMeta {
    name: "submit",
    desc: "Submit a page to an open go-to prompt.",
    usage: "submit <prompt_id> <page>",
};

pub fn buttons<I: ItemList>(pager: &Paginator<I>) -> CommandOutcome {
    let view = pager.view();
    let description = range_label(view.range, view.total_records, &view.labels.of);

    match build_paginated_view(
        CONSOLE_COMMAND,
        "Records",
        description,
        &view,
        CONSOLE_USER_ID,
        DEFAULT_TIMEOUT_SECS,
    ) {
        Ok((embed, components)) => CommandOutcome::Controls {
            footer: embed.footer.map(|footer| footer.text).unwrap_or_default(),
            buttons: button_ids(&components),
        },
        Err(err) => CommandOutcome::Failed(format!("{err:#}")),
    }
}

pub fn press<I: ItemList>(pager: &mut Paginator<I>, arg1: Option<&str>) -> CommandOutcome {
    let Some(custom_id) = arg1 else {
        return CommandOutcome::Usage(PRESS.usage);
    };

    match handle_component(pager, custom_id, CONSOLE_COMMAND, CONSOLE_USER_ID) {
        Ok(press) if press.opens_prompt() => CommandOutcome::JumpPrompt(build_modal_custom_id(
            CONSOLE_COMMAND,
            pager.total_pages(),
            CONSOLE_USER_ID,
            press.token.expires_at,
        )),
        Ok(press) => moved(press.moved),
        Err(err) => CommandOutcome::Rejected(err),
    }
}

pub fn submit<I: ItemList>(pager: &mut Paginator<I>, arg1: Option<&str>) -> CommandOutcome {
    let mut parts = arg1.unwrap_or_default().split_whitespace();
    let (Some(prompt_id), Some(entered), None) = (parts.next(), parts.next(), parts.next()) else {
        return CommandOutcome::Usage(SUBMIT.usage);
    };

    match handle_jump_submit(pager, prompt_id, CONSOLE_COMMAND, CONSOLE_USER_ID, entered) {
        Ok(_) => CommandOutcome::Moved,
        Err(err) => CommandOutcome::Rejected(err),
    }
}

/// `(label, custom_id)` for every button, row by row.
fn button_ids(components: &[Component]) -> Vec<(String, String)> {
    components
        .iter()
        .filter_map(|component| match component {
            Component::ActionRow(row) => Some(row.components.iter()),
            _ => None,
        })
        .flatten()
        .filter_map(|component| match component {
            Component::Button(button) => Some((
                button.label.clone().unwrap_or_default(),
                button.custom_id.clone().unwrap_or_default(),
            )),
            _ => None,
        })
        .collect()
}
