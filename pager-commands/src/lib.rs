//! Text and component command dispatch for a paginator.

pub mod component;
pub mod controls;
pub mod navigation;
pub mod utility;

use pager_core::{ItemList, Paginator};
use pager_utils::pagination::PaginationValidationError;
use tracing::debug;

pub use component::{
    ComponentPress, InteractionRoute, handle_component, handle_jump_submit, route_custom_id,
};

/// Command metadata shown by `help`.
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    navigation::FIRST,
    navigation::PREV,
    navigation::NEXT,
    navigation::LAST,
    navigation::GO,
    navigation::PAGE,
    controls::BUTTONS,
    controls::PRESS,
    controls::SUBMIT,
    utility::SHOW,
    utility::HELP,
];

/// Result of dispatching one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The paginator is on the requested page.
    Moved,
    /// The command was understood but the target page does not exist.
    Unchanged,
    /// The caller should render the current view.
    Show,
    Help(String),
    /// Rendered embed footer and `(label, custom_id)` per button.
    Controls {
        footer: String,
        buttons: Vec<(String, String)>,
    },
    /// A go button was pressed; carries the prompt's custom ID.
    JumpPrompt(String),
    /// A button press or prompt submission failed validation.
    Rejected(PaginationValidationError),
    /// Rendering failed.
    Failed(String),
    /// Malformed arguments; carries the usage line.
    Usage(&'static str),
    Unknown(String),
    /// Blank input.
    Empty,
}

/// Parse and run one command line against `pager`.
pub fn handle_line<I: ItemList>(pager: &mut Paginator<I>, line: &str) -> CommandOutcome {
    let content = line.trim();
    if content.is_empty() {
        return CommandOutcome::Empty;
    }

    let mut command_and_rest = content.splitn(2, char::is_whitespace);
    let cmd = command_and_rest.next().unwrap_or("").to_ascii_lowercase();
    let arg1 = command_and_rest
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    debug!(command = %cmd, ?arg1, "dispatching command");

    match cmd.as_str() {
        "first" => navigation::first(pager),
        "prev" | "previous" => navigation::prev(pager),
        "next" => navigation::next(pager),
        "last" => navigation::last(pager),
        "go" => navigation::go(pager, arg1),
        "page" => navigation::page(pager, arg1),
        "buttons" => controls::buttons(pager),
        "press" => controls::press(pager, arg1),
        "submit" => controls::submit(pager, arg1),
        "show" => utility::show(),
        "help" => utility::help(),
        _ => CommandOutcome::Unknown(cmd),
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
