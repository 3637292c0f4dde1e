//! Page navigation commands.

use pager_core::{ItemList, Paginator};
use pager_utils::input::PageInput;

use crate::{CommandMeta, CommandOutcome};

pub const FIRST: CommandMeta = CommandMeta {
    name: "first",
    desc: "Jump to the first page.",
    usage: "first",
};

pub const PREV: CommandMeta = CommandMeta {
    name: "prev",
    desc: "Go back one page.",
    usage: "prev",
};

pub const NEXT: CommandMeta = CommandMeta {
    name: "next",
    desc: "Go forward one page.",
    usage: "next",
};

pub const LAST: CommandMeta = CommandMeta {
    name: "last",
    desc: "Jump to the last page.",
    usage: "last",
};

pub const GO: CommandMeta = CommandMeta {
    name: "go",
    desc: "Go to a page by its number.",
    usage: "go <page> (page starts at 1)",
};

pub const PAGE: CommandMeta = CommandMeta {
    name: "page",
    desc: "Go to a page by its zero-based index.",
    usage: "page <index> (index starts at 0)",
};

pub(crate) fn moved(navigated: bool) -> CommandOutcome {
    if navigated {
        CommandOutcome::Moved
    } else {
        CommandOutcome::Unchanged
    }
}

pub fn first<I: ItemList>(pager: &mut Paginator<I>) -> CommandOutcome {
    moved(pager.first())
}

pub fn prev<I: ItemList>(pager: &mut Paginator<I>) -> CommandOutcome {
    moved(pager.previous())
}

pub fn next<I: ItemList>(pager: &mut Paginator<I>) -> CommandOutcome {
    moved(pager.next())
}

pub fn last<I: ItemList>(pager: &mut Paginator<I>) -> CommandOutcome {
    moved(pager.last())
}

/// `go <page>`: typed the same way as the go-to input, so any digit that
/// would leave `[1, total_pages]` leaves the page unchanged.
pub fn go<I: ItemList>(pager: &mut Paginator<I>, arg1: Option<&str>) -> CommandOutcome {
    let Some(raw) = arg1 else {
        return CommandOutcome::Usage(GO.usage);
    };

    if !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return CommandOutcome::Usage(GO.usage);
    }

    let mut input = PageInput::new(pager.total_pages());
    if input.type_str(raw) != raw.len() {
        return CommandOutcome::Unchanged;
    }

    match input.value() {
        Some(page) => moved(pager.go_to(page)),
        None => CommandOutcome::Unchanged,
    }
}

pub fn page<I: ItemList>(pager: &mut Paginator<I>, arg1: Option<&str>) -> CommandOutcome {
    let Some(index) = arg1.and_then(|raw| raw.parse::<usize>().ok()) else {
        return CommandOutcome::Usage(PAGE.usage);
    };

    moved(pager.navigate(index))
}
