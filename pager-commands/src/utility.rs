use crate::{COMMANDS, CommandMeta, CommandOutcome};

pub const SHOW: CommandMeta = CommandMeta {
    name: "show",
    desc: "Print the current page and controls.",
    usage: "show",
};

pub const HELP: CommandMeta = CommandMeta {
    name: "help",
    desc: "List available commands.",
    usage: "help",
};

pub fn show() -> CommandOutcome {
    CommandOutcome::Show
}

pub fn help() -> CommandOutcome {
    let lines: Vec<String> = COMMANDS
        .iter()
        .map(|meta| format!("{:<8} {:<36} {}", meta.name, meta.usage, meta.desc))
        .collect();
    CommandOutcome::Help(lines.join("\n"))
}
