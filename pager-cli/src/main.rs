use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use pager_commands::{CommandOutcome, handle_line};
use pager_core::{Paginator, VisibilityMask};

mod config;
mod render;

fn main() -> anyhow::Result<()> {
    // Load the .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = config::from_env()?;
    let records = config.total_records;

    let mut pager = Paginator::new(config)?
        .on_change(|change| {
            info!(
                page = change.page,
                range_start = change.range.start,
                range_end = change.range.end,
                "page changed"
            );
        })
        .with_items(VisibilityMask::new(records));

    info!(total_pages = pager.total_pages(), "pager ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", render::render(&pager))?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if matches!(line.trim(), "quit" | "exit") {
            break;
        }

        match handle_line(&mut pager, &line) {
            CommandOutcome::Moved | CommandOutcome::Show => {
                writeln!(out, "{}", render::render(&pager))?;
            }
            CommandOutcome::Unchanged => writeln!(out, "page unchanged")?,
            CommandOutcome::Help(text) => writeln!(out, "{text}")?,
            CommandOutcome::Controls { footer, buttons } => {
                writeln!(out, "{footer}")?;
                for (label, custom_id) in buttons {
                    writeln!(out, "  {label:<8} {custom_id}")?;
                }
            }
            CommandOutcome::JumpPrompt(prompt_id) => {
                writeln!(out, "go-to prompt open: submit {prompt_id} <page>")?;
            }
            CommandOutcome::Rejected(err) => writeln!(out, "rejected: {err:?}")?,
            CommandOutcome::Failed(message) => writeln!(out, "error: {message}")?,
            CommandOutcome::Usage(usage) => writeln!(out, "usage: {usage}")?,
            CommandOutcome::Unknown(cmd) => {
                writeln!(out, "unknown command `{cmd}`, try `help`")?;
            }
            CommandOutcome::Empty => {}
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod render_tests;
