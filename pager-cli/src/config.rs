//! Paginator settings read from the environment.

use anyhow::Context as _;
use pager_core::{DisplayMode, PagerConfig};

pub const TOTAL_RECORDS_VAR: &str = "PAGER_TOTAL_RECORDS";
pub const RECORDS_PER_PAGE_VAR: &str = "PAGER_RECORDS_PER_PAGE";
pub const WINDOW_LENGTH_VAR: &str = "PAGER_WINDOW_LENGTH";
pub const INITIAL_PAGE_VAR: &str = "PAGER_INITIAL_PAGE";
pub const DISPLAY_VAR: &str = "PAGER_DISPLAY";

/// Build the paginator configuration from process environment variables.
pub fn from_env() -> anyhow::Result<PagerConfig> {
    from_lookup(|name| std::env::var(name).ok())
}

/// Build the paginator configuration from an arbitrary variable lookup.
///
/// Record count and page size are required; the rest fall back to defaults.
pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<PagerConfig> {
    let total_records = required(&lookup, TOTAL_RECORDS_VAR)?;
    let records_per_page = required(&lookup, RECORDS_PER_PAGE_VAR)?;

    let mut config = PagerConfig::new(total_records, records_per_page);

    if let Some(window_length) = optional(&lookup, WINDOW_LENGTH_VAR)? {
        config = config.with_window_length(window_length);
    }

    if let Some(initial_page) = optional(&lookup, INITIAL_PAGE_VAR)? {
        config = config.with_initial_page(initial_page);
    }

    if let Some(raw) = lookup(DISPLAY_VAR) {
        let display = DisplayMode::parse(&raw)
            .with_context(|| format!("{DISPLAY_VAR} must be `single` or `double`, got `{raw}`"))?;
        config = config.with_display(display);
    }

    Ok(config)
}

fn required(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> anyhow::Result<usize> {
    optional(lookup, name)?.with_context(|| format!("{name} is not set"))
}

fn optional(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> anyhow::Result<Option<usize>> {
    lookup(name)
        .map(|raw| {
            raw.trim()
                .parse::<usize>()
                .with_context(|| format!("{name} must be a non-negative integer, got `{raw}`"))
        })
        .transpose()
}
