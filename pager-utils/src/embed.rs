use pager_core::PagerView;
use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFooterBuilder};

use crate::labels::footer_text;

/// Default embed color used for paginated views.
pub const DEFAULT_EMBED_COLOR: u32 = 0x90_54_30;

/// Build a paginated embed whose footer carries the page and record range.
pub fn build_pager_embed(
    title: &str,
    description: impl Into<String>,
    view: &PagerView,
) -> anyhow::Result<Embed> {
    let footer = EmbedFooterBuilder::new(footer_text(view)).build();

    let embed = EmbedBuilder::new()
        .title(title)
        .color(DEFAULT_EMBED_COLOR)
        .description(description)
        .footer(footer)
        .validate()?
        .build();

    Ok(embed)
}
