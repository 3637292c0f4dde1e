//! Embed and component composition helpers for paginated views.

use pager_core::{ItemList, PagerView, Paginator};
use twilight_model::channel::message::component::Component;
use twilight_model::channel::message::embed::Embed;

use crate::embed::build_pager_embed;

use super::components::build_nav_components;
use super::page::paginated_bulleted_description;

/// Build a paginated list view showing the paginator's current slice of `items`.
pub fn build_paginated_list_view<I: ItemList>(
    command: &str,
    title: &str,
    items: &[String],
    pager: &Paginator<I>,
    owner_user_id: u64,
    timeout_secs: u64,
) -> anyhow::Result<(Embed, Vec<Component>)> {
    let description = paginated_bulleted_description(items, pager.range());

    build_paginated_view(
        command,
        title,
        description,
        &pager.view(),
        owner_user_id,
        timeout_secs,
    )
}

/// Build a paginated embed + navigation controls from a pre-rendered description.
pub fn build_paginated_view(
    command: &str,
    title: &str,
    description: String,
    view: &PagerView,
    owner_user_id: u64,
    timeout_secs: u64,
) -> anyhow::Result<(Embed, Vec<Component>)> {
    let embed = build_pager_embed(title, description, view)?;
    let components = build_nav_components(command, view, owner_user_id, timeout_secs);

    Ok((embed, components))
}
