//! Navigation component builders (first/prev/page/next/last/go buttons).

use pager_core::PagerView;
use twilight_model::channel::message::component::{ActionRow, Button, ButtonStyle, Component};

use super::token::{PageAction, build_custom_id, now_unix_secs};

/// Discord accepts at most five buttons in one action row.
pub const PAGE_BUTTONS_PER_ROW: usize = 5;
/// Discord accepts at most five action rows per message.
pub const MAX_ACTION_ROWS: usize = 5;

/// Build navigation rows for a paginator view.
///
/// The first row holds the visible navigation controls (and the go button in
/// double display mode); the page window follows in rows of five. Nothing is
/// rendered when everything fits on a single page.
pub fn build_nav_components(
    command: &str,
    view: &PagerView,
    user_id: u64,
    timeout_secs: u64,
) -> Vec<Component> {
    let expires_at = now_unix_secs().saturating_add(timeout_secs);
    nav_components(command, view, user_id, expires_at)
}

pub(crate) fn nav_components(
    command: &str,
    view: &PagerView,
    user_id: u64,
    expires_at: u64,
) -> Vec<Component> {
    if view.total_pages <= 1 {
        return vec![];
    }

    let button = |action: PageAction, target_page: usize, label: &str, active: bool| {
        Component::Button(Button {
            id: None,
            custom_id: Some(build_custom_id(
                command,
                action,
                target_page,
                view.total_pages,
                user_id,
                expires_at,
            )),
            disabled: active,
            emoji: None,
            label: Some(label.to_owned()),
            style: if active {
                ButtonStyle::Primary
            } else {
                ButtonStyle::Secondary
            },
            url: None,
            sku_id: None,
        })
    };

    let labels = &view.labels;
    let current = view.page_number();
    let mut controls = Vec::new();

    if view.controls.first {
        controls.push(button(PageAction::First, 1, labels.first.as_str(), false));
    }
    if view.controls.previous {
        controls.push(button(PageAction::Prev, current - 1, labels.prev.as_str(), false));
    }
    if view.controls.next {
        controls.push(button(PageAction::Next, current + 1, labels.next.as_str(), false));
    }
    if view.controls.last {
        controls.push(button(PageAction::Last, view.total_pages, labels.last.as_str(), false));
    }
    if view.display.shows_input() {
        controls.push(button(PageAction::Jump, current, labels.go.as_str(), false));
    }

    let mut rows = Vec::new();
    if !controls.is_empty() {
        rows.push(action_row(controls));
    }

    let budget = (MAX_ACTION_ROWS - rows.len()) * PAGE_BUTTONS_PER_ROW;
    for chunk in visible_pages(view, budget).chunks(PAGE_BUTTONS_PER_ROW) {
        let pages = chunk
            .iter()
            .map(|&page| {
                button(
                    PageAction::Page,
                    page + 1,
                    (page + 1).to_string().as_str(),
                    view.is_active(page),
                )
            })
            .collect();
        rows.push(action_row(pages));
    }

    rows
}

/// Page buttons that fit in `budget` slots, re-windowed around the active page
/// when the configured window is wider than a message can hold.
fn visible_pages(view: &PagerView, budget: usize) -> &[usize] {
    let pages = view.page_buttons.as_slice();
    if pages.len() <= budget {
        return pages;
    }

    let active = pages
        .iter()
        .position(|&page| view.is_active(page))
        .unwrap_or(0);
    let start = active.saturating_sub(budget / 2).min(pages.len() - budget);
    &pages[start..start + budget]
}

fn action_row(components: Vec<Component>) -> Component {
    Component::ActionRow(ActionRow {
        id: None,
        components,
    })
}
