//! Plain-text rendering of a paginator view for the terminal.

use pager_core::{ItemList, Paginator, VisibilityMask};
use pager_utils::labels::footer_text;

/// One line of controls, e.g. `[First] [Prev] 3 4 (5) 6 7 [Next] [Last] [Go]`.
pub fn controls_line<I: ItemList>(pager: &Paginator<I>) -> String {
    let view = pager.view();
    let labels = &view.labels;
    let mut parts: Vec<String> = Vec::new();

    if view.controls.first {
        parts.push(format!("[{}]", labels.first));
    }
    if view.controls.previous {
        parts.push(format!("[{}]", labels.prev));
    }
    parts.extend(view.page_buttons.iter().map(|&page| {
        if view.is_active(page) {
            format!("({})", page + 1)
        } else {
            (page + 1).to_string()
        }
    }));
    if view.controls.next {
        parts.push(format!("[{}]", labels.next));
    }
    if view.controls.last {
        parts.push(format!("[{}]", labels.last));
    }
    if view.display.shows_input() && view.total_pages > 1 {
        parts.push(format!("[{}]", labels.go));
    }

    parts.join(" ")
}

/// Footer, controls, and the visible record indices.
pub fn render(pager: &Paginator<VisibilityMask>) -> String {
    let visible = pager.items().visible_indices();
    let records = match (visible.first(), visible.last()) {
        (Some(first), Some(last)) => format!("visible records: {first}..={last}"),
        _ => "visible records: none".to_owned(),
    };

    let controls = controls_line(pager);
    if controls.is_empty() {
        format!("{}\n{records}", footer_text(&pager.view()))
    } else {
        format!("{}\n{controls}\n{records}", footer_text(&pager.view()))
    }
}
