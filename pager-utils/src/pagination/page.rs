//! Pure pagination math for callers that page without a [`pager_core::Paginator`].

use pager_core::RecordRange;

/// Compute the number of pages for a paginated list.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Validate a page typed into a go-to prompt against the prompt's total-pages hint.
///
/// The hint can become stale if the record count changed after the prompt
/// opened, so the entry must fit both. Pages outside that bound are rejected.
pub fn jump_target(
    entered_page: usize,
    current_total_pages: usize,
    hinted_total_pages: usize,
) -> Option<usize> {
    let max_allowed_page = std::cmp::min(current_total_pages, hinted_total_pages);
    (1..=max_allowed_page)
        .contains(&entered_page)
        .then_some(entered_page)
}

/// Record range covered by a 1-based page.
pub fn record_range(total_items: usize, per_page: usize, page: usize) -> RecordRange {
    RecordRange::for_page(page.saturating_sub(1), per_page.max(1), total_items)
}

/// Parse a one-based page argument.
///
/// A missing argument means page 1; zero and non-numeric values are rejected.
pub fn parse_one_based_page(raw: Option<&str>) -> Option<usize> {
    match raw {
        Some(value) => value.trim().parse::<usize>().ok().filter(|page| *page >= 1),
        None => Some(1),
    }
}

/// Build a bullet-list description for the records in `range`.
pub fn paginated_bulleted_description(items: &[String], range: RecordRange) -> String {
    let end = range.end.min(items.len());
    let start = range.start.min(end);
    if start == end {
        return String::new();
    }
    format!("- {}", items[start..end].join("\n- "))
}
