use pager_core::{PagerView, RecordRange};

/// Caption for the records on the current page, e.g. `11-20 of 95`.
pub fn range_label(range: RecordRange, total_records: usize, of: &str) -> String {
    if range.is_empty() {
        return format!("0-0 {of} {total_records}");
    }
    format!("{}-{} {of} {total_records}", range.start + 1, range.end)
}

/// Footer text for a paginated embed.
///
/// Multi-page views lead with `Page x/y`; a single page shows only the range.
pub fn footer_text(view: &PagerView) -> String {
    let range = range_label(view.range, view.total_records, &view.labels.of);

    if view.total_pages > 1 {
        format!("Page {}/{} • {range}", view.page_number(), view.total_pages)
    } else {
        range
    }
}
