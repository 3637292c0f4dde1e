use std::ops::Range;

/// Half-open `[start, end)` interval of record indices belonging to a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordRange {
    pub start: usize,
    pub end: usize,
}

impl RecordRange {
    /// Range for a zero-based page, clamped to `total_records`.
    pub fn for_page(page: usize, records_per_page: usize, total_records: usize) -> Self {
        let start = page.saturating_mul(records_per_page).min(total_records);
        let end = start.saturating_add(records_per_page).min(total_records);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}
