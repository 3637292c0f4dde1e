//! Page-window placement and navigation-control visibility.

/// First page of the visible button window when `target` becomes current.
///
/// The window trails the target by `ceil(window_length / 2) - 1` pages and
/// stops sliding once it reaches the last page.
pub fn window_start(target: usize, total_pages: usize, window_length: usize) -> usize {
    let mid = window_length.div_ceil(2);

    if target < mid {
        return 0;
    }

    if total_pages.saturating_sub(target) > mid {
        target - (mid - 1)
    } else if total_pages > window_length {
        total_pages - window_length
    } else {
        0
    }
}

/// Which navigation controls should be shown for the current page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlVisibility {
    pub first: bool,
    pub previous: bool,
    pub next: bool,
    pub last: bool,
}

impl ControlVisibility {
    /// All controls are hidden when every page fits in one window.
    pub fn compute(current_page: usize, total_pages: usize, window_length: usize) -> Self {
        if total_pages <= window_length {
            return Self::default();
        }

        Self {
            // current > window_length / 2 - (1 if even), in real division
            first: current_page >= window_length.div_ceil(2),
            previous: current_page > 0,
            next: current_page + 1 != total_pages,
            // current < total_pages - window_length / 2 - 1, in real division
            last: current_page + window_length / 2 + 1 < total_pages,
        }
    }

    pub fn any(&self) -> bool {
        self.first || self.previous || self.next || self.last
    }
}
