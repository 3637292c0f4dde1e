//! The paginator state machine.

use std::fmt;
use std::ops::Range;

use tracing::{debug, trace};

use crate::config::{DisplayMode, Labels, PagerConfig};
use crate::error::PagerError;
use crate::items::{ItemList, NoItems};
use crate::range::RecordRange;
use crate::window::{ControlVisibility, window_start};

/// Notification emitted after a navigation lands on a different page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    /// New current page, 1-based.
    pub page: usize,
    pub range: RecordRange,
}

/// Snapshot of everything a renderer needs to draw the controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerView {
    /// Zero-based current page.
    pub current_page: usize,
    pub total_pages: usize,
    pub total_records: usize,
    /// Zero-based page numbers to render as buttons.
    pub page_buttons: Vec<usize>,
    pub range: RecordRange,
    pub controls: ControlVisibility,
    pub labels: Labels,
    pub display: DisplayMode,
}

impl PagerView {
    /// Current page, 1-based.
    pub fn page_number(&self) -> usize {
        self.current_page + 1
    }

    pub fn is_active(&self, page: usize) -> bool {
        page == self.current_page
    }
}

type ChangeListener = Box<dyn FnMut(PageChange)>;

/// Tracks the current page and page window for a fixed record count.
///
/// Navigation targets outside `[0, total_pages)` are ignored. With zero
/// records there are zero pages and every navigation is a no-op.
pub struct Paginator<I = NoItems> {
    config: PagerConfig,
    total_pages: usize,
    current_page: usize,
    window_start: usize,
    initialized: bool,
    items: I,
    listener: Option<ChangeListener>,
}

impl Paginator {
    /// Build a paginator and move it to the configured initial page.
    ///
    /// The initial navigation does not notify listeners.
    pub fn new(config: PagerConfig) -> Result<Self, PagerError> {
        config.validate()?;

        let total_pages = config.total_pages();
        let initial_index = config.initial_page.max(1) - 1;

        let mut pager = Self {
            config,
            total_pages,
            current_page: 0,
            window_start: 0,
            initialized: false,
            items: NoItems,
            listener: None,
        };

        pager.navigate(initial_index);
        pager.initialized = true;

        Ok(pager)
    }
}

impl<I: ItemList> Paginator<I> {
    /// Attach an item list; it is immediately sliced to the current page.
    pub fn with_items<J: ItemList>(self, items: J) -> Paginator<J> {
        let mut pager = Paginator {
            config: self.config,
            total_pages: self.total_pages,
            current_page: self.current_page,
            window_start: self.window_start,
            initialized: self.initialized,
            items,
            listener: self.listener,
        };
        pager.apply_items();
        pager
    }

    /// Register the page-change listener, replacing any previous one.
    pub fn on_change(mut self, listener: impl FnMut(PageChange) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Move to a zero-based page.
    ///
    /// Returns `false` without touching any state when `target` is out of
    /// range. Landing on the page that is already current refreshes the item
    /// slice but does not notify the listener.
    pub fn navigate(&mut self, target: usize) -> bool {
        if target >= self.total_pages {
            trace!(
                target,
                total_pages = self.total_pages,
                "ignoring out-of-range navigation"
            );
            return false;
        }

        let changed = target != self.current_page;
        self.window_start = window_start(target, self.total_pages, self.config.window_length);
        self.current_page = target;

        let range = self.range();
        debug!(
            page = target + 1,
            window_start = self.window_start,
            range_start = range.start,
            range_end = range.end,
            "navigated"
        );

        if self.initialized
            && changed
            && let Some(listener) = self.listener.as_mut()
        {
            listener(PageChange {
                page: target + 1,
                range,
            });
        }

        self.apply_items();
        true
    }

    pub fn first(&mut self) -> bool {
        self.navigate(0)
    }

    pub fn last(&mut self) -> bool {
        let Some(last) = self.total_pages.checked_sub(1) else {
            return false;
        };
        self.navigate(last)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        self.navigate(self.current_page + 1)
    }

    pub fn previous(&mut self) -> bool {
        let Some(previous) = self.current_page.checked_sub(1) else {
            trace!("already on the first page");
            return false;
        };
        self.navigate(previous)
    }

    /// Move to a 1-based page. `0` and pages past the end are rejected.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages {
            trace!(
                page,
                total_pages = self.total_pages,
                "rejecting go-to page"
            );
            return false;
        }
        self.navigate(page - 1)
    }

    /// Move to a typed 1-based page number. Anything but plain digits is rejected.
    pub fn go_to_input(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
            return false;
        }

        match trimmed.parse::<usize>() {
            Ok(page) => self.go_to(page),
            Err(_) => false,
        }
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// Zero-based current page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Current page, 1-based.
    pub fn page_number(&self) -> usize {
        self.current_page + 1
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn window_start(&self) -> usize {
        self.window_start
    }

    /// Visible page window `[window_start, window_start + window_length)`
    /// clipped to the page count.
    pub fn window(&self) -> Range<usize> {
        let end = (self.window_start + self.config.window_length).min(self.total_pages);
        self.window_start.min(end)..end
    }

    /// Pages to render as buttons. Empty when everything fits on one page.
    pub fn page_buttons(&self) -> Range<usize> {
        if self.total_pages <= 1 {
            return 0..0;
        }
        self.window()
    }

    /// Records covered by the current page.
    pub fn range(&self) -> RecordRange {
        RecordRange::for_page(
            self.current_page,
            self.config.records_per_page,
            self.config.total_records,
        )
    }

    pub fn controls(&self) -> ControlVisibility {
        ControlVisibility::compute(
            self.current_page,
            self.total_pages,
            self.config.window_length,
        )
    }

    pub fn view(&self) -> PagerView {
        PagerView {
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_records: self.config.total_records,
            page_buttons: self.page_buttons().collect(),
            range: self.range(),
            controls: self.controls(),
            labels: self.config.labels.clone(),
            display: self.config.display,
        }
    }

    pub fn items(&self) -> &I {
        &self.items
    }

    pub fn into_items(self) -> I {
        self.items
    }

    fn apply_items(&mut self) {
        if self.total_pages == 0 || self.items.is_empty() {
            return;
        }

        let range = self.range();
        let header = self.items.has_header();
        let offset = usize::from(header);

        for index in 0..self.items.len() {
            let visible = (header && index == 0)
                || (index >= range.start + offset && index < range.end + offset);
            self.items.set_visible(index, visible);
        }
    }
}

impl<I: fmt::Debug> fmt::Debug for Paginator<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("config", &self.config)
            .field("total_pages", &self.total_pages)
            .field("current_page", &self.current_page)
            .field("window_start", &self.window_start)
            .field("initialized", &self.initialized)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}
