use crate::error::PagerError;

/// Number of page buttons shown at once when not configured.
pub const DEFAULT_WINDOW_LENGTH: usize = 10;

/// Whether the go-to input is rendered next to the page controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Page controls only.
    Single,
    /// Page controls plus a page-number input and a go button.
    #[default]
    Double,
}

impl DisplayMode {
    /// Parse `single` or `double` (case-insensitive).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "single" => Some(Self::Single),
            "double" => Some(Self::Double),
            _ => None,
        }
    }

    pub fn shows_input(self) -> bool {
        matches!(self, Self::Double)
    }
}

/// Captions for the navigation controls and the record-range label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub next: String,
    pub prev: String,
    pub first: String,
    pub last: String,
    pub go: String,
    pub of: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            next: "Next".to_owned(),
            prev: "Prev".to_owned(),
            first: "First".to_owned(),
            last: "Last".to_owned(),
            go: "Go".to_owned(),
            of: "of".to_owned(),
        }
    }
}

/// Immutable settings for one paginator instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerConfig {
    /// Number of records being paged over.
    pub total_records: usize,
    /// Records shown per page. Must be positive.
    pub records_per_page: usize,
    /// Page buttons shown at once. Must be positive.
    pub window_length: usize,
    /// Page shown after construction, 1-based. `0` is treated as `1`.
    pub initial_page: usize,
    pub labels: Labels,
    pub display: DisplayMode,
}

impl PagerConfig {
    /// Create a configuration with default window, captions, and display mode.
    pub fn new(total_records: usize, records_per_page: usize) -> Self {
        Self {
            total_records,
            records_per_page,
            window_length: DEFAULT_WINDOW_LENGTH,
            initial_page: 1,
            labels: Labels::default(),
            display: DisplayMode::default(),
        }
    }

    pub fn with_window_length(mut self, window_length: usize) -> Self {
        self.window_length = window_length;
        self
    }

    pub fn with_initial_page(mut self, initial_page: usize) -> Self {
        self.initial_page = initial_page;
        self
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_display(mut self, display: DisplayMode) -> Self {
        self.display = display;
        self
    }

    /// `ceil(total_records / records_per_page)`.
    pub fn total_pages(&self) -> usize {
        self.total_records.div_ceil(self.records_per_page.max(1))
    }

    pub(crate) fn validate(&self) -> Result<(), PagerError> {
        if self.records_per_page == 0 {
            return Err(PagerError::InvalidConfiguration {
                reason: "records_per_page must be positive",
            });
        }

        if self.window_length == 0 {
            return Err(PagerError::InvalidConfiguration {
                reason: "window_length must be positive",
            });
        }

        Ok(())
    }
}
