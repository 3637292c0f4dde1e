//! Pagination state machine shared by the renderers and command handlers.
//!
//! A [`Paginator`] is built once from a [`PagerConfig`] and then only moves
//! through its navigation operations. It owns its state exclusively and is not
//! `Send`; callers that share one across threads must serialize access.

/// Paginator configuration and caption settings.
pub mod config;
/// Configuration errors.
pub mod error;
/// Caller-owned item lists that follow the active page.
pub mod items;
/// The paginator itself.
pub mod paginator;
/// Record ranges covered by a page.
pub mod range;
/// Page window and navigation-control math.
pub mod window;

pub use config::{DEFAULT_WINDOW_LENGTH, DisplayMode, Labels, PagerConfig};
pub use error::PagerError;
pub use items::{ItemList, NoItems, VisibilityMask};
pub use paginator::{PageChange, Paginator, PagerView};
pub use range::RecordRange;
pub use window::{ControlVisibility, window_start};

#[cfg(test)]
#[path = "tests/paginator_tests.rs"]
mod paginator_tests;

#[cfg(test)]
#[path = "tests/property_tests.rs"]
mod property_tests;
