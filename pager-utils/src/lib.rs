/// Embed builders for paginated views.
pub mod embed;
/// Go-to page input validation.
pub mod input;
/// Record-range and footer captions.
pub mod labels;
/// Pagination helpers: page math, action tokens, and chat components.
pub mod pagination;

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod page_tests;

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod input_tests;

#[cfg(test)]
#[path = "tests/token_tests.rs"]
mod token_tests;

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod view_tests;
