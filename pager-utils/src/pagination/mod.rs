//! Stable facade for pagination helpers used by command handlers.

/// Default lifetime of rendered navigation buttons.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

pub(crate) mod components;
mod page;
pub mod token;
mod view;

pub use components::{MAX_ACTION_ROWS, PAGE_BUTTONS_PER_ROW, build_nav_components};
pub use page::{
    jump_target, paginated_bulleted_description, parse_one_based_page, record_range,
    total_pages,
};
pub use token::{
    PageAction, PaginationModalToken, PaginationToken, PaginationValidationError, apply_token,
    build_custom_id, build_modal_custom_id, parse_custom_id, parse_modal_custom_id,
    validate_custom_id,
};
pub use view::{build_paginated_list_view, build_paginated_view};
