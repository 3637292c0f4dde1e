//! Stateless pagination token encoding, parsing, and validation.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use pager_core::{ItemList, Paginator};
use tracing::warn;

const TOKEN_PREFIX: &str = "pg";
const MODAL_TOKEN_PREFIX: &str = "pgm";

/// Navigation control a token was rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    First,
    Prev,
    /// A page-number button from the visible window.
    Page,
    Next,
    Last,
    /// Opens the go-to prompt instead of navigating.
    Jump,
}

impl PageAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Prev => "prev",
            Self::Page => "page",
            Self::Next => "next",
            Self::Last => "last",
            Self::Jump => "jump",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "first" => Some(Self::First),
            "prev" => Some(Self::Prev),
            "page" => Some(Self::Page),
            "next" => Some(Self::Next),
            "last" => Some(Self::Last),
            "jump" => Some(Self::Jump),
            _ => None,
        }
    }
}

impl fmt::Display for PageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed pagination token data from a button custom ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationToken {
    /// Logical command name (e.g. `records`).
    pub command: String,
    pub action: PageAction,
    /// Target page number, 1-based.
    pub page: usize,
    /// Total page count when the button was rendered.
    pub total_pages: usize,
    /// User ID that owns this pagination session.
    pub user_id: u64,
    /// Expiry timestamp (unix seconds).
    pub expires_at: u64,
}

/// Parsed go-to prompt token data from a modal custom ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationModalToken {
    pub command: String,
    /// Total page count at prompt-open time.
    pub total_pages: usize,
    pub user_id: u64,
    pub expires_at: u64,
}

/// Validation outcome for pagination button presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationValidationError {
    Invalid,
    WrongCommand,
    WrongUser,
    Expired,
    OutOfRange,
}

/// Build a compact custom ID carrying stateless pagination state.
pub fn build_custom_id(
    command: &str,
    action: PageAction,
    target_page: usize,
    total_pages: usize,
    user_id: u64,
    expires_at: u64,
) -> String {
    format!("{TOKEN_PREFIX}:{command}:{action}:{target_page}:{total_pages}:{user_id}:{expires_at}")
}

/// Parse a pagination custom ID.
pub fn parse_custom_id(custom_id: &str) -> Option<PaginationToken> {
    let mut parts = custom_id.split(':');

    let prefix = parts.next()?;
    if prefix != TOKEN_PREFIX {
        return None;
    }

    let command = parts.next()?.to_owned();
    let action = PageAction::parse(parts.next()?)?;
    let page = parts.next()?.parse::<usize>().ok()?;
    let total_pages = parts.next()?.parse::<usize>().ok()?;
    let user_id = parts.next()?.parse::<u64>().ok()?;
    let expires_at = parts.next()?.parse::<u64>().ok()?;

    if parts.next().is_some() {
        return None;
    }

    Some(PaginationToken {
        command,
        action,
        page,
        total_pages,
        user_id,
        expires_at,
    })
}

/// Validate a pagination token for command/user/expiry/page bounds.
pub fn validate_custom_id(
    custom_id: &str,
    expected_command: &str,
    actor_user_id: u64,
) -> Result<PaginationToken, PaginationValidationError> {
    validate_custom_id_at(custom_id, expected_command, actor_user_id, now_unix_secs())
}

pub(crate) fn validate_custom_id_at(
    custom_id: &str,
    expected_command: &str,
    actor_user_id: u64,
    now: u64,
) -> Result<PaginationToken, PaginationValidationError> {
    let token = parse_custom_id(custom_id).ok_or(PaginationValidationError::Invalid)?;

    if token.command != expected_command {
        return Err(PaginationValidationError::WrongCommand);
    }

    if token.user_id != actor_user_id {
        return Err(PaginationValidationError::WrongUser);
    }

    if now > token.expires_at {
        return Err(PaginationValidationError::Expired);
    }

    if token.page == 0 || token.page > token.total_pages {
        return Err(PaginationValidationError::OutOfRange);
    }

    Ok(token)
}

/// Apply a validated token to a paginator.
///
/// Returns whether the paginator moved. `Jump` tokens only open the go-to
/// prompt and never navigate.
pub fn apply_token<I: ItemList>(pager: &mut Paginator<I>, token: &PaginationToken) -> bool {
    if token.action == PageAction::Jump {
        return false;
    }

    if token.total_pages != pager.total_pages() {
        warn!(
            token_total = token.total_pages,
            current_total = pager.total_pages(),
            "pagination token rendered for a different page count"
        );
    }

    pager.go_to(token.page)
}

/// Build a modal custom ID carrying pagination session state.
pub fn build_modal_custom_id(
    command: &str,
    total_pages: usize,
    user_id: u64,
    expires_at: u64,
) -> String {
    format!("{MODAL_TOKEN_PREFIX}:{command}:{total_pages}:{user_id}:{expires_at}")
}

/// Parse a pagination modal custom ID.
pub fn parse_modal_custom_id(custom_id: &str) -> Option<PaginationModalToken> {
    let mut parts = custom_id.split(':');

    let prefix = parts.next()?;
    if prefix != MODAL_TOKEN_PREFIX {
        return None;
    }

    let command = parts.next()?.to_owned();
    let total_pages = parts.next()?.parse::<usize>().ok()?;
    let user_id = parts.next()?.parse::<u64>().ok()?;
    let expires_at = parts.next()?.parse::<u64>().ok()?;

    if parts.next().is_some() {
        return None;
    }

    Some(PaginationModalToken {
        command,
        total_pages,
        user_id,
        expires_at,
    })
}

/// Whether the provided unix timestamp is already expired.
pub fn is_expired(expires_at: u64) -> bool {
    now_unix_secs() > expires_at
}

pub(crate) fn now_unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}
