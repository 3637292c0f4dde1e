//! Button and go-to prompt handling for rendered pagination controls.

use pager_core::{ItemList, Paginator};
use pager_utils::pagination::token::is_expired;
use pager_utils::pagination::{
    PageAction, PaginationToken, PaginationValidationError, apply_token, jump_target,
    parse_modal_custom_id, parse_one_based_page, validate_custom_id,
};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionRoute {
    Buttons,
    JumpModal,
}

/// Classify a component custom ID by its token prefix.
pub fn route_custom_id(custom_id: &str) -> Option<InteractionRoute> {
    const ROUTES: [(&str, InteractionRoute); 2] = [
        ("pgm:", InteractionRoute::JumpModal),
        ("pg:", InteractionRoute::Buttons),
    ];

    ROUTES
        .into_iter()
        .find_map(|(prefix, route)| custom_id.starts_with(prefix).then_some(route))
}

/// A validated button press and whether it moved the paginator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentPress {
    pub token: PaginationToken,
    /// False for `jump` presses and for pages that no longer exist.
    pub moved: bool,
}

impl ComponentPress {
    /// Whether the caller should open the go-to prompt.
    pub fn opens_prompt(&self) -> bool {
        self.token.action == PageAction::Jump
    }
}

/// Validate a button press and apply it.
pub fn handle_component<I: ItemList>(
    pager: &mut Paginator<I>,
    custom_id: &str,
    command: &str,
    actor_user_id: u64,
) -> Result<ComponentPress, PaginationValidationError> {
    let token = validate_custom_id(custom_id, command, actor_user_id).inspect_err(|err| {
        warn!(?err, custom_id, "rejected pagination button");
    })?;

    let moved = apply_token(pager, &token);
    Ok(ComponentPress { token, moved })
}

/// Validate a go-to prompt submission and move to the entered page.
///
/// The entry must be a page in `[1, min(total_pages, hint)]`, where the hint
/// is the page count the prompt was opened with.
pub fn handle_jump_submit<I: ItemList>(
    pager: &mut Paginator<I>,
    modal_custom_id: &str,
    command: &str,
    actor_user_id: u64,
    entered: &str,
) -> Result<usize, PaginationValidationError> {
    let token = parse_modal_custom_id(modal_custom_id).ok_or(PaginationValidationError::Invalid)?;

    if token.command != command {
        return Err(PaginationValidationError::WrongCommand);
    }

    if token.user_id != actor_user_id {
        return Err(PaginationValidationError::WrongUser);
    }

    if is_expired(token.expires_at) {
        return Err(PaginationValidationError::Expired);
    }

    let requested = parse_one_based_page(Some(entered)).ok_or(PaginationValidationError::Invalid)?;
    let target = jump_target(requested, pager.total_pages(), token.total_pages)
        .ok_or(PaginationValidationError::OutOfRange)?;

    if !pager.go_to(target) {
        return Err(PaginationValidationError::OutOfRange);
    }
    Ok(target)
}
