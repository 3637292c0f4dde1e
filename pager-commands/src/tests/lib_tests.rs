use std::cell::RefCell;
use std::rc::Rc;

use pager_core::{PagerConfig, Paginator};
use pager_utils::pagination::{
    PageAction, PaginationValidationError, build_custom_id, build_modal_custom_id,
};

use super::*;

const FAR_FUTURE: u64 = u64::MAX;

fn pager() -> Paginator {
    Paginator::new(PagerConfig::new(95, 10).with_window_length(5)).expect("valid config")
}

#[test]
fn navigation_commands_move_the_pager() {
    let mut pager = pager();
    assert_eq!(handle_line(&mut pager, "next"), CommandOutcome::Moved);
    assert_eq!(handle_line(&mut pager, "NEXT"), CommandOutcome::Moved);
    assert_eq!(pager.page_number(), 3);

    assert_eq!(handle_line(&mut pager, "previous"), CommandOutcome::Moved);
    assert_eq!(handle_line(&mut pager, "last"), CommandOutcome::Moved);
    assert_eq!(pager.page_number(), 10);
    assert_eq!(handle_line(&mut pager, "next"), CommandOutcome::Unchanged);

    assert_eq!(handle_line(&mut pager, "first"), CommandOutcome::Moved);
    assert_eq!(handle_line(&mut pager, "prev"), CommandOutcome::Unchanged);
}

#[test]
fn go_takes_one_based_pages() {
    let mut pager = pager();
    assert_eq!(handle_line(&mut pager, "go 4"), CommandOutcome::Moved);
    assert_eq!(pager.current_page(), 3);

    assert_eq!(handle_line(&mut pager, "go 11"), CommandOutcome::Unchanged);
    assert_eq!(handle_line(&mut pager, "go 0"), CommandOutcome::Unchanged);
    assert_eq!(handle_line(&mut pager, "go"), CommandOutcome::Usage(navigation::GO.usage));
    assert_eq!(handle_line(&mut pager, "go x"), CommandOutcome::Usage(navigation::GO.usage));
    assert_eq!(pager.current_page(), 3);
}

#[test]
fn page_takes_zero_based_indices() {
    let mut pager = pager();
    assert_eq!(handle_line(&mut pager, "page 0"), CommandOutcome::Moved);
    assert_eq!(handle_line(&mut pager, "page 9"), CommandOutcome::Moved);
    assert_eq!(pager.page_number(), 10);
    assert_eq!(handle_line(&mut pager, "page 10"), CommandOutcome::Unchanged);
    assert_eq!(handle_line(&mut pager, "page -1"), CommandOutcome::Usage(navigation::PAGE.usage));
}

#[test]
fn blank_unknown_show_and_help() {
    let mut pager = pager();
    assert_eq!(handle_line(&mut pager, "   "), CommandOutcome::Empty);
    assert_eq!(handle_line(&mut pager, "Jump"), CommandOutcome::Unknown("jump".to_owned()));
    assert_eq!(handle_line(&mut pager, "show"), CommandOutcome::Show);

    let CommandOutcome::Help(text) = handle_line(&mut pager, "help") else {
        panic!("expected help text");
    };
    assert_eq!(text.lines().count(), COMMANDS.len());
    assert!(text.contains("go <page>"));
}

#[test]
fn routes_by_token_prefix() {
    assert_eq!(route_custom_id("pg:records:next:2:10:1:9"), Some(InteractionRoute::Buttons));
    assert_eq!(route_custom_id("pgm:records:10:1:9"), Some(InteractionRoute::JumpModal));
    assert_eq!(route_custom_id("terminate:confirm"), None);
}

#[test]
fn button_press_notifies_listener_once() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut pager = pager().on_change(move |change| sink.borrow_mut().push(change.page));

    let id = build_custom_id("records", PageAction::Next, 2, 10, 7, FAR_FUTURE);
    let press = handle_component(&mut pager, &id, "records", 7).expect("valid press");
    assert_eq!(press.token.action, PageAction::Next);
    assert!(press.moved);
    assert!(!press.opens_prompt());
    assert_eq!(*seen.borrow(), vec![2]);
}

#[test]
fn button_press_from_other_user_is_rejected() {
    let mut pager = pager();
    let id = build_custom_id("records", PageAction::Last, 10, 10, 7, FAR_FUTURE);
    assert_eq!(
        handle_component(&mut pager, &id, "records", 8),
        Err(PaginationValidationError::WrongUser)
    );
    assert_eq!(pager.page_number(), 1);
}

#[test]
fn expired_button_press_is_rejected() {
    let mut pager = pager();
    let id = build_custom_id("records", PageAction::Last, 10, 10, 7, 0);
    assert_eq!(
        handle_component(&mut pager, &id, "records", 7),
        Err(PaginationValidationError::Expired)
    );
}

#[test]
fn stale_button_press_reports_it_did_not_move() {
    let mut pager = Paginator::new(PagerConfig::new(30, 10)).expect("valid config");
    let id = build_custom_id("records", PageAction::Page, 7, 9, 7, FAR_FUTURE);

    let press = handle_component(&mut pager, &id, "records", 7).expect("valid token");
    assert!(!press.moved);
    assert_eq!(pager.page_number(), 1);
}

#[test]
fn jump_submit_moves_to_entered_page() {
    let mut pager = pager();
    let modal = build_modal_custom_id("records", 10, 7, FAR_FUTURE);

    assert_eq!(handle_jump_submit(&mut pager, &modal, "records", 7, " 6 "), Ok(6));
    assert_eq!(pager.page_number(), 6);

    assert_eq!(
        handle_jump_submit(&mut pager, &modal, "records", 7, "zero"),
        Err(PaginationValidationError::Invalid)
    );
    assert_eq!(
        handle_jump_submit(&mut pager, &modal, "other", 7, "2"),
        Err(PaginationValidationError::WrongCommand)
    );
}

#[test]
fn jump_submit_rejects_pages_out_of_range() {
    let mut pager = pager();
    pager.go_to(4);
    let modal = build_modal_custom_id("records", 10, 7, FAR_FUTURE);

    assert_eq!(
        handle_jump_submit(&mut pager, &modal, "records", 7, "999"),
        Err(PaginationValidationError::OutOfRange)
    );
    assert_eq!(
        handle_jump_submit(&mut pager, &modal, "records", 7, "11"),
        Err(PaginationValidationError::OutOfRange)
    );
    assert_eq!(pager.page_number(), 4);
}

#[test]
fn jump_submit_rejects_pages_past_a_stale_prompt() {
    let mut pager = pager();
    let modal = build_modal_custom_id("records", 6, 7, FAR_FUTURE);

    assert_eq!(
        handle_jump_submit(&mut pager, &modal, "records", 7, "9"),
        Err(PaginationValidationError::OutOfRange)
    );
    assert_eq!(pager.page_number(), 1);
}

#[test]
fn jump_submit_on_empty_dataset_is_out_of_range() {
    let mut pager = Paginator::new(PagerConfig::new(0, 10)).expect("valid config");
    let modal = build_modal_custom_id("records", 0, 7, FAR_FUTURE);
    assert_eq!(
        handle_jump_submit(&mut pager, &modal, "records", 7, "1"),
        Err(PaginationValidationError::OutOfRange)
    );
}

fn button_id(outcome: &CommandOutcome, label: &str) -> String {
    let CommandOutcome::Controls { buttons, .. } = outcome else {
        panic!("expected rendered controls, got {outcome:?}");
    };
    buttons
        .iter()
        .find(|(button_label, _)| button_label == label)
        .map(|(_, custom_id)| custom_id.clone())
        .unwrap_or_else(|| panic!("no `{label}` button in {buttons:?}"))
}

#[test]
fn rendered_buttons_can_be_pressed() {
    let mut pager = pager();
    let outcome = handle_line(&mut pager, "buttons");

    let CommandOutcome::Controls { footer, .. } = &outcome else {
        panic!("expected rendered controls");
    };
    assert_eq!(footer, "Page 1/10 • 1-10 of 95");

    let next = button_id(&outcome, "Next");
    assert_eq!(route_custom_id(&next), Some(InteractionRoute::Buttons));
    assert_eq!(handle_line(&mut pager, &format!("press {next}")), CommandOutcome::Moved);
    assert_eq!(pager.page_number(), 2);

    let page_four = button_id(&handle_line(&mut pager, "buttons"), "4");
    assert_eq!(handle_line(&mut pager, &format!("press {page_four}")), CommandOutcome::Moved);
    assert_eq!(pager.page_number(), 4);
}

#[test]
fn go_button_opens_prompt_that_accepts_a_page() {
    let mut pager = pager();
    let go = button_id(&handle_line(&mut pager, "buttons"), "Go");

    let CommandOutcome::JumpPrompt(prompt) = handle_line(&mut pager, &format!("press {go}")) else {
        panic!("expected a go-to prompt");
    };
    assert_eq!(route_custom_id(&prompt), Some(InteractionRoute::JumpModal));
    assert_eq!(pager.page_number(), 1);

    assert_eq!(handle_line(&mut pager, &format!("submit {prompt} 7")), CommandOutcome::Moved);
    assert_eq!(pager.page_number(), 7);
    assert_eq!(
        handle_line(&mut pager, &format!("submit {prompt} 999")),
        CommandOutcome::Rejected(PaginationValidationError::OutOfRange)
    );
    assert_eq!(pager.page_number(), 7);
}

#[test]
fn malformed_press_and_submit() {
    let mut pager = pager();
    assert_eq!(handle_line(&mut pager, "press"), CommandOutcome::Usage(controls::PRESS.usage));
    assert_eq!(
        handle_line(&mut pager, "press pg:pager:next"),
        CommandOutcome::Rejected(PaginationValidationError::Invalid)
    );
    assert_eq!(
        handle_line(&mut pager, "submit onlyone"),
        CommandOutcome::Usage(controls::SUBMIT.usage)
    );
}
