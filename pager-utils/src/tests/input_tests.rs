use crate::input::{Key, PageInput};

#[test]
fn accepts_digits_that_stay_in_range() {
    let mut input = PageInput::new(25);
    assert!(input.key(Key::Digit(2)));
    assert!(input.key(Key::Digit(5)));
    assert_eq!(input.value(), Some(25));

    assert!(!input.key(Key::Digit(0)));
    assert_eq!(input.text(), "25");
}

#[test]
fn rejects_leading_zero_and_out_of_range_digits() {
    let mut input = PageInput::new(7);
    assert!(!input.key(Key::Digit(0)));
    assert!(!input.key(Key::Digit(8)));
    assert_eq!(input.value(), None);
}

#[test]
fn editing_keys_are_always_accepted() {
    let mut input = PageInput::new(30);
    input.type_str("12");
    assert!(input.key(Key::Backspace));
    assert_eq!(input.text(), "1");
    assert!(input.key(Key::Delete));
    assert!(input.key(Key::Delete));
    assert_eq!(input.text(), "");
}

#[test]
fn other_characters_are_rejected() {
    let mut input = PageInput::new(30);
    assert_eq!(input.type_str("1a-2"), 2);
    assert_eq!(input.value(), Some(12));
    assert!(!input.key(Key::Other(' ')));
}

#[test]
fn selected_text_is_replaced() {
    let mut input = PageInput::with_page(40, 12);
    assert!(input.key(Key::Digit(3)));
    assert_eq!(input.value(), Some(3));

    input.select_all();
    assert!(!input.key(Key::Other('x')));
    assert_eq!(input.text(), "");
}

#[test]
fn from_char_classifies_digits() {
    assert_eq!(Key::from_char('7'), Key::Digit(7));
    assert_eq!(Key::from_char('g'), Key::Other('g'));
}
