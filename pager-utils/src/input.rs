//! Keystroke-level validation for the go-to page input.

/// A key pressed while the go-to input has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A decimal digit `0..=9`.
    Digit(u8),
    Backspace,
    Delete,
    Other(char),
}

impl Key {
    /// Classify a typed character.
    pub fn from_char(ch: char) -> Self {
        match ch.to_digit(10) {
            Some(digit) => Self::Digit(digit as u8),
            None => Self::Other(ch),
        }
    }
}

/// Text buffer for the go-to input that only ever holds a page in range.
///
/// A digit is accepted only when the resulting number is a page in
/// `[1, total_pages]`. Editing keys are always accepted. When the whole text
/// is selected the next key replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInput {
    text: String,
    total_pages: usize,
    selected: bool,
}

impl PageInput {
    pub fn new(total_pages: usize) -> Self {
        Self {
            text: String::new(),
            total_pages,
            selected: false,
        }
    }

    /// Prefill the input with the current page and select it.
    pub fn with_page(total_pages: usize, page: usize) -> Self {
        Self {
            text: page.to_string(),
            total_pages,
            selected: true,
        }
    }

    pub fn select_all(&mut self) {
        self.selected = true;
    }

    /// Feed one key; returns whether it was accepted.
    pub fn key(&mut self, key: Key) -> bool {
        if self.selected {
            self.text.clear();
            self.selected = false;
        }

        match key {
            Key::Digit(digit) if digit <= 9 => {
                let mut candidate = self.text.clone();
                candidate.push(char::from(b'0' + digit));

                let in_range = candidate
                    .parse::<usize>()
                    .is_ok_and(|page| page > 0 && page <= self.total_pages);
                if in_range {
                    self.text = candidate;
                }
                in_range
            }
            Key::Backspace | Key::Delete => {
                self.text.pop();
                true
            }
            Key::Digit(_) | Key::Other(_) => false,
        }
    }

    /// Feed every character of `typed`; returns how many were accepted.
    pub fn type_str(&mut self, typed: &str) -> usize {
        typed
            .chars()
            .map(Key::from_char)
            .filter(|key| self.key(*key))
            .count()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The entered page, 1-based, if any.
    pub fn value(&self) -> Option<usize> {
        self.text.parse::<usize>().ok()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.selected = false;
    }
}
