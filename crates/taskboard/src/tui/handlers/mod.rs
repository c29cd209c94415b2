use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use taskboard_core::{CategorySet, IdSource};
use unicode_segmentation::UnicodeSegmentation;

use super::view::Ui;

pub(super) mod edit;
pub(super) mod form;
pub(super) mod grid;

impl<I: IdSource> Ui<I> {
    pub(in crate::tui) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.board.editing().is_some() {
            self.handle_edit_key(key);
        } else {
            self.handle_main_key(key);
        }
    }
}

/// Ctrl+S submits from any field.
pub(super) fn is_submit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s')
}

/// Apply a text-editing key to `current`. `None` means the key does not edit text.
pub(super) fn edited_text(current: &str, key: &KeyEvent, multiline: bool) -> Option<String> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) => {
            let mut next = current.to_owned();
            next.push(ch);
            Some(next)
        }
        KeyCode::Enter if multiline => {
            let mut next = current.to_owned();
            next.push('\n');
            Some(next)
        }
        KeyCode::Backspace => {
            let keep = current
                .grapheme_indices(true)
                .next_back()
                .map_or(0, |(offset, _)| offset);
            Some(current[..keep].to_owned())
        }
        _ => None,
    }
}

/// Step through the category set. An empty or unknown selection starts at
/// either end depending on direction.
pub(super) fn cycle_category(categories: &CategorySet, current: &str, forward: bool) -> Option<String> {
    let len = categories.len();
    if len == 0 {
        return None;
    }
    let index = match (categories.position(current), forward) {
        (Some(index), true) => (index + 1) % len,
        (Some(index), false) => (index + len - 1) % len,
        (None, true) => 0,
        (None, false) => len - 1,
    };
    categories.get(index).map(ToString::to_string)
}
