use crossterm::event::{KeyCode, KeyEvent};
use taskboard_core::{IdSource, Intent, TaskFields};

use super::super::view::{EditField, Ui};
use super::{cycle_category, edited_text, is_submit};

impl<I: IdSource> Ui<I> {
    pub(in crate::tui) fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.board.dispatch(Intent::CancelEdit);
                return;
            }
            KeyCode::Tab => {
                self.edit_field = self.edit_field.next();
                return;
            }
            KeyCode::BackTab => {
                self.edit_field = self.edit_field.prev();
                return;
            }
            _ => {}
        }
        if is_submit(&key) {
            self.save_edit();
            return;
        }

        let Some(editing) = self.board.editing() else {
            return;
        };
        match self.edit_field {
            EditField::Title => {
                if key.code == KeyCode::Enter {
                    self.save_edit();
                } else if let Some(title) = edited_text(&editing.title, &key, false) {
                    self.board.dispatch(Intent::StageEdit(TaskFields::title(title)));
                }
            }
            EditField::Description => {
                if let Some(description) = edited_text(&editing.description, &key, true) {
                    self.board
                        .dispatch(Intent::StageEdit(TaskFields::description(description)));
                }
            }
            EditField::Category => {
                let forward = match key.code {
                    KeyCode::Right | KeyCode::Down | KeyCode::Char(' ' | 'l' | 'j') => true,
                    KeyCode::Left | KeyCode::Up | KeyCode::Char('h' | 'k') => false,
                    KeyCode::Enter => {
                        self.save_edit();
                        return;
                    }
                    _ => return,
                };
                if let Some(category) =
                    cycle_category(self.board.categories(), editing.category.as_str(), forward)
                {
                    self.board.dispatch(Intent::StageEdit(TaskFields::category(category)));
                }
            }
            EditField::Cancel => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.board.dispatch(Intent::CancelEdit);
                }
            }
            EditField::Save => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.save_edit();
                }
            }
        }
    }

    fn save_edit(&mut self) {
        if self.board.dispatch(Intent::CommitEdit).changed() {
            self.info("Task updated");
        }
    }
}
