use crossterm::event::{KeyCode, KeyEvent};
use taskboard_core::{IdSource, Intent, Outcome, TaskFields};

use super::super::view::{Focus, Ui};
use super::{cycle_category, edited_text, is_submit};

impl<I: IdSource> Ui<I> {
    pub(in crate::tui) fn handle_main_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return;
            }
            _ => {}
        }

        if self.focus == Focus::Grid {
            self.handle_grid_key(key);
            return;
        }
        if is_submit(&key) {
            self.submit_draft();
            return;
        }

        match self.focus {
            Focus::Title => {
                if key.code == KeyCode::Enter {
                    self.submit_draft();
                } else if let Some(title) = edited_text(&self.board.draft().title, &key, false) {
                    self.board.dispatch(Intent::StageCreate(TaskFields::title(title)));
                }
            }
            Focus::Description => {
                if let Some(description) = edited_text(&self.board.draft().description, &key, true) {
                    self.board
                        .dispatch(Intent::StageCreate(TaskFields::description(description)));
                }
            }
            Focus::Category => match key.code {
                KeyCode::Right | KeyCode::Down | KeyCode::Char(' ' | 'l' | 'j') => {
                    self.step_draft_category(true);
                }
                KeyCode::Left | KeyCode::Up | KeyCode::Char('h' | 'k') => {
                    self.step_draft_category(false);
                }
                KeyCode::Enter => self.submit_draft(),
                _ => {}
            },
            Focus::AddButton => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.submit_draft();
                }
            }
            Focus::Grid => {}
        }
    }

    fn step_draft_category(&mut self, forward: bool) {
        if let Some(category) = cycle_category(self.board.categories(), &self.board.draft().category, forward) {
            self.board
                .dispatch(Intent::StageCreate(TaskFields::category(category)));
        }
    }

    /// Commit the draft. A rejected draft stays in the form untouched.
    fn submit_draft(&mut self) {
        if matches!(self.board.dispatch(Intent::CommitCreate), Outcome::Created(_)) {
            self.selected = self.board.tasks().len().saturating_sub(1);
            self.focus = Focus::Title;
            self.info("Task added");
        }
    }
}
