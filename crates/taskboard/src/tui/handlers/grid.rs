use crossterm::event::{KeyCode, KeyEvent};
use taskboard_core::{IdSource, Intent, Outcome};

use super::super::view::{EditField, Ui};

impl<I: IdSource> Ui<I> {
    pub(in crate::tui) fn handle_grid_key(&mut self, key: KeyEvent) {
        let columns = self.grid_columns.get().max(1);
        match key.code {
            KeyCode::Char('q' | 'Q') => self.should_quit = true,
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(1, true),
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(1, false),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(columns, true),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(columns, false),
            KeyCode::Char(' ' | 'x') => self.toggle_selected(),
            KeyCode::Char('e') | KeyCode::Enter => self.edit_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            _ => {}
        }
    }

    fn move_selection(&mut self, step: usize, forward: bool) {
        let len = self.board.tasks().len();
        if len == 0 {
            return;
        }
        self.selected = if forward {
            let next = self.selected + step;
            if next < len { next } else { self.selected }
        } else {
            self.selected.checked_sub(step).unwrap_or(self.selected)
        };
    }

    fn toggle_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let id = task.id;
        let now_completed = !task.completed;
        if self.board.dispatch(Intent::ToggleCompletion(id)).changed() {
            self.info(if now_completed {
                "Marked complete"
            } else {
                "Marked incomplete"
            });
        }
    }

    fn edit_selected(&mut self) {
        let Some(id) = self.selected_task().map(|task| task.id) else {
            return;
        };
        if self.board.dispatch(Intent::BeginEdit(id)) == Outcome::Applied {
            self.edit_field = EditField::Title;
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected_task().map(|task| task.id) else {
            return;
        };
        if self.board.dispatch(Intent::Delete(id)).changed() {
            self.clamp_selection();
            self.info("Task deleted");
        }
    }
}
