use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use taskboard_core::IdSource;

use super::super::constants::{APP_TITLE, CATEGORY_PLACEHOLDER};
use super::super::view::{Focus, Ui};
use super::util::{button, draw_select, draw_text_input};

impl<I: IdSource> Ui<I> {
    pub(in crate::tui) fn draw_header(&self, f: &mut Frame<'_>, area: Rect) {
        let counts = self.board.counts();
        let header = Paragraph::new(Line::from(vec![
            Span::styled(APP_TITLE, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("  {}/{} done", counts.completed, counts.total)),
        ]))
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(header, area);
    }

    pub(in crate::tui) fn draw_add_form(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default().title("Add New Task").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(inner);

        // The edit overlay owns the cursor while it is open.
        let form_active = self.board.editing().is_none();
        let draft = self.board.draft();
        draw_text_input(
            f,
            rows[0],
            "Title",
            &draft.title,
            "Task Title",
            form_active && self.focus == Focus::Title,
        );
        draw_text_input(
            f,
            rows[1],
            "Description",
            &draft.description,
            "Task Description",
            form_active && self.focus == Focus::Description,
        );
        draw_select(
            f,
            rows[2],
            "Category",
            &draft.category,
            CATEGORY_PLACEHOLDER,
            form_active && self.focus == Focus::Category,
        );
        let add = Paragraph::new(Line::from(button("+ Add Task", self.focus == Focus::AddButton)))
            .alignment(Alignment::Left);
        f.render_widget(add, rows[3]);
    }
}
