use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use taskboard_core::IdSource;

use super::super::constants::{
    CATEGORY_PLACEHOLDER, EDIT_OVERLAY_HEIGHT, EDIT_OVERLAY_MIN_WIDTH, EDIT_OVERLAY_WIDTH_PERCENT,
};
use super::super::view::{EditField, Ui};
use super::util::{button, centered_rect, draw_select, draw_text_input};

impl<I: IdSource> Ui<I> {
    pub(in crate::tui) fn draw_edit_overlay(&self, f: &mut Frame<'_>) {
        let Some(editing) = self.board.editing() else {
            return;
        };
        let popup_area = centered_rect(
            f.area(),
            EDIT_OVERLAY_WIDTH_PERCENT,
            EDIT_OVERLAY_MIN_WIDTH,
            EDIT_OVERLAY_HEIGHT,
        );

        let block = Block::default()
            .title("Edit Task")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black));
        f.render_widget(Clear, popup_area);
        let inner = block.inner(popup_area);
        f.render_widget(block, popup_area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(inner);

        draw_text_input(
            f,
            rows[0],
            "Title",
            &editing.title,
            "Task Title",
            self.edit_field == EditField::Title,
        );
        draw_text_input(
            f,
            rows[1],
            "Description",
            &editing.description,
            "Task Description",
            self.edit_field == EditField::Description,
        );
        draw_select(
            f,
            rows[2],
            "Category",
            editing.category.as_str(),
            CATEGORY_PLACEHOLDER,
            self.edit_field == EditField::Category,
        );

        let actions = Line::from(vec![
            button("Cancel", self.edit_field == EditField::Cancel),
            Span::raw("  "),
            button("Save", self.edit_field == EditField::Save),
        ]);
        f.render_widget(Paragraph::new(actions), rows[3]);
    }
}
