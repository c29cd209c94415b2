use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use taskboard_core::{IdSource, Task};

use super::super::constants::{CARD_HEIGHT, EMPTY_GRID_MESSAGE};
use super::super::view::{Focus, Ui};
use super::util::{category_badge, checkbox, grid_columns, truncate_with_ellipsis};

impl<I: IdSource> Ui<I> {
    pub(in crate::tui) fn draw_grid(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default().title("All Tasks").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let columns = grid_columns(area.width);
        self.grid_columns.set(columns);

        let tasks = self.board.tasks();
        if tasks.is_empty() {
            let placeholder = Paragraph::new(Line::from(Span::styled(
                EMPTY_GRID_MESSAGE,
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(Alignment::Center);
            f.render_widget(placeholder, inner);
            return;
        }

        let visible_rows = usize::from((inner.height / CARD_HEIGHT).max(1));
        let selected_row = self.selected / columns;
        let top_row = selected_row.saturating_sub(visible_rows - 1);

        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
            .split(inner);
        let column_ratio = u32::try_from(columns).unwrap_or(1);

        for (offset, row_area) in row_areas.iter().enumerate() {
            let first = (top_row + offset) * columns;
            if first >= tasks.len() {
                break;
            }
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, column_ratio); columns])
                .split(*row_area);
            for (column, cell) in cells.iter().enumerate() {
                let index = first + column;
                if let Some(task) = tasks.get(index) {
                    let highlighted = self.focus == Focus::Grid && index == self.selected;
                    draw_card(f, *cell, task, highlighted);
                }
            }
        }
    }
}

fn draw_card(f: &mut Frame<'_>, area: Rect, task: &Task, highlighted: bool) {
    let border = match (highlighted, task.completed) {
        (true, _) => Style::default().fg(Color::Yellow),
        (false, true) => Style::default().fg(Color::DarkGray),
        (false, false) => Style::default(),
    };
    let block = Block::default().borders(Borders::ALL).border_style(border);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let title_style = if task.completed {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let title_room = usize::from(inner.width).saturating_sub(4);
    let title = Line::from(vec![
        Span::raw(format!("{} ", checkbox(task.completed))),
        Span::styled(truncate_with_ellipsis(&task.title, title_room), title_style),
    ]);
    f.render_widget(Paragraph::new(title), rows[0]);

    let description = Paragraph::new(task.description.as_str())
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    f.render_widget(description, rows[1]);

    f.render_widget(
        Paragraph::new(Line::from(category_badge(task.category.as_str()))),
        rows[2],
    );
}
