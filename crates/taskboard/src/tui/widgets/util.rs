use std::borrow::Cow;

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_segmentation::UnicodeSegmentation;

use super::super::constants::{FOCUS_MARKER, GRID_THREE_COLUMN_MIN_WIDTH, GRID_TWO_COLUMN_MIN_WIDTH};

pub(super) fn truncate_with_ellipsis(input: &str, max_graphemes: usize) -> Cow<'_, str> {
    const ELLIPSIS: &str = "...";
    const ELLIPSIS_GRAPHEMES: usize = 3;

    if max_graphemes == 0 {
        return Cow::Owned(String::new());
    }

    let grapheme_count = UnicodeSegmentation::graphemes(input, true).count();
    if grapheme_count <= max_graphemes {
        return Cow::Borrowed(input);
    }

    if max_graphemes <= ELLIPSIS_GRAPHEMES {
        let truncated: String = UnicodeSegmentation::graphemes(input, true)
            .take(max_graphemes)
            .collect();
        return Cow::Owned(truncated);
    }

    let keep = max_graphemes - ELLIPSIS_GRAPHEMES;
    let mut truncated: String = UnicodeSegmentation::graphemes(input, true).take(keep).collect();
    truncated.push_str(ELLIPSIS);
    Cow::Owned(truncated)
}

/// Responsive column count: one, two or three cards per row.
pub(super) const fn grid_columns(width: u16) -> usize {
    if width < GRID_TWO_COLUMN_MIN_WIDTH {
        1
    } else if width < GRID_THREE_COLUMN_MIN_WIDTH {
        2
    } else {
        3
    }
}

pub(super) const fn checkbox(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

pub(super) fn category_badge(label: &str) -> Span<'_> {
    Span::styled(
        format!(" {label} "),
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    )
}

/// Centered popup rectangle clamped to `area`.
pub(super) fn centered_rect(area: Rect, width_percent: u16, min_width: u16, height: u16) -> Rect {
    let scaled = u32::from(area.width) * u32::from(width_percent) / 100;
    let width = u16::try_from(scaled)
        .unwrap_or(u16::MAX)
        .max(min_width)
        .min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

fn field_block(label: &str, focused: bool) -> Block<'_> {
    let title = if focused {
        format!("{FOCUS_MARKER}{label}")
    } else {
        label.to_owned()
    };
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default().title(title).borders(Borders::ALL).border_style(border)
}

/// Bordered text input; shows `placeholder` dimmed while `value` is empty.
pub(super) fn draw_text_input(
    f: &mut Frame<'_>,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) {
    let block = field_block(label, focused);
    let inner = block.inner(area);
    let paragraph = if value.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            placeholder,
            Style::default().fg(Color::DarkGray),
        )))
    } else {
        let lines: Vec<Line<'_>> = value.split('\n').map(Line::from).collect();
        let overflow = u16::try_from(lines.len())
            .unwrap_or(u16::MAX)
            .saturating_sub(inner.height.max(1));
        Paragraph::new(lines).scroll((overflow, 0))
    };
    f.render_widget(paragraph.block(block), area);

    if focused {
        f.set_cursor_position(cursor_position(inner, value));
    }
}

/// Bordered selector rendered as `< value >`.
pub(super) fn draw_select(f: &mut Frame<'_>, area: Rect, label: &str, value: &str, placeholder: &str, focused: bool) {
    let block = field_block(label, focused);
    let content = if value.is_empty() {
        Line::from(vec![
            Span::raw("< "),
            Span::styled(placeholder, Style::default().fg(Color::DarkGray)),
            Span::raw(" >"),
        ])
    } else {
        Line::from(vec![Span::raw("< "), category_badge(value), Span::raw(" >")])
    };
    f.render_widget(Paragraph::new(content).block(block), area);
}

/// One-line button; reversed while focused.
pub(super) fn button<'a>(label: &'a str, focused: bool) -> Span<'a> {
    let style = if focused {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    Span::styled(format!("[ {label} ]"), style)
}

/// Cursor after the last grapheme of the last visible line.
pub(super) fn cursor_position(inner: Rect, value: &str) -> Position {
    let line_count = value.split('\n').count().max(1);
    let last_line = value.rsplit('\n').next().unwrap_or_default();
    let column = u16::try_from(last_line.graphemes(true).count()).unwrap_or(u16::MAX);
    let row = u16::try_from(line_count - 1)
        .unwrap_or(u16::MAX)
        .min(inner.height.saturating_sub(1));
    Position {
        x: inner.x + column.min(inner.width.saturating_sub(1)),
        y: inner.y + row,
    }
}
