use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use taskboard_core::IdSource;

use super::super::view::{Focus, Message, Ui};

impl<I: IdSource> Ui<I> {
    pub(in crate::tui) fn draw_status(&self, f: &mut Frame<'_>, area: Rect) {
        let line = match &self.message {
            Some(message) => Line::from(Span::styled(message.text.as_str(), Message::style())),
            None => Line::from(Span::styled(self.key_hint(), Style::default().fg(Color::DarkGray))),
        };
        let status = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        f.render_widget(status, area);
    }

    fn key_hint(&self) -> &'static str {
        if self.board.editing().is_some() {
            return "Tab: next field  ←/→: category  Enter/Ctrl+S: save  Esc: cancel";
        }
        match self.focus {
            Focus::Grid => "←↑↓→: select  Space: toggle  e: edit  d: delete  Tab: form  q: quit",
            Focus::Category => "←/→: category  Enter: add task  Tab: next  Ctrl+C: quit",
            Focus::Description => "Enter: new line  Ctrl+S: add task  Tab: next  Ctrl+C: quit",
            Focus::Title | Focus::AddButton => "Tab: next  Enter/Ctrl+S: add task  Ctrl+C: quit",
        }
    }
}
