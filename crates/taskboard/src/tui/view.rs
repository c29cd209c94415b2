use std::cell::Cell;
use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
};
use taskboard_app::Board;
use taskboard_core::{ClockIdSource, IdSource, Task};

use super::constants::UI_MESSAGE_TTL_SECS;

/// Which part of the main screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Focus {
    Title,
    Description,
    Category,
    AddButton,
    Grid,
}

impl Focus {
    pub(super) const fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Category,
            Self::Category => Self::AddButton,
            Self::AddButton => Self::Grid,
            Self::Grid => Self::Title,
        }
    }

    pub(super) const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Grid,
            Self::Description => Self::Title,
            Self::Category => Self::Description,
            Self::AddButton => Self::Category,
            Self::Grid => Self::AddButton,
        }
    }
}

/// Focused control inside the edit overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum EditField {
    Title,
    Description,
    Category,
    Cancel,
    Save,
}

impl EditField {
    pub(super) const fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Category,
            Self::Category => Self::Cancel,
            Self::Cancel => Self::Save,
            Self::Save => Self::Title,
        }
    }

    pub(super) const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Save,
            Self::Description => Self::Title,
            Self::Category => Self::Description,
            Self::Cancel => Self::Category,
            Self::Save => Self::Cancel,
        }
    }
}

pub(super) struct Ui<I: IdSource = ClockIdSource> {
    pub(super) board: Board<I>,
    pub(super) focus: Focus,
    pub(super) edit_field: EditField,
    /// Index of the selected card.
    pub(super) selected: usize,
    /// Column count of the last rendered grid; drives vertical navigation.
    pub(super) grid_columns: Cell<usize>,
    pub(super) message: Option<Message>,
    pub(super) should_quit: bool,
}

impl<I: IdSource> Ui<I> {
    pub(super) const HEADER_HEIGHT: u16 = 3;
    pub(super) const FORM_HEIGHT: u16 = 13;
    pub(super) const STATUS_HEIGHT: u16 = 3;

    pub(super) const fn new(board: Board<I>) -> Self {
        Self {
            board,
            focus: Focus::Title,
            edit_field: EditField::Title,
            selected: 0,
            grid_columns: Cell::new(1),
            message: None,
            should_quit: false,
        }
    }

    pub(super) fn selected_task(&self) -> Option<&Task> {
        self.board.tasks().get(self.selected)
    }

    /// Keep the card selection inside the list after it shrinks.
    pub(super) fn clamp_selection(&mut self) {
        let len = self.board.tasks().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub(super) fn draw(&self, f: &mut Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Self::HEADER_HEIGHT),
                Constraint::Length(Self::FORM_HEIGHT),
                Constraint::Min(super::constants::CARD_HEIGHT),
                Constraint::Length(Self::STATUS_HEIGHT),
            ])
            .split(f.area());

        self.draw_header(f, chunks[0]);
        self.draw_add_form(f, chunks[1]);
        self.draw_grid(f, chunks[2]);
        self.draw_status(f, chunks[3]);

        if self.board.editing().is_some() {
            self.draw_edit_overlay(f);
        }
    }

    pub(super) fn info(&mut self, message: impl Into<String>) {
        self.message = Some(Message::info(message));
    }

    pub(super) fn tick(&mut self) {
        if let Some(msg) = &self.message
            && msg.is_expired(Duration::from_secs(UI_MESSAGE_TTL_SECS))
        {
            self.message = None;
        }
    }
}

pub(super) struct Message {
    pub(super) text: String,
    created_at: Instant,
}

impl Message {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            created_at: Instant::now(),
        }
    }

    pub(super) fn style() -> Style {
        Style::default().fg(Color::Green)
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}
