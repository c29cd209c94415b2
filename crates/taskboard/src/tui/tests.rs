use super::view::*;
use super::widgets::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use std::borrow::Cow;
use std::fmt::Display;
use std::result::Result as StdResult;
use taskboard_app::{Board, BoardConfig};
use taskboard_core::{SequentialIdSource, TaskId};

fn expect_ok<T, E: Display>(result: StdResult<T, E>, ctx: &str) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{ctx}: {err}"),
    }
}

fn expect_some<T>(value: Option<T>, ctx: &str) -> T {
    value.map_or_else(|| panic!("{ctx}"), |inner| inner)
}

fn new_ui() -> Ui<SequentialIdSource> {
    let board = expect_ok(
        Board::with_id_source(&BoardConfig::default(), SequentialIdSource::default()),
        "board must build",
    );
    Ui::new(board)
}

fn press(ui: &mut Ui<SequentialIdSource>, code: KeyCode) {
    ui.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn ctrl(ui: &mut Ui<SequentialIdSource>, ch: char) {
    ui.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
}

fn type_text(ui: &mut Ui<SequentialIdSource>, text: &str) {
    for ch in text.chars() {
        press(ui, KeyCode::Char(ch));
    }
}

/// Fill the add form through the keyboard and submit it.
fn add_task(ui: &mut Ui<SequentialIdSource>, title: &str, description: &str, category_steps: usize) {
    ui.focus = Focus::Title;
    type_text(ui, title);
    press(ui, KeyCode::Tab);
    type_text(ui, description);
    press(ui, KeyCode::Tab);
    for _ in 0..category_steps {
        press(ui, KeyCode::Right);
    }
    press(ui, KeyCode::Tab);
    press(ui, KeyCode::Enter);
}

fn render(ui: &Ui<SequentialIdSource>, width: u16, height: u16) -> String {
    let mut terminal = expect_ok(Terminal::new(TestBackend::new(width, height)), "test terminal");
    expect_ok(terminal.draw(|f| ui.draw(f)), "draw must succeed");
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn truncate_with_ellipsis_returns_borrowed_when_short() {
    let title = "Short title";
    assert!(matches!(
        truncate_with_ellipsis(title, 20),
        Cow::Borrowed(result) if result == title
    ));
}

#[test]
fn truncate_with_ellipsis_keeps_grapheme_clusters_intact() {
    let title = "a\u{0301}bcdef";
    assert_eq!(truncate_with_ellipsis(title, 4), "a\u{0301}...");
}

#[test]
fn grid_columns_follow_width_breakpoints() {
    assert_eq!(grid_columns(60), 1);
    assert_eq!(grid_columns(80), 2);
    assert_eq!(grid_columns(119), 2);
    assert_eq!(grid_columns(160), 3);
}

#[test]
fn keyboard_form_creates_task_and_resets_draft() {
    let mut ui = new_ui();
    add_task(&mut ui, "Buy milk", "", 3);

    let tasks = ui.board.tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Buy milk");
    assert_eq!(tasks[0].category.as_str(), "Shopping");
    assert!(!tasks[0].completed);
    assert_eq!(ui.board.draft().title, "");
    assert_eq!(ui.board.draft().category, "");
    assert_eq!(ui.focus, Focus::Title);
    assert_eq!(expect_some(ui.message.as_ref(), "confirmation").text, "Task added");
}

#[test]
fn empty_title_submission_does_nothing_visible() {
    let mut ui = new_ui();
    add_task(&mut ui, "", "", 3);
    assert!(ui.board.tasks().is_empty());
    assert!(ui.message.is_none());
    assert_eq!(ui.board.draft().category, "Shopping");
}

#[test]
fn missing_category_keeps_draft_for_correction() {
    let mut ui = new_ui();
    type_text(&mut ui, "Stretch");
    press(&mut ui, KeyCode::Enter);
    assert!(ui.board.tasks().is_empty());
    assert_eq!(ui.board.draft().title, "Stretch");

    ui.focus = Focus::Category;
    press(&mut ui, KeyCode::Left);
    ctrl(&mut ui, 's');
    assert_eq!(ui.board.tasks().len(), 1);
    assert_eq!(ui.board.tasks()[0].category.as_str(), "Education");
}

#[test]
fn description_accepts_newlines_and_backspace() {
    let mut ui = new_ui();
    ui.focus = Focus::Description;
    type_text(&mut ui, "one");
    press(&mut ui, KeyCode::Enter);
    type_text(&mut ui, "twoo");
    press(&mut ui, KeyCode::Backspace);
    assert_eq!(ui.board.draft().description, "one\ntwo");
    assert!(ui.board.tasks().is_empty());
}

#[test]
fn typing_q_in_title_is_text_not_quit() {
    let mut ui = new_ui();
    type_text(&mut ui, "quit");
    assert!(!ui.should_quit);
    assert_eq!(ui.board.draft().title, "quit");

    ui.focus = Focus::Grid;
    press(&mut ui, KeyCode::Char('q'));
    assert!(ui.should_quit);
}

#[test]
fn ctrl_c_quits_from_anywhere() {
    let mut ui = new_ui();
    ctrl(&mut ui, 'c');
    assert!(ui.should_quit);
}

#[test]
fn grid_toggle_edit_delete_flow() {
    let mut ui = new_ui();
    add_task(&mut ui, "Buy milk", "", 3);
    let id = ui.board.tasks()[0].id;

    ui.focus = Focus::Grid;
    press(&mut ui, KeyCode::Char(' '));
    assert!(ui.board.tasks()[0].completed);

    press(&mut ui, KeyCode::Char('e'));
    assert_eq!(ui.board.editing().map(|task| task.id), Some(id));
    for _ in 0.."milk".len() {
        press(&mut ui, KeyCode::Backspace);
    }
    type_text(&mut ui, "almond milk");
    assert_eq!(ui.board.tasks()[0].title, "Buy milk");
    press(&mut ui, KeyCode::Enter);

    assert!(ui.board.editing().is_none());
    let task = &ui.board.tasks()[0];
    assert_eq!(task.id, id);
    assert_eq!(task.title, "Buy almond milk");
    assert!(task.completed);

    press(&mut ui, KeyCode::Char('d'));
    assert!(ui.board.tasks().is_empty());
    assert_eq!(ui.selected, 0);
}

#[test]
fn edit_overlay_escape_discards_changes() {
    let mut ui = new_ui();
    add_task(&mut ui, "Read", "", 5);
    ui.focus = Focus::Grid;
    press(&mut ui, KeyCode::Char('e'));
    type_text(&mut ui, " more");
    press(&mut ui, KeyCode::Tab);
    press(&mut ui, KeyCode::Tab);
    press(&mut ui, KeyCode::Right);
    assert_eq!(
        ui.board.editing().map(|task| task.category.as_str()),
        Some("Work")
    );
    press(&mut ui, KeyCode::Esc);
    assert!(ui.board.editing().is_none());
    assert_eq!(ui.board.tasks()[0].title, "Read");
    assert_eq!(ui.board.tasks()[0].category.as_str(), "Education");
}

#[test]
fn overlay_captures_grid_keys() {
    let mut ui = new_ui();
    add_task(&mut ui, "a", "", 1);
    ui.focus = Focus::Grid;
    press(&mut ui, KeyCode::Char('e'));
    press(&mut ui, KeyCode::Char('d'));
    assert_eq!(ui.board.tasks().len(), 1);
    assert_eq!(ui.board.editing().map(|task| task.title.as_str()), Some("ad"));
}

#[test]
fn grid_navigation_respects_columns() {
    let mut ui = new_ui();
    for n in 0..5 {
        add_task(&mut ui, &format!("t{n}"), "", 1);
    }
    ui.focus = Focus::Grid;
    ui.selected = 0;
    ui.grid_columns.set(3);

    press(&mut ui, KeyCode::Down);
    assert_eq!(ui.selected, 3);
    press(&mut ui, KeyCode::Down);
    assert_eq!(ui.selected, 3);
    press(&mut ui, KeyCode::Right);
    assert_eq!(ui.selected, 4);
    press(&mut ui, KeyCode::Right);
    assert_eq!(ui.selected, 4);
    press(&mut ui, KeyCode::Up);
    assert_eq!(ui.selected, 1);
    press(&mut ui, KeyCode::Left);
    press(&mut ui, KeyCode::Left);
    assert_eq!(ui.selected, 0);
}

#[test]
fn deleting_last_card_clamps_selection() {
    let mut ui = new_ui();
    add_task(&mut ui, "a", "", 1);
    add_task(&mut ui, "b", "", 1);
    ui.focus = Focus::Grid;
    assert_eq!(ui.selected, 1);
    press(&mut ui, KeyCode::Char('d'));
    assert_eq!(ui.selected, 0);
    assert_eq!(ui.board.tasks()[0].title, "a");
    assert_eq!(expect_some(ui.selected_task(), "remaining task").id, TaskId(1));
}

#[test]
fn empty_board_renders_placeholder() {
    let ui = new_ui();
    let screen = render(&ui, 100, 40);
    assert!(screen.contains("Task Manager"));
    assert!(screen.contains("Add New Task"));
    assert!(screen.contains("Select Category"));
    assert!(screen.contains("No tasks created yet. Add a task to get started!"));
}

#[test]
fn cards_render_checkbox_title_and_badge() {
    let mut ui = new_ui();
    add_task(&mut ui, "Buy milk", "semi-skimmed", 3);
    add_task(&mut ui, "Stretch", "", 4);
    ui.focus = Focus::Grid;
    ui.selected = 0;
    press(&mut ui, KeyCode::Char(' '));

    let screen = render(&ui, 100, 40);
    assert!(screen.contains("[x] Buy milk"));
    assert!(screen.contains("[ ] Stretch"));
    assert!(screen.contains("semi-skimmed"));
    assert!(screen.contains(" Shopping "));
    assert!(screen.contains(" Health "));
    assert!(!screen.contains("No tasks created yet"));
    assert_eq!(ui.grid_columns.get(), 2);
}

#[test]
fn edit_overlay_renders_only_while_editing() {
    let mut ui = new_ui();
    add_task(&mut ui, "Read", "", 5);
    assert!(!render(&ui, 100, 40).contains("Edit Task"));

    ui.focus = Focus::Grid;
    press(&mut ui, KeyCode::Char('e'));
    let screen = render(&ui, 100, 40);
    assert!(screen.contains("Edit Task"));
    assert!(screen.contains("[ Save ]"));
}
