//! Shared constants for the TUI to keep layout and timing in sync.

/// Interval in milliseconds between UI ticks/redraws.
pub const TUI_TICK_RATE_MS: u64 = 200;
/// Time-to-live in seconds for transient status messages.
pub const UI_MESSAGE_TTL_SECS: u64 = 5;
/// Header line text.
pub const APP_TITLE: &str = "Task Manager";
/// Placeholder shown in the category selector when nothing is chosen.
pub const CATEGORY_PLACEHOLDER: &str = "Select Category";
/// Placeholder shown in the grid when the list is empty.
pub const EMPTY_GRID_MESSAGE: &str = "No tasks created yet. Add a task to get started!";
/// Grid switches from one to two columns at this width.
pub const GRID_TWO_COLUMN_MIN_WIDTH: u16 = 80;
/// Grid switches from two to three columns at this width.
pub const GRID_THREE_COLUMN_MIN_WIDTH: u16 = 120;
/// Rows taken by a single card including borders.
pub const CARD_HEIGHT: u16 = 7;
/// Width percentage for the edit overlay before clamping.
pub const EDIT_OVERLAY_WIDTH_PERCENT: u16 = 60;
/// Minimum width for the edit overlay.
pub const EDIT_OVERLAY_MIN_WIDTH: u16 = 40;
/// Height of the edit overlay including borders.
pub const EDIT_OVERLAY_HEIGHT: u16 = 13;
/// Marker drawn next to the focused form field.
pub const FOCUS_MARKER: &str = "▶ ";
