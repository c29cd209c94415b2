//! Application layer for taskboard.
//!
//! Configuration loading and the [`Board`] service shared by the terminal UI
//! and the command line.

pub mod board;
pub mod config;

pub use board::Board;
pub use config::{BoardConfig, CategoriesConfig, EditingConfig, user_config_path};
