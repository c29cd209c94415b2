//! Loading board configuration from disk and driving a board built from it.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::fs;

use taskboard_app::{Board, BoardConfig};
use taskboard_core::{Intent, Outcome, SequentialIdSource, TaskFields};
use tempfile::TempDir;

fn workdir_with(body: &str) -> TempDir {
    let dir = TempDir::with_prefix("taskboard-config-").expect("create temp dir");
    let cfg_dir = dir.path().join(".taskboard");
    fs::create_dir(&cfg_dir).expect("create .taskboard dir");
    fs::write(cfg_dir.join("config.toml"), body).expect("write config");
    dir
}

#[test]
fn local_config_categories_drive_the_board() {
    let dir = workdir_with("[categories]\nvalues = [\"Errands\", \"Garden\"]\n");
    let config = BoardConfig::load(dir.path()).expect("load config");
    let mut board = Board::with_id_source(&config, SequentialIdSource::default()).expect("build board");

    let labels: Vec<String> = board.categories().iter().map(ToString::to_string).collect();
    assert_eq!(labels, vec!["Errands", "Garden"]);

    board.dispatch(Intent::StageCreate(TaskFields {
        title: Some("Buy milk".into()),
        description: None,
        category: Some("Shopping".into()),
    }));
    assert!(matches!(board.dispatch(Intent::CommitCreate), Outcome::Rejected(_)));

    board.dispatch(Intent::StageCreate(TaskFields::category("Errands")));
    assert!(matches!(board.dispatch(Intent::CommitCreate), Outcome::Created(_)));
}

#[test]
fn explicit_path_errors_carry_file_context() {
    let dir = workdir_with("[categories]\nvalues = [\"\"]\n");
    let path = dir.path().join(".taskboard").join("config.toml");
    let err = BoardConfig::from_path(&path).expect_err("blank label must fail");
    let message = format!("{err:#}");
    assert!(message.contains("config.toml"));
    assert!(message.contains("must not be blank"));
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = TempDir::new().expect("create temp dir");
    assert!(BoardConfig::from_path(&dir.path().join("absent.toml")).is_err());
}
