//! CLI entry point for taskboard.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt::format::FmtSpan};

use taskboard_app::{Board, BoardConfig};

mod tui;

/// In-memory task board in the terminal.
#[derive(Parser, Debug)]
#[command(
    name = "taskboard",
    version,
    about = "taskboard: add, complete, edit and delete tasks in a terminal card grid"
)]
struct Cli {
    /// Configuration file (defaults to .taskboard/config.toml, then the user config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append logs to this file; the terminal UI is silent otherwise.
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Launch interactive terminal UI (default).
    Tui,

    /// Print the configured categories, one per line.
    Categories,
}

fn main() -> Result<()> {
    let Cli {
        config,
        log_file,
        cmd,
    } = Cli::parse();
    let cmd = cmd.unwrap_or(Command::Tui);

    match log_file.as_deref() {
        Some(path) => install_file_tracing(path)?,
        None if should_install_tracing(cmd) => install_tracing(),
        None => {}
    }

    let config = load_config(config.as_deref())?;
    execute_command(cmd, &config, log_file.is_none())
}

fn load_config(explicit: Option<&Path>) -> Result<BoardConfig> {
    match explicit {
        Some(path) => BoardConfig::from_path(path),
        None => BoardConfig::load("."),
    }
}

fn execute_command(command: Command, config: &BoardConfig, silence_ui_logs: bool) -> Result<()> {
    match command {
        Command::Tui => {
            let board = Board::new(config)?;
            tui::run(board, silence_ui_logs)
        }
        Command::Categories => {
            for category in config.category_set()?.iter() {
                println!("{category}");
            }
            Ok(())
        }
    }
}

const fn should_install_tracing(cmd: Command) -> bool {
    !matches!(cmd, Command::Tui)
}

fn env_filter() -> EnvFilter {
    build_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

/// RUST_LOG-style directives; INFO when none are given.
fn build_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn install_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

fn install_file_tracing(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_tui() {
        let cli = Cli::parse_from(["taskboard"]);
        assert!(cli.cmd.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn parse_global_options() {
        let cli = Cli::parse_from([
            "taskboard",
            "--config",
            "board.toml",
            "--log-file",
            "taskboard.log",
            "categories",
        ]);
        assert_eq!(cli.config.as_deref(), Some(Path::new("board.toml")));
        assert_eq!(cli.log_file.as_deref(), Some(Path::new("taskboard.log")));
        assert_eq!(cli.cmd, Some(Command::Categories));
    }

    #[test]
    fn parse_tui_command() {
        let cli = Cli::parse_from(["taskboard", "tui"]);
        assert_eq!(cli.cmd, Some(Command::Tui));
    }

    #[test]
    fn skips_stderr_tracing_in_tui_mode() {
        assert!(!should_install_tracing(Command::Tui));
    }

    #[test]
    fn rust_log_debug_directive_is_kept() {
        let filter = build_filter(Some("debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let quiet = build_filter(Some("warn"));
        assert_eq!(quiet.max_level_hint(), Some(LevelFilter::WARN));

        let scoped = build_filter(Some("taskboard_app=debug"));
        assert_eq!(scoped.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn missing_directives_default_to_info() {
        let filter = build_filter(None);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn installs_tracing_for_other_commands() {
        assert!(should_install_tracing(Command::Categories));
    }
}
