//! Onboard TUI - terminal registration form
//!
//! A Ratatui-based form that validates a new user's details against a
//! declarative schema and posts them to a registration endpoint.

mod api;
mod app;
mod config;
mod state;
mod ui;
mod validation;

use anyhow::Result;
use app::App;
use config::OnboardConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; the guard flushes the file writer on drop
    let (writer, log_guard) = log_writer();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "onboard_tui=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    let config = OnboardConfig::load()?;
    let mut app = App::new(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("TUI exited with error: {err:?}");
        drop(log_guard);
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file under the data dir; the alternate screen owns the terminal.
/// Falls back to stderr when the file cannot be opened.
fn log_writer() -> (BoxMakeWriter, Option<WorkerGuard>) {
    match OnboardConfig::log_path().as_deref().and_then(file_appender) {
        Some((writer, guard)) => (BoxMakeWriter::new(writer), Some(guard)),
        None => (BoxMakeWriter::new(io::stderr), None),
    }
}

/// Non-blocking writer appending to `path`, written from a worker thread
fn file_appender(path: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    let log_dir = path.parent()?;
    let log_filename = path.file_name()?.to_str()?;
    fs::create_dir_all(log_dir).ok()?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(log_filename)
        .build(log_dir)
        .ok()?;
    Some(tracing_appender::non_blocking(appender))
}

/// Only presses drive the form; releases and repeats reported by some
/// terminals would otherwise double every keystroke.
fn is_key_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let poll_duration = std::time::Duration::from_millis(100);

    loop {
        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if is_key_press(&key) => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key).await?;
                }
                Event::Resize(_width, _height) => {
                    // Layout is recalculated on next draw
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_events_are_handled() {
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(is_key_press(&key));
    }

    #[test]
    fn test_release_events_are_dropped() {
        let key =
            KeyEvent::new_with_kind(KeyCode::Char('x'), KeyModifiers::NONE, KeyEventKind::Release);
        assert!(!is_key_press(&key));
    }

    #[test]
    fn test_file_appender_flushes_on_guard_drop() {
        use std::io::Write;

        let dir = std::env::temp_dir().join(format!("onboard-tui-log-{}", std::process::id()));
        let path = dir.join("onboard-tui.log");
        let (mut writer, guard) = file_appender(&path).unwrap();

        writer.write_all(b"registration client ready\n").unwrap();
        drop(writer);
        drop(guard);

        let content = fs::read_to_string(&path).unwrap();
        fs::remove_dir_all(&dir).ok();
        assert!(content.contains("registration client ready"));
    }

    #[test]
    fn test_file_appender_needs_a_file_name() {
        assert!(file_appender(Path::new("/")).is_none());
    }
}
