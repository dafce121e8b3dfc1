//! Folio CLI - Binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`folio_engine`] (workspace state), [`folio_tui`]
//! (rendering and input) and [`folio_client`] (portfolio data), providing
//! RAII-based terminal management with guaranteed cleanup.
//!
//! ```text
//! main() -> TerminalSession::new() -> run_app() -> App + TUI
//!                                         |
//!                                         v
//!                              RunResult::Quit | Reload
//! ```
//!
//! # Event Loop
//!
//! A fixed 8ms (~120 FPS) render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`folio_tui::InputPump`])
//! 3. Spawn requested fetches and contact submissions
//! 4. Apply completions that arrived since the last frame
//! 5. Advance timers (`app.tick()`)
//! 6. Render frame
//! 7. Check for reload or quit

use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::{
    fs::{self, OpenOptions},
    io::{Stdout, Write, stdout},
    path::PathBuf,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::sync::mpsc;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use folio_client::DataSource;
use folio_engine::{
    App, ConfigFileThemes, FetchCompletion, FolioConfig, SessionFlags, Settings, ThemeStore,
    config_path,
};
use folio_tui::{InputPump, draw, handle_events};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_folio_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // No log file: drop logs rather than write over the TUI.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_folio_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in folio_log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn folio_log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.folio/logs/folio.log
    if let Some(config_path) = config_path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("folio.log"));
    }

    // Fallback: ./.folio/logs/folio.log
    candidates.push(PathBuf::from(".folio").join("logs").join("folio.log"));

    candidates
}

enum RunResult {
    Quit,
    Reload,
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Enables raw mode, bracketed paste and the alternate screen; all of it is
/// restored on drop, including after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnableBracketedPaste, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            let _ = execute!(out, LeaveAlternateScreen, DisableBracketedPaste);
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen, DisableBracketedPaste);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        );
        let _ = self.terminal.show_cursor();
    }
}

fn load_theme_store() -> ThemeStore {
    match config_path() {
        Some(path) => ThemeStore::load(Box::new(ConfigFileThemes::new(path))),
        None => {
            tracing::warn!("No home directory; theme changes last for this session only");
            ThemeStore::session_only()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = match FolioConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "{err}");
            None
        }
    };
    let settings = Settings::resolve(config.as_ref());
    let source = Arc::new(DataSource::from_base_url(settings.api_base_url.as_deref())?);
    tracing::info!(source = %source.describe(), "Data source ready");

    let mut app = App::new(settings, load_theme_store(), SessionFlags::default());
    let mut session = TerminalSession::new()?;

    loop {
        match run_app(&mut session.terminal, &mut app, &source).await {
            Ok(RunResult::Reload) => {
                tracing::info!("Reloading workspace");
                app = app.reload();
                session.terminal.clear()?;
            }
            Ok(RunResult::Quit) => break,
            Err(err) => {
                drop(session);
                eprintln!("Error: {err:?}");
                return Ok(());
            }
        }
    }

    Ok(())
}

const FRAME_DURATION: Duration = Duration::from_millis(8);

/// Spawn every fetch and contact submission the app queued since the last
/// frame. Results come back over the channels.
fn dispatch_requests(
    app: &mut App,
    source: &Arc<DataSource>,
    fetch_tx: &mpsc::UnboundedSender<FetchCompletion>,
    contact_tx: &mpsc::UnboundedSender<bool>,
) {
    for endpoint in app.take_fetch_requests() {
        let source = Arc::clone(source);
        let tx = fetch_tx.clone();
        tokio::spawn(async move {
            let result = source.fetch(&endpoint).await.map_err(|err| {
                tracing::warn!(endpoint = %endpoint.path(), "Fetch failed: {err}");
                err.to_string()
            });
            let _ = tx.send(FetchCompletion { endpoint, result });
        });
    }

    if let Some(message) = app.take_contact_submission() {
        let source = Arc::clone(source);
        let tx = contact_tx.clone();
        tokio::spawn(async move {
            let ok = match source.submit_contact(&message).await {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!("Contact submission failed: {err}");
                    false
                }
            };
            let _ = tx.send(ok);
        });
    }
}

async fn run_app<B>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    source: &Arc<DataSource>,
) -> Result<RunResult>
where
    B: Backend + Write,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let (fetch_tx, mut fetch_rx) = mpsc::unbounded_channel();
    let (contact_tx, mut contact_rx) = mpsc::unbounded_channel();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result: Result<RunResult> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        let quit_now = match handle_events(app, &mut input) {
            Ok(q) => q,
            Err(e) => break Err(e),
        };
        if quit_now || app.should_quit() {
            break Ok(RunResult::Quit);
        }

        dispatch_requests(app, source, &fetch_tx, &contact_tx);
        while let Ok(completion) = fetch_rx.try_recv() {
            app.apply_fetch(completion);
        }
        while let Ok(ok) = contact_rx.try_recv() {
            app.apply_contact_result(ok);
        }

        app.tick();

        if let Err(e) = terminal.draw(|frame| draw(frame, app)) {
            break Err(e.into());
        }

        if app.take_reload_request() {
            break Ok(RunResult::Reload);
        }
    };

    input.shutdown().await;
    result
}
