//! Input handling for the Folio TUI.
//!
//! Crossterm events are read on a blocking thread and drained once per
//! frame. Each key goes, in order, to the global quit/reload keys, the chord
//! table, the topmost overlay, and finally the focused pane.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};
use tokio::sync::mpsc;
use tracing::debug;

use folio_engine::{App, EditorCommand, Focus, Key, KeyInput, Modifiers, Overlay};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

const PAGE_STEP: i32 = 10;

/// Terminals without bracketed paste deliver a paste as a burst of key
/// events. While a burst is active, `Enter` inserts a newline in the editor
/// instead of re-indenting, and does not submit overlay forms.
const PASTE_INTER_KEY_THRESHOLD: Duration = Duration::from_millis(20);
const PASTE_IDLE_TIMEOUT: Duration = Duration::from_millis(75);
const PASTE_QUEUE_THRESHOLD: usize = 32;

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Timing mechanism for detecting paste bursts.
#[derive(Debug)]
struct PasteDetector {
    last_key_time: Instant,
    active_until: Instant,
}

impl PasteDetector {
    fn new(now: Instant) -> Self {
        Self {
            last_key_time: now,
            active_until: now,
        }
    }

    fn update(&mut self, now: Instant, backlog: usize, event: &Event) -> bool {
        let is_key_event = matches!(
            event,
            Event::Key(KeyEvent {
                kind: KeyEventKind::Press | KeyEventKind::Repeat,
                ..
            })
        );

        let was_active = now < self.active_until;
        let backlog_high = backlog >= PASTE_QUEUE_THRESHOLD;
        let rapid =
            is_key_event && now.duration_since(self.last_key_time) < PASTE_INTER_KEY_THRESHOLD;
        let active = was_active || backlog_high || rapid;

        if is_key_event {
            if active {
                self.active_until = now + PASTE_IDLE_TIMEOUT;
            }
            self.last_key_time = now;
        }

        active
    }
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
    paste: PasteDetector,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
            paste: PasteDetector::new(Instant::now()),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close first so a sender blocked on capacity wakes up.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Backpressure instead of dropping events.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain up to one frame's worth of events. Returns whether to quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        let backlog = input.rx.len();
        let paste_active = input.paste.update(Instant::now(), backlog, &ev);
        if paste_active {
            debug!(backlog, "Input paste detection active");
        }

        if apply_event(app, ev, paste_active) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Translate a crossterm key into the engine's key record.
#[must_use]
pub fn key_input(key: &KeyEvent) -> KeyInput {
    let code = match key.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        _ => Key::Other,
    };
    let modifiers = Modifiers {
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        alt: key.modifiers.contains(KeyModifiers::ALT),
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
        meta: key
            .modifiers
            .intersects(KeyModifiers::SUPER | KeyModifiers::META),
    };
    KeyInput::new(code, modifiers)
}

fn apply_event(app: &mut App, event: Event, paste_active: bool) -> bool {
    match event {
        Event::Key(key) => {
            if matches!(key.kind, KeyEventKind::Release) {
                return app.should_quit();
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            if ctrl && key.code == KeyCode::Char('c') {
                app.request_quit();
                return true;
            }
            if ctrl && key.code == KeyCode::Char('r') {
                app.request_reload();
                return app.should_quit();
            }

            if app.splash_active() {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ')) {
                    app.skip_splash();
                }
                return app.should_quit();
            }

            if app.route_chord(&key_input(&key)) {
                return app.should_quit();
            }

            match (app.overlays().top(), app.focus()) {
                (Some(overlay), _) => handle_overlay(app, overlay, key, paste_active),
                (None, Focus::Editor) => handle_editor(app, key, paste_active),
                (None, Focus::Explorer) => handle_explorer(app, key),
                (None, Focus::Content) => handle_content(app, key),
            }
        }
        Event::Paste(text) => handle_paste(app, &normalize_line_endings(&text)),
        _ => {}
    }
    app.should_quit()
}

fn handle_paste(app: &mut App, text: &str) {
    if let Some(input) = app.overlay_input() {
        // Overlay fields are single line.
        input.enter_text(&text.replace('\n', " "));
        app.overlay_input_changed();
    } else if app.focus() == Focus::Editor {
        for ch in text.chars() {
            app.editor_command(EditorCommand::Insert(ch));
        }
    }
}

fn handle_overlay(app: &mut App, overlay: Overlay, key: KeyEvent, paste_active: bool) {
    let has_text = app.overlay_input().is_some();
    match key.code {
        KeyCode::Esc => app.close_overlay(),
        KeyCode::Enter if paste_active && has_text => {}
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::SHIFT) => {
            app.overlay_confirm_back();
        }
        KeyCode::Enter => app.overlay_confirm(),
        KeyCode::Up => app.overlay_move(-1),
        KeyCode::Down => app.overlay_move(1),
        KeyCode::Tab => app.overlay_tab(),
        KeyCode::BackTab => app.overlay_move(-1),
        KeyCode::Char('k') if !has_text => app.overlay_move(-1),
        KeyCode::Char('j') if !has_text => app.overlay_move(1),
        KeyCode::Char('q') if overlay == Overlay::Shortcuts => app.close_overlay(),
        _ => {
            if edit_overlay_text(app, key) {
                app.overlay_input_changed();
            }
        }
    }
}

/// Apply a text-editing key to the overlay field. Returns whether the key
/// was an edit.
fn edit_overlay_text(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let Some(input) = app.overlay_input() else {
        return false;
    };
    match key.code {
        KeyCode::Char('w') if ctrl => input.delete_word_backwards(),
        KeyCode::Char('u') if ctrl => input.clear(),
        KeyCode::Char(c) if !ctrl => input.enter_char(c),
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::ALT) => {
            input.delete_word_backwards();
        }
        KeyCode::Backspace => input.delete_char(),
        KeyCode::Delete => input.delete_char_forward(),
        KeyCode::Left => input.move_cursor_left(),
        KeyCode::Right => input.move_cursor_right(),
        KeyCode::Home => input.reset_cursor(),
        KeyCode::End => input.move_cursor_end(),
        _ => return false,
    }
    true
}

fn handle_editor(app: &mut App, key: KeyEvent, paste_active: bool) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let command = match key.code {
        KeyCode::Esc => {
            app.close_editor();
            return;
        }
        KeyCode::Enter if paste_active => EditorCommand::Insert('\n'),
        KeyCode::Enter => EditorCommand::Newline,
        KeyCode::Tab => EditorCommand::Indent,
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::ALT) => {
            EditorCommand::DeleteWord
        }
        KeyCode::Char('w') if ctrl => EditorCommand::DeleteWord,
        KeyCode::Backspace => EditorCommand::Backspace,
        KeyCode::Delete => EditorCommand::Delete,
        KeyCode::Left => EditorCommand::Left,
        KeyCode::Right => EditorCommand::Right,
        KeyCode::Up => EditorCommand::Up,
        KeyCode::Down => EditorCommand::Down,
        KeyCode::Home => EditorCommand::LineStart,
        KeyCode::End => EditorCommand::LineEnd,
        KeyCode::Char(c) if !ctrl => EditorCommand::Insert(c),
        _ => return,
    };
    app.editor_command(command);
}

/// Keys shared by the explorer and content panes. Returns whether the key
/// was handled.
fn handle_workspace_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Tab => app.toggle_focus(),
        KeyCode::Esc => app.close_overlay(),
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('t') => app.toggle_terminal(),
        KeyCode::Char('T') => app.open_overlay(Overlay::ThemePicker),
        KeyCode::Char('c') => app.open_overlay(Overlay::Contact),
        KeyCode::Char('n') => app.open_overlay(Overlay::NewFile),
        KeyCode::Char('?') => app.open_overlay(Overlay::Shortcuts),
        KeyCode::Char('[') => app.cycle_tab(false),
        KeyCode::Char(']') => app.cycle_tab(true),
        _ => return false,
    }
    true
}

fn handle_explorer(app: &mut App, key: KeyEvent) {
    if handle_workspace_key(app, key) {
        return;
    }
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.explorer_move(1),
        KeyCode::Char('k') | KeyCode::Up => app.explorer_move(-1),
        KeyCode::Home => app.explorer_move(isize::MIN),
        KeyCode::End => app.explorer_move(isize::MAX),
        KeyCode::Enter | KeyCode::Char(' ') => app.explorer_activate(),
        _ => {}
    }
}

fn handle_content(app: &mut App, key: KeyEvent) {
    if handle_workspace_key(app, key) {
        return;
    }
    match key.code {
        KeyCode::Char('v') => app.cycle_view_mode(),
        KeyCode::Char('j') | KeyCode::Down => app.content_move(1),
        KeyCode::Char('k') | KeyCode::Up => app.content_move(-1),
        KeyCode::PageDown => app.scroll(PAGE_STEP),
        KeyCode::PageUp => app.scroll(-PAGE_STEP),
        KeyCode::Enter => app.open_selected_item(),
        KeyCode::Backspace => app.back_to_blog(),
        KeyCode::Char('w') => app.close_active_tab(),
        KeyCode::Char('e') => app.edit_selected_scratch(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_engine::{Settings, SessionFlags, ThemeStore};
    use folio_types::ThemeId;

    fn test_app() -> App {
        let settings = Settings {
            show_splash: false,
            ..Settings::default()
        };
        App::new(settings, ThemeStore::session_only(), SessionFlags::default())
    }

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
        apply_event(app, Event::Key(KeyEvent::new(code, modifiers)), false)
    }

    fn typed(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    #[test]
    fn key_translation_keeps_modifiers() {
        let input = key_input(&KeyEvent::new(KeyCode::Char('k'), KeyModifiers::SUPER));
        assert_eq!(input, KeyInput::cmd('k'));
        let input = key_input(&KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL));
        assert_eq!(input, KeyInput::ctrl('f'));
        assert_eq!(
            key_input(&KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE)).key,
            Key::Other
        );
    }

    #[test]
    fn ctrl_c_quits_and_ctrl_r_requests_reload() {
        let mut app = test_app();
        assert!(!press(&mut app, KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert!(app.take_reload_request());
        assert!(press(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn chord_wins_over_overlay_text() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('k'), KeyModifiers::CONTROL);
        typed(&mut app, "sk");
        press(&mut app, KeyCode::Char('f'), KeyModifiers::CONTROL);
        assert_eq!(app.overlays().top(), Some(Overlay::Find));
        assert_eq!(app.palette().filter.text(), "sk");
    }

    #[test]
    fn palette_typing_filters_and_enter_opens() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('k'), KeyModifiers::CONTROL);
        typed(&mut app, "skills");
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.active_path(), Some("/skills"));
        assert!(app.overlays().is_empty());
    }

    #[test]
    fn esc_closes_topmost_overlay_only() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('k'), KeyModifiers::CONTROL);
        press(&mut app, KeyCode::Char('/'), KeyModifiers::CONTROL);
        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.overlays().top(), Some(Overlay::Palette));
    }

    #[test]
    fn new_file_then_typing_goes_to_editor() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('n'), KeyModifiers::NONE);
        press(&mut app, KeyCode::Char('u'), KeyModifiers::CONTROL);
        typed(&mut app, "todo.md");
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.focus(), Focus::Editor);

        typed(&mut app, "- a");
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(
            app.workspace().scratch().file_content("todo.md"),
            Some("# New Document\n\n- a  ")
        );

        // Plain letters type instead of running pane keys.
        typed(&mut app, "q");
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.focus(), Focus::Content);
    }

    #[test]
    fn paste_burst_enter_does_not_submit() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('n'), KeyModifiers::NONE);
        apply_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            true,
        );
        assert_eq!(app.overlays().top(), Some(Overlay::NewFile));
    }

    #[test]
    fn bracketed_paste_into_find() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('f'), KeyModifiers::CONTROL);
        apply_event(&mut app, Event::Paste("bio\r\n".to_string()), false);
        assert_eq!(app.find().query.text(), "bio ");
    }

    #[test]
    fn theme_picker_navigates_with_j_and_k() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('T'), KeyModifiers::SHIFT);
        typed(&mut app, "jjj");
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.theme().active(), ThemeId::ALL[3]);
    }

    #[test]
    fn content_keys_cycle_tabs_and_modes() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('k'), KeyModifiers::CONTROL);
        typed(&mut app, "books");
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        typed(&mut app, "v");
        assert_eq!(app.page().mode().as_str(), "gallery");
        typed(&mut app, "[");
        assert_eq!(app.active_path(), Some("/"));
        typed(&mut app, "w");
        assert!(!app.tabs().is_open("/"));
        assert_eq!(app.active_path(), Some("/books"));
    }

    #[test]
    fn explorer_focus_moves_and_activates() {
        let mut app = test_app();
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.focus(), Focus::Explorer);
        typed(&mut app, "jj");
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.active_path(), Some("/skills"));
    }

    #[test]
    fn splash_swallows_keys_until_skipped() {
        let mut app = App::new(
            Settings::default(),
            ThemeStore::session_only(),
            SessionFlags::default(),
        );
        assert!(app.splash_active());
        typed(&mut app, "q");
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(!app.splash_active());
    }
}
