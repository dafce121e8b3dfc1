//! Core engine for Folio - workspace state machine and page documents.
//!
//! This crate holds the [`App`] state machine without TUI or network
//! dependencies. The TUI draws from it and forwards keys to it; the binary
//! drains its fetch and contact outboxes and applies the completions.

mod app;
mod config;
mod contact;
mod data;
mod document;
mod editor;
mod explorer;
mod find;
mod keymap;
mod new_file;
mod overlay;
mod pages;
mod palette;
mod projection;
mod scratch;
mod session;
mod settings;
mod splash;
mod status;
mod tabs;
mod terminal;
mod theme;

pub use app::{App, Focus, SessionFlags};
pub use config::{API_URL_ENV, AppConfig, ConfigError, FolioConfig, config_path, persist_theme};
pub use contact::{ContactField, ContactForm, ContactStatus};
pub use data::{FetchCompletion, Resource};
pub use document::{Block, DocLine, Document, LineRole, endpoint_for, format_date};
pub use editor::{EditorCommand, ScratchEditor};
pub use explorer::{Explorer, ExplorerRow};
pub use find::{FindState, count_matches};
pub use keymap::{Action, Key, KeyInput, Modifiers, Platform, resolve_chord, shortcut_rows};
pub use new_file::{NewFileDialog, NewFileError};
pub use overlay::{Overlay, OverlayStack};
pub use pages::PageState;
pub use palette::PaletteState;
pub use scratch::{ScratchFile, ScratchFs};
pub use session::{CurrentFile, SessionState, Workspace};
pub use settings::Settings;
pub use splash::Splash;
pub use status::{StatusLine, cursor_label};
pub use tabs::TabStrip;
pub use terminal::{LineKind, SCRIPT as TERMINAL_SCRIPT, TerminalPanel};
pub use theme::{ConfigFileThemes, SessionOnlyThemes, ThemePersistence, ThemeStore};
