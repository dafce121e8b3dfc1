//! The workspace state machine.
//!
//! One [`App`] owns every store (theme, scratch filesystem, route, tabs,
//! overlays, page state, data cache). The TUI reads it to draw and calls its
//! methods on input; the binary drains its outboxes and feeds completions
//! back in.

mod fetch;
mod navigation;
mod overlays;


use std::time::Instant;

use crate::contact::{ContactForm, ContactTick};
use crate::data::DataCache;
use crate::document::endpoint_for;
use crate::editor::ScratchEditor;
use crate::explorer::Explorer;
use crate::find::FindState;
use crate::new_file::NewFileDialog;
use crate::overlay::{Overlay, OverlayStack};
use crate::pages::PageState;
use crate::palette::PaletteState;
use crate::session::Workspace;
use crate::settings::Settings;
use crate::splash::Splash;
use crate::tabs::TabStrip;
use crate::terminal::TerminalPanel;
use crate::theme::ThemeStore;

/// State that lives for the whole process, across in-app reloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionFlags {
    pub seen_splash: bool,
}

/// Which pane receives plain keys when no overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Explorer,
    Content,
    /// Typing into the open scratch file.
    Editor,
}

#[derive(Debug)]
pub struct App {
    settings: Settings,
    theme: ThemeStore,
    flags: SessionFlags,
    workspace: Workspace,
    tabs: TabStrip,
    overlays: OverlayStack,
    palette: PaletteState,
    find: FindState,
    new_file: NewFileDialog,
    contact: ContactForm,
    theme_cursor: usize,
    explorer: Explorer,
    page: PageState,
    data: DataCache,
    editor: Option<ScratchEditor>,
    terminal: TerminalPanel,
    splash: Option<Splash>,
    focus: Focus,
    sidebar_visible: bool,
    now: Instant,
    status_message: Option<String>,
    should_quit: bool,
    reload_requested: bool,
}

impl App {
    #[must_use]
    pub fn new(settings: Settings, theme: ThemeStore, flags: SessionFlags) -> Self {
        let now = Instant::now();
        let splash = (settings.show_splash && !settings.reduced_motion && !flags.seen_splash)
            .then(|| Splash::start(now));
        let workspace = Workspace::new();
        let mut app = Self {
            terminal: TerminalPanel::new(settings.reduced_motion),
            page: PageState::mount(workspace.route().page()),
            settings,
            theme,
            flags,
            workspace,
            tabs: TabStrip::new(),
            overlays: OverlayStack::default(),
            palette: PaletteState::new(),
            find: FindState::new(),
            new_file: NewFileDialog::new(),
            contact: ContactForm::new(),
            theme_cursor: 0,
            explorer: Explorer::new(),
            data: DataCache::new(),
            editor: None,
            splash,
            focus: Focus::Content,
            sidebar_visible: true,
            now,
            status_message: None,
            should_quit: false,
            reload_requested: false,
        };
        app.mount_page();
        app
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeStore {
        &self.theme
    }

    #[must_use]
    pub fn flags(&self) -> SessionFlags {
        self.flags
    }

    #[must_use]
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    #[must_use]
    pub fn tabs(&self) -> &TabStrip {
        &self.tabs
    }

    #[must_use]
    pub fn overlays(&self) -> &OverlayStack {
        &self.overlays
    }

    #[must_use]
    pub fn palette(&self) -> &PaletteState {
        &self.palette
    }

    #[must_use]
    pub fn find(&self) -> &FindState {
        &self.find
    }

    #[must_use]
    pub fn new_file_dialog(&self) -> &NewFileDialog {
        &self.new_file
    }

    #[must_use]
    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// Highlighted row of the theme picker.
    #[must_use]
    pub fn theme_cursor(&self) -> usize {
        self.theme_cursor
    }

    #[must_use]
    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    #[must_use]
    pub fn page(&self) -> &PageState {
        &self.page
    }

    #[must_use]
    pub fn editor(&self) -> Option<&ScratchEditor> {
        self.editor.as_ref()
    }

    #[must_use]
    pub fn terminal(&self) -> &TerminalPanel {
        &self.terminal
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub fn sidebar_visible(&self) -> bool {
        self.sidebar_visible
    }

    /// Time of the last tick.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    // ========================================================================
    // Splash and timers
    // ========================================================================

    /// Splash progress, or `None` once the workspace is showing.
    #[must_use]
    pub fn splash_stage(&self) -> Option<(u8, &'static str)> {
        self.splash.map(|splash| splash.stage(self.now))
    }

    #[must_use]
    pub fn splash_active(&self) -> bool {
        self.splash.is_some()
    }

    pub fn skip_splash(&mut self) {
        if self.splash.take().is_some() {
            self.flags.seen_splash = true;
            tracing::debug!("Splash skipped");
        }
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advance timers to `now`.
    pub fn tick_at(&mut self, now: Instant) {
        self.now = now;
        if self.splash.is_some_and(|splash| splash.is_done(now)) {
            self.splash = None;
            self.flags.seen_splash = true;
        }
        if self.contact.tick(now) == ContactTick::Close {
            self.overlays.close(Overlay::Contact);
        }
    }

    /// Whether something on screen changes without input.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.splash.is_some() || self.terminal.is_animating(self.now)
    }

    // ========================================================================
    // Panels
    // ========================================================================

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_visible = !self.sidebar_visible;
        if !self.sidebar_visible && self.focus == Focus::Explorer {
            self.focus = Focus::Content;
        }
        self.refresh_find();
    }

    pub fn toggle_terminal(&mut self) {
        self.terminal.toggle(self.now);
    }

    /// Switch between explorer and content. The editor keeps focus until it
    /// is closed.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Explorer => Focus::Content,
            Focus::Content if self.sidebar_visible => Focus::Explorer,
            other => other,
        };
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn request_reload(&mut self) {
        self.reload_requested = true;
    }

    pub fn take_reload_request(&mut self) -> bool {
        std::mem::take(&mut self.reload_requested)
    }

    /// Rebuild the workspace the way a page reload would. Scratch files,
    /// tabs and fetched data are dropped; the theme is re-read from its
    /// store; the splash does not come back.
    #[must_use]
    pub fn reload(self) -> Self {
        let Self {
            settings,
            theme,
            mut flags,
            ..
        } = self;
        flags.seen_splash = true;
        tracing::info!("Reloading workspace");
        Self::new(settings, theme.reload(), flags)
    }

    fn mount_page(&mut self) {
        self.page = PageState::mount(self.workspace.route().page());
        if let Some(endpoint) = endpoint_for(self.workspace.route()) {
            self.data.ensure(&endpoint);
        }
        self.refresh_find();
    }
}
