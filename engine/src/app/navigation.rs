//! Routing, tabs, explorer, scratch selection and the content page.

use folio_types::{FileKind, Route, SCRATCH_FOLDER};

use super::{App, Focus};
use crate::data::Resource;
use crate::document::{Block, Document, endpoint_for};
use crate::editor::{EditorCommand, ScratchEditor};
use crate::explorer::{ExplorerAction, ExplorerRow};
use crate::overlay::Overlay;
use crate::session::{CurrentFile, SessionState};
use crate::status::StatusLine;
use crate::tabs::CloseOutcome;

const SCROLL_STEP: i32 = 1;

fn source_language(name: &str) -> &'static str {
    match FileKind::from_name(name) {
        FileKind::TypeScript => "typescript",
        FileKind::Json => "json",
        FileKind::Markdown => "markdown",
        FileKind::Text => "text",
    }
}

impl App {
    /// Route to `path`. Drops the scratch selection and the editor and
    /// remounts the page in its default mode. Tab visibility is untouched.
    pub fn navigate(&mut self, path: &str) {
        self.workspace.navigate(path);
        self.close_editor();
        self.mount_page();
    }

    /// Explicit open gesture: show the tab again, then navigate.
    pub fn open_file(&mut self, path: &str) {
        self.tabs.open(path);
        self.navigate(path);
    }

    /// Path of the routed file, when the route is one of the tabs.
    #[must_use]
    pub fn active_path(&self) -> Option<&'static str> {
        self.workspace.route().file().map(|file| file.path)
    }

    pub fn close_tab(&mut self, path: &str) {
        let active = self.active_path().unwrap_or_default();
        match self.tabs.close(path, active) {
            CloseOutcome::Ignored | CloseOutcome::Closed => {}
            CloseOutcome::ClosedActive { next } => self.navigate(next),
        }
    }

    pub fn close_active_tab(&mut self) {
        if let Some(path) = self.active_path() {
            self.close_tab(path);
        }
    }

    /// Move to the next (or previous) visible tab.
    pub fn cycle_tab(&mut self, forward: bool) {
        let active = self.active_path().unwrap_or_default();
        if let Some(next) = self.tabs.neighbor(active, forward) {
            self.navigate(next);
        }
    }

    // ========================================================================
    // Explorer and scratch files
    // ========================================================================

    pub fn explorer_move(&mut self, delta: isize) {
        self.explorer.move_cursor(delta, self.workspace.scratch());
    }

    pub fn explorer_activate(&mut self) {
        match self.explorer.activate(self.workspace.scratch()) {
            ExplorerAction::None => {}
            ExplorerAction::OpenFile(path) => self.open_file(path),
            ExplorerAction::ToggleScratch(name) => self.toggle_scratch(&name),
            ExplorerAction::NewFile => self.open_overlay(Overlay::NewFile),
        }
    }

    /// Sidebar click on a scratch file: select it, or deselect it when it is
    /// already selected.
    pub fn toggle_scratch(&mut self, name: &str) {
        self.workspace.scratch_mut().toggle_selection(name);
        self.close_editor();
        self.page.scroll = 0;
        self.refresh_find();
    }

    /// Open the selected scratch file for typing.
    pub fn edit_selected_scratch(&mut self) {
        let SessionState::Scratch(name) = self.workspace.state() else {
            return;
        };
        let content = self.workspace.scratch().file_content(&name).unwrap_or_default();
        self.editor = Some(ScratchEditor::open(name, content));
        self.focus = Focus::Editor;
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
        if self.focus == Focus::Editor {
            self.focus = Focus::Content;
        }
    }

    /// Apply one edit and write the buffer back to the scratch filesystem.
    pub fn editor_command(&mut self, command: EditorCommand) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        if editor.apply(command) {
            let (name, text) = (editor.name().to_string(), editor.text().to_string());
            self.workspace.scratch_mut().update_file_content(&name, text);
            self.refresh_find();
        }
    }

    // ========================================================================
    // Content page
    // ========================================================================

    pub fn cycle_view_mode(&mut self) {
        if matches!(self.workspace.state(), SessionState::Routed(_)) {
            self.page.cycle_mode();
            self.refresh_find();
        }
    }

    /// `j`/`k` in the content pane: move through list rows when the page has
    /// any, otherwise scroll.
    pub fn content_move(&mut self, delta: isize) {
        let items = self.document().selectable.len();
        if items > 0 {
            self.page.select_by(delta, items);
        } else {
            let step = i32::try_from(delta).unwrap_or(0).saturating_mul(SCROLL_STEP);
            self.page.scroll_by(step);
        }
    }

    pub fn scroll(&mut self, delta: i32) {
        self.page.scroll_by(delta);
    }

    /// Follow the selected list row, e.g. a blog post.
    pub fn open_selected_item(&mut self) {
        let target = self.document().selectable.get(self.page.selected).cloned();
        if let Some(path) = target {
            self.navigate(&path);
        }
    }

    /// From a blog post back to the post list.
    pub fn back_to_blog(&mut self) {
        if matches!(self.workspace.route(), Route::BlogPost(_)) {
            self.navigate("/blog");
        }
    }

    /// What the content area shows right now.
    #[must_use]
    pub fn document(&self) -> Document {
        match self.workspace.state() {
            // A missing file reads as empty.
            SessionState::Scratch(name) => Document {
                blocks: vec![Block::Source {
                    language: source_language(&name),
                    text: self
                        .workspace
                        .scratch()
                        .file_content(&name)
                        .unwrap_or_default()
                        .to_string(),
                }],
                ..Document::default()
            },
            SessionState::Routed(route) => {
                let resource: Option<&Resource> =
                    endpoint_for(&route).and_then(|endpoint| self.data.get(&endpoint));
                Document::build(&route, self.page.mode(), resource)
            }
        }
    }

    #[must_use]
    pub fn current_file(&self) -> CurrentFile {
        self.workspace.current_file()
    }

    #[must_use]
    pub fn breadcrumb(&self) -> Vec<String> {
        self.workspace.breadcrumb()
    }

    #[must_use]
    pub fn status_line(&self) -> StatusLine {
        let file = self.current_file();
        let mode = match self.workspace.state() {
            SessionState::Scratch(_) => None,
            SessionState::Routed(_) => self
                .page
                .page()
                .filter(|page| page.modes().len() > 1)
                .map(|_| self.page.mode()),
        };
        let mut status = StatusLine::for_file(&file.name, mode);
        if let Some(editor) = &self.editor {
            let (line, col) = editor.cursor();
            status.cursor = format!("Ln {}, Col {}", line + 1, col + 1);
        }
        status
    }
    /// All text on screen: explorer labels (while the sidebar shows), tab
    /// labels, breadcrumb, the document and the status bar. Find searches
    /// this.
    #[must_use]
    pub fn page_text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.sidebar_visible {
            for row in self.explorer.rows(self.workspace.scratch()) {
                parts.push(match row {
                    ExplorerRow::Folder { folder, .. } => folder.as_str().to_string(),
                    ExplorerRow::File(file) => file.label.to_string(),
                    ExplorerRow::ScratchFolder { .. } => SCRATCH_FOLDER.to_string(),
                    ExplorerRow::ScratchFile(name) => name,
                    ExplorerRow::NewFileHint => continue,
                });
            }
        }
        parts.extend(self.tabs.open_tabs().map(|file| file.label.to_string()));
        parts.push(self.breadcrumb().join(" / "));
        parts.push(self.document().plain_text());

        let status = self.status_line();
        parts.extend([
            status.branch.to_string(),
            status.cursor,
            status.indent.to_string(),
            status.encoding.to_string(),
            status.language.to_string(),
        ]);
        if let Some(mode) = status.mode {
            parts.push(mode.label().to_string());
        }
        parts.join("\n")
    }
}
