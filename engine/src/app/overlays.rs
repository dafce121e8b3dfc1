//! Overlay lifecycle and the keys each overlay understands.

use folio_types::{DraftInput, ThemeId};

use super::{App, Focus};
use crate::editor::ScratchEditor;
use crate::keymap::{Action, KeyInput, resolve_chord};
use crate::new_file::NewFileDialog;
use crate::overlay::Overlay;
use crate::palette::PaletteState;

impl App {
    /// Run the global chord for `input`, if any. Returns whether the key was
    /// consumed.
    pub fn route_chord(&mut self, input: &KeyInput) -> bool {
        let Some(action) = resolve_chord(input) else {
            return false;
        };
        tracing::debug!(?action, "Chord");
        match action {
            Action::OpenPalette => self.open_overlay(Overlay::Palette),
            Action::ToggleSidebar => self.toggle_sidebar(),
            Action::OpenShortcuts => self.open_overlay(Overlay::Shortcuts),
            Action::OpenFind => self.open_overlay(Overlay::Find),
        }
        true
    }

    /// Open (or raise) `overlay`. The palette, new-file dialog and theme
    /// picker start fresh each time; find keeps its query and recounts.
    pub fn open_overlay(&mut self, overlay: Overlay) {
        match overlay {
            Overlay::Palette => self.palette = PaletteState::new(),
            Overlay::NewFile => self.new_file = NewFileDialog::new(),
            Overlay::ThemePicker => {
                self.theme_cursor = ThemeId::ALL
                    .iter()
                    .position(|theme| *theme == self.theme.active())
                    .unwrap_or_default();
            }
            Overlay::Find | Overlay::Shortcuts | Overlay::Contact => {}
        }
        self.overlays.open(overlay);
        self.refresh_find();
    }

    /// `Esc`: close the topmost overlay, or leave the editor.
    pub fn close_overlay(&mut self) {
        if self.overlays.close_top().is_none() {
            self.close_editor();
        }
    }

    /// Text field of the topmost overlay, if it has one.
    pub fn overlay_input(&mut self) -> Option<&mut DraftInput> {
        match self.overlays.top()? {
            Overlay::Palette => Some(&mut self.palette.filter),
            Overlay::Find => Some(&mut self.find.query),
            Overlay::NewFile => Some(&mut self.new_file.name),
            Overlay::Contact => Some(self.contact.focused_input()),
            Overlay::Shortcuts | Overlay::ThemePicker => None,
        }
    }

    /// Call after editing [`overlay_input`](Self::overlay_input).
    pub fn overlay_input_changed(&mut self) {
        match self.overlays.top() {
            Some(Overlay::Palette) => self.palette.filter_changed(),
            Some(Overlay::Find) => self.refresh_find(),
            Some(Overlay::NewFile) => self.new_file.input_changed(),
            _ => {}
        }
    }

    /// Up/down inside the topmost overlay.
    pub fn overlay_move(&mut self, delta: isize) {
        match self.overlays.top() {
            Some(Overlay::Palette) => self.palette.move_selection(delta),
            Some(Overlay::ThemePicker) => {
                let last = ThemeId::ALL.len() - 1;
                self.theme_cursor = self.theme_cursor.saturating_add_signed(delta).min(last);
            }
            Some(Overlay::Contact) if delta < 0 => self.contact.focus_prev(),
            Some(Overlay::Contact) => self.contact.focus_next(),
            Some(Overlay::Find) if delta < 0 => self.find.prev(),
            Some(Overlay::Find) => self.find.next(),
            _ => {}
        }
    }

    /// `Tab` inside the topmost overlay.
    pub fn overlay_tab(&mut self) {
        match self.overlays.top() {
            Some(Overlay::Find) => self.find.show_replace = !self.find.show_replace,
            Some(Overlay::Contact) => self.contact.focus_next(),
            _ => self.overlay_move(1),
        }
    }

    /// `Enter` inside the topmost overlay.
    pub fn overlay_confirm(&mut self) {
        match self.overlays.top() {
            Some(Overlay::Palette) => {
                if let Some(file) = self.palette.selected() {
                    self.overlays.close(Overlay::Palette);
                    self.open_file(file.path);
                }
            }
            Some(Overlay::Find) => self.find.next(),
            Some(Overlay::NewFile) => self.create_scratch_file(),
            Some(Overlay::Contact) => self.contact.submit(),
            Some(Overlay::ThemePicker) => {
                if let Some(theme) = ThemeId::ALL.get(self.theme_cursor).copied() {
                    self.set_theme(theme);
                }
                self.overlays.close(Overlay::ThemePicker);
            }
            Some(Overlay::Shortcuts) => {
                self.overlays.close(Overlay::Shortcuts);
            }
            None => {}
        }
    }

    /// `Shift+Enter`: the previous find match.
    pub fn overlay_confirm_back(&mut self) {
        if self.overlays.top() == Some(Overlay::Find) {
            self.find.prev();
        }
    }

    /// Switch themes. A failed save keeps the new theme for this session.
    pub fn set_theme(&mut self, theme: ThemeId) {
        if let Err(err) = self.theme.set(theme) {
            tracing::warn!("Failed to persist theme: {err}");
            self.status_message = Some(format!("Theme not saved: {err}"));
        }
    }

    fn create_scratch_file(&mut self) {
        let Some(file) = self.new_file.submit(self.workspace.scratch()) else {
            return;
        };
        tracing::debug!(name = %file.name, "Created scratch file");
        self.workspace.scratch_mut().add_file_and_select(file.name.clone(), file.template);
        self.overlays.close(Overlay::NewFile);
        self.explorer.focus_scratch(&file.name, self.workspace.scratch());
        self.editor = Some(ScratchEditor::open(file.name, file.template));
        self.focus = Focus::Editor;
        self.refresh_find();
    }

    /// Recount find matches against the text on screen.
    pub(super) fn refresh_find(&mut self) {
        if self.overlays.is_open(Overlay::Find) {
            let text = self.page_text();
            self.find.recompute(&text);
        }
    }
}
