//! Sidebar file tree.

use folio_types::{ContentFile, Folder};

use crate::scratch::ScratchFs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerRow {
    Folder { folder: Folder, expanded: bool },
    File(&'static ContentFile),
    ScratchFolder { expanded: bool },
    ScratchFile(String),
    /// Placeholder shown while the scratch folder is empty.
    NewFileHint,
}

/// What activating a row asks the workspace to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerAction {
    None,
    OpenFile(&'static str),
    ToggleScratch(String),
    NewFile,
}

#[derive(Debug, Clone)]
pub struct Explorer {
    expanded: [bool; Folder::ALL.len()],
    scratch_expanded: bool,
    cursor: usize,
}

impl Default for Explorer {
    fn default() -> Self {
        Self {
            expanded: [true; Folder::ALL.len()],
            scratch_expanded: true,
            cursor: 0,
        }
    }
}

impl Explorer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rows(&self, scratch: &ScratchFs) -> Vec<ExplorerRow> {
        let mut rows = Vec::new();
        for (idx, folder) in Folder::ALL.iter().enumerate() {
            let expanded = self.expanded[idx];
            rows.push(ExplorerRow::Folder {
                folder: *folder,
                expanded,
            });
            if expanded {
                rows.extend(folder.files().map(ExplorerRow::File));
            }
        }
        rows.push(ExplorerRow::ScratchFolder {
            expanded: self.scratch_expanded,
        });
        if self.scratch_expanded {
            if scratch.files().is_empty() {
                rows.push(ExplorerRow::NewFileHint);
            } else {
                rows.extend(
                    scratch
                        .files()
                        .iter()
                        .map(|file| ExplorerRow::ScratchFile(file.name.clone())),
                );
            }
        }
        rows
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_cursor(&mut self, delta: isize, scratch: &ScratchFs) {
        let len = self.rows(scratch).len();
        self.cursor = self.cursor.saturating_add_signed(delta).min(len.saturating_sub(1));
    }

    /// Activate the row under the cursor. Folders toggle in place.
    pub fn activate(&mut self, scratch: &ScratchFs) -> ExplorerAction {
        let rows = self.rows(scratch);
        let Some(row) = rows.get(self.cursor) else {
            return ExplorerAction::None;
        };
        match row {
            ExplorerRow::Folder { folder, .. } => {
                if let Some(idx) = Folder::ALL.iter().position(|f| f == folder) {
                    self.expanded[idx] = !self.expanded[idx];
                }
                ExplorerAction::None
            }
            ExplorerRow::ScratchFolder { .. } => {
                self.scratch_expanded = !self.scratch_expanded;
                ExplorerAction::None
            }
            ExplorerRow::File(file) => ExplorerAction::OpenFile(file.path),
            ExplorerRow::ScratchFile(name) => ExplorerAction::ToggleScratch(name.clone()),
            ExplorerRow::NewFileHint => ExplorerAction::NewFile,
        }
    }

    /// Put the cursor on the scratch row named `name`, if shown.
    pub fn focus_scratch(&mut self, name: &str, scratch: &ScratchFs) {
        if let Some(pos) = self
            .rows(scratch)
            .iter()
            .position(|row| matches!(row, ExplorerRow::ScratchFile(n) if n == name))
        {
            self.cursor = pos;
        }
    }
}
