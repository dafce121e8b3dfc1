use thiserror::Error;

use folio_types::{DraftInput, FileKind};

use crate::scratch::ScratchFs;

const DEFAULT_NAME: &str = "untitled";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewFileError {
    #[error("file name is empty")]
    Empty,
    #[error("{0} already exists")]
    Duplicate(String),
}

/// A validated scratch file ready to be added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFile {
    pub name: String,
    pub template: &'static str,
}

/// Apply the naming rules to raw dialog input.
///
/// Trims, appends `.ts` when there is no extension at all, and picks the
/// template from the final extension.
pub fn prepare(raw: &str, existing: &ScratchFs) -> Result<NewFile, NewFileError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NewFileError::Empty);
    }
    let name = if trimmed.contains('.') {
        trimmed.to_string()
    } else {
        format!("{trimmed}.ts")
    };
    if existing.contains(&name) {
        return Err(NewFileError::Duplicate(name));
    }
    Ok(NewFile {
        template: FileKind::from_name(&name).template(),
        name,
    })
}

#[derive(Debug, Clone)]
pub struct NewFileDialog {
    pub name: DraftInput,
    error: Option<NewFileError>,
}

impl Default for NewFileDialog {
    fn default() -> Self {
        Self {
            name: DraftInput::with_text(DEFAULT_NAME),
            error: None,
        }
    }
}

impl NewFileDialog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the current input. On error the dialog keeps its text and
    /// shows the error inline.
    pub fn submit(&mut self, existing: &ScratchFs) -> Option<NewFile> {
        match prepare(self.name.text(), existing) {
            Ok(file) => {
                *self = Self::default();
                Some(file)
            }
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }

    pub fn input_changed(&mut self) {
        self.error = None;
    }

    #[must_use]
    pub fn error(&self) -> Option<&NewFileError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_name_gets_ts_extension() {
        let file = prepare("  scratchpad ", &ScratchFs::new()).unwrap();
        assert_eq!(file.name, "scratchpad.ts");
        assert_eq!(file.template, "// New TypeScript file\n\n");
    }

    #[test]
    fn templates_follow_extension() {
        let fs = ScratchFs::new();
        assert_eq!(prepare("data.json", &fs).unwrap().template, "{\n  \n}");
        assert_eq!(prepare("notes.md", &fs).unwrap().template, "# New Document\n\n");
        assert_eq!(
            prepare("notes.txt", &fs).unwrap().template,
            "// New TypeScript file\n\n"
        );
    }

    #[test]
    fn blank_name_is_rejected_inline() {
        let mut dialog = NewFileDialog::new();
        dialog.name.set_text("   ".to_string());
        assert_eq!(dialog.submit(&ScratchFs::new()), None);
        assert_eq!(dialog.error(), Some(&NewFileError::Empty));
        assert_eq!(
            dialog.error().map(ToString::to_string).as_deref(),
            Some("file name is empty")
        );

        dialog.input_changed();
        assert_eq!(dialog.error(), None);
    }

    #[test]
    fn duplicate_is_rejected_inline() {
        let mut fs = ScratchFs::new();
        fs.add_file("untitled.ts", "");
        let mut dialog = NewFileDialog::new();
        assert_eq!(dialog.submit(&fs), None);
        assert_eq!(
            dialog.error(),
            Some(&NewFileError::Duplicate("untitled.ts".to_string()))
        );
        assert_eq!(dialog.name.text(), "untitled");

        dialog.input_changed();
        assert_eq!(dialog.error(), None);
    }

    #[test]
    fn successful_submit_resets_dialog() {
        let mut dialog = NewFileDialog::new();
        dialog.name.set_text("notes.md".to_string());
        let file = dialog.submit(&ScratchFs::new()).unwrap();
        assert_eq!(file.name, "notes.md");
        assert_eq!(dialog.name.text(), "untitled");
    }
}
