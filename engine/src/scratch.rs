//! Session-only scratch files.
//!
//! An ordered list of named text buffers plus an optional selection. All
//! operations are total: lookups of unknown names return `None`, updates of
//! unknown names do nothing.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchFile {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, Default)]
pub struct ScratchFs {
    files: Vec<ScratchFile>,
    selected: Option<String>,
}

impl ScratchFs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file. An existing file with the same name is replaced in
    /// place so names stay unique. Selection is unchanged.
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<String>) {
        let name = name.into();
        let content = content.into();
        if let Some(existing) = self.files.iter_mut().find(|file| file.name == name) {
            existing.content = content;
            return;
        }
        self.files.push(ScratchFile { name, content });
    }

    /// Add and select in one step.
    pub fn add_file_and_select(&mut self, name: impl Into<String>, content: impl Into<String>) {
        let name = name.into();
        self.add_file(name.clone(), content);
        self.selected = Some(name);
    }

    /// Set the selection pointer. No existence check.
    pub fn select_file(&mut self, name: Option<String>) {
        self.selected = name;
    }

    /// Select `name`, or deselect if it is already selected.
    pub fn toggle_selection(&mut self, name: &str) {
        if self.selected.as_deref() == Some(name) {
            self.selected = None;
        } else {
            self.selected = Some(name.to_string());
        }
    }

    pub fn update_file_content(&mut self, name: &str, content: impl Into<String>) {
        if let Some(file) = self.files.iter_mut().find(|file| file.name == name) {
            file.content = content.into();
        }
    }

    #[must_use]
    pub fn file_content(&self, name: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|file| file.name == name)
            .map(|file| file.content.as_str())
    }

    #[must_use]
    pub fn files(&self) -> &[ScratchFile] {
        &self.files
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.files.iter().any(|file| file.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_select_is_atomic() {
        let mut fs = ScratchFs::new();
        for (name, content) in [("a.ts", "one"), ("b.md", "two"), ("c.json", "{}")] {
            fs.add_file_and_select(name, content);
            let selected = fs.selected().unwrap();
            assert_eq!(fs.file_content(selected), Some(content));
        }
    }

    #[test]
    fn add_file_keeps_selection() {
        let mut fs = ScratchFs::new();
        fs.add_file_and_select("a.ts", "");
        fs.add_file("b.ts", "");
        assert_eq!(fs.selected(), Some("a.ts"));
        assert_eq!(fs.files().len(), 2);
    }

    #[test]
    fn toggle_twice_deselects() {
        let mut fs = ScratchFs::new();
        fs.add_file("notes.md", "");
        fs.toggle_selection("notes.md");
        assert_eq!(fs.selected(), Some("notes.md"));
        fs.toggle_selection("notes.md");
        assert_eq!(fs.selected(), None);
    }

    #[test]
    fn update_of_unknown_file_is_ignored() {
        let mut fs = ScratchFs::new();
        fs.add_file("a.ts", "x");
        fs.update_file_content("missing.ts", "y");
        assert_eq!(fs.file_content("a.ts"), Some("x"));
        assert_eq!(fs.file_content("missing.ts"), None);
        assert_eq!(fs.files().len(), 1);
    }

    #[test]
    fn duplicate_name_replaces_in_place() {
        let mut fs = ScratchFs::new();
        fs.add_file("a.ts", "first");
        fs.add_file("b.ts", "");
        fs.add_file("a.ts", "second");
        assert_eq!(fs.files().len(), 2);
        assert_eq!(fs.files()[0].name, "a.ts");
        assert_eq!(fs.file_content("a.ts"), Some("second"));
    }

    #[test]
    fn select_does_not_check_existence() {
        let mut fs = ScratchFs::new();
        fs.select_file(Some("ghost.ts".to_string()));
        assert_eq!(fs.selected(), Some("ghost.ts"));
        assert_eq!(fs.file_content("ghost.ts"), None);
    }

    #[test]
    fn notes_round_trip() {
        let mut fs = ScratchFs::new();
        fs.add_file_and_select("notes.md", "# New Document\n\n");
        fs.update_file_content("notes.md", "# hi");
        assert_eq!(fs.file_content("notes.md"), Some("# hi"));
    }
}
