use folio_types::{ContentFile, DraftInput, FILES};

/// Command palette: a filter over the content files.
#[derive(Debug, Clone, Default)]
pub struct PaletteState {
    pub filter: DraftInput,
    selected: usize,
}

impl PaletteState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Files whose label or description contains the filter, ignoring case.
    #[must_use]
    pub fn matches(&self) -> Vec<&'static ContentFile> {
        let needle = self.filter.text().trim().to_lowercase();
        FILES
            .iter()
            .filter(|file| {
                needle.is_empty()
                    || file.label.to_lowercase().contains(&needle)
                    || file.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected(&self) -> Option<&'static ContentFile> {
        self.matches().get(self.selected).copied()
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.matches().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
    }

    /// Call after every filter edit.
    pub fn filter_changed(&mut self) {
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(filter: &str) -> PaletteState {
        let mut state = PaletteState::new();
        state.filter.set_text(filter.to_string());
        state.filter_changed();
        state
    }

    #[test]
    fn empty_filter_lists_everything() {
        assert_eq!(palette("").matches().len(), FILES.len());
    }

    #[test]
    fn filters_on_label_and_description() {
        let labels: Vec<_> = palette("JSON").matches().iter().map(|f| f.label).collect();
        assert!(labels.contains(&"skills.json"));
        assert!(!labels.contains(&"bio.ts"));

        let by_description = palette("work history").matches();
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].path, "/experience");
    }

    #[test]
    fn selection_is_clamped() {
        let mut state = palette("md");
        let count = state.matches().len();
        state.move_selection(100);
        assert_eq!(state.selected_index(), count - 1);
        state.move_selection(-100);
        assert_eq!(state.selected_index(), 0);

        let mut none = palette("zzz");
        none.move_selection(1);
        assert!(none.selected().is_none());
    }
}
