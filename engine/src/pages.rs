use folio_types::{PageKind, ViewMode};

/// Local state of the mounted content page. Rebuilt on every mount, so a
/// page always reopens in its default mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page: Option<PageKind>,
    mode: ViewMode,
    pub scroll: u16,
    pub selected: usize,
}

impl PageState {
    #[must_use]
    pub fn mount(page: Option<PageKind>) -> Self {
        Self {
            page,
            mode: page.map_or(ViewMode::Visual, PageKind::default_mode),
            scroll: 0,
            selected: 0,
        }
    }

    #[must_use]
    pub fn page(&self) -> Option<PageKind> {
        self.page
    }

    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Advance to the page's next mode and scroll back to the top.
    pub fn cycle_mode(&mut self) {
        if let Some(page) = self.page {
            self.mode = page.next_mode(self.mode);
            self.scroll = 0;
        }
    }

    /// Ignored when `mode` is not one of the page's modes.
    pub fn set_mode(&mut self, mode: ViewMode) {
        if self.page.is_some_and(|page| page.allows(mode)) {
            self.mode = mode;
            self.scroll = 0;
        }
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.scroll).saturating_add(delta).clamp(0, i32::from(u16::MAX));
        self.scroll = u16::try_from(next).unwrap_or(u16::MAX);
    }

    /// Move the list selection within `0..len`.
    pub fn select_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_uses_page_default() {
        assert_eq!(
            PageState::mount(Some(PageKind::Experience)).mode(),
            ViewMode::Code
        );
        assert_eq!(
            PageState::mount(Some(PageKind::Projects)).mode(),
            ViewMode::Visual
        );
        assert_eq!(PageState::mount(None).mode(), ViewMode::Visual);
    }

    #[test]
    fn cycle_walks_page_modes() {
        let mut state = PageState::mount(Some(PageKind::Books));
        state.scroll = 7;
        state.cycle_mode();
        assert_eq!(state.mode(), ViewMode::Gallery);
        assert_eq!(state.scroll, 0);
        state.cycle_mode();
        assert_eq!(state.mode(), ViewMode::Editor);
        state.cycle_mode();
        assert_eq!(state.mode(), ViewMode::Visual);
    }

    #[test]
    fn blog_post_has_single_mode() {
        let mut state = PageState::mount(Some(PageKind::BlogPost));
        state.cycle_mode();
        assert_eq!(state.mode(), ViewMode::Visual);
        state.set_mode(ViewMode::Editor);
        assert_eq!(state.mode(), ViewMode::Visual);
    }

    #[test]
    fn scroll_and_select_saturate() {
        let mut state = PageState::mount(Some(PageKind::Blog));
        state.scroll_by(-3);
        assert_eq!(state.scroll, 0);
        state.scroll_by(5);
        assert_eq!(state.scroll, 5);

        state.select_by(10, 3);
        assert_eq!(state.selected, 2);
        state.select_by(-10, 3);
        assert_eq!(state.selected, 0);
    }
}
