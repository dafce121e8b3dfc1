//! Editor tabs over the fixed file universe.
//!
//! Every content file owns one slot with a `visible` flag. Slots are never
//! added or removed; closing hides, opening re-shows.

use folio_types::{ContentFile, FILE_COUNT, FILES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Unknown path, already hidden, or the last visible tab.
    Ignored,
    Closed,
    /// The active tab was closed; navigate to `next`.
    ClosedActive { next: &'static str },
}

#[derive(Debug, Clone)]
pub struct TabStrip {
    visible: [bool; FILE_COUNT],
}

impl Default for TabStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl TabStrip {
    /// Only the home tab starts visible.
    #[must_use]
    pub fn new() -> Self {
        let mut visible = [false; FILE_COUNT];
        visible[0] = true;
        Self { visible }
    }

    pub fn open(&mut self, path: &str) {
        if let Some(idx) = ContentFile::index_of(path) {
            self.visible[idx] = true;
        }
    }

    #[must_use]
    pub fn is_open(&self, path: &str) -> bool {
        ContentFile::index_of(path).is_some_and(|idx| self.visible[idx])
    }

    #[must_use]
    pub fn open_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// Visible tabs in declared order.
    pub fn open_tabs(&self) -> impl Iterator<Item = &'static ContentFile> + '_ {
        FILES
            .iter()
            .zip(self.visible.iter())
            .filter_map(|(file, visible)| visible.then_some(file))
    }

    /// Hide `path`. `active` is the currently routed path.
    pub fn close(&mut self, path: &str, active: &str) -> CloseOutcome {
        let Some(idx) = ContentFile::index_of(path) else {
            return CloseOutcome::Ignored;
        };
        if !self.visible[idx] || self.open_count() <= 1 {
            return CloseOutcome::Ignored;
        }
        self.visible[idx] = false;

        if path != active {
            return CloseOutcome::Closed;
        }
        match self.open_tabs().next() {
            Some(next) => CloseOutcome::ClosedActive { next: next.path },
            None => CloseOutcome::Closed,
        }
    }

    /// The visible tab before or after `active`, wrapping. When `active` has
    /// no visible tab, the first visible tab.
    #[must_use]
    pub fn neighbor(&self, active: &str, forward: bool) -> Option<&'static str> {
        let open: Vec<&'static ContentFile> = self.open_tabs().collect();
        if open.is_empty() {
            return None;
        }
        let Some(pos) = open.iter().position(|file| file.path == active) else {
            return Some(open[0].path);
        };
        let len = open.len();
        let next = if forward {
            (pos + 1) % len
        } else {
            (pos + len - 1) % len
        };
        Some(open[next].path)
    }
}
