/// Floating panels drawn above the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Palette,
    Find,
    Shortcuts,
    ThemePicker,
    NewFile,
    Contact,
}

/// Open overlays, bottom to top. Any combination may be open at once; the
/// topmost one receives keys.
#[derive(Debug, Clone, Default)]
pub struct OverlayStack {
    stack: Vec<Overlay>,
}

impl OverlayStack {
    /// Push `overlay`, or raise it to the top if already open.
    pub fn open(&mut self, overlay: Overlay) {
        self.stack.retain(|open| *open != overlay);
        self.stack.push(overlay);
    }

    pub fn close(&mut self, overlay: Overlay) {
        self.stack.retain(|open| *open != overlay);
    }

    pub fn close_top(&mut self) -> Option<Overlay> {
        self.stack.pop()
    }

    #[must_use]
    pub fn top(&self) -> Option<Overlay> {
        self.stack.last().copied()
    }

    #[must_use]
    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.stack.contains(&overlay)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Bottom-to-top, for drawing.
    pub fn iter(&self) -> impl Iterator<Item = Overlay> + '_ {
        self.stack.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlays_stack_without_exclusion() {
        let mut stack = OverlayStack::default();
        stack.open(Overlay::Palette);
        stack.open(Overlay::Find);
        assert!(stack.is_open(Overlay::Palette));
        assert_eq!(stack.top(), Some(Overlay::Find));
        assert_eq!(stack.close_top(), Some(Overlay::Find));
        assert_eq!(stack.top(), Some(Overlay::Palette));
    }

    #[test]
    fn reopening_raises_to_top() {
        let mut stack = OverlayStack::default();
        stack.open(Overlay::Palette);
        stack.open(Overlay::Shortcuts);
        stack.open(Overlay::Palette);
        assert_eq!(
            stack.iter().collect::<Vec<_>>(),
            [Overlay::Shortcuts, Overlay::Palette]
        );
    }

    #[test]
    fn close_specific_overlay() {
        let mut stack = OverlayStack::default();
        stack.open(Overlay::Contact);
        stack.open(Overlay::Find);
        stack.close(Overlay::Contact);
        assert_eq!(stack.iter().collect::<Vec<_>>(), [Overlay::Find]);
        stack.close_top();
        assert!(stack.is_empty());
        assert_eq!(stack.close_top(), None);
    }
}
