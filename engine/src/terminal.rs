use std::time::{Duration, Instant};

pub const LINE_INTERVAL: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Command,
    Output,
    Success,
}

pub const SCRIPT: [(LineKind, &str); 15] = [
    (LineKind::Command, "$ npm run build"),
    (LineKind::Output, "> portfolio@1.0.0 build"),
    (LineKind::Output, "> vite build"),
    (LineKind::Success, "vite v5.0.0 building for production..."),
    (LineKind::Output, "transforming..."),
    (LineKind::Success, "Build completed in 2.3s"),
    (LineKind::Output, ""),
    (LineKind::Command, "$ echo \"Welcome to my portfolio!\""),
    (LineKind::Output, "Welcome to my portfolio!"),
    (LineKind::Output, ""),
    (LineKind::Command, "$ git status"),
    (LineKind::Success, "On branch main"),
    (LineKind::Output, "nothing to commit, working tree clean"),
    (LineKind::Output, ""),
    (LineKind::Command, "$ _"),
];

/// Bottom panel replaying [`SCRIPT`]. The replay runs once, the first time
/// the panel opens; later toggles show the full transcript.
#[derive(Debug, Clone, Default)]
pub struct TerminalPanel {
    open: bool,
    replay_started: Option<Instant>,
    instant: bool,
}

impl TerminalPanel {
    /// `instant` skips the line-by-line replay.
    #[must_use]
    pub fn new(instant: bool) -> Self {
        Self {
            open: false,
            replay_started: None,
            instant,
        }
    }

    pub fn toggle(&mut self, now: Instant) {
        self.open = !self.open;
        if self.open && self.replay_started.is_none() {
            self.replay_started = Some(now);
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Number of script lines revealed at `now`.
    #[must_use]
    pub fn visible_lines(&self, now: Instant) -> usize {
        let Some(started) = self.replay_started else {
            return 0;
        };
        if self.instant {
            return SCRIPT.len();
        }
        let elapsed = now.saturating_duration_since(started).as_millis();
        let shown = elapsed / LINE_INTERVAL.as_millis() + 1;
        usize::try_from(shown).map_or(SCRIPT.len(), |n| n.min(SCRIPT.len()))
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.open && self.visible_lines(now) < SCRIPT.len()
    }
}
