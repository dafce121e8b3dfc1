//! Startup splash with staged progress.

use std::time::{Duration, Instant};

pub const STAGE_INTERVAL: Duration = Duration::from_millis(300);

const INITIAL: (u8, &str) = (0, "Loading resources...");

const STAGES: [(u8, &str); 6] = [
    (15, "Loading extensions..."),
    (35, "Initializing workspace..."),
    (55, "Building file tree..."),
    (75, "Starting language server..."),
    (90, "Preparing editor..."),
    (100, "Ready!"),
];

/// One stage per interval, one more interval to notice the end, then a
/// final hold before the workspace shows.
const TOTAL_TICKS: u32 = STAGES.len() as u32 + 2;

#[derive(Debug, Clone, Copy)]
pub struct Splash {
    started: Instant,
}

impl Splash {
    #[must_use]
    pub fn start(now: Instant) -> Self {
        Self { started: now }
    }

    fn ticks(&self, now: Instant) -> u128 {
        now.saturating_duration_since(self.started).as_millis() / STAGE_INTERVAL.as_millis()
    }

    /// Percent and status text at `now`.
    #[must_use]
    pub fn stage(&self, now: Instant) -> (u8, &'static str) {
        match usize::try_from(self.ticks(now)) {
            Ok(0) => INITIAL,
            Ok(n) => STAGES[(n - 1).min(STAGES.len() - 1)],
            Err(_) => STAGES[STAGES.len() - 1],
        }
    }

    #[must_use]
    pub fn is_done(&self, now: Instant) -> bool {
        self.ticks(now) >= u128::from(TOTAL_TICKS)
    }
}
