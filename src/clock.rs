use std::time::Instant;

use crate::prelude::*;

/// Wall-clock frame delta: seconds elapsed since the previous tick.
///
/// Deltas are not clamped; a stalled frame yields a correspondingly long step.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        FrameClock { last: start }
    }

    pub fn tick(&mut self) -> Scalar {
        self.tick_at(Instant::now())
    }

    /// Like [`tick`](Self::tick) with an explicit "now"; an instant earlier
    /// than the last tick counts as zero elapsed time.
    pub fn tick_at(&mut self, now: Instant) -> Scalar {
        let dt = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = self.last.max(now);
        dt
    }
}
